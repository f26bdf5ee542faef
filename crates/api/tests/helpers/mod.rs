#![allow(dead_code)]

use async_trait::async_trait;
use ferrous_dnscheck_application::ports::{ResolverFactory, UpstreamResolver};
use ferrous_dnscheck_application::use_cases::RunComparisonUseCase;
use ferrous_dnscheck_domain::{DomainError, ResolverEndpoint};
use ferrous_dnscheck_api::AppState;
use std::collections::HashMap;
use std::sync::Arc;

/// Resolver returning fixed addresses keyed by endpoint address.
pub struct StaticResolverFactory {
    answers: HashMap<String, Vec<String>>,
}

impl StaticResolverFactory {
    pub fn new(answers: &[(&str, &[&str])]) -> Self {
        Self {
            answers: answers
                .iter()
                .map(|(addr, ips)| {
                    (
                        addr.to_string(),
                        ips.iter().map(|ip| ip.to_string()).collect(),
                    )
                })
                .collect(),
        }
    }
}

impl ResolverFactory for StaticResolverFactory {
    fn build(&self, endpoint: &ResolverEndpoint) -> Result<Arc<dyn UpstreamResolver>, DomainError> {
        let addresses = self
            .answers
            .get(&*endpoint.address)
            .cloned()
            .ok_or_else(|| DomainError::InvalidAddress(endpoint.address.to_string()))?;
        Ok(Arc::new(StaticResolver {
            server: endpoint.address.to_string(),
            addresses,
        }))
    }
}

struct StaticResolver {
    server: String,
    addresses: Vec<String>,
}

#[async_trait]
impl UpstreamResolver for StaticResolver {
    async fn lookup_addresses(&self, _domain: &str) -> Result<Vec<String>, DomainError> {
        Ok(self.addresses.clone())
    }

    async fn lookup_cname(&self, _domain: &str) -> Result<String, DomainError> {
        Ok(String::new())
    }

    async fn lookup_txt(&self, _domain: &str) -> Result<Vec<String>, DomainError> {
        Ok(Vec::new())
    }

    async fn lookup_ns(&self, _domain: &str) -> Result<Vec<String>, DomainError> {
        Ok(vec!["ns1.example.com.".to_string()])
    }

    fn server(&self) -> &str {
        &self.server
    }
}

/// Three resolvers, the third one disagreeing, plus one that cannot be built.
pub fn hijack_state() -> AppState {
    let factory = StaticResolverFactory::new(&[
        ("192.0.2.1:53", &["93.184.216.34"]),
        ("192.0.2.2:53", &["93.184.216.34"]),
        ("192.0.2.3:53", &["203.0.113.66"]),
    ]);
    let resolvers = vec![
        ResolverEndpoint::new("Alpha", "192.0.2.1:53"),
        ResolverEndpoint::new("Bravo", "192.0.2.2:53"),
        ResolverEndpoint::new("Charlie", "192.0.2.3:53"),
        ResolverEndpoint::new("Delta", "dns.example:53"),
    ];
    AppState::new(RunComparisonUseCase::new(Arc::new(factory)), resolvers)
}
