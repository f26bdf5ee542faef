#![allow(dead_code)]

use async_trait::async_trait;
use ferrous_dnscheck_application::ports::{ResolverFactory, UpstreamResolver};
use ferrous_dnscheck_domain::{DomainError, RecordType, ResolverEndpoint};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

// ============================================================================
// Scripted answers
// ============================================================================

#[derive(Debug, Clone, Default)]
pub struct MockAnswer {
    pub addresses: Vec<String>,
    pub cname: String,
    pub txts: Vec<String>,
    pub ns: Vec<String>,
}

impl MockAnswer {
    pub fn addresses(addrs: &[&str]) -> Self {
        Self {
            addresses: addrs.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    pub fn with_cname(mut self, cname: &str) -> Self {
        self.cname = cname.to_string();
        self
    }

    pub fn with_txts(mut self, txts: &[&str]) -> Self {
        self.txts = txts.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn with_ns(mut self, ns: &[&str]) -> Self {
        self.ns = ns.iter().map(|s| s.to_string()).collect();
        self
    }
}

#[derive(Debug, Clone)]
pub enum MockBehavior {
    Answer(MockAnswer),
    /// Answer after sleeping before the first lookup
    Delayed(Duration, MockAnswer),
    /// Return a lookup failure for this step
    FailAt(RecordType),
    /// Never answer this step
    HangAt(RecordType),
}

// ============================================================================
// Mock ResolverFactory
// ============================================================================

/// Factory keyed by endpoint address. Unknown addresses fail to build, the
/// same way an unparsable address does.
#[derive(Default)]
pub struct MockResolverFactory {
    behaviors: HashMap<String, MockBehavior>,
    calls: Arc<Mutex<Vec<(String, RecordType)>>>,
}

impl MockResolverFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, address: &str, behavior: MockBehavior) -> Self {
        self.behaviors.insert(address.to_string(), behavior);
        self
    }

    /// Every lookup issued so far, as (address, step).
    pub fn calls(&self) -> Vec<(String, RecordType)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn calls_for(&self, address: &str) -> Vec<RecordType> {
        self.calls()
            .into_iter()
            .filter(|(a, _)| a == address)
            .map(|(_, rt)| rt)
            .collect()
    }
}

impl ResolverFactory for MockResolverFactory {
    fn build(&self, endpoint: &ResolverEndpoint) -> Result<Arc<dyn UpstreamResolver>, DomainError> {
        let behavior = self
            .behaviors
            .get(&*endpoint.address)
            .cloned()
            .ok_or_else(|| DomainError::InvalidAddress(endpoint.address.to_string()))?;

        Ok(Arc::new(MockResolver {
            address: endpoint.address.to_string(),
            behavior,
            calls: Arc::clone(&self.calls),
        }))
    }
}

pub struct MockResolver {
    address: String,
    behavior: MockBehavior,
    calls: Arc<Mutex<Vec<(String, RecordType)>>>,
}

impl MockResolver {
    async fn step(&self, record_type: RecordType) -> Result<MockAnswer, DomainError> {
        self.calls
            .lock()
            .unwrap()
            .push((self.address.clone(), record_type));

        match &self.behavior {
            MockBehavior::Answer(answer) => Ok(answer.clone()),
            MockBehavior::Delayed(delay, answer) => {
                if record_type == RecordType::A {
                    tokio::time::sleep(*delay).await;
                }
                Ok(answer.clone())
            }
            MockBehavior::FailAt(failing) if *failing == record_type => Err(
                DomainError::LookupFailure(format!("{} answered SERVFAIL", self.address)),
            ),
            MockBehavior::HangAt(hanging) if *hanging == record_type => {
                std::future::pending::<()>().await;
                unreachable!()
            }
            MockBehavior::FailAt(_) | MockBehavior::HangAt(_) => Ok(MockAnswer::default()),
        }
    }
}

#[async_trait]
impl UpstreamResolver for MockResolver {
    async fn lookup_addresses(&self, _domain: &str) -> Result<Vec<String>, DomainError> {
        Ok(self.step(RecordType::A).await?.addresses)
    }

    async fn lookup_cname(&self, _domain: &str) -> Result<String, DomainError> {
        Ok(self.step(RecordType::CNAME).await?.cname)
    }

    async fn lookup_txt(&self, _domain: &str) -> Result<Vec<String>, DomainError> {
        Ok(self.step(RecordType::TXT).await?.txts)
    }

    async fn lookup_ns(&self, _domain: &str) -> Result<Vec<String>, DomainError> {
        Ok(self.step(RecordType::NS).await?.ns)
    }

    fn server(&self) -> &str {
        &self.address
    }
}
