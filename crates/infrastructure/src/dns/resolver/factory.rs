use super::direct::DirectResolver;
use ferrous_dnscheck_application::ports::{ResolverFactory, UpstreamResolver};
use ferrous_dnscheck_domain::{DomainError, ResolverEndpoint};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
const DEFAULT_QUERY_TIMEOUT: Duration = Duration::from_secs(5);

/// Builds resolvers that talk to exactly one IP-literal socket address.
///
/// Hostnames are rejected rather than resolved: the system resolver and the
/// hosts file are never consulted.
#[derive(Debug, Clone)]
pub struct DirectResolverFactory {
    connect_timeout: Duration,
    query_timeout: Duration,
}

impl DirectResolverFactory {
    /// A zero `connect_timeout` selects the 10 s default.
    pub fn new(connect_timeout: Duration) -> Self {
        Self {
            connect_timeout: if connect_timeout.is_zero() {
                DEFAULT_CONNECT_TIMEOUT
            } else {
                connect_timeout
            },
            query_timeout: DEFAULT_QUERY_TIMEOUT,
        }
    }

    pub fn with_query_timeout(mut self, query_timeout: Duration) -> Self {
        if !query_timeout.is_zero() {
            self.query_timeout = query_timeout;
        }
        self
    }

    pub fn connect_timeout(&self) -> Duration {
        self.connect_timeout
    }

    pub fn build_direct(&self, address: &str) -> Result<DirectResolver, DomainError> {
        let server_addr: SocketAddr = address
            .trim()
            .parse()
            .map_err(|_| DomainError::InvalidAddress(address.to_string()))?;

        debug!(server = %server_addr, "Direct resolver created");

        Ok(DirectResolver::new(
            server_addr,
            self.connect_timeout,
            self.query_timeout,
        ))
    }
}

impl Default for DirectResolverFactory {
    fn default() -> Self {
        Self::new(DEFAULT_CONNECT_TIMEOUT)
    }
}

impl ResolverFactory for DirectResolverFactory {
    fn build(&self, endpoint: &ResolverEndpoint) -> Result<Arc<dyn UpstreamResolver>, DomainError> {
        Ok(Arc::new(self.build_direct(&endpoint.address)?))
    }
}
