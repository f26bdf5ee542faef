use crate::{DomainError, ResolverEndpoint};
use std::sync::Arc;
use std::time::Duration;

/// One resolver's complete answer for a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupOutcome {
    pub operator: Arc<str>,
    pub address: Arc<str>,
    pub addresses: Vec<String>,
    /// Empty when the resolver returned no CNAME.
    pub cname: String,
    pub txts: Vec<String>,
    pub ns: Vec<String>,
    pub elapsed: Duration,
}

impl LookupOutcome {
    pub fn new(endpoint: &ResolverEndpoint) -> Self {
        Self {
            operator: Arc::clone(&endpoint.operator),
            address: Arc::clone(&endpoint.address),
            addresses: Vec::new(),
            cname: String::new(),
            txts: Vec::new(),
            ns: Vec::new(),
            elapsed: Duration::ZERO,
        }
    }

    pub fn with_addresses(mut self, addresses: Vec<String>) -> Self {
        self.addresses = addresses;
        self
    }

    pub fn with_cname(mut self, cname: impl Into<String>) -> Self {
        self.cname = cname.into();
        self
    }

    pub fn with_txts(mut self, txts: Vec<String>) -> Self {
        self.txts = txts;
        self
    }

    pub fn with_ns(mut self, ns: Vec<String>) -> Self {
        self.ns = ns;
        self
    }

    pub fn with_elapsed(mut self, elapsed: Duration) -> Self {
        self.elapsed = elapsed;
        self
    }
}

/// A resolver that produced no outcome, and why.
#[derive(Debug)]
pub struct ResolverError {
    pub operator: Arc<str>,
    pub address: Arc<str>,
    pub error: DomainError,
}

impl ResolverError {
    pub fn new(endpoint: &ResolverEndpoint, error: DomainError) -> Self {
        Self {
            operator: Arc::clone(&endpoint.operator),
            address: Arc::clone(&endpoint.address),
            error,
        }
    }
}

impl std::fmt::Display for ResolverError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}): {}", self.operator, self.address, self.error)
    }
}
