use async_trait::async_trait;
use ferrous_dnscheck_domain::{DomainError, ResolverEndpoint};
use std::sync::Arc;

/// A resolver bound to exactly one upstream server.
///
/// Each call issues its query straight to that server. Deadlines are applied
/// by the caller, one per call.
#[async_trait]
pub trait UpstreamResolver: Send + Sync {
    /// A and AAAA answers, merged, as textual IP addresses.
    async fn lookup_addresses(&self, domain: &str) -> Result<Vec<String>, DomainError>;

    /// Canonical name, or an empty string when the name is not an alias.
    async fn lookup_cname(&self, domain: &str) -> Result<String, DomainError>;

    async fn lookup_txt(&self, domain: &str) -> Result<Vec<String>, DomainError>;

    async fn lookup_ns(&self, domain: &str) -> Result<Vec<String>, DomainError>;

    /// Address the queries go to, for logs and error messages.
    fn server(&self) -> &str;
}

/// Builds an [`UpstreamResolver`] for a configured endpoint.
pub trait ResolverFactory: Send + Sync {
    fn build(&self, endpoint: &ResolverEndpoint) -> Result<Arc<dyn UpstreamResolver>, DomainError>;
}
