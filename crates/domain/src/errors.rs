use crate::RecordType;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Invalid resolver address: {0}")]
    InvalidAddress(String),

    #[error("{record_type} lookup against {server} timed out after {timeout_ms}ms")]
    LookupTimeout {
        server: String,
        record_type: RecordType,
        timeout_ms: u64,
    },

    #[error("Lookup failed: {0}")]
    LookupFailure(String),

    #[error("Invalid DNS response: {0}")]
    InvalidDnsResponse(String),

    #[error("Resolver task failed: {0}")]
    TaskFailed(String),
}

impl DomainError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, DomainError::LookupTimeout { .. })
    }
}
