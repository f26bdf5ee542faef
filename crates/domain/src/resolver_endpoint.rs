use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// A configured upstream resolver: who operates it and where to reach it.
///
/// Uses `Arc<str>` so endpoints clone cheaply into per-resolver tasks.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResolverEndpoint {
    pub operator: Arc<str>,
    pub address: Arc<str>,
}

impl ResolverEndpoint {
    pub fn new(operator: impl Into<Arc<str>>, address: impl Into<Arc<str>>) -> Self {
        Self {
            operator: operator.into(),
            address: address.into(),
        }
    }
}

impl fmt::Display for ResolverEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.operator, self.address)
    }
}
