use crate::SortOrder;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Lookup settings for a comparison run
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DnsConfig {
    /// Deadline for each individual lookup (addresses, CNAME, TXT, NS)
    #[serde(default = "default_lookup_timeout")]
    pub lookup_timeout_ms: u64,

    /// Socket-level timeout for establishing a connection to a resolver
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_ms: u64,

    #[serde(default)]
    pub sort_order: SortOrder,

    /// Optional `operator;address` file; replaces `[[resolvers]]` when set
    #[serde(default)]
    pub servers_file: Option<String>,
}

impl DnsConfig {
    pub fn lookup_timeout(&self) -> Duration {
        Duration::from_millis(self.lookup_timeout_ms)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_millis(self.connect_timeout_ms)
    }
}

impl Default for DnsConfig {
    fn default() -> Self {
        Self {
            lookup_timeout_ms: default_lookup_timeout(),
            connect_timeout_ms: default_connect_timeout(),
            sort_order: SortOrder::default(),
            servers_file: None,
        }
    }
}

fn default_lookup_timeout() -> u64 {
    5000
}

fn default_connect_timeout() -> u64 {
    10_000
}
