use super::{ConfigError, DnsConfig, LoggingConfig, ServerConfig};
use crate::validators::{normalize_server_address, validate_operator_name};
use crate::{ResolverEndpoint, SortOrder};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Root configuration, loaded from TOML.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub dns: DnsConfig,

    #[serde(default)]
    pub logging: LoggingConfig,

    /// Inline resolver list (`[[resolvers]]` tables)
    #[serde(default)]
    pub resolvers: Vec<ResolverEndpoint>,
}

/// Values given on the command line take precedence over the file.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub bind_address: Option<String>,
    pub web_port: Option<u16>,
    pub servers_file: Option<String>,
    pub sort_order: Option<SortOrder>,
    pub log_level: Option<String>,
}

impl Config {
    /// Load from `path` (defaults when `None`) and apply `overrides`.
    pub fn load(path: Option<&str>, overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(p) => Self::from_file(p)?,
            None => Self::default(),
        };
        config.apply_overrides(overrides);
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml(&content).map_err(|message| ConfigError::Parse {
            path: path.display().to_string(),
            message,
        })
    }

    pub fn from_toml(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }

    pub fn apply_overrides(&mut self, overrides: CliOverrides) {
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(port) = overrides.web_port {
            self.server.web_port = port;
        }
        if let Some(file) = overrides.servers_file {
            self.dns.servers_file = Some(file);
        }
        if let Some(order) = overrides.sort_order {
            self.dns.sort_order = order;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.dns.lookup_timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "dns.lookup_timeout_ms must be greater than zero".into(),
            ));
        }
        if self.server.bind_address.trim().is_empty() {
            return Err(ConfigError::Validation(
                "server.bind_address cannot be empty".into(),
            ));
        }
        self.server.socket_addr()?;
        for resolver in &self.resolvers {
            validate_operator_name(&resolver.operator).map_err(ConfigError::Validation)?;
            if resolver.address.trim().is_empty() {
                return Err(ConfigError::Validation(format!(
                    "resolver '{}' has an empty address",
                    resolver.operator
                )));
            }
        }
        Ok(())
    }

    /// Inline resolvers with their addresses normalized to `host:port`.
    pub fn resolver_endpoints(&self) -> Vec<ResolverEndpoint> {
        self.resolvers
            .iter()
            .map(|r| {
                ResolverEndpoint::new(
                    r.operator.trim(),
                    normalize_server_address(&r.address).as_str(),
                )
            })
            .collect()
    }
}
