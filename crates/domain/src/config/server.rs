use super::ConfigError;
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_web_port")]
    pub web_port: u16,

    #[serde(default = "default_bind_address")]
    pub bind_address: String,

    /// Directory served at `/` (the htmx front page)
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
}

fn default_web_port() -> u16 {
    8080
}

fn default_bind_address() -> String {
    "0.0.0.0".to_string()
}

fn default_static_dir() -> String {
    "static".to_string()
}

impl ServerConfig {
    /// Listen address. IPv6 binds such as `::` need no brackets.
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let ip: IpAddr = self.bind_address.trim().parse().map_err(|_| {
            ConfigError::Validation(format!(
                "server.bind_address '{}' is not an IP address",
                self.bind_address
            ))
        })?;
        Ok(SocketAddr::new(ip, self.web_port))
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            web_port: default_web_port(),
            bind_address: default_bind_address(),
            static_dir: default_static_dir(),
        }
    }
}
