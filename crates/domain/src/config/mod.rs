//! Configuration module for Ferrous DNSCheck
//!
//! This module contains all configuration structures organized by domain:
//! - `root`: Main configuration and CLI overrides
//! - `server`: Web server binding and static assets
//! - `dns`: Lookup timeouts, ordering and resolver list source
//! - `logging`: Logging settings
//! - `errors`: Configuration errors

pub mod dns;
pub mod errors;
pub mod logging;
pub mod root;
pub mod server;

pub use dns::DnsConfig;
pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
