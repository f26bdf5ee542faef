//! Ferrous DNSCheck infrastructure: direct resolver sockets, the DNS wire
//! codec and the resolver list loader.
pub mod config;
pub mod dns;
