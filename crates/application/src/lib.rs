//! Ferrous DNSCheck Application Layer
//!
//! Ports to the outside world, the pure comparison services and the use case
//! that drives a multi-resolver run.
pub mod ports;
pub mod services;
pub mod use_cases;
