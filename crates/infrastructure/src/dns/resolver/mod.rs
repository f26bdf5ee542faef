//! Direct resolvers: every query goes straight to one configured socket
//! address, never through the system resolver.
//!
//! ```no_run
//! use ferrous_dnscheck_infrastructure::dns::DirectResolverFactory;
//! use std::time::Duration;
//!
//! let factory = DirectResolverFactory::new(Duration::from_secs(10))
//!     .with_query_timeout(Duration::from_secs(5));
//! let resolver = factory.build_direct("9.9.9.9:53")?;
//! # Ok::<(), ferrous_dnscheck_domain::DomainError>(())
//! ```

pub mod direct;
pub mod factory;

pub use direct::DirectResolver;
pub use factory::DirectResolverFactory;
