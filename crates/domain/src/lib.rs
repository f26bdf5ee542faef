//! Ferrous DNSCheck Domain Layer
pub mod config;
pub mod consensus;
pub mod dns_record;
pub mod errors;
pub mod fingerprint;
pub mod lookup_outcome;
pub mod query_run;
pub mod resolver_endpoint;
pub mod validators;

pub use config::{CliOverrides, Config, ConfigError};
pub use consensus::{AnnotatedOutcome, ConsensusTable, RecordField};
pub use dns_record::RecordType;
pub use errors::DomainError;
pub use fingerprint::Fingerprint;
pub use lookup_outcome::{LookupOutcome, ResolverError};
pub use query_run::{QueryRun, RunStatus, SortOrder};
pub use resolver_endpoint::ResolverEndpoint;
