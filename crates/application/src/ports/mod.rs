pub mod upstream_resolver;

pub use upstream_resolver::{ResolverFactory, UpstreamResolver};
