pub mod forwarding;
pub mod resolver;
pub mod transport;

pub use resolver::{DirectResolver, DirectResolverFactory};
pub use transport::Network;
