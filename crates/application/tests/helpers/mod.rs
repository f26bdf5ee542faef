pub mod mock_resolvers;

pub use mock_resolvers::{MockAnswer, MockBehavior, MockResolverFactory};
