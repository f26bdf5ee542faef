pub mod config;
pub mod logging;
pub mod resolvers;

pub use config::load_config;
pub use logging::init_logging;
pub use resolvers::load_resolvers;
