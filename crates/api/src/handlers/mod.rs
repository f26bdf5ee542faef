pub mod compare;
pub mod health;

pub use compare::{get_comparison, get_dns_result_fragment};
pub use health::health_check;
