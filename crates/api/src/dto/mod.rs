pub mod comparison;

pub use comparison::{CompareQuery, ComparisonResponse, OutcomeResponse, ResolverErrorResponse};
