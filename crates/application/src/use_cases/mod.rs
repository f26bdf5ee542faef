pub mod compare;

pub use compare::RunComparisonUseCase;
