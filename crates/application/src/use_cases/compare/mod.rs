pub mod run_comparison;

pub use run_comparison::RunComparisonUseCase;
