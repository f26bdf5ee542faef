pub mod comparison_view;
pub mod consensus_tally;
pub mod result_ranker;

pub use comparison_view::ComparisonView;
pub use consensus_tally::ConsensusTally;
pub use result_ranker::ResultRanker;
