use ferrous_dnscheck_domain::{LookupOutcome, SortOrder};

/// Deterministic presentation order for a run's outcomes.
pub struct ResultRanker;

impl ResultRanker {
    /// Stable sort: outcomes with equal keys keep their incoming order.
    pub fn rank(mut outcomes: Vec<LookupOutcome>, order: SortOrder) -> Vec<LookupOutcome> {
        match order {
            SortOrder::Elapsed => outcomes.sort_by_key(|o| o.elapsed),
            SortOrder::Operator => outcomes.sort_by(|a, b| a.operator.cmp(&b.operator)),
        }
        outcomes
    }
}
