use ferrous_dnscheck_domain::{AnnotatedOutcome, ConsensusTable, LookupOutcome, RecordField};

/// Marks, per outcome and field, whether the answer agrees with the majority.
pub struct ComparisonView;

impl ComparisonView {
    pub fn annotate(ranked: Vec<LookupOutcome>, table: &ConsensusTable) -> Vec<AnnotatedOutcome> {
        ranked
            .into_iter()
            .map(|outcome| AnnotatedOutcome {
                addresses_match_majority: table.matches(RecordField::Addresses, &outcome),
                cname_match_majority: table.matches(RecordField::Cname, &outcome),
                txts_match_majority: table.matches(RecordField::Txts, &outcome),
                ns_match_majority: table.matches(RecordField::Ns, &outcome),
                outcome,
            })
            .collect()
    }
}
