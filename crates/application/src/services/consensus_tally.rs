use ferrous_dnscheck_domain::{ConsensusTable, Fingerprint, LookupOutcome, RecordField};

/// Reduces a run's outcomes to the majority fingerprint per field.
pub struct ConsensusTally;

impl ConsensusTally {
    /// Count fingerprints per field and keep the most frequent one.
    ///
    /// Ties go to the fingerprint seen first in `outcomes`, so callers pass
    /// outcomes in resolver-configuration order.
    pub fn tally(outcomes: &[LookupOutcome]) -> ConsensusTable {
        if outcomes.is_empty() {
            return ConsensusTable::no_data();
        }

        ConsensusTable {
            addresses: Self::majority(outcomes, RecordField::Addresses),
            cname: Self::majority(outcomes, RecordField::Cname),
            txts: Self::majority(outcomes, RecordField::Txts),
            ns: Self::majority(outcomes, RecordField::Ns),
            sample_size: outcomes.len(),
        }
    }

    fn majority(outcomes: &[LookupOutcome], field: RecordField) -> Fingerprint {
        // First-seen order is kept so the scan below resolves ties deterministically.
        let mut counts: Vec<(Fingerprint, usize)> = Vec::new();
        for outcome in outcomes {
            let fp = field.fingerprint(outcome);
            match counts.iter_mut().find(|(seen, _)| *seen == fp) {
                Some((_, count)) => *count += 1,
                None => counts.push((fp, 1)),
            }
        }

        let mut best: Option<(Fingerprint, usize)> = None;
        for (fp, count) in counts {
            if best.as_ref().map_or(true, |(_, top)| count > *top) {
                best = Some((fp, count));
            }
        }

        best.map(|(fp, _)| fp).unwrap_or_else(Fingerprint::empty)
    }
}
