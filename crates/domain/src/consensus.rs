use crate::{Fingerprint, LookupOutcome};
use serde::Serialize;
use std::fmt;

/// The record fields compared across resolvers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordField {
    Addresses,
    Cname,
    Txts,
    Ns,
}

impl RecordField {
    pub const ALL: [RecordField; 4] = [
        RecordField::Addresses,
        RecordField::Cname,
        RecordField::Txts,
        RecordField::Ns,
    ];

    /// Fingerprint of this field in `outcome`.
    pub fn fingerprint(&self, outcome: &LookupOutcome) -> Fingerprint {
        match self {
            RecordField::Addresses => Fingerprint::of(&outcome.addresses),
            RecordField::Cname => Fingerprint::of_cname(&outcome.cname),
            RecordField::Txts => Fingerprint::of(&outcome.txts),
            RecordField::Ns => Fingerprint::of(&outcome.ns),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RecordField::Addresses => "addresses",
            RecordField::Cname => "cname",
            RecordField::Txts => "txts",
            RecordField::Ns => "ns",
        }
    }
}

impl fmt::Display for RecordField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Majority fingerprint per field across one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConsensusTable {
    pub addresses: Fingerprint,
    pub cname: Fingerprint,
    pub txts: Fingerprint,
    pub ns: Fingerprint,
    /// Number of outcomes the table was computed from.
    pub sample_size: usize,
}

impl ConsensusTable {
    /// Table for a run with no outcomes: every slot holds the empty sentinel.
    pub fn no_data() -> Self {
        Self {
            addresses: Fingerprint::empty(),
            cname: Fingerprint::empty(),
            txts: Fingerprint::empty(),
            ns: Fingerprint::empty(),
            sample_size: 0,
        }
    }

    pub fn has_data(&self) -> bool {
        self.sample_size > 0
    }

    pub fn get(&self, field: RecordField) -> &Fingerprint {
        match field {
            RecordField::Addresses => &self.addresses,
            RecordField::Cname => &self.cname,
            RecordField::Txts => &self.txts,
            RecordField::Ns => &self.ns,
        }
    }

    /// Whether `outcome`'s value for `field` is the majority answer.
    /// Always false when there is nothing to compare against.
    pub fn matches(&self, field: RecordField, outcome: &LookupOutcome) -> bool {
        self.has_data() && &field.fingerprint(outcome) == self.get(field)
    }
}

impl Default for ConsensusTable {
    fn default() -> Self {
        Self::no_data()
    }
}

/// An outcome plus its per-field agreement with the majority.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotatedOutcome {
    pub outcome: LookupOutcome,
    pub addresses_match_majority: bool,
    pub cname_match_majority: bool,
    pub txts_match_majority: bool,
    pub ns_match_majority: bool,
}

impl AnnotatedOutcome {
    pub fn matches(&self, field: RecordField) -> bool {
        match field {
            RecordField::Addresses => self.addresses_match_majority,
            RecordField::Cname => self.cname_match_majority,
            RecordField::Txts => self.txts_match_majority,
            RecordField::Ns => self.ns_match_majority,
        }
    }

    /// Fields on which this resolver disagrees with the majority.
    pub fn mismatched_fields(&self) -> Vec<RecordField> {
        RecordField::ALL
            .into_iter()
            .filter(|f| !self.matches(*f))
            .collect()
    }

    pub fn agrees_with_majority(&self) -> bool {
        RecordField::ALL.into_iter().all(|f| self.matches(f))
    }
}
