use crate::{AnnotatedOutcome, ConsensusTable, ResolverError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Presentation order of a run's outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Fastest resolver first
    #[default]
    Elapsed,
    /// Operator name, byte order
    Operator,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Elapsed => "elapsed",
            SortOrder::Operator => "operator",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "elapsed" | "duration" => Ok(SortOrder::Elapsed),
            "operator" | "name" => Ok(SortOrder::Operator),
            _ => Err(format!("Invalid sort order: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RunStatus {
    /// The resolver list was empty
    NoServersConfigured,
    /// Every configured resolver failed
    AllFailed,
    /// Some resolvers failed
    Partial,
    Complete,
}

/// Everything one invocation produced: ranked, annotated outcomes plus the
/// errors of resolvers that did not contribute.
#[derive(Debug)]
pub struct QueryRun {
    pub domain: Arc<str>,
    pub outcomes: Vec<AnnotatedOutcome>,
    pub errors: Vec<ResolverError>,
    pub consensus: ConsensusTable,
    pub resolver_count: usize,
}

impl QueryRun {
    pub fn empty(domain: impl Into<Arc<str>>) -> Self {
        Self {
            domain: domain.into(),
            outcomes: Vec::new(),
            errors: Vec::new(),
            consensus: ConsensusTable::no_data(),
            resolver_count: 0,
        }
    }

    pub fn status(&self) -> RunStatus {
        if self.outcomes.is_empty() {
            if self.errors.is_empty() {
                RunStatus::NoServersConfigured
            } else {
                RunStatus::AllFailed
            }
        } else if self.errors.is_empty() {
            RunStatus::Complete
        } else {
            RunStatus::Partial
        }
    }

    /// Outcomes that disagree with the majority on at least one field.
    pub fn dissenters(&self) -> impl Iterator<Item = &AnnotatedOutcome> {
        self.outcomes.iter().filter(|o| !o.agrees_with_majority())
    }
}
