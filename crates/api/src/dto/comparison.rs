use ferrous_dnscheck_domain::{
    AnnotatedOutcome, ConsensusTable, QueryRun, RecordField, ResolverError, RunStatus,
};
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Debug, Default)]
pub struct CompareQuery {
    pub domain: Option<String>,
    /// `elapsed` or `operator`; the configured order when absent.
    pub sort: Option<String>,
}

#[derive(Serialize, Debug)]
pub struct ComparisonResponse {
    pub domain: String,
    pub status: RunStatus,
    pub resolver_count: usize,
    pub consensus: ConsensusTable,
    pub outcomes: Vec<OutcomeResponse>,
    pub errors: Vec<ResolverErrorResponse>,
}

#[derive(Serialize, Debug)]
pub struct OutcomeResponse {
    pub operator: String,
    pub address: String,
    pub addresses: Vec<String>,
    pub cname: String,
    pub txts: Vec<String>,
    pub ns: Vec<String>,
    pub elapsed_ms: f64,
    pub addresses_match_majority: bool,
    pub cname_match_majority: bool,
    pub txts_match_majority: bool,
    pub ns_match_majority: bool,
    pub mismatched: Vec<RecordField>,
}

#[derive(Serialize, Debug)]
pub struct ResolverErrorResponse {
    pub operator: String,
    pub address: String,
    pub error: String,
    pub timeout: bool,
}

impl ComparisonResponse {
    pub fn from_run(run: &QueryRun) -> Self {
        Self {
            domain: run.domain.to_string(),
            status: run.status(),
            resolver_count: run.resolver_count,
            consensus: run.consensus.clone(),
            outcomes: run.outcomes.iter().map(OutcomeResponse::from).collect(),
            errors: run.errors.iter().map(ResolverErrorResponse::from).collect(),
        }
    }
}

impl From<&AnnotatedOutcome> for OutcomeResponse {
    fn from(annotated: &AnnotatedOutcome) -> Self {
        let outcome = &annotated.outcome;
        Self {
            operator: outcome.operator.to_string(),
            address: outcome.address.to_string(),
            addresses: outcome.addresses.clone(),
            cname: outcome.cname.clone(),
            txts: outcome.txts.clone(),
            ns: outcome.ns.clone(),
            elapsed_ms: outcome.elapsed.as_secs_f64() * 1000.0,
            addresses_match_majority: annotated.addresses_match_majority,
            cname_match_majority: annotated.cname_match_majority,
            txts_match_majority: annotated.txts_match_majority,
            ns_match_majority: annotated.ns_match_majority,
            mismatched: annotated.mismatched_fields(),
        }
    }
}

impl From<&ResolverError> for ResolverErrorResponse {
    fn from(err: &ResolverError) -> Self {
        Self {
            operator: err.operator.to_string(),
            address: err.address.to_string(),
            error: err.error.to_string(),
            timeout: err.error.is_timeout(),
        }
    }
}
