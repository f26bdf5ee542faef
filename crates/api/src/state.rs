use ferrous_dnscheck_application::use_cases::RunComparisonUseCase;
use ferrous_dnscheck_domain::ResolverEndpoint;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub run_comparison: Arc<RunComparisonUseCase>,
    /// Loaded once at startup; every request compares against the same list.
    pub resolvers: Arc<Vec<ResolverEndpoint>>,
}

impl AppState {
    pub fn new(run_comparison: RunComparisonUseCase, resolvers: Vec<ResolverEndpoint>) -> Self {
        Self {
            run_comparison: Arc::new(run_comparison),
            resolvers: Arc::new(resolvers),
        }
    }
}
