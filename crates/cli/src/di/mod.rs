use ferrous_dnscheck_application::use_cases::RunComparisonUseCase;
use ferrous_dnscheck_domain::Config;
use ferrous_dnscheck_infrastructure::dns::DirectResolverFactory;
use std::sync::Arc;

pub fn build_run_comparison(config: &Config) -> RunComparisonUseCase {
    let factory = DirectResolverFactory::new(config.dns.connect_timeout())
        .with_query_timeout(config.dns.lookup_timeout());

    RunComparisonUseCase::new(Arc::new(factory))
        .with_lookup_timeout(config.dns.lookup_timeout())
        .with_sort_order(config.dns.sort_order)
}
