use crate::ports::{ResolverFactory, UpstreamResolver};
use crate::services::{ComparisonView, ConsensusTally, ResultRanker};
use ferrous_dnscheck_domain::{
    DomainError, LookupOutcome, QueryRun, RecordType, ResolverEndpoint, ResolverError, SortOrder,
};
use futures::future::join_all;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::{timeout, Instant};
use tracing::{debug, info, instrument, warn};

const DEFAULT_LOOKUP_TIMEOUT: Duration = Duration::from_secs(5);

/// Resolves one domain against every configured resolver at once and builds
/// the annotated comparison.
///
/// Each resolver runs in its own task. Within a task the address, CNAME, TXT
/// and NS lookups run in that order, each under its own deadline. The first
/// failure drops the resolver from the run and leaves a single error behind.
/// Partial answers are never reported.
pub struct RunComparisonUseCase {
    factory: Arc<dyn ResolverFactory>,
    lookup_timeout: Duration,
    sort_order: SortOrder,
}

impl RunComparisonUseCase {
    pub fn new(factory: Arc<dyn ResolverFactory>) -> Self {
        Self {
            factory,
            lookup_timeout: DEFAULT_LOOKUP_TIMEOUT,
            sort_order: SortOrder::default(),
        }
    }

    pub fn with_lookup_timeout(mut self, lookup_timeout: Duration) -> Self {
        if !lookup_timeout.is_zero() {
            self.lookup_timeout = lookup_timeout;
        }
        self
    }

    pub fn with_sort_order(mut self, sort_order: SortOrder) -> Self {
        self.sort_order = sort_order;
        self
    }

    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    pub fn lookup_timeout(&self) -> Duration {
        self.lookup_timeout
    }

    pub async fn execute(&self, domain: &str, resolvers: &[ResolverEndpoint]) -> QueryRun {
        self.execute_sorted(domain, resolvers, self.sort_order).await
    }

    #[instrument(skip(self, resolvers), fields(resolvers = resolvers.len()))]
    pub async fn execute_sorted(
        &self,
        domain: &str,
        resolvers: &[ResolverEndpoint],
        order: SortOrder,
    ) -> QueryRun {
        let domain: Arc<str> = Arc::from(domain);

        if resolvers.is_empty() {
            debug!("No resolvers configured, nothing to compare");
            return QueryRun::empty(domain);
        }

        let started = Instant::now();

        let handles: Vec<_> = resolvers
            .iter()
            .map(|endpoint| {
                let endpoint = endpoint.clone();
                let factory = Arc::clone(&self.factory);
                let domain = Arc::clone(&domain);
                let lookup_timeout = self.lookup_timeout;
                tokio::spawn(async move {
                    query_resolver(factory.as_ref(), &endpoint, &domain, lookup_timeout).await
                })
            })
            .collect();

        // Handles are awaited in configuration order: this task is the only
        // writer of the outcome and error lists.
        let joined = join_all(handles).await;

        let mut outcomes = Vec::with_capacity(resolvers.len());
        let mut errors = Vec::new();

        for (endpoint, result) in resolvers.iter().zip(joined) {
            match result {
                Ok(Ok(outcome)) => outcomes.push(outcome),
                Ok(Err(e)) => {
                    debug!(operator = %endpoint.operator, server = %endpoint.address, error = %e, "Resolver dropped from run");
                    errors.push(ResolverError::new(endpoint, e));
                }
                Err(e) => {
                    warn!(operator = %endpoint.operator, error = %e, "Resolver task panicked");
                    errors.push(ResolverError::new(
                        endpoint,
                        DomainError::TaskFailed(e.to_string()),
                    ));
                }
            }
        }

        let consensus = ConsensusTally::tally(&outcomes);
        let ranked = ResultRanker::rank(outcomes, order);
        let annotated = ComparisonView::annotate(ranked, &consensus);

        info!(
            domain = %domain,
            answered = annotated.len(),
            failed = errors.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Comparison run finished"
        );

        QueryRun {
            domain,
            outcomes: annotated,
            errors,
            consensus,
            resolver_count: resolvers.len(),
        }
    }
}

async fn query_resolver(
    factory: &dyn ResolverFactory,
    endpoint: &ResolverEndpoint,
    domain: &str,
    lookup_timeout: Duration,
) -> Result<LookupOutcome, DomainError> {
    let resolver = factory.build(endpoint)?;
    let server = resolver.server().to_string();

    let start = Instant::now();

    let mut addresses = bounded(
        &server,
        RecordType::A,
        lookup_timeout,
        resolver.lookup_addresses(domain),
    )
    .await?;
    let cname = bounded(
        &server,
        RecordType::CNAME,
        lookup_timeout,
        resolver.lookup_cname(domain),
    )
    .await?;
    let mut txts = bounded(
        &server,
        RecordType::TXT,
        lookup_timeout,
        resolver.lookup_txt(domain),
    )
    .await?;
    let ns = bounded(
        &server,
        RecordType::NS,
        lookup_timeout,
        resolver.lookup_ns(domain),
    )
    .await?;

    let elapsed = start.elapsed();

    let mut ns: Vec<String> = ns.iter().map(|host| bare_hostname(host)).collect();
    addresses.sort();
    txts.sort();
    ns.sort();

    debug!(
        operator = %endpoint.operator,
        server = %server,
        addresses = addresses.len(),
        elapsed_us = elapsed.as_micros() as u64,
        "Resolver answered"
    );

    Ok(LookupOutcome::new(endpoint)
        .with_addresses(addresses)
        .with_cname(bare_hostname(&cname))
        .with_txts(txts)
        .with_ns(ns)
        .with_elapsed(elapsed))
}

async fn bounded<T>(
    server: &str,
    record_type: RecordType,
    deadline: Duration,
    lookup: impl Future<Output = Result<T, DomainError>>,
) -> Result<T, DomainError> {
    match timeout(deadline, lookup).await {
        Ok(result) => result,
        Err(_) => Err(DomainError::LookupTimeout {
            server: server.to_string(),
            record_type,
            timeout_ms: deadline.as_millis() as u64,
        }),
    }
}

/// `ns1.example.com.` → `ns1.example.com`
fn bare_hostname(host: &str) -> String {
    host.trim_end_matches('.').to_string()
}
