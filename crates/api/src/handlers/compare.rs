use crate::{
    dto::{CompareQuery, ComparisonResponse},
    render,
    state::AppState,
};
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Html,
    Json,
};
use ferrous_dnscheck_domain::{validators::validate_domain_name, QueryRun, SortOrder};
use tracing::{debug, instrument, warn};

type ApiError = (StatusCode, String);

#[instrument(skip(state), name = "api_get_dns_result")]
pub async fn get_dns_result_fragment(
    State(state): State<AppState>,
    Query(params): Query<CompareQuery>,
) -> Result<Html<String>, ApiError> {
    let run = run_comparison(&state, &params).await?;
    Ok(Html(render::render_table(&run)))
}

#[instrument(skip(state), name = "api_get_comparison")]
pub async fn get_comparison(
    State(state): State<AppState>,
    Query(params): Query<CompareQuery>,
) -> Result<Json<ComparisonResponse>, ApiError> {
    let run = run_comparison(&state, &params).await?;
    Ok(Json(ComparisonResponse::from_run(&run)))
}

async fn run_comparison(state: &AppState, params: &CompareQuery) -> Result<QueryRun, ApiError> {
    let domain = params
        .domain
        .as_deref()
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .ok_or_else(|| (StatusCode::BAD_REQUEST, "Missing 'domain' parameter".to_string()))?;

    validate_domain_name(domain).map_err(|e| {
        warn!(domain = %domain, error = %e, "Rejected comparison request");
        (StatusCode::BAD_REQUEST, e)
    })?;

    let order = match params.sort.as_deref() {
        Some(sort) => sort
            .parse::<SortOrder>()
            .map_err(|e| (StatusCode::BAD_REQUEST, e))?,
        None => state.run_comparison.sort_order(),
    };

    debug!(domain = %domain, order = %order, resolvers = state.resolvers.len(), "Running comparison");

    Ok(state
        .run_comparison
        .execute_sorted(domain, &state.resolvers, order)
        .await)
}
