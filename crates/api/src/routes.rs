use crate::handlers;
use crate::state::AppState;
use axum::{routing::get, Router};

/// Creates all API routes with state
pub fn create_api_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/hx/dnsResult", get(handlers::get_dns_result_fragment))
        .route("/api/compare", get(handlers::get_comparison))
        .with_state(state)
}
