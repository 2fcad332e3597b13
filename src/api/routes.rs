//! API Routes
//!
//! Cache traffic (`/set`, `/get/:key`) and service endpoints (`/stats`,
//! `/health`) are built as separate routers and merged under shared
//! CORS and request-tracing layers.

use axum::{
    routing::{get, put},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use super::handlers::{get_handler, health_handler, set_handler, stats_handler, AppState};

/// Builds the full application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(cache_routes())
        .merge(service_routes())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Reads and writes against the cache. Every one of these reorders recency.
fn cache_routes() -> Router<AppState> {
    Router::new()
        .route("/set", put(set_handler))
        .route("/get/:key", get(get_handler))
}

/// Introspection that never touches recency order.
fn service_routes() -> Router<AppState> {
    Router::new()
        .route("/stats", get(stats_handler))
        .route("/health", get(health_handler))
}
