//! API Handlers
//!
//! HTTP request handlers for each cache server endpoint.

use std::sync::Arc;
use tokio::sync::Mutex;

use axum::{
    extract::{Path, State},
    Json,
};

use crate::cache::CacheStore;
use crate::error::{CacheError, Result};
use crate::models::{GetResponse, HealthResponse, SetRequest, SetResponse, StatsResponse};

/// Application state shared across all handlers.
///
/// The store does no locking of its own and every lookup reorders it, so all
/// handlers go through one mutex.
#[derive(Clone)]
pub struct AppState {
    /// Serialized cache store
    pub cache: Arc<Mutex<CacheStore>>,
}

impl AppState {
    /// Creates a new AppState with the given cache store.
    pub fn new(cache: CacheStore) -> Self {
        Self {
            cache: Arc::new(Mutex::new(cache)),
        }
    }

    /// Creates a new AppState from configuration.
    pub fn from_config(config: &crate::config::Config) -> Self {
        Self::new(CacheStore::new(config.max_bytes))
    }
}

/// Handler for PUT /set
///
/// Stores a key-value pair, evicting least recently used entries when the
/// byte budget is exceeded.
pub async fn set_handler(
    State(state): State<AppState>,
    Json(req): Json<SetRequest>,
) -> Result<Json<SetResponse>> {
    if let Some(error_msg) = req.validate() {
        return Err(CacheError::InvalidRequest(error_msg));
    }

    let bytes = req.charged_bytes();
    let resident = state.cache.lock().await.set(req.key.clone(), req.value);

    Ok(Json(SetResponse::new(req.key, bytes, resident)))
}

/// Handler for GET /get/:key
///
/// Retrieves a value from the cache by key.
pub async fn get_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<GetResponse>> {
    let mut cache = state.cache.lock().await;
    let value = cache.get(&key)?;

    Ok(Json(GetResponse::new(key, value)))
}

/// Handler for GET /stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let cache = state.cache.lock().await;
    Json(StatsResponse::from(cache.stats()))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
