//! API Handlers
//!
//! HTTP request handlers for each revalidation service endpoint.

use std::sync::Arc;
use tokio::sync::RwLock;

use axum::{
    extract::{Path, State},
    http::header,
    response::{AppendHeaders, IntoResponse},
    Json,
};
use tracing::debug;

use crate::error::{ExpiryError, Result};
use crate::expiry::{expire_all, StaleTagRegistry, TagExpiry};
use crate::models::{
    ExpireRequest, ExpireResponse, HealthResponse, RevalidateResponse, StatsResponse,
    TagStatusResponse,
};

/// Application state shared across all handlers.
///
/// Contains the stale-tag registry wrapped in Arc<RwLock<>> for thread-safe access.
#[derive(Clone)]
pub struct AppState {
    /// Thread-safe stale-tag registry
    pub registry: Arc<RwLock<StaleTagRegistry>>,
}

impl AppState {
    /// Creates a new AppState with the given registry.
    pub fn new(registry: StaleTagRegistry) -> Self {
        Self {
            registry: Arc::new(RwLock::new(registry)),
        }
    }

    /// Creates a new AppState with an empty registry.
    pub fn from_config(_config: &crate::config::Config) -> Self {
        Self::new(StaleTagRegistry::new())
    }
}

/// Handler for GET /api/revalidate-alot
///
/// Expires every revalidation tag, sequentially and in ascending order, then
/// acknowledges with `{"done": true}`. The request carries no parameters.
///
/// The response is marked `Cache-Control: no-store` so the sweep runs on
/// every call; nothing may cache the acknowledgement.
pub async fn revalidate_alot_handler(
    State(state): State<AppState>,
) -> Result<impl IntoResponse> {
    // One write-lock acquisition covers the whole sweep; the 130 expirations
    // never interleave with other writers
    let mut registry = state.registry.write().await;
    let expired = expire_all(&mut *registry)?;
    debug!("revalidation sweep expired {} tags", expired);

    Ok((
        AppendHeaders([(header::CACHE_CONTROL, "no-store")]),
        Json(RevalidateResponse::done()),
    ))
}

/// Handler for POST /expire
///
/// Expires a single tag supplied in the request body.
pub async fn expire_handler(
    State(state): State<AppState>,
    Json(req): Json<ExpireRequest>,
) -> Result<Json<ExpireResponse>> {
    // Validate request
    if let Some(error_msg) = req.validate() {
        return Err(ExpiryError::InvalidTag(error_msg));
    }

    // Acquire write lock and expire the tag
    let mut registry = state.registry.write().await;
    registry.expire_tag(&req.tag)?;

    Ok(Json(ExpireResponse::new(req.tag)))
}

/// Handler for GET /tags/:tag
///
/// Returns the stale record for a tag, or 404 if it has never been expired.
pub async fn tag_status_handler(
    State(state): State<AppState>,
    Path(tag): Path<String>,
) -> Result<Json<TagStatusResponse>> {
    // Read lock is enough for lookups
    let registry = state.registry.read().await;
    let record = registry.lookup(&tag)?;

    Ok(Json(TagStatusResponse::new(tag.as_str(), record)))
}

/// Handler for GET /stats
///
/// Returns current expiration statistics.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    // Acquire read lock for stats
    let registry = state.registry.read().await;
    let stats = registry.stats();

    Json(StatsResponse::new(
        stats.expirations,
        stats.pruned,
        stats.tracked_tags,
    ))
}

/// Handler for GET /health
///
/// Returns health status of the server.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
