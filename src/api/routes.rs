//! API Routes
//!
//! Configures the Axum router with all revalidation service endpoints.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    expire_handler, health_handler, revalidate_alot_handler, stats_handler, tag_status_handler,
    AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /api/revalidate-alot` - Expire the full batch of revalidation tags
/// - `POST /expire` - Expire a single tag
/// - `GET /tags/:tag` - Stale status of a tag
/// - `GET /stats` - Expiration statistics
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - CORS: Allows any origin (configurable for production)
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    // Configure CORS middleware
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build router with all endpoints
    Router::new()
        .route("/api/revalidate-alot", get(revalidate_alot_handler))
        .route("/expire", post(expire_handler))
        .route("/tags/:tag", get(tag_status_handler))
        .route("/stats", get(stats_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
