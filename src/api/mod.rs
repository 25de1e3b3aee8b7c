//! API Module
//!
//! HTTP handlers and routing for the revalidation service REST API.
//!
//! # Endpoints
//! - `GET /api/revalidate-alot` - Expire the full batch of revalidation tags
//! - `POST /expire` - Expire a single tag
//! - `GET /tags/:tag` - Stale status of a tag
//! - `GET /stats` - Expiration statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
