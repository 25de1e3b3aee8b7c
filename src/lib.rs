//! Revalidator - A lightweight cache-tag revalidation service
//!
//! Exposes an HTTP route that expires a fixed batch of cache tags and
//! records which tags have been marked stale.

pub mod api;
pub mod config;
pub mod error;
pub mod expiry;
pub mod models;
pub mod tasks;

pub use api::AppState;
pub use config::Config;
pub use tasks::spawn_prune_task;
