//! Background Tasks Module
//!
//! Contains background tasks that run periodically during server operation.
//!
//! # Tasks
//! - Retention Prune: Drops aged stale-tag records at configured intervals

mod prune;

pub use prune::spawn_prune_task;
