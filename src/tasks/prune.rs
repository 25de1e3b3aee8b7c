//! Retention Prune Task
//!
//! Background task that periodically drops stale-tag records past retention.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::expiry::StaleTagRegistry;

/// Spawns a background task that periodically prunes aged stale-tag records.
///
/// The task runs in an infinite loop, sleeping for the specified interval
/// between prune runs. It acquires a write lock on the registry to remove
/// records whose expiration time is past the retention window.
///
/// # Arguments
/// * `registry` - Arc<RwLock<StaleTagRegistry>> shared reference to the registry
/// * `prune_interval_secs` - Interval in seconds between prune runs
/// * `retention_secs` - How long a stale record is retained before pruning
///
/// # Returns
/// A JoinHandle for the spawned task, which can be used to abort the task
/// during graceful shutdown.
///
/// # Example
/// ```ignore
/// let registry = Arc::new(RwLock::new(StaleTagRegistry::new()));
/// let prune_handle = spawn_prune_task(registry.clone(), 60, 3600);
/// // Later, during shutdown:
/// prune_handle.abort();
/// ```
pub fn spawn_prune_task(
    registry: Arc<RwLock<StaleTagRegistry>>,
    prune_interval_secs: u64,
    retention_secs: u64,
) -> JoinHandle<()> {
    let interval = Duration::from_secs(prune_interval_secs);

    tokio::spawn(async move {
        info!(
            "Starting retention prune task with interval of {} seconds, retention of {} seconds",
            prune_interval_secs, retention_secs
        );

        loop {
            // Sleep for the configured interval
            tokio::time::sleep(interval).await;

            // Acquire write lock and prune aged records
            let removed = {
                let mut registry_guard = registry.write().await;
                registry_guard.prune_older_than(retention_secs)
            };

            // Log prune statistics
            if removed > 0 {
                info!("Retention prune: removed {} stale-tag records", removed);
            } else {
                debug!("Retention prune: no records past retention");
            }
        }
    })
}
