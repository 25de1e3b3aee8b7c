//! Expiry Statistics Module
//!
//! Tracks expiration activity: total expirations, pruned records, tracked tags.

use serde::Serialize;

// == Expiry Stats ==
/// Tracks expiration activity counters.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ExpiryStats {
    /// Total number of expire-tag calls accepted
    pub expirations: u64,
    /// Number of stale-tag records removed by retention pruning
    pub pruned: u64,
    /// Current number of tags with a live stale record
    pub tracked_tags: usize,
}

impl ExpiryStats {
    // == Constructor ==
    /// Creates a new ExpiryStats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Record Expiration ==
    /// Increments the expiration counter.
    pub fn record_expiration(&mut self) {
        self.expirations += 1;
    }

    // == Record Pruned ==
    /// Adds to the pruned-record counter.
    pub fn record_pruned(&mut self, count: u64) {
        self.pruned += count;
    }

    // == Update Tracked Count ==
    /// Updates the tracked-tags count.
    pub fn set_tracked_tags(&mut self, count: usize) {
        self.tracked_tags = count;
    }
}
