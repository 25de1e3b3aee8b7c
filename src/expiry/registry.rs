//! Stale-Tag Registry Module
//!
//! Default backing store for the tag-expiration seam. Records which tags have
//! been marked stale and when; holds no cached entries or values itself.

use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};

use crate::error::{ExpiryError, Result};
use crate::expiry::{ExpiryStats, TagExpiry, MAX_TAG_LENGTH};

// == Stale Record ==
/// Staleness mark for a single tag.
#[derive(Debug, Clone)]
pub struct StaleRecord {
    /// When the tag was last expired
    pub expired_at: DateTime<Utc>,
    /// Position of the expiration in the registry's global call order
    pub seq: u64,
}

// == Stale Tag Registry ==
/// In-memory registry of expired tags.
///
/// Re-expiring a tag overwrites its record with a fresh timestamp and
/// sequence number; the registry never holds more than one record per tag.
#[derive(Debug, Default)]
pub struct StaleTagRegistry {
    /// Stale record per tag
    records: HashMap<String, StaleRecord>,
    /// Next sequence number to assign
    next_seq: u64,
    /// Activity counters
    stats: ExpiryStats,
}

impl StaleTagRegistry {
    // == Constructor ==
    /// Creates a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    // == Lookup ==
    /// Returns the stale record for a tag.
    ///
    /// # Arguments
    /// * `tag` - The tag to look up
    pub fn lookup(&self, tag: &str) -> Result<&StaleRecord> {
        self.records
            .get(tag)
            .ok_or_else(|| ExpiryError::UnknownTag(tag.to_string()))
    }

    // == Is Stale ==
    /// Returns true if the tag currently has a stale record.
    pub fn is_stale(&self, tag: &str) -> bool {
        self.records.contains_key(tag)
    }

    // == Prune ==
    /// Removes stale records older than the retention window.
    ///
    /// A record is pruned when its expiration time is at or before
    /// `now - retention_secs`.
    ///
    /// # Returns
    /// The number of records removed.
    pub fn prune_older_than(&mut self, retention_secs: u64) -> usize {
        let cutoff = Utc::now() - Duration::seconds(retention_secs as i64);

        let before = self.records.len();
        self.records.retain(|_, record| record.expired_at > cutoff);
        let removed = before - self.records.len();

        self.stats.record_pruned(removed as u64);
        self.stats.set_tracked_tags(self.records.len());
        removed
    }

    // == Stats ==
    /// Returns current expiration statistics.
    pub fn stats(&self) -> ExpiryStats {
        let mut stats = self.stats.clone();
        stats.set_tracked_tags(self.records.len());
        stats
    }

    // == Length ==
    /// Returns the number of tags currently tracked.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    // == Is Empty ==
    /// Returns true if no tags are tracked.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

// == Tag Expiry Implementation ==
impl TagExpiry for StaleTagRegistry {
    /// Marks a tag stale, recording the time and call order.
    fn expire_tag(&mut self, tag: &str) -> Result<()> {
        if tag.is_empty() {
            return Err(ExpiryError::InvalidTag("Tag cannot be empty".to_string()));
        }
        if tag.len() > MAX_TAG_LENGTH {
            return Err(ExpiryError::InvalidTag(format!(
                "Tag exceeds maximum length of {} bytes",
                MAX_TAG_LENGTH
            )));
        }

        let record = StaleRecord {
            expired_at: Utc::now(),
            seq: self.next_seq,
        };
        self.next_seq += 1;

        self.records.insert(tag.to_string(), record);

        self.stats.record_expiration();
        self.stats.set_tracked_tags(self.records.len());

        Ok(())
    }
}
