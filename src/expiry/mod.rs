//! Expiry Module
//!
//! Provides the tag-expiration capability: the `TagExpiry` seam, the bulk
//! revalidation sweep, and the stale-tag registry that backs it.

mod registry;
mod revalidate;
mod stats;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use registry::{StaleRecord, StaleTagRegistry};
pub use revalidate::{expire_all, revalidation_tags, TagExpiry};
pub use stats::ExpiryStats;

// == Public Constants ==
/// Prefix shared by every tag in the bulk revalidation sweep
pub const REVALIDATE_TAG_PREFIX: &str = "thankyounext";

/// Number of tags expired by one bulk revalidation sweep
pub const REVALIDATE_TAG_COUNT: usize = 130;

/// Maximum allowed tag length in bytes
pub const MAX_TAG_LENGTH: usize = 256;
