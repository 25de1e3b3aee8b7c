//! Revalidation Sweep Module
//!
//! Defines the tag-expiration seam and the bulk sweep that drives it.

use crate::error::Result;
use crate::expiry::{REVALIDATE_TAG_COUNT, REVALIDATE_TAG_PREFIX};

// == Tag Expiry Trait ==
/// Capability for marking all cache entries associated with a tag as stale.
///
/// The revalidation route only ever talks to this seam; the cache holding the
/// tagged entries lives behind it.
pub trait TagExpiry {
    /// Marks every cache entry carrying `tag` as stale.
    fn expire_tag(&mut self, tag: &str) -> Result<()>;
}

// == Tag Sequence ==
/// Returns the tags expired by one bulk sweep, in the order they are expired.
///
/// Yields `thankyounext-0` through `thankyounext-129`, ascending.
pub fn revalidation_tags() -> impl Iterator<Item = String> {
    (0..REVALIDATE_TAG_COUNT).map(|i| format!("{}-{}", REVALIDATE_TAG_PREFIX, i))
}

// == Bulk Sweep ==
/// Expires every revalidation tag through the given capability.
///
/// Calls are sequential and immediate, one per tag, no batching. The first
/// failure aborts the sweep and propagates.
///
/// # Returns
/// The number of tags expired.
pub fn expire_all(expiry: &mut impl TagExpiry) -> Result<usize> {
    let mut expired = 0;
    for tag in revalidation_tags() {
        expiry.expire_tag(&tag)?;
        expired += 1;
    }
    Ok(expired)
}
