//! Property-Based Tests for Expiry Module
//!
//! Uses proptest to verify correctness properties of the stale-tag registry
//! and the bulk revalidation sweep.

use proptest::prelude::*;
use std::collections::HashSet;

use crate::expiry::{expire_all, StaleTagRegistry, TagExpiry};

// == Strategies ==
/// Generates valid tags (non-empty, within length limit)
fn valid_tag_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_-]{1,64}".prop_map(|s| s)
}

/// Generates a sequence of registry operations for testing
#[derive(Debug, Clone)]
enum RegistryOp {
    Expire { tag: String },
    Lookup { tag: String },
    Prune,
}

fn registry_op_strategy() -> impl Strategy<Value = RegistryOp> {
    prop_oneof![
        valid_tag_strategy().prop_map(|tag| RegistryOp::Expire { tag }),
        valid_tag_strategy().prop_map(|tag| RegistryOp::Lookup { tag }),
        Just(RegistryOp::Prune),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // Every expired tag is stale immediately afterwards, and the registry
    // tracks exactly the distinct tags expired.
    #[test]
    fn prop_expired_tags_are_stale(tags in prop::collection::vec(valid_tag_strategy(), 1..50)) {
        let mut registry = StaleTagRegistry::new();

        for tag in &tags {
            registry.expire_tag(tag).unwrap();
            prop_assert!(registry.is_stale(tag), "Tag should be stale after expiry");
        }

        let distinct: HashSet<&String> = tags.iter().collect();
        prop_assert_eq!(registry.len(), distinct.len(), "Tracked tags mismatch");
    }

    // Sequence numbers strictly increase in call order, so later expirations
    // always carry a higher seq than earlier ones.
    #[test]
    fn prop_seq_strictly_increasing(tags in prop::collection::vec(valid_tag_strategy(), 2..50)) {
        let mut registry = StaleTagRegistry::new();

        let mut last_seq = None;
        for tag in &tags {
            registry.expire_tag(tag).unwrap();
            let seq = registry.lookup(tag).unwrap().seq;
            if let Some(prev) = last_seq {
                prop_assert!(seq > prev, "Seq must strictly increase");
            }
            last_seq = Some(seq);
        }
    }

    // The expiration counter equals the number of accepted expire calls,
    // regardless of how operations interleave.
    #[test]
    fn prop_statistics_accuracy(ops in prop::collection::vec(registry_op_strategy(), 1..50)) {
        let mut registry = StaleTagRegistry::new();
        let mut expected_expirations: u64 = 0;
        let mut expected_pruned: u64 = 0;

        for op in ops {
            match op {
                RegistryOp::Expire { tag } => {
                    registry.expire_tag(&tag).unwrap();
                    expected_expirations += 1;
                }
                RegistryOp::Lookup { tag } => {
                    let _ = registry.lookup(&tag);
                }
                RegistryOp::Prune => {
                    // Long retention: nothing created in this test can age out
                    expected_pruned += registry.prune_older_than(3600) as u64;
                }
            }
        }

        let stats = registry.stats();
        prop_assert_eq!(stats.expirations, expected_expirations, "Expirations mismatch");
        prop_assert_eq!(stats.pruned, expected_pruned, "Pruned mismatch");
        prop_assert_eq!(stats.tracked_tags, registry.len(), "Tracked tags mismatch");
    }

    // Pruning with zero retention always empties the registry.
    #[test]
    fn prop_zero_retention_prunes_all(tags in prop::collection::vec(valid_tag_strategy(), 1..50)) {
        let mut registry = StaleTagRegistry::new();

        for tag in &tags {
            registry.expire_tag(tag).unwrap();
        }
        let tracked = registry.len();

        let removed = registry.prune_older_than(0);

        prop_assert_eq!(removed, tracked, "Prune should remove every record");
        prop_assert!(registry.is_empty(), "Registry should be empty after prune");
    }

    // A tag that was never expired is never reported stale.
    #[test]
    fn prop_unknown_tags_not_stale(
        expired in prop::collection::vec(valid_tag_strategy(), 0..20),
        probe in valid_tag_strategy(),
    ) {
        let mut registry = StaleTagRegistry::new();

        for tag in &expired {
            registry.expire_tag(tag).unwrap();
        }

        if !expired.contains(&probe) {
            prop_assert!(!registry.is_stale(&probe), "Unexpired tag reported stale");
            prop_assert!(registry.lookup(&probe).is_err(), "Lookup should fail");
        }
    }
}

// The bulk sweep against a real registry: 130 distinct tags, seqs ascending
// with the tag index.
#[test]
fn test_expire_all_against_registry() {
    let mut registry = StaleTagRegistry::new();

    let expired = expire_all(&mut registry).unwrap();

    assert_eq!(expired, 130);
    assert_eq!(registry.len(), 130);

    for i in 0..130 {
        let tag = format!("thankyounext-{}", i);
        let record = registry.lookup(&tag).unwrap();
        assert_eq!(record.seq, i as u64, "Seq should follow sweep order");
    }
}
