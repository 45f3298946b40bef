//! Equality Invariant Tests
//!
//! - Equality is an equivalence relation
//! - Cross-variant comparisons are never equal
//! - Equal values hash equally
//! - Operand order is significant
//! - Appending preserves order; default construction is empty

mod common;

use common::{arb_sigma, dlog, H1, H2};
use proptest::prelude::*;
use sigma_codec::sigma::{AndPredicate, OrPredicate, SigmaBoolean, ThresholdPredicate};
use std::collections::hash_map::DefaultHasher;
use std::collections::{HashMap, HashSet};
use std::hash::{Hash, Hasher};

// =============================================================================
// Helper Functions
// =============================================================================

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

// =============================================================================
// Property Tests
// =============================================================================

proptest! {
    /// a == a, and a clone is equal with the same hash.
    #[test]
    fn prop_reflexive_and_clone_consistent(a in arb_sigma()) {
        prop_assert_eq!(&a, &a);
        let b = a.clone();
        prop_assert_eq!(&a, &b);
        prop_assert_eq!(hash_of(&a), hash_of(&b));
    }

    /// a == b implies b == a and equal hashes.
    #[test]
    fn prop_symmetric_and_hash_consistent(a in arb_sigma(), b in arb_sigma()) {
        prop_assert_eq!(a == b, b == a);
        if a == b {
            prop_assert_eq!(hash_of(&a), hash_of(&b));
        }
    }

    /// a == b and b == c implies a == c.
    #[test]
    fn prop_transitive(a in arb_sigma()) {
        let b = a.clone();
        let c = b.clone();
        prop_assert!(a == b && b == c);
        prop_assert_eq!(a, c);
    }

    /// Wrapping the same operands in different composites never compares equal.
    #[test]
    fn prop_cross_variant_unequal(args in prop::collection::vec(arb_sigma(), 0..3)) {
        let and = SigmaBoolean::and(args.clone());
        let or = SigmaBoolean::or(args.clone());
        let threshold = SigmaBoolean::threshold(0, args);
        prop_assert_ne!(&and, &or);
        prop_assert_ne!(&and, &threshold);
        prop_assert_ne!(&or, &threshold);
    }
}

// =============================================================================
// Order and Append Tests
// =============================================================================

/// Same operands in a different order are different conjunctions.
#[test]
fn test_order_sensitivity() {
    let a = SigmaBoolean::and(vec![dlog(H1), dlog(H2)]);
    let b = SigmaBoolean::and(vec![dlog(H2), dlog(H1)]);
    assert_ne!(a, b);
}

/// with_arg(x) then with_arg(y) yields [x, y].
#[test]
fn test_append_semantics() {
    let and = AndPredicate::default().with_arg(dlog(H1)).with_arg(dlog(H2));
    assert_eq!(and.args(), &[dlog(H1), dlog(H2)]);

    let or = OrPredicate::default().with_arg(dlog(H2)).with_arg(dlog(H1));
    assert_eq!(or.args(), &[dlog(H2), dlog(H1)]);
}

/// Appending leaves the original value untouched.
#[test]
fn test_append_does_not_mutate_shared_value() {
    let base = AndPredicate::new(vec![dlog(H1)]);
    let extended = base.clone().with_arg(dlog(H2));
    assert_eq!(base.args().len(), 1);
    assert_eq!(extended.args().len(), 2);
    assert_ne!(base, extended);
}

/// Fresh predicates have empty operand lists.
#[test]
fn test_default_construction() {
    assert!(AndPredicate::default().args().is_empty());
    assert!(OrPredicate::default().args().is_empty());
    assert!(ThresholdPredicate::default().args().is_empty());
    assert!(AndPredicate::builder().build().args().is_empty());
}

// =============================================================================
// Collection Tests
// =============================================================================

/// Trees work as set members and map keys.
#[test]
fn test_usable_as_keys() {
    let a = SigmaBoolean::and(vec![dlog(H1), dlog(H2)]);
    let b = SigmaBoolean::and(vec![dlog(H1), dlog(H2)]);
    let c = SigmaBoolean::and(vec![dlog(H2), dlog(H1)]);

    let set: HashSet<SigmaBoolean> = [a.clone(), b, c.clone()].into_iter().collect();
    assert_eq!(set.len(), 2);

    let mut labels = HashMap::new();
    labels.insert(a.clone(), "first");
    labels.insert(c, "second");
    assert_eq!(labels[&a], "first");
}
