//! Codec Round-Trip Tests
//!
//! - decode(encode(T)) == T for every valid tree
//! - Operand order survives the wire
//! - Node API payloads decode to the expected trees

mod common;

use common::{arb_sigma, dlog, H1, H2};
use proptest::prelude::*;
use serde_json::json;
use sigma_codec::codec::{self, DecodeOptions};
use sigma_codec::sigma::{AndPredicate, SigmaBoolean};

// =============================================================================
// Property Tests
// =============================================================================

proptest! {
    /// Every generated tree survives encode then strict decode.
    #[test]
    fn prop_round_trip_strict(tree in arb_sigma()) {
        let value = codec::encode(&tree);
        let back = codec::decode(&value, &DecodeOptions::strict()).unwrap();
        prop_assert_eq!(back, tree);
    }

    /// Text form round-trips as well.
    #[test]
    fn prop_round_trip_text(tree in arb_sigma()) {
        let text = codec::to_json_string(&tree);
        let back = codec::from_json_str(&text, &DecodeOptions::permissive()).unwrap();
        prop_assert_eq!(back, tree);
    }

    /// Re-encoding a decoded payload reproduces the same JSON.
    #[test]
    fn prop_encoding_is_canonical(tree in arb_sigma()) {
        let first = codec::encode(&tree);
        let decoded = codec::decode(&first, &DecodeOptions::strict()).unwrap();
        prop_assert_eq!(codec::encode(&decoded), first);
    }
}

// =============================================================================
// Conjunction Tests
// =============================================================================

/// An AND with two leaves round-trips and keeps operand order.
#[test]
fn test_and_predicate_round_trip_keeps_order() {
    let tree: SigmaBoolean = AndPredicate::builder().arg(dlog(H2)).arg(dlog(H1)).build().into();

    let value = codec::encode(&tree);
    assert_eq!(value["args"][0]["h"], H2);
    assert_eq!(value["args"][1]["h"], H1);

    let back = codec::decode(&value, &DecodeOptions::strict()).unwrap();
    assert_eq!(back, tree);
}

/// An empty AND round-trips only when empty args are allowed.
#[test]
fn test_empty_and_round_trip_needs_permissive() {
    let tree = SigmaBoolean::and(Vec::new());
    let value = codec::encode(&tree);

    assert!(codec::decode(&value, &DecodeOptions::strict()).is_err());
    assert_eq!(
        codec::decode(&value, &DecodeOptions::permissive()).unwrap(),
        tree
    );
}

// =============================================================================
// Node API Payload Tests
// =============================================================================

/// A 2-of-3 multisig as returned by the node decodes into the expected tree.
#[test]
fn test_node_multisig_payload() {
    let payload = json!({
        "op": -104,
        "k": 2,
        "args": [
            { "op": -51, "h": H1 },
            { "op": -51, "h": H2 },
            { "op": -50, "g": H1, "h": H2, "u": H1, "v": H2 }
        ]
    });

    let tree = codec::decode(&payload, &DecodeOptions::strict()).unwrap();
    assert_eq!(tree.node_count(), 4);
    assert_eq!(tree.depth(), 2);
    assert_eq!(codec::encode(&tree), payload);
}

/// Nested composites decode recursively through the same dispatch.
#[test]
fn test_nested_composites() {
    let payload = json!({
        "op": -106,
        "args": [
            { "op": -105, "args": [{ "op": -51, "h": H1 }, { "op": 0, "condition": false }] },
            { "op": -17, "arg": { "op": -51, "h": H2 } }
        ]
    });

    let tree = codec::decode(&payload, &DecodeOptions::strict()).unwrap();
    let expected = SigmaBoolean::and(vec![
        SigmaBoolean::or(vec![dlog(H1), SigmaBoolean::trivial(false)]),
        SigmaBoolean::not(dlog(H2)),
    ]);
    assert_eq!(tree, expected);
}

/// serde entry points agree with the codec functions.
#[test]
fn test_serde_matches_codec() {
    let tree = SigmaBoolean::or(vec![dlog(H1), SigmaBoolean::trivial(true)]);

    let via_serde = serde_json::to_value(&tree).unwrap();
    assert_eq!(via_serde, codec::encode(&tree));

    let back: SigmaBoolean = serde_json::from_value(via_serde).unwrap();
    assert_eq!(back, tree);
}
