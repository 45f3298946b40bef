//! Shared generators for integration tests

#![allow(dead_code)]

use proptest::prelude::*;
use sigma_codec::sigma::{SigmaBoolean, ThresholdPredicate};

pub const H1: &str = "02a7955281885bf0f0ca4a48678848cad8e2ba6b0d3a2c7abbe8cd68c0e2e3e4e5";
pub const H2: &str = "03b1e1a8f2c6d4e7f80912a3b4c5d6e7f8091a2b3c4d5e6f708192a3b4c5d6e7f8";

pub fn dlog(h: &str) -> SigmaBoolean {
    SigmaBoolean::prove_dlog(h)
}

fn arb_hex() -> impl Strategy<Value = String> {
    "([0-9a-f]{2}){1,33}"
}

fn arb_leaf() -> impl Strategy<Value = SigmaBoolean> {
    prop_oneof![
        any::<bool>().prop_map(SigmaBoolean::trivial),
        arb_hex().prop_map(|h| SigmaBoolean::prove_dlog(h)),
        (arb_hex(), arb_hex(), arb_hex(), arb_hex())
            .prop_map(|(g, h, u, v)| SigmaBoolean::prove_dh_tuple(g, h, u, v)),
    ]
}

/// Trees that satisfy the strict decoder: non-empty args, `k <= args.len()`.
pub fn arb_sigma() -> impl Strategy<Value = SigmaBoolean> {
    arb_leaf().prop_recursive(4, 48, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 1..4).prop_map(SigmaBoolean::and),
            prop::collection::vec(inner.clone(), 1..4).prop_map(SigmaBoolean::or),
            inner.clone().prop_map(SigmaBoolean::not),
            prop::collection::vec(inner, 1..4)
                .prop_flat_map(|args| {
                    let n = args.len() as u8;
                    (0..=n, Just(args))
                })
                .prop_map(|(k, args)| SigmaBoolean::from(ThresholdPredicate::new(k, args))),
        ]
    })
}
