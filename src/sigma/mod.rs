//! SigmaBoolean proof-expression model
//!
//! A closed family of boolean proof-expression nodes as exposed by the Ergo
//! node API.
//!
//! # Design Principles
//!
//! - Closed sum type, no open subclassing
//! - Immutable after construction
//! - Structural, order-sensitive equality and hashing
//! - Deterministic debug rendering

mod display;
mod op;
mod types;

pub use op::SigmaOp;
pub use types::{
    AndPredicate, AndPredicateBuilder, NotPredicate, OrPredicate, OrPredicateBuilder,
    ProveDhTuple, ProveDlog, SigmaBoolean, ThresholdPredicate, ThresholdPredicateBuilder,
    TrivialProp,
};
