//! sigma-codec - A strict codec for Ergo SigmaBoolean proof expressions
//!
//! The `sigma` module holds the closed variant family, `codec` converts it
//! to and from the node API JSON wire format.

pub mod cli;
pub mod codec;
pub mod observability;
pub mod sigma;
