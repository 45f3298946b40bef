//! SigmaBoolean wire codec
//!
//! Converts between [`SigmaBoolean`](crate::sigma::SigmaBoolean) trees and
//! the node API JSON representation.
//!
//! # Design Principles
//!
//! - Variant dispatch on the integer `op` discriminator
//! - Recursive: children decode through the same dispatch rule
//! - Lossless round trip for every valid tree
//! - Explicit validation options, no silent leniency
//! - Descriptive, path-qualified errors; no partial decoding

mod decoder;
mod encoder;
mod errors;
mod options;
mod serde_impl;

pub use decoder::Decoder;
pub use encoder::{encode, to_json_string};
pub use errors::{CodecError, CodecResult};
pub use options::{DecodeOptions, EmptyArgsPolicy, UnknownFieldPolicy, DEFAULT_MAX_DEPTH};

use serde_json::Value;

use crate::sigma::SigmaBoolean;

/// Decodes a parsed JSON value with the given options.
pub fn decode(value: &Value, options: &DecodeOptions) -> CodecResult<SigmaBoolean> {
    Decoder::new(*options).decode(value)
}

/// Parses and decodes JSON text with the given options.
pub fn from_json_str(input: &str, options: &DecodeOptions) -> CodecResult<SigmaBoolean> {
    Decoder::new(*options).decode_str(input)
}
