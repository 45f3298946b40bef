//! serde integration so SigmaBoolean nests inside other serde models
//!
//! Deserialization goes through the strict decoder; callers needing other
//! options decode a `serde_json::Value` field explicitly.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use super::decoder::Decoder;
use super::encoder::encode_node;
use super::options::DecodeOptions;
use crate::sigma::SigmaBoolean;

impl Serialize for SigmaBoolean {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        encode_node(self).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for SigmaBoolean {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Decoder::new(DecodeOptions::strict())
            .decode(&value)
            .map_err(D::Error::custom)
    }
}
