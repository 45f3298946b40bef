//! Decode validation options
//!
//! The node API marks `args` as required while the generated models default
//! it to an empty list. Whether an empty operand list is acceptable is left
//! to the caller: there is no `Default` for [`DecodeOptions`], pick a preset
//! or build one field by field.

use serde::{Deserialize, Serialize};

/// Default nesting limit, same as serde_json's parser recursion limit
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// How missing or empty `args` arrays are treated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmptyArgsPolicy {
    /// Missing or empty `args` decode to an empty operand list
    Allow,
    /// Missing or empty `args` are schema violations
    Reject,
}

/// How fields not declared for a variant are treated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnknownFieldPolicy {
    Ignore,
    Reject,
}

/// Options governing how strictly wire payloads are validated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeOptions {
    pub empty_args: EmptyArgsPolicy,
    pub unknown_fields: UnknownFieldPolicy,
    /// Reject thresholds whose `k` exceeds the number of operands
    pub validate_threshold: bool,
    /// Maximum nesting depth; the root node is depth 1
    pub max_depth: usize,
}

impl DecodeOptions {
    /// Every documented schema constraint enforced
    pub fn strict() -> Self {
        Self {
            empty_args: EmptyArgsPolicy::Reject,
            unknown_fields: UnknownFieldPolicy::Reject,
            validate_threshold: true,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Accepts what the generated client models would accept
    pub fn permissive() -> Self {
        Self {
            empty_args: EmptyArgsPolicy::Allow,
            unknown_fields: UnknownFieldPolicy::Ignore,
            validate_threshold: false,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    pub fn with_empty_args(mut self, policy: EmptyArgsPolicy) -> Self {
        self.empty_args = policy;
        self
    }

    pub fn with_unknown_fields(mut self, policy: UnknownFieldPolicy) -> Self {
        self.unknown_fields = policy;
        self
    }

    pub fn with_validate_threshold(mut self, validate: bool) -> Self {
        self.validate_threshold = validate;
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}
