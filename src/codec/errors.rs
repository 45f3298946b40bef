//! Codec error types
//!
//! Error codes:
//! - SIGMA_SCHEMA_VIOLATION
//! - SIGMA_MISSING_DISCRIMINATOR
//! - SIGMA_UNKNOWN_VARIANT
//! - SIGMA_DEPTH_EXCEEDED
//! - SIGMA_MALFORMED_JSON
//!
//! Every decode failure aborts the whole decode. Paths use `$` for the root
//! and `.field` / `[index]` segments below it.

use thiserror::Error;

/// Result type for codec operations
pub type CodecResult<T> = Result<T, CodecError>;

/// Codec errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// A field is missing, null, of the wrong shape, or otherwise rejected
    #[error("schema violation at '{path}': expected {expected}, got {actual}")]
    SchemaViolation {
        path: String,
        expected: String,
        actual: String,
    },

    /// An object carries no `op` field
    #[error("missing discriminator 'op' at '{path}'")]
    MissingDiscriminator { path: String },

    /// The `op` value names no known variant
    #[error("unknown SigmaBoolean variant op={op} at '{path}'")]
    UnknownVariant { path: String, op: i64 },

    /// Nesting is deeper than the configured limit
    #[error("nesting depth exceeds {max} at '{path}'")]
    DepthExceeded { path: String, max: usize },

    /// Text input is not valid JSON
    #[error("malformed JSON: {0}")]
    MalformedJson(String),
}

impl CodecError {
    /// Field present with an unexpected JSON type or value
    pub fn type_mismatch(
        path: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        CodecError::SchemaViolation {
            path: path.into(),
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    pub fn missing_field(path: impl Into<String>) -> Self {
        Self::type_mismatch(path, "field to be present", "missing")
    }

    pub fn null_value(path: impl Into<String>) -> Self {
        Self::type_mismatch(path, "non-null value", "null")
    }

    pub fn extra_field(path: impl Into<String>) -> Self {
        Self::type_mismatch(path, "no undeclared fields", "extra field present")
    }

    /// Returns the stable error code
    pub fn code(&self) -> &'static str {
        match self {
            CodecError::SchemaViolation { .. } => "SIGMA_SCHEMA_VIOLATION",
            CodecError::MissingDiscriminator { .. } => "SIGMA_MISSING_DISCRIMINATOR",
            CodecError::UnknownVariant { .. } => "SIGMA_UNKNOWN_VARIANT",
            CodecError::DepthExceeded { .. } => "SIGMA_DEPTH_EXCEEDED",
            CodecError::MalformedJson(_) => "SIGMA_MALFORMED_JSON",
        }
    }

    /// Returns the path of the offending node, if the error has one
    pub fn path(&self) -> Option<&str> {
        match self {
            CodecError::SchemaViolation { path, .. }
            | CodecError::MissingDiscriminator { path }
            | CodecError::UnknownVariant { path, .. }
            | CodecError::DepthExceeded { path, .. } => Some(path),
            CodecError::MalformedJson(_) => None,
        }
    }
}

impl From<serde_json::Error> for CodecError {
    fn from(e: serde_json::Error) -> Self {
        CodecError::MalformedJson(e.to_string())
    }
}
