//! Codec configuration file
//!
//! JSON file, every key optional:
//!
//! ```json
//! {
//!   "empty_args": "reject",
//!   "unknown_fields": "reject",
//!   "validate_threshold": true,
//!   "max_depth": 128,
//!   "log_level": "warn"
//! }
//! ```
//!
//! Omitted keys take the strict defaults.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::codec::{DecodeOptions, EmptyArgsPolicy, UnknownFieldPolicy, DEFAULT_MAX_DEPTH};
use crate::observability::{Event, Logger, Severity};

use super::errors::{CliError, CliResult};

/// Configuration file structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CodecConfig {
    /// Treatment of missing or empty `args` (default: "reject")
    #[serde(default = "default_empty_args")]
    pub empty_args: EmptyArgsPolicy,

    /// Treatment of undeclared fields (default: "reject")
    #[serde(default = "default_unknown_fields")]
    pub unknown_fields: UnknownFieldPolicy,

    /// Reject thresholds with `k` above the operand count (default: true)
    #[serde(default = "default_validate_threshold")]
    pub validate_threshold: bool,

    /// Maximum nesting depth (default: 128)
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,

    /// Minimum log severity (default: "warn")
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_empty_args() -> EmptyArgsPolicy {
    EmptyArgsPolicy::Reject
}
fn default_unknown_fields() -> UnknownFieldPolicy {
    UnknownFieldPolicy::Reject
}
fn default_validate_threshold() -> bool {
    true
}
fn default_max_depth() -> usize {
    DEFAULT_MAX_DEPTH
}
fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            empty_args: default_empty_args(),
            unknown_fields: default_unknown_fields(),
            validate_threshold: default_validate_threshold(),
            max_depth: default_max_depth(),
            log_level: default_log_level(),
        }
    }
}

impl CodecConfig {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

        let config: CodecConfig = serde_json::from_str(&content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;
        config.apply_logging()?;
        config.log_loaded(path, &mut io::stderr())?;

        Ok(config)
    }

    /// Announces the file at this configuration's own `log_level`
    fn log_loaded<W: Write>(&self, path: &Path, writer: &mut W) -> CliResult<()> {
        let shown = path.display().to_string();
        Logger::log_above(
            self.log_severity()?,
            Severity::Info,
            Event::ConfigLoaded.as_str(),
            &[("path", shown.as_str())],
            writer,
        );
        Ok(())
    }

    fn validate(&self) -> CliResult<()> {
        if self.max_depth == 0 {
            return Err(CliError::config_error("max_depth must be > 0"));
        }

        self.log_severity()?;

        Ok(())
    }

    /// Parsed `log_level`
    pub fn log_severity(&self) -> CliResult<Severity> {
        Severity::parse(&self.log_level).ok_or_else(|| {
            CliError::config_error(format!(
                "Invalid log_level: '{}'. Must be one of trace, info, warn, error, fatal.",
                self.log_level
            ))
        })
    }

    /// Installs `log_level` as the process-wide logging threshold
    pub fn apply_logging(&self) -> CliResult<()> {
        Logger::set_min_severity(self.log_severity()?);
        Ok(())
    }

    /// Decoder options described by this configuration
    pub fn to_decode_options(&self) -> DecodeOptions {
        DecodeOptions::strict()
            .with_empty_args(self.empty_args)
            .with_unknown_fields(self.unknown_fields)
            .with_validate_threshold(self.validate_threshold)
            .with_max_depth(self.max_depth)
    }
}
