//! CLI module for sigma-codec
//!
//! Provides command-line interface for:
//! - decode: print the readable rendering of a payload
//! - normalize: print canonical compact JSON
//! - validate: print a JSON status report

mod args;
mod commands;
mod config;
mod errors;
mod io;

pub use args::{Cli, Command, CommonArgs};
pub use commands::{decode, normalize, run, run_command, validate, validate_payload};
pub use config::CodecConfig;
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{read_input, write_error, write_json, write_response, write_text};
