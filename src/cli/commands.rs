//! CLI command implementations
//!
//! Every command loads the optional configuration, reads one payload,
//! decodes it and writes the result to stdout.

use serde_json::{json, Value};

use crate::codec::{to_json_string, CodecResult, DecodeOptions, Decoder};
use crate::sigma::SigmaBoolean;

use super::args::{Cli, Command, CommonArgs};
use super::config::CodecConfig;
use super::errors::{CliError, CliResult};
use super::io::{read_input, write_error, write_response, write_text};

/// Parse arguments and run the selected command
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Decode(args) => decode(&args),
        Command::Normalize(args) => normalize(&args),
        Command::Validate(args) => validate(&args),
    }
}

/// Print the readable rendering of the payload
pub fn decode(args: &CommonArgs) -> CliResult<()> {
    let node = decode_input(args)?;
    write_text(&node.to_string())
}

/// Print the payload re-encoded as canonical compact JSON
pub fn normalize(args: &CommonArgs) -> CliResult<()> {
    let node = decode_input(args)?;
    write_text(&to_json_string(&node))
}

/// Print a JSON status report for the payload.
///
/// An invalid payload prints an error report and still fails the command.
pub fn validate(args: &CommonArgs) -> CliResult<()> {
    let options = load_options(args)?;
    let input = read_input(args.input.as_deref())?;

    match validate_payload(&input, &options) {
        Ok(summary) => write_response(summary),
        Err(e) => {
            write_error(e.code(), &e.to_string())?;
            Err(CliError::from(e))
        }
    }
}

/// Decodes `input` and summarizes the resulting tree
pub fn validate_payload(input: &str, options: &DecodeOptions) -> CodecResult<Value> {
    let node = Decoder::new(*options).decode_str(input)?;
    Ok(summarize(&node))
}

fn summarize(node: &SigmaBoolean) -> Value {
    json!({
        "class": node.class_name(),
        "op": node.op().code(),
        "nodes": node.node_count(),
        "depth": node.depth(),
    })
}

fn load_options(args: &CommonArgs) -> CliResult<DecodeOptions> {
    let config = match &args.config {
        Some(path) => CodecConfig::load(path)?,
        None => {
            let config = CodecConfig::default();
            config.apply_logging()?;
            config
        }
    };
    Ok(config.to_decode_options())
}

fn decode_input(args: &CommonArgs) -> CliResult<SigmaBoolean> {
    let options = load_options(args)?;
    let input = read_input(args.input.as_deref())?;
    Ok(Decoder::new(options).decode_str(&input)?)
}
