//! CLI argument definitions using clap
//!
//! Commands:
//! - sigma-codec decode [--config <path>] [--input <path>]
//! - sigma-codec normalize [--config <path>] [--input <path>]
//! - sigma-codec validate [--config <path>] [--input <path>]

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// sigma-codec - decode, validate and normalize SigmaBoolean JSON
#[derive(Parser, Debug)]
#[command(name = "sigma-codec")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Options shared by every command
#[derive(Args, Debug, Clone, Default)]
pub struct CommonArgs {
    /// Path to codec configuration file (strict defaults when omitted)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Read the payload from this file instead of stdin
    #[arg(long)]
    pub input: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Decode a payload and print its readable rendering
    Decode(CommonArgs),

    /// Decode a payload and print canonical compact JSON
    Normalize(CommonArgs),

    /// Decode a payload and print a JSON status report
    Validate(CommonArgs),
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_decode_with_options() {
        let cli = Cli::try_parse_from([
            "sigma-codec",
            "decode",
            "--config",
            "codec.json",
            "--input",
            "payload.json",
        ])
        .unwrap();

        match cli.command {
            Command::Decode(args) => {
                assert_eq!(args.config, Some(PathBuf::from("codec.json")));
                assert_eq!(args.input, Some(PathBuf::from("payload.json")));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_validate_defaults() {
        let cli = Cli::try_parse_from(["sigma-codec", "validate"]).unwrap();
        match cli.command {
            Command::Validate(args) => {
                assert!(args.config.is_none());
                assert!(args.input.is_none());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_unknown_command_rejected() {
        assert!(Cli::try_parse_from(["sigma-codec", "explain"]).is_err());
    }
}
