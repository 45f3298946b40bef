//! sigma-codec CLI entry point
//!
//! Parses arguments and dispatches through `cli::run`. Failures are logged
//! as a COMMAND_FAILED line on stderr and the process exits non-zero.

use sigma_codec::cli;
use sigma_codec::observability::{Event, Logger};

fn main() {
    if let Err(e) = cli::run() {
        Logger::error(
            Event::CommandFailed.as_str(),
            &[("code", e.code_str()), ("message", e.message())],
        );
        std::process::exit(1);
    }
}
