//! CLI module
//!
//! Provides command-line interface for:
//! - validate: check one payload and print the normalized form or report
//! - serve: run the HTTP validation endpoints

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{run_command, serve, validate, validate_payload};
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{parse_payload, read_payload, write_rejection, write_response};

/// Parse arguments and run the selected command
pub fn run() -> CliResult<()> {
    run_command(Cli::parse_args().command)
}
