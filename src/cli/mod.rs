//! CLI module for cinedb
//!
//! Provides the command-line interface:
//! - serve: boot the HTTP server and run until the process exits

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::run_command;
pub use errors::{CliError, CliErrorCode, CliResult};

/// Parse arguments and dispatch to the selected command
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}
