//! CLI module for lsys
//!
//! Provides the command-line interface:
//! - init: write a sample system definition
//! - expand: run the configured number of generations and print the state
//! - walk: expand, then drive the cursor to exhaustion one symbol per line

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{expand, init, run_command, walk};
pub use errors::{CliError, CliResult};

/// Parse arguments and dispatch to the selected command.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}
