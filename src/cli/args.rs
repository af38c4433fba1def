//! CLI argument definitions using clap
//!
//! Commands:
//! - lsys init --config <path>
//! - lsys expand --config <path> [--depth n] [--seed s] [--verbose]
//! - lsys walk --config <path> [--depth n] [--seed s]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// lsys - A deterministic, seedable L-system rewriting engine
#[derive(Parser, Debug)]
#[command(name = "lsys")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write a sample system definition
    Init {
        /// Path to the definition file
        #[arg(long, default_value = "./lsys.json")]
        config: PathBuf,
    },

    /// Run the configured generations and print the final state
    Expand {
        /// Path to the definition file
        #[arg(long, default_value = "./lsys.json")]
        config: PathBuf,

        /// Override the definition's pass count
        #[arg(long)]
        depth: Option<u32>,

        /// Override the definition's draw seed
        #[arg(long)]
        seed: Option<u64>,

        /// Emit a trace of every pass to stderr
        #[arg(long)]
        verbose: bool,
    },

    /// Expand, then print one symbol per line via the cursor
    Walk {
        /// Path to the definition file
        #[arg(long, default_value = "./lsys.json")]
        config: PathBuf,

        /// Override the definition's pass count
        #[arg(long)]
        depth: Option<u32>,

        /// Override the definition's draw seed
        #[arg(long)]
        seed: Option<u64>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
