//! CLI command implementations
//!
//! Commands are thin: they load a definition, hand it to the engine, and
//! print. All rewriting semantics live in the engine.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use crate::config::{ConfigError, SystemConfig};
use crate::engine::Lsystem;
use crate::random::{RollSource, SeededRolls};

use super::args::Command;
use super::errors::{CliError, CliResult};

/// Dispatch a parsed command.
pub fn run_command(command: Command) -> CliResult<()> {
    match command {
        Command::Init { config } => init(&config),
        Command::Expand {
            config,
            depth,
            seed,
            verbose,
        } => expand(&config, depth, seed, verbose),
        Command::Walk {
            config,
            depth,
            seed,
        } => walk(&config, depth, seed),
    }
}

/// Write the sample definition, refusing to overwrite an existing file.
pub fn init(path: &Path) -> CliResult<()> {
    if path.exists() {
        return Err(CliError::AlreadyInitialized(path.to_path_buf()));
    }
    let sample = SystemConfig::sample();
    let json = serde_json::to_string_pretty(&sample).map_err(ConfigError::from)?;
    fs::write(path, json + "\n")?;
    println!("Wrote sample definition to {}", path.display());
    Ok(())
}

/// Load a definition, run its generations, print the final state to stdout.
pub fn expand(path: &Path, depth: Option<u32>, seed: Option<u64>, verbose: bool) -> CliResult<()> {
    let (mut sys, configured_depth) = build_engine(path, seed)?;
    sys.run_generations(depth.unwrap_or(configured_depth), verbose);
    println!("{}", sys.state());
    Ok(())
}

/// Load, expand, then drive the cursor to exhaustion one symbol per line.
///
/// This is the pull interface a renderer would consume; printing stands in
/// for interpreting each symbol as a drawing instruction.
pub fn walk(path: &Path, depth: Option<u32>, seed: Option<u64>) -> CliResult<()> {
    let (mut sys, configured_depth) = build_engine(path, seed)?;
    sys.run_generations(depth.unwrap_or(configured_depth), false);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut result = Ok(());
    while !sys.is_exhausted() {
        sys.step(|symbol| result = writeln!(out, "{}", symbol));
        result?;
        result = Ok(());
    }
    out.flush()?;
    Ok(())
}

/// Load and validate a definition, returning an engine plus the definition's
/// pass count. A `--seed` argument overrides the file's seed; with neither,
/// draws come from OS entropy.
fn build_engine(path: &Path, seed: Option<u64>) -> CliResult<(Lsystem, u32)> {
    let config = SystemConfig::load(path)?;
    let rolls: Box<dyn RollSource> = match seed.or(config.seed) {
        Some(seed) => Box::new(SeededRolls::new(seed)),
        None => Box::new(SeededRolls::from_entropy()),
    };
    let sys = Lsystem::new(
        config.alphabet.clone(),
        config.axiom.clone(),
        config.rule_table(),
        rolls,
    );
    Ok((sys, config.depth))
}
