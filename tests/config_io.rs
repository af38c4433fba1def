//! Config I/O Tests
//!
//! Tests for definition files on disk:
//! - init writes a loadable sample and refuses to overwrite
//! - load validates rule keys and weights
//! - a loaded definition drives the engine end to end

use std::fs;

use lsys::cli;
use lsys::config::{ConfigError, SystemConfig};
use lsys::engine::Lsystem;
use lsys::random::FixedRolls;

// =============================================================================
// init Tests
// =============================================================================

/// init writes a sample definition that loads back cleanly.
#[test]
fn test_init_writes_loadable_sample() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("lsys.json");

    cli::init(&path).unwrap();

    let config = SystemConfig::load(&path).unwrap();
    assert_eq!(config, SystemConfig::sample());
    assert_eq!(config.axiom, "F");
    assert_eq!(config.depth, 6);
}

/// init refuses to clobber an existing definition.
#[test]
fn test_init_refuses_overwrite() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("lsys.json");
    fs::write(&path, "{}").unwrap();

    let err = cli::init(&path).unwrap_err();
    assert!(matches!(err, cli::CliError::AlreadyInitialized(_)));

    // Untouched
    assert_eq!(fs::read_to_string(&path).unwrap(), "{}");
}

// =============================================================================
// load Tests
// =============================================================================

/// A missing file surfaces a read error, not a panic.
#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = SystemConfig::load(&dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, ConfigError::Read { .. }));
}

/// Malformed JSON surfaces a parse error.
#[test]
fn test_load_malformed_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.json");
    fs::write(&path, "{ not json").unwrap();

    let err = SystemConfig::load(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

/// A multi-symbol rule key fails validation at load time.
#[test]
fn test_load_rejects_multi_symbol_key() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad_key.json");
    fs::write(&path, r#"{"axiom": "F", "rules": {"FF": "F"}}"#).unwrap();

    let err = SystemConfig::load(&path).unwrap_err();
    assert!(matches!(err, ConfigError::RuleKeyNotSingleSymbol(_)));
}

/// An out-of-range weight fails validation at load time.
#[test]
fn test_load_rejects_bad_weight() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad_weight.json");
    fs::write(
        &path,
        r#"{"axiom": "F", "rules": {"F": [{"weight": 150.0, "replacement": "FF"}]}}"#,
    )
    .unwrap();

    let err = SystemConfig::load(&path).unwrap_err();
    assert!(matches!(err, ConfigError::WeightOutOfRange { .. }));
}

// =============================================================================
// End-to-End Tests
// =============================================================================

/// A definition loaded from disk drives a deterministic expansion.
#[test]
fn test_loaded_definition_expands() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("plant.json");
    fs::write(
        &path,
        r#"{
            "alphabet": "F+-[]",
            "axiom": "F",
            "rules": { "F": "F[+F]F[-F]F" },
            "depth": 1
        }"#,
    )
    .unwrap();

    let config = SystemConfig::load(&path).unwrap();
    let mut sys = Lsystem::new(
        config.alphabet.clone(),
        config.axiom.clone(),
        config.rule_table(),
        Box::new(FixedRolls::new(vec![])),
    );
    sys.run_generations(config.depth, false);
    assert_eq!(sys.state(), "F[+F]F[-F]F");
}

/// The sample bush definition expands reproducibly under a fixed seed.
#[test]
fn test_sample_reproducible_with_seed() {
    let config = SystemConfig::sample();

    let mut a = Lsystem::with_seed("FL+-[]", config.axiom.as_str(), config.rule_table(), 7);
    let mut b = Lsystem::with_seed("FL+-[]", config.axiom.as_str(), config.rule_table(), 7);
    a.run_generations(config.depth, false);
    b.run_generations(config.depth, false);

    assert_eq!(a.state(), b.state());
    // Sample weights sum to 100, so no symbol is ever dropped and the
    // state can only grow.
    assert!(a.symbol_count() >= 1);
}
