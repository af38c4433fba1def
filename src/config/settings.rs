//! System definition structure and validation

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::rules::{Alternative, Rule, RuleTable};

use super::errors::{ConfigError, ConfigResult};

/// A rule value as written in a definition file: either a bare replacement
/// string or a list of weighted alternatives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RuleSpec {
    Literal(String),
    Stochastic(Vec<Alternative>),
}

/// A complete L-system definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemConfig {
    /// Valid symbols, informational only; unknown symbols are never rejected.
    #[serde(default)]
    pub alphabet: String,

    /// Initial state string (required).
    pub axiom: String,

    /// Symbol to rule. Keys must be exactly one symbol. A `BTreeMap` keeps
    /// serialization and validation order stable.
    #[serde(default)]
    pub rules: BTreeMap<String, RuleSpec>,

    /// Rewrite passes applied by a run (optional, default 6).
    #[serde(default = "default_depth")]
    pub depth: u32,

    /// Seed for the draw source; absent means OS entropy.
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_depth() -> u32 {
    6
}

impl SystemConfig {
    /// Load a definition from file: read, parse, validate.
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::read(path, e))?;
        let config: SystemConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the definition.
    ///
    /// Rule keys must be single symbols, stochastic weights must lie in
    /// (0, 100]. Everything else is permissive by policy: an empty axiom,
    /// an empty rule table and weights not summing to 100 are all accepted.
    pub fn validate(&self) -> ConfigResult<()> {
        for (key, spec) in &self.rules {
            let mut symbols = key.chars();
            let symbol = match (symbols.next(), symbols.next()) {
                (Some(c), None) => c,
                _ => return Err(ConfigError::RuleKeyNotSingleSymbol(key.clone())),
            };

            if let RuleSpec::Stochastic(alternatives) = spec {
                for alt in alternatives {
                    if !(alt.weight > 0.0 && alt.weight <= 100.0) {
                        return Err(ConfigError::WeightOutOfRange {
                            symbol,
                            weight: alt.weight,
                        });
                    }
                }
            }
        }
        Ok(())
    }

    /// Build the engine-facing rule table. Call [`SystemConfig::validate`]
    /// first; keys longer than one symbol are skipped here.
    pub fn rule_table(&self) -> RuleTable {
        self.rules
            .iter()
            .filter_map(|(key, spec)| {
                let mut symbols = key.chars();
                match (symbols.next(), symbols.next()) {
                    (Some(symbol), None) => Some((symbol, spec.clone().into())),
                    _ => None,
                }
            })
            .collect()
    }

    /// The sample definition written by `lsys init`: a stochastic bush.
    pub fn sample() -> Self {
        let mut rules = BTreeMap::new();
        rules.insert(
            "F".to_string(),
            RuleSpec::Stochastic(vec![
                Alternative::new(60.0, "F[+F-F+FF][-FF+F-F]"),
                Alternative::new(40.0, "F"),
            ]),
        );
        Self {
            alphabet: "FL+-[]".to_string(),
            axiom: "F".to_string(),
            rules,
            depth: 6,
            seed: None,
        }
    }
}

impl From<RuleSpec> for Rule {
    fn from(spec: RuleSpec) -> Self {
        match spec {
            RuleSpec::Literal(replacement) => Rule::Literal(replacement),
            RuleSpec::Stochastic(alternatives) => Rule::Stochastic(alternatives),
        }
    }
}
