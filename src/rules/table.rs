//! Symbol-to-rule mapping

use std::collections::BTreeMap;

use super::rule::Rule;

/// Mapping from symbol to production rule.
///
/// Keys are unique; a symbol with no entry rewrites to itself. Construction
/// accepts anything, including an empty table (every pass is then the
/// identity). Iteration order is sorted by symbol so trace output is
/// reproducible.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RuleTable {
    rules: BTreeMap<char, Rule>,
}

impl RuleTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a rule for a symbol, replacing any previous entry.
    pub fn insert(&mut self, symbol: char, rule: Rule) {
        self.rules.insert(symbol, rule);
    }

    /// Look up the rule for a symbol. `None` means identity.
    pub fn resolve(&self, symbol: char) -> Option<&Rule> {
        self.rules.get(&symbol)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Entries in sorted symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (&char, &Rule)> {
        self.rules.iter()
    }
}

impl FromIterator<(char, Rule)> for RuleTable {
    fn from_iter<I: IntoIterator<Item = (char, Rule)>>(iter: I) -> Self {
        Self {
            rules: iter.into_iter().collect(),
        }
    }
}
