//! Rule variants and weighted-alternative selection

use serde::{Deserialize, Serialize};

/// One weighted replacement candidate of a stochastic rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alternative {
    /// Selection weight, a percentage out of 100.
    pub weight: f64,
    /// Replacement string emitted when this alternative is picked.
    pub replacement: String,
}

impl Alternative {
    pub fn new(weight: f64, replacement: impl Into<String>) -> Self {
        Self {
            weight,
            replacement: replacement.into(),
        }
    }
}

/// A single production rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Rule {
    /// The symbol is always replaced by this string.
    Literal(String),
    /// One alternative is picked per occurrence, weighted by table order.
    Stochastic(Vec<Alternative>),
}

impl Rule {
    pub fn literal(replacement: impl Into<String>) -> Self {
        Rule::Literal(replacement.into())
    }

    pub fn stochastic(alternatives: Vec<Alternative>) -> Self {
        Rule::Stochastic(alternatives)
    }

    /// Resolve this rule against a draw in `[0, 100)`.
    ///
    /// A literal rule ignores the draw. A stochastic rule walks its
    /// alternatives in order: the first whose weight exceeds the remaining
    /// roll wins, otherwise its weight is subtracted and the walk continues.
    /// `None` means the roll landed past every alternative (total weight
    /// under 100) and the symbol produces no output.
    pub fn choose(&self, roll: f64) -> Option<&str> {
        match self {
            Rule::Literal(replacement) => Some(replacement),
            Rule::Stochastic(alternatives) => {
                let mut remaining = roll;
                for alt in alternatives {
                    if remaining < alt.weight {
                        return Some(&alt.replacement);
                    }
                    remaining -= alt.weight;
                }
                None
            }
        }
    }

    /// True when selection consumes a random draw.
    pub fn is_stochastic(&self) -> bool {
        matches!(self, Rule::Stochastic(_))
    }

    /// One-line summary used by the verbose trace.
    pub fn summary(&self) -> String {
        match self {
            Rule::Literal(replacement) => replacement.clone(),
            Rule::Stochastic(alternatives) => {
                let parts: Vec<String> = alternatives
                    .iter()
                    .map(|a| format!("{}% {}", a.weight, a.replacement))
                    .collect();
                format!("[{}]", parts.join(" | "))
            }
        }
    }
}
