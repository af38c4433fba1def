//! Production rules for the rewriting engine
//!
//! A rule maps one symbol to its replacement. Two shapes exist:
//!
//! | Variant      | Meaning                                                  |
//! |--------------|----------------------------------------------------------|
//! | `Literal`    | the symbol is always replaced by one fixed string        |
//! | `Stochastic` | one weighted alternative is picked per occurrence        |
//!
//! Weights are percentages out of 100 but are not required to sum to 100.
//! A draw landing past the last alternative drops the symbol entirely; an
//! over-100 total leaves trailing alternatives unreachable. Both are
//! accepted configurations, not errors.
//!
//! Symbols without an entry in the [`RuleTable`] map to themselves.

mod rule;
mod table;

pub use rule::{Alternative, Rule};
pub use table::RuleTable;
