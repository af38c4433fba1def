//! Rewriting engine
//!
//! Owns the axiom, the rule table and the current state string, and applies
//! the table across the whole state one generation at a time.
//!
//! # Invariants
//!
//! 1. Each pass reads only the pre-pass state; freshly inserted symbols are
//!    never re-scanned within the same pass.
//! 2. Per-symbol outputs are concatenated in original left-to-right order.
//! 3. Exactly one random draw is consumed per stochastic symbol occurrence.
//! 4. Unknown symbols pass through unchanged (identity).
//! 5. The cursor never points past the current state; any operation that
//!    replaces the state re-arms it.

mod lsystem;

pub use lsystem::Lsystem;
