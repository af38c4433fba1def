//! lsys - A deterministic, seedable L-system rewriting engine
//!
//! Expands an axiom string over successive generations using a per-symbol
//! production-rule table, then hands the result to a consumer one symbol at
//! a time through a restartable cursor.

pub mod cli;
pub mod config;
pub mod cursor;
pub mod engine;
pub mod random;
pub mod rules;
pub mod trace;
