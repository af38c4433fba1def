//! Diagnostic trace side channel
//!
//! Verbose-mode output for the rewriting engine. A trace line has no effect
//! on program state; it exists so a run can be inspected after the fact.
//!
//! # Principles
//!
//! 1. Synchronous, no buffering
//! 2. One line = one event
//! 3. Deterministic field ordering
//! 4. No side effects on execution

mod emitter;

pub use emitter::Trace;
