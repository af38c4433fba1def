//! Random draw sources for stochastic rule selection
//!
//! The engine never calls a global RNG. It is handed a [`RollSource`] at
//! construction, so a run is fully reproducible given the same draws:
//! [`SeededRolls`] for seeded production use, [`FixedRolls`] for tests and
//! exact replays.

mod source;

pub use source::{FixedRolls, RollSource, SeededRolls};
