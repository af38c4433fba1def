//! RollSource trait and implementations

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Capability yielding the next random draw in `[0, 100)`.
///
/// One draw is consumed per stochastic symbol occurrence during a rewrite
/// pass. Literal rules and identity symbols consume nothing.
pub trait RollSource {
    fn roll(&mut self) -> f64;
}

/// Seeded pseudo-random draws backed by [`StdRng`].
pub struct SeededRolls {
    rng: StdRng,
}

impl SeededRolls {
    /// Deterministic source: the same seed always yields the same draws.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Non-reproducible source seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
}

impl RollSource for SeededRolls {
    fn roll(&mut self) -> f64 {
        self.rng.gen_range(0.0..100.0)
    }
}

/// A fixed draw sequence, cycled endlessly.
///
/// An empty sequence always yields 0.0 (selects the first alternative).
pub struct FixedRolls {
    rolls: Vec<f64>,
    next: usize,
}

impl FixedRolls {
    pub fn new(rolls: Vec<f64>) -> Self {
        Self { rolls, next: 0 }
    }
}

impl RollSource for FixedRolls {
    fn roll(&mut self) -> f64 {
        if self.rolls.is_empty() {
            return 0.0;
        }
        let value = self.rolls[self.next % self.rolls.len()];
        self.next += 1;
        value
    }
}
