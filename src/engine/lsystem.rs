//! Lsystem engine implementation

use crate::cursor::Cursor;
use crate::random::{RollSource, SeededRolls};
use crate::rules::RuleTable;
use crate::trace::Trace;

/// An L-system: axiom, rule table, current state, and a traversal cursor.
///
/// The alphabet is informational only; rewriting never rejects a symbol.
/// The rule table and axiom are fixed for the engine's lifetime, so any
/// state is recoverable by [`Lsystem::reset`].
pub struct Lsystem {
    alphabet: String,
    axiom: String,
    rules: RuleTable,
    rolls: Box<dyn RollSource>,
    state: String,
    generation: u32,
    cursor: Cursor,
}

impl Lsystem {
    /// Build an engine with an injected draw source. State starts at the
    /// axiom, generation 0, cursor at the start.
    pub fn new(
        alphabet: impl Into<String>,
        axiom: impl Into<String>,
        rules: RuleTable,
        rolls: Box<dyn RollSource>,
    ) -> Self {
        let axiom = axiom.into();
        Self {
            alphabet: alphabet.into(),
            state: axiom.clone(),
            axiom,
            rules,
            rolls,
            generation: 0,
            cursor: Cursor::new(),
        }
    }

    /// Build an engine with a seeded draw source.
    pub fn with_seed(
        alphabet: impl Into<String>,
        axiom: impl Into<String>,
        rules: RuleTable,
        seed: u64,
    ) -> Self {
        Self::new(alphabet, axiom, rules, Box::new(SeededRolls::new(seed)))
    }

    pub fn alphabet(&self) -> &str {
        &self.alphabet
    }

    pub fn axiom(&self) -> &str {
        &self.axiom
    }

    /// The current state string.
    pub fn state(&self) -> &str {
        &self.state
    }

    /// Number of rewrite passes applied since construction or the last
    /// [`Lsystem::reset`].
    pub fn generation(&self) -> u32 {
        self.generation
    }

    /// Number of symbols in the current state.
    pub fn symbol_count(&self) -> usize {
        self.state.chars().count()
    }

    /// Apply exactly `n` rewrite passes; `n = 0` is a no-op.
    ///
    /// Each pass substitutes every symbol of the pre-pass state in order:
    /// identity when no rule is registered, the literal replacement for a
    /// literal rule, and a weighted draw for a stochastic rule (where a draw
    /// landing past the last alternative drops the symbol). The cursor is
    /// re-armed afterwards since the old position is meaningless against the
    /// new state.
    ///
    /// With `verbose` the run emits a [`Trace`] of the starting state, the
    /// rule table, and the state after every pass.
    pub fn run_generations(&mut self, n: u32, verbose: bool) {
        if verbose {
            Trace::emit(
                "RUN_START",
                &[("passes", &n.to_string()), ("state", &self.state)],
            );
            for (symbol, rule) in self.rules.iter() {
                Trace::emit(
                    "RULE",
                    &[("rule", &rule.summary()), ("symbol", &symbol.to_string())],
                );
            }
        }

        for _ in 0..n {
            let mut next = String::with_capacity(self.state.len() * 2);
            for symbol in self.state.chars() {
                match self.rules.resolve(symbol) {
                    None => next.push(symbol),
                    Some(rule) => {
                        let roll = if rule.is_stochastic() {
                            self.rolls.roll()
                        } else {
                            0.0
                        };
                        if let Some(replacement) = rule.choose(roll) {
                            next.push_str(replacement);
                        }
                    }
                }
            }
            self.state = next;
            self.generation += 1;

            if verbose {
                Trace::emit(
                    "PASS_COMPLETE",
                    &[
                        ("generation", &self.generation.to_string()),
                        ("length", &self.symbol_count().to_string()),
                        ("state", &self.state),
                    ],
                );
            }
        }

        self.cursor.reset();
    }

    /// Deliver the next symbol of the current state to `handler`.
    ///
    /// Silent no-op once the state is exhausted; callers detect the end via
    /// [`Lsystem::is_exhausted`] or by comparing [`Lsystem::cursor_position`]
    /// to [`Lsystem::symbol_count`].
    pub fn step<F>(&mut self, handler: F)
    where
        F: FnOnce(char),
    {
        self.cursor.step(&self.state, handler);
    }

    /// Symbols delivered by [`Lsystem::step`] since the cursor was last
    /// re-armed.
    pub fn cursor_position(&self) -> usize {
        self.cursor.position()
    }

    pub fn is_exhausted(&self) -> bool {
        self.cursor.is_exhausted(&self.state)
    }

    /// Re-arm only the cursor, keeping the current state.
    pub fn reset_cursor(&mut self) {
        self.cursor.reset();
    }

    /// Restore the engine to its constructed state: state = axiom,
    /// generation 0, cursor at the start.
    pub fn reset(&mut self) {
        self.state = self.axiom.clone();
        self.generation = 0;
        self.cursor.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::FixedRolls;
    use crate::rules::{Alternative, Rule};

    fn literal_table() -> RuleTable {
        [('F', Rule::literal("F[+F]F[-F]F"))].into_iter().collect()
    }

    fn engine(axiom: &str, rules: RuleTable, rolls: Vec<f64>) -> Lsystem {
        Lsystem::new("F+-[]", axiom, rules, Box::new(FixedRolls::new(rolls)))
    }

    #[test]
    fn zero_generations_is_noop() {
        let mut sys = engine("F+F", literal_table(), vec![]);
        sys.run_generations(0, false);
        assert_eq!(sys.state(), "F+F");
        assert_eq!(sys.generation(), 0);
    }

    #[test]
    fn unknown_symbols_pass_through() {
        let mut sys = engine("G?!", RuleTable::new(), vec![]);
        sys.run_generations(3, false);
        assert_eq!(sys.state(), "G?!");
        assert_eq!(sys.generation(), 3);
    }

    #[test]
    fn literal_pass_substitutes_in_order() {
        let mut sys = engine("F", literal_table(), vec![]);
        sys.run_generations(1, false);
        assert_eq!(sys.state(), "F[+F]F[-F]F");
        assert_eq!(sys.generation(), 1);
    }

    #[test]
    fn pass_never_rescans_inserted_symbols() {
        // F -> FF doubles per pass; rescanning would explode past 8.
        let table: RuleTable = [('F', Rule::literal("FF"))].into_iter().collect();
        let mut sys = engine("F", table, vec![]);
        sys.run_generations(3, false);
        assert_eq!(sys.state(), "FFFFFFFF");
    }

    #[test]
    fn stochastic_draws_consume_one_roll_per_occurrence() {
        let table: RuleTable = [(
            'F',
            Rule::stochastic(vec![
                Alternative::new(70.0, "A"),
                Alternative::new(30.0, "B"),
            ]),
        )]
        .into_iter()
        .collect();

        // Three occurrences, three draws.
        let mut sys = engine("FFF", table, vec![10.0, 75.0, 69.0]);
        sys.run_generations(1, false);
        assert_eq!(sys.state(), "ABA");
    }

    #[test]
    fn dropped_symbol_contributes_nothing() {
        let table: RuleTable = [(
            'F',
            Rule::stochastic(vec![
                Alternative::new(40.0, "A"),
                Alternative::new(20.0, "B"),
            ]),
        )]
        .into_iter()
        .collect();

        let mut sys = engine("xFy", table, vec![80.0]);
        sys.run_generations(1, false);
        assert_eq!(sys.state(), "xy");
    }

    #[test]
    fn run_rearms_cursor() {
        let mut sys = engine("F", literal_table(), vec![]);
        sys.step(|_| {});
        assert_eq!(sys.cursor_position(), 1);
        sys.run_generations(1, false);
        assert_eq!(sys.cursor_position(), 0);
        assert!(!sys.is_exhausted());
    }

    #[test]
    fn reset_restores_constructed_state() {
        let mut sys = engine("F", literal_table(), vec![]);
        sys.run_generations(2, false);
        sys.step(|_| {});
        sys.reset();
        assert_eq!(sys.state(), "F");
        assert_eq!(sys.generation(), 0);
        assert_eq!(sys.cursor_position(), 0);
    }

    #[test]
    fn step_walks_state_then_stops() {
        let mut sys = engine("F+", RuleTable::new(), vec![]);
        let mut seen = String::new();
        for _ in 0..4 {
            sys.step(|c| seen.push(c));
        }
        assert_eq!(seen, "F+");
        assert!(sys.is_exhausted());
    }
}
