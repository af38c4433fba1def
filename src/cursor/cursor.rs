//! Cursor state and stepping

/// Read position into a state string.
///
/// Tracks a byte offset (for O(1) stepping over UTF-8) and a symbol counter.
/// The same cursor must always be stepped against the same string between
/// resets; the owner is responsible for resetting it whenever the state is
/// replaced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cursor {
    offset: usize,
    steps: usize,
}

impl Cursor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Symbols delivered since the last reset.
    pub fn position(&self) -> usize {
        self.steps
    }

    /// True once every symbol of `state` has been delivered.
    pub fn is_exhausted(&self, state: &str) -> bool {
        self.offset >= state.len()
    }

    /// Deliver the next symbol of `state` to `handler`.
    ///
    /// In bounds: the handler is invoked exactly once and the cursor
    /// advances one symbol. Past the end: silent no-op, the handler is not
    /// invoked.
    pub fn step<F>(&mut self, state: &str, handler: F)
    where
        F: FnOnce(char),
    {
        if let Some(symbol) = state[self.offset..].chars().next() {
            self.offset += symbol.len_utf8();
            self.steps += 1;
            handler(symbol);
        }
    }

    /// Return to the start of the state.
    pub fn reset(&mut self) {
        self.offset = 0;
        self.steps = 0;
    }
}
