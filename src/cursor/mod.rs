//! Pull-based traversal of a generated state string
//!
//! The cursor delivers one symbol per [`Cursor::step`] call to a
//! caller-supplied handler, so a consumer (typically a renderer) decides its
//! own pacing. It owns only its position; the state string is passed in by
//! whoever owns it.
//!
//! # State machine
//!
//! - Active (position < length): `step` invokes the handler once and
//!   advances one symbol.
//! - Exhausted (position >= length): `step` is a silent no-op. No error, no
//!   explicit exhaustion signal; callers compare [`Cursor::position`] to the
//!   symbol count or ask [`Cursor::is_exhausted`].
//! - Exhausted returns to Active only via [`Cursor::reset`].

mod cursor;

pub use cursor::Cursor;
