//! System definition files
//!
//! A JSON file declares an L-system: alphabet, axiom, rules, pass depth and
//! an optional seed. Rule values keep the shape consumers expect from
//! hand-written definitions: a bare string for a literal rule, or an array
//! of weighted alternatives for a stochastic one.
//!
//! ```json
//! {
//!   "alphabet": "FL+-[]",
//!   "axiom": "F",
//!   "rules": {
//!     "F": [
//!       { "weight": 60, "replacement": "F[+F-F+FF][-FF+F-F]" },
//!       { "weight": 40, "replacement": "F" }
//!     ]
//!   },
//!   "depth": 6
//! }
//! ```

mod errors;
mod settings;

pub use errors::{ConfigError, ConfigResult};
pub use settings::{RuleSpec, SystemConfig};
