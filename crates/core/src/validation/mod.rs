//! Form validation engine.
//!
//! Rule tables name the sanitizers and validators to run per field; the
//! engine applies them in order and collects human-readable messages.
//! Pure logic — no database dependencies.

pub mod engine;
pub mod rules;
pub mod sanitizers;
pub mod validators;

pub use engine::{RunOutcome, Validation};
pub use rules::{Registry, RuleError, RuleSet, RuleSpec};
