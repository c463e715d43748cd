//! Core resend-gating types and logic.
//!
//! This module contains the pure functional core of the controller:
//! - Per-flow attempt tracking via `ResendState`
//! - The ordered precondition gate via `ResendPolicy`
//! - The caller-facing `ResendOutcome` variant
//!
//! All logic in this module is pure (no side effects, no ambient clock
//! reads), following the "pure core, imperative shell" philosophy. The
//! shell lives in [`crate::controller`].

mod outcome;
mod policy;
mod state;

pub use outcome::ResendOutcome;
pub use policy::{Gate, Rejection, ResendPolicy};
pub use state::ResendState;
