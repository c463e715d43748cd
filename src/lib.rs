//! Resend Gate: a rate-limited resend controller
//!
//! Resend Gate gates repeated invocations of a caller-supplied action -
//! typically "send the confirmation email again" - behind a lifetime
//! attempt ceiling and a minimum cooldown between sends, and reports
//! precise, user-actionable rejection reasons.
//!
//! The crate follows a "pure core, imperative shell" split. The core
//! (state, policy, outcome) is pure functions of explicit inputs: no
//! timers, no ambient clock reads, no side effects. The shell
//! ([`ResendController`]) composes the core with two injected
//! capabilities: an [`Invoker`] that performs the side-effecting action,
//! and a `now` timestamp (or a [`Clock`]).
//!
//! # Core Concepts
//!
//! - **State**: per-flow attempt count and last-attempt timestamp
//!   ([`ResendState`])
//! - **Policy**: the attempt ceiling and cooldown, evaluated as a pure
//!   ordered gate ([`ResendPolicy`])
//! - **Outcome**: a tagged variant the caller can render exactly
//!   ([`ResendOutcome`])
//!
//! # Example
//!
//! ```rust
//! use resend_gate::{Gate, Rejection, ResendPolicy, ResendState};
//! use chrono::{Duration, Utc};
//!
//! let policy = ResendPolicy::default();
//! let now = Utc::now();
//!
//! // A fresh flow may send.
//! let state = ResendState::new();
//! assert_eq!(policy.evaluate(&state, now), Gate::Open);
//!
//! // Right after a send the full cooldown applies...
//! let state = state.record_success(now);
//! assert_eq!(
//!     policy.evaluate(&state, now),
//!     Gate::Blocked(Rejection::CooldownActive { seconds_remaining: 60 })
//! );
//!
//! // ...and exactly at the boundary it has elapsed.
//! assert_eq!(policy.evaluate(&state, now + Duration::seconds(60)), Gate::Open);
//! ```

pub mod clock;
pub mod controller;
pub mod core;

// Re-export commonly used types
pub use clock::{Clock, ManualClock, SystemClock};
pub use controller::{FnInvoker, InvokeError, Invoker, ResendController};
pub use self::core::{Gate, Rejection, ResendOutcome, ResendPolicy, ResendState};
