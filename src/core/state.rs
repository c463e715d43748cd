//! Resend flow state tracking.
//!
//! Tracks how many sends have been issued for one flow and when the most
//! recent one went out, following functional programming principles.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Per-flow record of successful resend invocations.
///
/// One `ResendState` exists per user flow (e.g. one sign-up awaiting email
/// confirmation). It is created fresh when the flow begins and discarded
/// when the flow ends; it is never persisted across process restarts.
///
/// The state is immutable - [`record_success`](ResendState::record_success)
/// returns a new state rather than mutating in place. Only a successful
/// invocation is ever recorded: a send that the provider rejected consumes
/// no attempt and starts no cooldown.
///
/// # Example
///
/// ```rust
/// use resend_gate::ResendState;
/// use chrono::Utc;
///
/// let state = ResendState::new();
/// assert_eq!(state.attempt_count(), 0);
/// assert!(state.last_attempt_at().is_none());
///
/// let now = Utc::now();
/// let state = state.record_success(now);
/// assert_eq!(state.attempt_count(), 1);
/// assert_eq!(state.last_attempt_at(), Some(now));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResendState {
    attempt_count: u32,
    last_attempt_at: Option<DateTime<Utc>>,
}

impl ResendState {
    /// Create the state for a fresh flow: zero attempts, no timestamp.
    pub fn new() -> Self {
        Self {
            attempt_count: 0,
            last_attempt_at: None,
        }
    }

    /// Number of successful invocations issued so far.
    ///
    /// Monotonically non-decreasing over the life of the flow.
    pub fn attempt_count(&self) -> u32 {
        self.attempt_count
    }

    /// When the most recent successful invocation happened.
    ///
    /// `None` before the first successful attempt.
    pub fn last_attempt_at(&self) -> Option<DateTime<Utc>> {
        self.last_attempt_at
    }

    /// Record a successful invocation at `now`, returning a new state.
    ///
    /// This is a pure function - the existing state is left unchanged.
    /// Callers must invoke it only after the underlying action actually
    /// succeeded; policy rejections and invoker failures record nothing.
    ///
    /// # Example
    ///
    /// ```rust
    /// use resend_gate::ResendState;
    /// use chrono::Utc;
    ///
    /// let first = ResendState::new();
    /// let second = first.record_success(Utc::now());
    ///
    /// assert_eq!(first.attempt_count(), 0); // Original unchanged
    /// assert_eq!(second.attempt_count(), 1);
    /// ```
    pub fn record_success(&self, now: DateTime<Utc>) -> Self {
        Self {
            attempt_count: self.attempt_count + 1,
            last_attempt_at: Some(now),
        }
    }
}
