//! Rate-limit policy and the pure precondition gate.
//!
//! The policy holds the two constants of the resend flow - a lifetime
//! attempt ceiling and a minimum cooldown between sends - and evaluates
//! them as a pure function of `(state, now)`. No timers, no ambient clock
//! reads: the countdown is recomputed on demand from the injected `now`.

use super::state::ResendState;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Why the gate refused to dispatch the action.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rejection {
    /// The lifetime attempt ceiling was reached. Terminal for this flow -
    /// waiting does not help, the user must seek support.
    LimitExceeded,

    /// Too soon since the last successful send. `seconds_remaining` is the
    /// whole seconds left on the cooldown, rounded up so a displayed
    /// countdown never reads zero while still blocked.
    CooldownActive { seconds_remaining: u64 },
}

/// Result of evaluating the preconditions for one attempt.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gate {
    /// All preconditions passed; the action may be dispatched.
    Open,

    /// A precondition failed; the action must not be dispatched.
    Blocked(Rejection),
}

/// Attempt ceiling and cooldown for a resend flow.
///
/// [`Default`] gives the standard email-confirmation policy: at most 5
/// lifetime attempts, at least 60 seconds between consecutive sends. Both
/// knobs are public so other gated actions can reuse the component with
/// their own limits.
///
/// # Example
///
/// ```rust
/// use resend_gate::{Gate, Rejection, ResendPolicy, ResendState};
/// use chrono::Utc;
///
/// let policy = ResendPolicy::default();
/// let now = Utc::now();
///
/// let state = ResendState::new();
/// assert_eq!(policy.evaluate(&state, now), Gate::Open);
///
/// // Immediately after a successful send the full cooldown applies.
/// let state = state.record_success(now);
/// assert_eq!(
///     policy.evaluate(&state, now),
///     Gate::Blocked(Rejection::CooldownActive { seconds_remaining: 60 })
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResendPolicy {
    /// Hard ceiling on lifetime successful attempts for one flow.
    pub max_attempts: u32,
    /// Minimum spacing between consecutive successful sends.
    pub cooldown: Duration,
}

impl Default for ResendPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            cooldown: Duration::from_secs(60),
        }
    }
}

impl ResendPolicy {
    /// Build a policy with custom limits.
    pub fn new(max_attempts: u32, cooldown: Duration) -> Self {
        Self {
            max_attempts,
            cooldown,
        }
    }

    /// Evaluate the preconditions for one attempt, in order.
    ///
    /// This is a pure function of `(self, state, now)`:
    ///
    /// 1. `attempt_count >= max_attempts` blocks with
    ///    [`Rejection::LimitExceeded`]. Checked first - a flow at the
    ///    ceiling reports the terminal rejection even if a cooldown also
    ///    happens to be running.
    /// 2. Less than `cooldown` elapsed since `last_attempt_at` blocks with
    ///    [`Rejection::CooldownActive`]. The comparison is strict: exactly
    ///    `cooldown` elapsed counts as elapsed and the gate opens.
    /// 3. Otherwise the gate is open.
    ///
    /// # Example
    ///
    /// ```rust
    /// use resend_gate::{Gate, Rejection, ResendPolicy, ResendState};
    /// use chrono::{Duration, Utc};
    ///
    /// let policy = ResendPolicy::default();
    /// let sent_at = Utc::now();
    /// let state = ResendState::new().record_success(sent_at);
    ///
    /// // One millisecond short of the boundary: blocked, countdown reads 1.
    /// let gate = policy.evaluate(&state, sent_at + Duration::milliseconds(59_999));
    /// assert_eq!(
    ///     gate,
    ///     Gate::Blocked(Rejection::CooldownActive { seconds_remaining: 1 })
    /// );
    ///
    /// // Exactly at the boundary: the cooldown has elapsed.
    /// let gate = policy.evaluate(&state, sent_at + Duration::seconds(60));
    /// assert_eq!(gate, Gate::Open);
    /// ```
    pub fn evaluate(&self, state: &ResendState, now: DateTime<Utc>) -> Gate {
        if state.attempt_count() >= self.max_attempts {
            return Gate::Blocked(Rejection::LimitExceeded);
        }

        if let Some(last) = state.last_attempt_at() {
            let elapsed_ms = now.signed_duration_since(last).num_milliseconds();
            let cooldown_ms = self.cooldown.as_millis() as i64;
            if elapsed_ms < cooldown_ms {
                // remaining_ms is strictly positive here, so the unsigned
                // ceiling division is exact.
                let remaining_ms = (cooldown_ms - elapsed_ms) as u64;
                let seconds_remaining = remaining_ms.div_ceil(1000);
                return Gate::Blocked(Rejection::CooldownActive { seconds_remaining });
            }
        }

        Gate::Open
    }
}
