//! The imperative shell: a controller that gates one invoker.
//!
//! One controller instance serves one flow (one user awaiting one
//! confirmation email). It owns the flow's `ResendState`, evaluates the
//! pure gate on every attempt, and mutates state only after the invoker
//! settles successfully.

mod invoker;

pub use invoker::{FnInvoker, InvokeError, Invoker};

use crate::clock::Clock;
use crate::core::{Gate, Rejection, ResendOutcome, ResendPolicy, ResendState};
use chrono::{DateTime, Utc};
use tracing::{debug, warn};

/// Rate-limited controller for a single resend flow.
///
/// Each call to [`attempt`](ResendController::attempt) is one user action
/// (one button press). The controller performs no retries of its own and
/// imposes no timeout; once the invoker is dispatched it awaits the
/// resolution. It does not guard against re-entrant calls either - the
/// calling layer disables the trigger while a call is in flight.
///
/// # Example
///
/// ```rust
/// # async fn example() {
/// use resend_gate::{FnInvoker, InvokeError, ResendController};
/// use chrono::Utc;
///
/// let invoker = FnInvoker::new(|| async {
///     // The real thing calls the auth provider's resend endpoint.
///     Ok::<String, InvokeError>(
///         "Confirmation email resent. Please check your inbox.".to_string(),
///     )
/// });
///
/// let mut controller = ResendController::new(invoker);
/// let outcome = controller.attempt(Utc::now()).await;
/// assert!(outcome.is_sent());
/// # }
/// ```
pub struct ResendController<I: Invoker> {
    state: ResendState,
    policy: ResendPolicy,
    invoker: I,
}

impl<I: Invoker> ResendController<I> {
    /// Create a controller for a fresh flow under the default policy
    /// (5 attempts, 60 second cooldown).
    pub fn new(invoker: I) -> Self {
        Self::with_policy(invoker, ResendPolicy::default())
    }

    /// Create a controller for a fresh flow under a custom policy.
    pub fn with_policy(invoker: I, policy: ResendPolicy) -> Self {
        Self {
            state: ResendState::new(),
            policy,
            invoker,
        }
    }

    /// The flow's current state.
    pub fn state(&self) -> &ResendState {
        &self.state
    }

    /// The policy in force.
    pub fn policy(&self) -> &ResendPolicy {
        &self.policy
    }

    /// How many successful attempts the flow has left, saturating at zero.
    pub fn remaining_attempts(&self) -> u32 {
        self.policy
            .max_attempts
            .saturating_sub(self.state.attempt_count())
    }

    /// Attempt one resend at `now`.
    ///
    /// Evaluates the preconditions first; if either blocks, the invoker is
    /// not called and state is untouched. Otherwise the invoker runs
    /// exactly once. Only a successful invocation advances the state - a
    /// provider rejection consumes no retry slot and starts no cooldown,
    /// since the user received nothing to wait for.
    pub async fn attempt(&mut self, now: DateTime<Utc>) -> ResendOutcome {
        match self.policy.evaluate(&self.state, now) {
            Gate::Blocked(Rejection::LimitExceeded) => {
                debug!(
                    attempts = self.state.attempt_count(),
                    "resend blocked: attempt limit reached"
                );
                ResendOutcome::LimitExceeded
            }
            Gate::Blocked(Rejection::CooldownActive { seconds_remaining }) => {
                debug!(seconds_remaining, "resend blocked: cooldown active");
                ResendOutcome::Cooldown { seconds_remaining }
            }
            Gate::Open => match self.invoker.invoke().await {
                Ok(message) => {
                    self.state = self.state.record_success(now);
                    debug!(attempts = self.state.attempt_count(), "resend dispatched");
                    ResendOutcome::Sent { message }
                }
                Err(err) => {
                    warn!(error = %err, "resend invocation failed");
                    ResendOutcome::InvokerFailed {
                        error: err.user_message(),
                    }
                }
            },
        }
    }

    /// Attempt one resend, reading `now` from an injected clock.
    pub async fn attempt_with<C: Clock>(&mut self, clock: &C) -> ResendOutcome {
        self.attempt(clock.now()).await
    }
}
