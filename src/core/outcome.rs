//! The result variant returned to callers of an attempt.
//!
//! Every non-success path is a distinguishable variant so the calling layer
//! can render an exact message and decide whether to re-enable the retry
//! control. Nothing is silently swallowed.

use serde::{Deserialize, Serialize};

/// Outcome of one resend attempt.
///
/// Serializes as an internally tagged object so host applications can hand
/// it straight to their presentation layer:
///
/// ```json
/// { "kind": "sent", "message": "..." }
/// { "kind": "limitExceeded" }
/// { "kind": "cooldown", "secondsRemaining": 42 }
/// { "kind": "invokerFailed", "error": "..." }
/// ```
///
/// The two policy rejections are expected conditions, not application
/// errors: `Cooldown` is recoverable by waiting, `LimitExceeded` is
/// terminal for the flow.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ResendOutcome {
    /// The action was dispatched and the provider accepted it.
    Sent { message: String },

    /// The lifetime attempt ceiling was reached before dispatch.
    LimitExceeded,

    /// The cooldown is still running; no dispatch happened.
    Cooldown {
        #[serde(rename = "secondsRemaining")]
        seconds_remaining: u64,
    },

    /// The action was dispatched and the provider rejected it. Rate-limit
    /// state is unchanged: a failed send consumes no retry slot.
    InvokerFailed { error: String },
}

impl ResendOutcome {
    /// True if the action was actually dispatched and accepted.
    pub fn is_sent(&self) -> bool {
        matches!(self, Self::Sent { .. })
    }

    /// True if this flow can never send again.
    ///
    /// Callers use this to permanently disable the triggering control and
    /// point the user at support instead.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::LimitExceeded)
    }

    /// The user-facing message for this outcome.
    ///
    /// Success and invoker-failure outcomes carry their payload verbatim;
    /// the policy rejections render the standard flow copy.
    ///
    /// # Example
    ///
    /// ```rust
    /// use resend_gate::ResendOutcome;
    ///
    /// let outcome = ResendOutcome::Cooldown { seconds_remaining: 42 };
    /// assert_eq!(
    ///     outcome.user_message(),
    ///     "Please wait 42 seconds before resending."
    /// );
    /// ```
    pub fn user_message(&self) -> String {
        match self {
            Self::Sent { message } => message.clone(),
            Self::LimitExceeded => {
                "You have reached the limit. Please contact our support team.".to_string()
            }
            Self::Cooldown { seconds_remaining } => {
                format!("Please wait {seconds_remaining} seconds before resending.")
            }
            Self::InvokerFailed { error } => error.clone(),
        }
    }
}
