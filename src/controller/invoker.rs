//! The injected capability that performs the gated action.
//!
//! The controller never knows what it is sending or to whom: the caller
//! captures every parameter (destination address, redirect URL, provider
//! handle) when constructing the invoker, and the controller only decides
//! whether the invocation may happen.

use async_trait::async_trait;
use std::future::Future;
use thiserror::Error;

/// Expected failure of the underlying action.
///
/// The invoker returns this for conditions the provider reports in the
/// normal course of business (rejected request, provider-side rate limit).
/// Truly unexpected faults should not be mapped into this type; they are
/// the calling layer's problem.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum InvokeError {
    /// The provider rejected the request with a message that is safe to
    /// show to the user verbatim.
    #[error("{0}")]
    Rejected(String),

    /// The action failed with no detail suitable for display.
    #[error("failed to resend email")]
    Opaque,
}

impl InvokeError {
    /// The message to surface to the user for this failure.
    ///
    /// Provider messages are shown verbatim; opaque failures fall back to
    /// generic copy.
    pub fn user_message(&self) -> String {
        match self {
            Self::Rejected(message) => message.clone(),
            Self::Opaque => "Failed to resend email. Please try again.".to_string(),
        }
    }
}

/// Capability that performs the side-effecting action being gated.
///
/// Takes no arguments - everything the action needs is captured at
/// construction time. Resolves to the provider's confirmation message on
/// success, or an [`InvokeError`] for expected failures. Implementations
/// must not panic for expected failure conditions.
///
/// # Example
///
/// ```rust
/// use resend_gate::{InvokeError, Invoker};
/// use async_trait::async_trait;
///
/// struct ConfirmationEmail {
///     email: String,
/// }
///
/// #[async_trait]
/// impl Invoker for ConfirmationEmail {
///     async fn invoke(&self) -> Result<String, InvokeError> {
///         // Call the auth provider's resend endpoint with self.email here.
///         let _ = &self.email;
///         Ok("Confirmation email resent. Please check your inbox.".to_string())
///     }
/// }
/// ```
#[async_trait]
pub trait Invoker: Send + Sync {
    /// Perform the action once.
    async fn invoke(&self) -> Result<String, InvokeError>;
}

/// Adapter that turns an async closure into an [`Invoker`].
///
/// # Example
///
/// ```rust
/// use resend_gate::{FnInvoker, InvokeError};
///
/// let invoker = FnInvoker::new(|| async {
///     Ok::<String, InvokeError>("Sent.".to_string())
/// });
/// ```
pub struct FnInvoker<F> {
    f: F,
}

impl<F> FnInvoker<F> {
    /// Wrap a closure producing the invocation future.
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

#[async_trait]
impl<F, Fut> Invoker for FnInvoker<F>
where
    F: Fn() -> Fut + Send + Sync,
    Fut: Future<Output = Result<String, InvokeError>> + Send,
{
    async fn invoke(&self) -> Result<String, InvokeError> {
        (self.f)().await
    }
}
