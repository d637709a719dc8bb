//! Error types for the `vestibot-model` crate.

use thiserror::Error;

/// Errors that can occur when calling an LLM provider.
///
/// The kinds are deliberately distinct so calling UIs can choose
/// appropriate user-facing text instead of collapsing everything into a
/// generic failure.
#[derive(Debug, Error)]
pub enum ModelError {
    /// Credentials were rejected by the provider.
    #[error("Authentication failed ({provider}): {message}")]
    Auth {
        /// The provider that produced the error.
        provider: String,
        /// A description of the failure.
        message: String,
    },

    /// The provider throttled the request.
    #[error("Rate limited ({provider}): {message}")]
    RateLimited {
        /// The provider that produced the error.
        provider: String,
        /// A description of the failure.
        message: String,
    },

    /// Transport-level failure (DNS, connect, timeout).
    #[error("Network error ({provider}): {message}")]
    Network {
        /// The provider that produced the error.
        provider: String,
        /// A description of the failure.
        message: String,
    },

    /// Any other provider-side error.
    #[error("API error ({provider}): {message}")]
    Api {
        /// The provider that produced the error.
        provider: String,
        /// A description of the failure.
        message: String,
    },
}

/// A convenience result type for model operations.
pub type Result<T> = std::result::Result<T, ModelError>;
