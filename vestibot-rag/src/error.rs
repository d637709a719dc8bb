//! Error types for the `vestibot-rag` crate.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Classifies a provider failure so callers can pick a reaction
/// (re-authenticate, back off, or give up).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderErrorKind {
    /// Credentials were rejected by the provider.
    Auth,
    /// The provider throttled the request.
    RateLimited,
    /// Transport-level failure (DNS, connect, timeout).
    Network,
    /// Any other provider-side error.
    Api,
}

impl fmt::Display for ProviderErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Auth => write!(f, "auth"),
            Self::RateLimited => write!(f, "rate-limited"),
            Self::Network => write!(f, "network"),
            Self::Api => write!(f, "api"),
        }
    }
}

/// Errors that can occur in retrieval operations.
#[derive(Debug, Error)]
pub enum RagError {
    /// A configuration validation error. Fatal, never retried.
    #[error("Configuration error: {0}")]
    Config(String),

    /// No persisted vector index exists at the given location.
    #[error("no vector index found at {path}; run ingestion first", path = .path.display())]
    StoreNotFound {
        /// The index directory that was probed.
        path: PathBuf,
    },

    /// An embedding provider call failed.
    #[error("Provider error ({provider}, {kind}): {message}")]
    Provider {
        /// What class of failure this is.
        kind: ProviderErrorKind,
        /// The provider that produced the error.
        provider: String,
        /// A description of the failure.
        message: String,
    },

    /// A batch ingestion failure. The store is left unchanged.
    #[error("Ingestion error: {0}")]
    Ingestion(String),

    /// An I/O error while persisting or loading the index.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// A serialization error in the index file.
    #[error(transparent)]
    Serde(#[from] serde_json::Error),
}

/// A convenience result type for retrieval operations.
pub type Result<T> = std::result::Result<T, RagError>;
