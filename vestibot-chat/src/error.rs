//! Error type unifying the retrieval and generation sides.

use thiserror::Error;
use vestibot_model::ModelError;
use vestibot_rag::RagError;

/// Errors surfaced by the chatbot facade.
///
/// Both sides keep their distinct kinds, so UIs can match on
/// configuration errors, a missing store, or provider failures and pick
/// appropriate user-facing text.
#[derive(Debug, Error)]
pub enum ChatError {
    /// A retrieval-side error (config, store, embedding provider).
    #[error(transparent)]
    Rag(#[from] RagError),

    /// A generation-side error (LLM provider).
    #[error(transparent)]
    Model(#[from] ModelError),
}

/// A convenience result type for chat operations.
pub type Result<T> = std::result::Result<T, ChatError>;
