//! LLM provider trait.

use async_trait::async_trait;

use crate::error::Result;

/// A rendered prompt: a fixed system instruction plus the user turn.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerateRequest {
    /// System instruction, including any inlined context.
    pub system: String,
    /// The user's input.
    pub user: String,
}

/// A provider that generates text from a rendered prompt.
///
/// Implementations must be safe for concurrent invocation: no shared
/// mutable state between callers.
#[async_trait]
pub trait Llm: Send + Sync {
    /// Generate a completion for the given request.
    async fn generate(&self, request: &GenerateRequest) -> Result<String>;
}
