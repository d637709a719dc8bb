//! Mock LLM for testing.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::error::Result;
use crate::llm::{GenerateRequest, Llm};

/// An [`Llm`] backed by a caller-supplied function.
///
/// Tests use it to inspect the rendered prompt (e.g. echo the context
/// back) and to count generation calls.
pub struct MockLlm {
    f: Box<dyn Fn(&GenerateRequest) -> String + Send + Sync>,
    calls: AtomicUsize,
}

impl MockLlm {
    /// Create a mock whose completions come from `f`.
    pub fn new(f: impl Fn(&GenerateRequest) -> String + Send + Sync + 'static) -> Self {
        Self { f: Box::new(f), calls: AtomicUsize::new(0) }
    }

    /// A mock that echoes the full system prompt (context included).
    pub fn echo() -> Self {
        Self::new(|request| request.system.clone())
    }

    /// Number of `generate` calls made so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Llm for MockLlm {
    async fn generate(&self, request: &GenerateRequest) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok((self.f)(request))
    }
}
