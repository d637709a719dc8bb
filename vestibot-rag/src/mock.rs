//! Deterministic embedding provider for tests.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::embedding::EmbeddingProvider;
use crate::error::{ProviderErrorKind, RagError, Result};

/// An [`EmbeddingProvider`] backed by a caller-supplied function.
///
/// Tests use it to produce known vectors, count embedding calls, and
/// inject failures partway through a batch.
///
/// # Example
///
/// ```rust,ignore
/// let embedder = MockEmbedder::new(3, |text| {
///     if text.contains("march") { vec![1.0, 0.0, 0.0] } else { vec![0.0, 1.0, 0.0] }
/// });
/// ```
pub struct MockEmbedder {
    dimensions: usize,
    f: Box<dyn Fn(&str) -> Vec<f32> + Send + Sync>,
    fail_after: Option<usize>,
    calls: AtomicUsize,
}

impl MockEmbedder {
    /// Create a mock producing `dimensions`-sized vectors via `f`.
    pub fn new(dimensions: usize, f: impl Fn(&str) -> Vec<f32> + Send + Sync + 'static) -> Self {
        Self { dimensions, f: Box::new(f), fail_after: None, calls: AtomicUsize::new(0) }
    }

    /// Fail with a provider error after `n` successful `embed` calls.
    pub fn failing_after(mut self, n: usize) -> Self {
        self.fail_after = Some(n);
        self
    }

    /// Number of `embed` calls made so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl EmbeddingProvider for MockEmbedder {
    async fn embed(&self, text: &str) -> Result<Vec<f32>> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(limit) = self.fail_after {
            if call >= limit {
                return Err(RagError::Provider {
                    kind: ProviderErrorKind::Api,
                    provider: "Mock".to_string(),
                    message: format!("simulated failure on call {call}"),
                });
            }
        }
        Ok((self.f)(text))
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }
}
