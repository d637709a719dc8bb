//! HTTP embedding provider for OpenAI-compatible `/v1/embeddings` endpoints.
//!
//! Works against any server speaking the OpenAI embeddings wire format,
//! including a local `text-embeddings-inference` instance serving a
//! sentence-transformers model.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::embedding::EmbeddingProvider;
use crate::error::{ProviderErrorKind, RagError, Result};

/// The default embeddings endpoint (a local text-embeddings-inference server).
pub const DEFAULT_EMBEDDINGS_URL: &str = "http://localhost:8081/v1/embeddings";

/// The default embedding model.
pub const DEFAULT_EMBEDDINGS_MODEL: &str = "sentence-transformers/all-MiniLM-L6-v2";

/// The dimensionality of `all-MiniLM-L6-v2` embeddings.
pub const DEFAULT_EMBEDDINGS_DIMENSIONS: usize = 384;

/// An [`EmbeddingProvider`] backed by an OpenAI-compatible embeddings API.
pub struct HttpEmbeddingProvider {
    client: reqwest::Client,
    url: String,
    model: String,
    api_key: Option<String>,
    dimensions: usize,
}

impl HttpEmbeddingProvider {
    /// Create a provider for the given endpoint, model, and dimensionality.
    ///
    /// # Errors
    ///
    /// Returns [`RagError::Config`] if `dimensions` is zero.
    pub fn new(
        url: impl Into<String>,
        model: impl Into<String>,
        dimensions: usize,
    ) -> Result<Self> {
        if dimensions == 0 {
            return Err(RagError::Config(
                "embedding dimensions must be greater than zero".to_string(),
            ));
        }
        Ok(Self {
            client: reqwest::Client::new(),
            url: url.into(),
            model: model.into(),
            api_key: None,
            dimensions,
        })
    }

    /// Set a bearer token for endpoints that require one.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }
}

// ── wire types ─────────────────────────────────────────────────────

#[derive(Serialize)]
struct EmbeddingRequest<'a> {
    model: &'a str,
    input: Vec<&'a str>,
}

#[derive(Deserialize)]
struct EmbeddingResponse {
    data: Vec<EmbeddingData>,
}

#[derive(Deserialize)]
struct EmbeddingData {
    embedding: Vec<f32>,
}

fn kind_for_status(status: reqwest::StatusCode) -> ProviderErrorKind {
    match status.as_u16() {
        401 | 403 => ProviderErrorKind::Auth,
        429 => ProviderErrorKind::RateLimited,
        _ => ProviderErrorKind::Api,
    }
}

#[async_trait]
impl EmbeddingProvider for HttpEmbeddingProvider {
    async fn embed(&self, text: &str) -> Result<Vec<f32>> {
        let results = self.embed_batch(&[text]).await?;
        results.into_iter().next().ok_or_else(|| RagError::Provider {
            kind: ProviderErrorKind::Api,
            provider: "embeddings".to_string(),
            message: "API returned an empty response".to_string(),
        })
    }

    async fn embed_batch(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }

        debug!(batch_size = texts.len(), model = %self.model, "embedding batch");

        let body = EmbeddingRequest { model: &self.model, input: texts.to_vec() };
        let mut request = self.client.post(&self.url).json(&body);
        if let Some(api_key) = &self.api_key {
            request = request.bearer_auth(api_key);
        }

        let response = request.send().await.map_err(|e| {
            error!(url = %self.url, error = %e, "embedding request failed");
            RagError::Provider {
                kind: ProviderErrorKind::Network,
                provider: "embeddings".to_string(),
                message: format!("request failed: {e}"),
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            error!(%status, "embeddings API error");
            return Err(RagError::Provider {
                kind: kind_for_status(status),
                provider: "embeddings".to_string(),
                message: format!("API returned {status}: {detail}"),
            });
        }

        let parsed: EmbeddingResponse = response.json().await.map_err(|e| RagError::Provider {
            kind: ProviderErrorKind::Api,
            provider: "embeddings".to_string(),
            message: format!("failed to parse response: {e}"),
        })?;

        Ok(parsed.data.into_iter().map(|d| d.embedding).collect())
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }
}
