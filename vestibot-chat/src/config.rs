//! Environment-sourced configuration.

use std::path::PathBuf;

use vestibot_rag::http::{
    DEFAULT_EMBEDDINGS_DIMENSIONS, DEFAULT_EMBEDDINGS_MODEL, DEFAULT_EMBEDDINGS_URL,
};
use vestibot_rag::{DEFAULT_CHUNK_OVERLAP, DEFAULT_CHUNK_SIZE, HttpEmbeddingProvider, RagError};

use crate::error::Result;

/// Default number of chunks retrieved per query.
pub const DEFAULT_TOP_K: usize = 4;

/// The admission regulations page indexed by default.
pub const DEFAULT_SOURCE_URL: &str = "https://www.pg.unicamp.br/norma/31594/0";

/// The CSS class wrapping regulation sections on the source page.
pub const DEFAULT_CONTENT_CLASS: &str = "card-body";

/// Runtime configuration, read once from the environment at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Groq API key (`GROQ_API_KEY`). Required.
    pub groq_api_key: String,
    /// Groq model name (`LLM_MODEL`).
    pub llm_model: String,
    /// Directory holding the persisted vector index (`INDEX_DIR`).
    pub index_dir: PathBuf,
    /// Chunk window size in characters (`CHUNK_SIZE`).
    pub chunk_size: usize,
    /// Chunk overlap in characters (`CHUNK_OVERLAP`).
    pub chunk_overlap: usize,
    /// Number of chunks retrieved per query (`TOP_K`).
    pub top_k: usize,
    /// Output language for answers (`ANSWER_LANGUAGE`).
    pub answer_language: String,
    /// Embeddings endpoint URL (`EMBEDDINGS_URL`).
    pub embeddings_url: String,
    /// Embeddings model name (`EMBEDDINGS_MODEL`).
    pub embeddings_model: String,
    /// Embedding dimensionality (`EMBEDDINGS_DIMENSIONS`).
    pub embeddings_dimensions: usize,
    /// Optional bearer token for the embeddings endpoint (`EMBEDDINGS_API_KEY`).
    pub embeddings_api_key: Option<String>,
    /// Page to ingest (`SOURCE_URL`).
    pub source_url: String,
    /// CSS class selecting content blocks on the source page (`CONTENT_CLASS`).
    pub content_class: String,
}

impl Config {
    /// Read configuration from the environment.
    ///
    /// # Errors
    ///
    /// Returns [`RagError::Config`] if `GROQ_API_KEY` is missing or any
    /// numeric option fails to parse. Credentials are checked here, at
    /// startup, not at the first query.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            groq_api_key: required("GROQ_API_KEY")?,
            llm_model: optional("LLM_MODEL", vestibot_model::DEFAULT_MODEL),
            index_dir: PathBuf::from(optional("INDEX_DIR", "./data")),
            chunk_size: optional_usize("CHUNK_SIZE", DEFAULT_CHUNK_SIZE)?,
            chunk_overlap: optional_usize("CHUNK_OVERLAP", DEFAULT_CHUNK_OVERLAP)?,
            top_k: optional_usize("TOP_K", DEFAULT_TOP_K)?,
            answer_language: optional("ANSWER_LANGUAGE", "Portuguese"),
            embeddings_url: optional("EMBEDDINGS_URL", DEFAULT_EMBEDDINGS_URL),
            embeddings_model: optional("EMBEDDINGS_MODEL", DEFAULT_EMBEDDINGS_MODEL),
            embeddings_dimensions: optional_usize(
                "EMBEDDINGS_DIMENSIONS",
                DEFAULT_EMBEDDINGS_DIMENSIONS,
            )?,
            embeddings_api_key: std::env::var("EMBEDDINGS_API_KEY").ok(),
            source_url: optional("SOURCE_URL", DEFAULT_SOURCE_URL),
            content_class: optional("CONTENT_CLASS", DEFAULT_CONTENT_CLASS),
        })
    }

    /// Build the embedding provider this configuration describes.
    ///
    /// The same configuration is used at ingestion and query time, which
    /// keeps the two embedding spaces identical.
    pub fn embedding_provider(&self) -> Result<HttpEmbeddingProvider> {
        let mut provider = HttpEmbeddingProvider::new(
            &self.embeddings_url,
            &self.embeddings_model,
            self.embeddings_dimensions,
        )?;
        if let Some(api_key) = &self.embeddings_api_key {
            provider = provider.with_api_key(api_key);
        }
        Ok(provider)
    }
}

fn required(name: &str) -> Result<String> {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(RagError::Config(format!("{name} must be set")).into()),
    }
}

fn optional(name: &str, default: &str) -> String {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty()).unwrap_or_else(|| default.to_string())
}

fn optional_usize(name: &str, default: usize) -> Result<usize> {
    match std::env::var(name) {
        Ok(value) => value
            .trim()
            .parse()
            .map_err(|_| RagError::Config(format!("{name} must be an integer, got '{value}'")).into()),
        Err(_) => Ok(default),
    }
}
