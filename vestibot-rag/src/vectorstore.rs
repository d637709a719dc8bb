//! Vector store trait for storing and searching chunk embeddings.

use async_trait::async_trait;

use crate::document::{Chunk, ScoredChunk};
use crate::error::Result;

/// A durable index of chunk embeddings with similarity search.
///
/// The store owns its [`EmbeddingProvider`](crate::EmbeddingProvider):
/// chunks are embedded on [`add`](VectorStore::add) and query text is
/// embedded with the same provider on [`query`](VectorStore::query), so
/// the two embedding spaces always match.
#[async_trait]
pub trait VectorStore: Send + Sync {
    /// Embed and append a batch of chunks.
    ///
    /// All-or-nothing: any embedding failure aborts the batch and leaves
    /// the store unchanged, including previously persisted entries.
    async fn add(&self, chunks: &[Chunk]) -> Result<()>;

    /// Flush the index to durable storage. Idempotent.
    async fn persist(&self) -> Result<()>;

    /// Embed `text` and return the `top_k` most similar chunks, ranked by
    /// descending similarity, ties broken by insertion order
    /// (earliest-ingested wins). An empty store returns an empty result.
    async fn query(&self, text: &str, top_k: usize) -> Result<Vec<ScoredChunk>>;
}
