//! Durable vector store persisted as a single JSON index file.
//!
//! [`DiskVectorStore`] keeps entries in insertion order in memory and
//! serializes them to `<dir>/index.json`. Persistence writes a temp file
//! and renames it over the index, so an interrupted flush never leaves a
//! half-written index behind.

use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::document::{Chunk, ScoredChunk};
use crate::embedding::EmbeddingProvider;
use crate::error::{RagError, Result};
use crate::vectorstore::VectorStore;

const INDEX_FILE: &str = "index.json";

/// An embedding plus the chunk it was computed from. Append-only during
/// ingestion, read-only afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct IndexEntry {
    embedding: Vec<f32>,
    chunk: Chunk,
}

/// On-disk index format.
#[derive(Serialize, Deserialize)]
struct IndexFile {
    dimensions: usize,
    entries: Vec<IndexEntry>,
}

/// A cosine-similarity vector store backed by a JSON file on disk.
pub struct DiskVectorStore {
    dir: PathBuf,
    embedder: Arc<dyn EmbeddingProvider>,
    dimensions: usize,
    entries: RwLock<Vec<IndexEntry>>,
}

impl std::fmt::Debug for DiskVectorStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiskVectorStore")
            .field("dir", &self.dir)
            .field("dimensions", &self.dimensions)
            .finish_non_exhaustive()
    }
}

impl DiskVectorStore {
    /// Create an empty store bound to `dir`.
    ///
    /// This is an ingestion-time operation; query-time callers should use
    /// [`load`](DiskVectorStore::load) so a missing index is an error
    /// instead of a silently empty store.
    pub fn open(dir: impl Into<PathBuf>, embedder: Arc<dyn EmbeddingProvider>) -> Self {
        let dimensions = embedder.dimensions();
        Self { dir: dir.into(), embedder, dimensions, entries: RwLock::new(Vec::new()) }
    }

    /// Reconstruct a queryable store from durable storage.
    ///
    /// # Errors
    ///
    /// - [`RagError::StoreNotFound`] if `dir` holds no index file.
    /// - [`RagError::Config`] if the persisted dimensionality differs from
    ///   what `embedder` produces.
    pub async fn load(dir: impl Into<PathBuf>, embedder: Arc<dyn EmbeddingProvider>) -> Result<Self> {
        let dir = dir.into();
        let path = dir.join(INDEX_FILE);

        let raw = match tokio::fs::read(&path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(RagError::StoreNotFound { path: dir });
            }
            Err(e) => return Err(e.into()),
        };

        let index: IndexFile = serde_json::from_slice(&raw)?;
        if index.dimensions != embedder.dimensions() {
            return Err(RagError::Config(format!(
                "index at {} stores {}-dimensional embeddings but the provider produces {}",
                dir.display(),
                index.dimensions,
                embedder.dimensions()
            )));
        }

        info!(path = %path.display(), entries = index.entries.len(), "loaded vector index");
        Ok(Self {
            dir,
            embedder,
            dimensions: index.dimensions,
            entries: RwLock::new(index.entries),
        })
    }

    /// Number of entries currently in the index.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    /// Whether the index holds no entries.
    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

/// Compute cosine similarity between two vectors.
///
/// Returns 0.0 if either vector has zero magnitude.
fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    let dot: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a * norm_b)
}

#[async_trait]
impl VectorStore for DiskVectorStore {
    async fn add(&self, chunks: &[Chunk]) -> Result<()> {
        if chunks.is_empty() {
            return Ok(());
        }

        let texts: Vec<&str> = chunks.iter().map(|c| c.content.as_str()).collect();

        // Embed the whole batch before touching the index so a provider
        // failure leaves the store unchanged.
        let embeddings = self.embedder.embed_batch(&texts).await?;

        for embedding in &embeddings {
            if embedding.len() != self.dimensions {
                return Err(RagError::Config(format!(
                    "embedding provider returned {} dimensions, index expects {}",
                    embedding.len(),
                    self.dimensions
                )));
            }
        }

        let mut entries = self.entries.write().await;
        entries.extend(
            embeddings
                .into_iter()
                .zip(chunks.iter().cloned())
                .map(|(embedding, chunk)| IndexEntry { embedding, chunk }),
        );
        debug!(added = chunks.len(), total = entries.len(), "appended chunks to index");
        Ok(())
    }

    async fn persist(&self) -> Result<()> {
        let json = {
            let entries = self.entries.read().await;
            serde_json::to_vec(&IndexFile {
                dimensions: self.dimensions,
                entries: entries.clone(),
            })?
        };

        tokio::fs::create_dir_all(&self.dir).await?;
        let path = self.dir.join(INDEX_FILE);
        let tmp = self.dir.join(format!("{INDEX_FILE}.tmp"));
        tokio::fs::write(&tmp, &json).await?;
        tokio::fs::rename(&tmp, &path).await?;

        info!(path = %path.display(), "persisted vector index");
        Ok(())
    }

    async fn query(&self, text: &str, top_k: usize) -> Result<Vec<ScoredChunk>> {
        let query_embedding = self.embedder.embed(text).await?;
        if query_embedding.len() != self.dimensions {
            return Err(RagError::Config(format!(
                "query embedding has {} dimensions, index expects {}",
                query_embedding.len(),
                self.dimensions
            )));
        }

        let entries = self.entries.read().await;
        let mut scored: Vec<ScoredChunk> = entries
            .iter()
            .map(|entry| ScoredChunk {
                chunk: entry.chunk.clone(),
                score: cosine_similarity(&entry.embedding, &query_embedding),
            })
            .collect();

        // Stable sort keeps insertion order for equal scores.
        scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
        scored.truncate(top_k);
        Ok(scored)
    }
}
