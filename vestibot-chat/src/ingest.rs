//! One-shot ingestion: fetch, chunk, embed, persist.

use std::sync::Arc;

use tracing::info;
use vestibot_rag::{
    DiskVectorStore, EmbeddingProvider, SlidingWindowChunker, VectorStore, WebLoader,
};

use crate::config::Config;
use crate::error::Result;

/// Counts reported after a completed ingestion.
#[derive(Debug, Clone, Copy)]
pub struct IngestReport {
    /// Documents extracted from the source page.
    pub documents: usize,
    /// Chunks embedded and persisted.
    pub chunks: usize,
}

/// Build and persist the vector index for the configured source.
///
/// Chunker parameters are validated before anything else runs, so an
/// invalid `chunk_size`/`chunk_overlap` combination fails with zero
/// network traffic and zero store mutations. Any failure during the
/// batch leaves no partial index behind: the store is only persisted
/// after every chunk has been embedded and appended.
pub async fn ingest(config: &Config) -> Result<IngestReport> {
    let chunker = SlidingWindowChunker::new(config.chunk_size, config.chunk_overlap)?;

    let loader = WebLoader::new(&config.source_url, &config.content_class);
    let documents = loader.load().await?;
    let chunks = chunker.split(&documents);

    let embedder: Arc<dyn EmbeddingProvider> = Arc::new(config.embedding_provider()?);
    let store = DiskVectorStore::open(&config.index_dir, embedder);
    store.add(&chunks).await?;
    store.persist().await?;

    let report = IngestReport { documents: documents.len(), chunks: chunks.len() };
    info!(
        documents = report.documents,
        chunks = report.chunks,
        index_dir = %config.index_dir.display(),
        "ingestion complete"
    );
    Ok(report)
}
