//! # vestibot-rag
//!
//! Retrieval core for vestibot: document loading, chunking, embeddings,
//! and a persistent vector store with cosine-similarity search.
//!
//! ## Overview
//!
//! Ingestion flows loader → chunker → embedding provider → vector store;
//! at query time the store embeds the query text with the same provider
//! and returns the top-k most similar chunks.
//!
//! - [`WebLoader`] - fetches a page and extracts class-filtered text blocks
//! - [`SlidingWindowChunker`] - overlapping fixed-stride character windows
//! - [`EmbeddingProvider`] - capability trait; [`HttpEmbeddingProvider`]
//!   speaks the OpenAI embeddings wire format, [`MockEmbedder`] is a
//!   deterministic test double
//! - [`VectorStore`] - capability trait; [`DiskVectorStore`] persists a
//!   JSON index supporting `load`/`persist` round-trips
//!
//! ## Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use vestibot_rag::{DiskVectorStore, SlidingWindowChunker, VectorStore, WebLoader};
//!
//! let documents = WebLoader::new(url, "card-body").load().await?;
//! let chunks = SlidingWindowChunker::new(1000, 200)?.split(&documents);
//! let store = DiskVectorStore::open("./data", embedder);
//! store.add(&chunks).await?;
//! store.persist().await?;
//! ```

pub mod chunking;
pub mod disk;
pub mod document;
pub mod embedding;
pub mod error;
pub mod http;
pub mod loader;
pub mod mock;
pub mod vectorstore;

pub use chunking::{DEFAULT_CHUNK_OVERLAP, DEFAULT_CHUNK_SIZE, SlidingWindowChunker};
pub use disk::DiskVectorStore;
pub use document::{Chunk, Document, ScoredChunk};
pub use embedding::EmbeddingProvider;
pub use error::{ProviderErrorKind, RagError, Result};
pub use http::HttpEmbeddingProvider;
pub use loader::WebLoader;
pub use mock::MockEmbedder;
pub use vectorstore::VectorStore;
