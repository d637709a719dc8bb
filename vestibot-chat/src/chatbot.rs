//! Chatbot facade with one-time chain construction.
//!
//! The facade is the process's composition point: binaries build one
//! [`Chatbot`] and pass it (behind an `Arc`) to whatever frontend needs
//! it. The expensive parts (loading the index, constructing provider
//! clients) happen lazily on the first `answer()` call and exactly once,
//! even when concurrent callers race on that first call.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use tokio::sync::OnceCell;
use tracing::info;
use vestibot_model::{GroqClient, Llm};
use vestibot_rag::{DiskVectorStore, EmbeddingProvider};

use crate::chain::RagChain;
use crate::config::Config;
use crate::error::Result;
use crate::prompt::PromptTemplate;

type ChainFuture = Pin<Box<dyn Future<Output = Result<RagChain>> + Send>>;

/// Produces the chain on first use. Boxed so tests can substitute fakes
/// and count constructions.
type ChainBuilder = Box<dyn Fn() -> ChainFuture + Send + Sync>;

/// Cached entry point exposing `answer(query) -> String`.
///
/// Construction of the underlying vector store, LLM client, and chain is
/// deferred to the first call and guarded by a [`OnceCell`], so exactly
/// one construction occurs under concurrent first calls and every caller
/// observes the same chain for the remainder of the process lifetime.
/// There is no invalidation and no TTL.
pub struct Chatbot {
    chain: OnceCell<RagChain>,
    builder: ChainBuilder,
}

impl Chatbot {
    /// Create a facade that builds its chain from `config`.
    ///
    /// Querying requires a previously persisted index: a missing index
    /// directory fails with
    /// [`RagError::StoreNotFound`](vestibot_rag::RagError::StoreNotFound)
    /// rather than silently answering from an empty store.
    pub fn from_config(config: Config) -> Self {
        Self::with_builder(Box::new(move || {
            let config = config.clone();
            Box::pin(async move { build_chain(&config).await })
        }))
    }

    /// Create a facade with a custom chain builder. Used by tests.
    pub fn with_builder(builder: ChainBuilder) -> Self {
        Self { chain: OnceCell::new(), builder }
    }

    /// Answer a query, constructing the chain on first use.
    pub async fn answer(&self, query: &str) -> Result<String> {
        let chain = self.chain.get_or_try_init(|| (self.builder)()).await?;
        chain.invoke(query).await
    }
}

/// Wire up the production chain: embedding provider, persisted store,
/// Groq client, prompt template.
async fn build_chain(config: &Config) -> Result<RagChain> {
    let embedder: Arc<dyn EmbeddingProvider> = Arc::new(config.embedding_provider()?);
    let store = DiskVectorStore::load(&config.index_dir, embedder).await?;
    let llm: Arc<dyn Llm> = Arc::new(GroqClient::new(&config.groq_api_key, &config.llm_model)?);
    let template = PromptTemplate::new(&config.answer_language);

    let chain = RagChain::build(Arc::new(store), llm, template, config.top_k)?;
    info!(index_dir = %config.index_dir.display(), top_k = config.top_k, "RAG chain constructed");
    Ok(chain)
}
