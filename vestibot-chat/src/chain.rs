//! RAG chain assembly: retrieve, render, generate.

use std::sync::Arc;

use tracing::info;
use vestibot_model::Llm;
use vestibot_rag::{RagError, VectorStore};

use crate::error::Result;
use crate::prompt::PromptTemplate;

/// Delimiter between retrieved chunk contents in the rendered context.
const CONTEXT_DELIMITER: &str = "\n\n";

/// The retrieve-then-generate pipeline.
///
/// Immutable after construction and safely shared by concurrent callers:
/// it closes over a read-only vector store, an LLM handle, and a fixed
/// prompt template. Built once per process, see
/// [`Chatbot`](crate::Chatbot).
pub struct RagChain {
    store: Arc<dyn VectorStore>,
    llm: Arc<dyn Llm>,
    template: PromptTemplate,
    top_k: usize,
}

impl RagChain {
    /// Assemble a chain.
    ///
    /// # Errors
    ///
    /// Returns [`RagError::Config`] if `top_k` is zero.
    pub fn build(
        store: Arc<dyn VectorStore>,
        llm: Arc<dyn Llm>,
        template: PromptTemplate,
        top_k: usize,
    ) -> Result<Self> {
        if top_k == 0 {
            return Err(RagError::Config("top_k must be greater than zero".to_string()).into());
        }
        Ok(Self { store, llm, template, top_k })
    }

    /// Answer a query: retrieve the top-k chunks, render the prompt, and
    /// call the LLM. Strictly sequential; no retrieved content is mutated.
    ///
    /// Zero retrieved chunks still invoke the LLM with an empty context:
    /// the prompt contract makes the model state that it does not know,
    /// which keeps behavior uniform instead of special-casing an empty
    /// index here.
    pub async fn invoke(&self, query: &str) -> Result<String> {
        let results = self.store.query(query, self.top_k).await?;

        let context = results
            .iter()
            .map(|r| r.chunk.content.as_str())
            .collect::<Vec<_>>()
            .join(CONTEXT_DELIMITER);

        let request = self.template.render(&context, query);
        let answer = self.llm.generate(&request).await?;

        info!(retrieved = results.len(), answer_len = answer.len(), "query answered");
        Ok(answer)
    }
}
