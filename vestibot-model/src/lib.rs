//! # vestibot-model
//!
//! LLM provider integrations for vestibot.
//!
//! ## Overview
//!
//! - [`Llm`] - capability trait consumed by the RAG chain
//! - [`GroqClient`] - Groq's OpenAI-compatible chat-completions API
//! - [`MockLlm`] - deterministic test double
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use vestibot_model::{GenerateRequest, GroqClient, Llm};
//!
//! let llm = GroqClient::new(std::env::var("GROQ_API_KEY")?, "llama3-70b-8192")?;
//! let answer = llm.generate(&GenerateRequest {
//!     system: "Answer concisely.".into(),
//!     user: "Quando abrem as inscrições?".into(),
//! }).await?;
//! ```

pub mod error;
pub mod groq;
pub mod llm;
pub mod mock;

pub use error::{ModelError, Result};
pub use groq::{DEFAULT_MODEL, GroqClient};
pub use llm::{GenerateRequest, Llm};
pub use mock::MockLlm;
