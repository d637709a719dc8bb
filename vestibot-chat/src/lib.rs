//! # vestibot-chat
//!
//! RAG chain assembly and the chatbot facade.
//!
//! ## Overview
//!
//! This crate composes the retrieval core (`vestibot-rag`) with an LLM
//! provider (`vestibot-model`):
//!
//! - [`PromptTemplate`] - the two-slot prompt contract (context + input)
//! - [`RagChain`] - retrieve → render → generate, immutable and shared
//! - [`Chatbot`] - cached facade; chain construction happens exactly once
//! - [`ingest`] - one-shot fetch → chunk → embed → persist
//! - [`Config`] - environment-sourced settings, validated at startup
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use vestibot_chat::{Chatbot, Config};
//!
//! let config = Config::from_env()?;
//! let chatbot = Chatbot::from_config(config);
//! let answer = chatbot.answer("Quando abrem as inscrições?").await?;
//! ```

pub mod chain;
pub mod chatbot;
pub mod config;
pub mod error;
pub mod ingest;
pub mod prompt;

pub use chain::RagChain;
pub use chatbot::Chatbot;
pub use config::Config;
pub use error::{ChatError, Result};
pub use ingest::{IngestReport, ingest};
pub use prompt::PromptTemplate;
