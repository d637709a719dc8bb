//! Groq chat-completions client.
//!
//! Groq exposes an OpenAI-compatible `/chat/completions` endpoint, so the
//! wire types here follow that format. Generation runs at temperature 0:
//! answers must stay grounded in the retrieved context, not creative.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::error::{ModelError, Result};
use crate::llm::{GenerateRequest, Llm};

/// The Groq chat-completions endpoint.
pub const GROQ_CHAT_URL: &str = "https://api.groq.com/openai/v1/chat/completions";

/// The default Groq model.
pub const DEFAULT_MODEL: &str = "llama3-70b-8192";

/// An [`Llm`] backed by the Groq API.
pub struct GroqClient {
    client: reqwest::Client,
    url: String,
    api_key: String,
    model: String,
}

impl GroqClient {
    /// Create a client with the given API key and model.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::Auth`] if the key is empty; a missing
    /// credential should fail at construction, not at the first query.
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(ModelError::Auth {
                provider: "Groq".to_string(),
                message: "API key must not be empty".to_string(),
            });
        }
        Ok(Self {
            client: reqwest::Client::new(),
            url: GROQ_CHAT_URL.to_string(),
            api_key,
            model: model.into(),
        })
    }

    /// Point the client at a different OpenAI-compatible endpoint.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }
}

// ── wire types ─────────────────────────────────────────────────────

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<Message<'a>>,
    temperature: f32,
}

#[derive(Serialize)]
struct Message<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: String,
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: ErrorDetail,
}

#[derive(Deserialize)]
struct ErrorDetail {
    message: String,
}

#[async_trait]
impl Llm for GroqClient {
    async fn generate(&self, request: &GenerateRequest) -> Result<String> {
        debug!(model = %self.model, user_len = request.user.len(), "generating completion");

        let body = ChatRequest {
            model: &self.model,
            messages: vec![
                Message { role: "system", content: &request.system },
                Message { role: "user", content: &request.user },
            ],
            temperature: 0.0,
        };

        let response = self
            .client
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                error!(provider = "Groq", error = %e, "request failed");
                ModelError::Network {
                    provider: "Groq".to_string(),
                    message: format!("request failed: {e}"),
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let detail = serde_json::from_str::<ErrorResponse>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            error!(provider = "Groq", %status, "API error");

            let provider = "Groq".to_string();
            let message = format!("API returned {status}: {detail}");
            return Err(match status.as_u16() {
                401 | 403 => ModelError::Auth { provider, message },
                429 => ModelError::RateLimited { provider, message },
                _ => ModelError::Api { provider, message },
            });
        }

        let chat: ChatResponse = response.json().await.map_err(|e| ModelError::Api {
            provider: "Groq".to_string(),
            message: format!("failed to parse response: {e}"),
        })?;

        chat.choices.into_iter().next().map(|c| c.message.content).ok_or_else(|| {
            ModelError::Api {
                provider: "Groq".to_string(),
                message: "API returned no choices".to_string(),
            }
        })
    }
}
