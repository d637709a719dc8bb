//! # vestibot-server
//!
//! Web UI for vestibot: a single page showing the running transcript of
//! (question, answer) pairs plus a form for the next question. Each form
//! submission triggers exactly one `answer()` call on the shared
//! [`Chatbot`]; provider failures render a fallback message instead of
//! crashing the interaction loop.

use std::sync::Arc;

use axum::extract::{Form, State};
use axum::response::{Html, Redirect};
use axum::routing::{get, post};
use axum::Router;
use serde::Deserialize;
use tokio::sync::Mutex;
use tracing::{error, info};
use vestibot_chat::Chatbot;

/// Message shown when answering fails for any reason.
const FALLBACK_ANSWER: &str = "Não consegui responder agora. Tente novamente em instantes.";

/// One (question, answer) pair in the transcript.
#[derive(Debug, Clone)]
struct Exchange {
    question: String,
    answer: String,
}

/// Shared state: the chatbot facade and the in-memory transcript.
struct AppState {
    chatbot: Arc<Chatbot>,
    transcript: Mutex<Vec<Exchange>>,
}

/// Build the application router around a shared chatbot.
pub fn router(chatbot: Arc<Chatbot>) -> Router {
    let state = Arc::new(AppState { chatbot, transcript: Mutex::new(Vec::new()) });
    Router::new().route("/", get(index)).route("/ask", post(ask)).with_state(state)
}

/// Serve the UI on the given port until the process exits.
pub async fn serve(chatbot: Arc<Chatbot>, port: u16) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    info!(port, "vestibot web UI listening");
    axum::serve(listener, router(chatbot)).await?;
    Ok(())
}

#[derive(Deserialize)]
struct AskForm {
    question: String,
}

async fn index(State(state): State<Arc<AppState>>) -> Html<String> {
    let transcript = state.transcript.lock().await;
    Html(render_page(&transcript))
}

async fn ask(State(state): State<Arc<AppState>>, Form(form): Form<AskForm>) -> Redirect {
    let question = form.question.trim().to_string();
    if question.is_empty() {
        return Redirect::to("/");
    }

    let answer = match state.chatbot.answer(&question).await {
        Ok(answer) => answer,
        Err(e) => {
            error!(error = %e, "failed to answer question");
            FALLBACK_ANSWER.to_string()
        }
    };

    state.transcript.lock().await.push(Exchange { question, answer });
    Redirect::to("/")
}

fn render_page(transcript: &[Exchange]) -> String {
    let mut messages = String::new();
    for exchange in transcript {
        messages.push_str(&format!(
            "<div class=\"msg user\">{}</div>\n<div class=\"msg bot\">{}</div>\n",
            escape_html(&exchange.question),
            escape_html(&exchange.answer),
        ));
    }

    format!(
        r#"<!DOCTYPE html>
<html lang="pt-BR">
<head>
<meta charset="utf-8">
<title>vestibot</title>
<style>
body {{ font-family: sans-serif; max-width: 40rem; margin: 2rem auto; }}
.msg {{ padding: .5rem .75rem; border-radius: .5rem; margin: .25rem 0; }}
.msg.user {{ background: #e3f2fd; text-align: right; }}
.msg.bot {{ background: #f5f5f5; }}
form {{ display: flex; gap: .5rem; margin-top: 1rem; }}
textarea {{ flex: 1; }}
</style>
</head>
<body>
<h1>vestibot</h1>
{messages}
<form method="post" action="/ask">
<textarea name="question" rows="2" placeholder="Digite uma pergunta"></textarea>
<button type="submit">Enviar</button>
</form>
</body>
</html>
"#
    )
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
