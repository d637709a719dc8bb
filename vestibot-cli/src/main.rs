//! `vestibot` command-line launcher.

use std::sync::Arc;

use clap::{Parser, Subcommand};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use tracing::error;
use tracing_subscriber::EnvFilter;
use vestibot_chat::{Chatbot, Config};

#[derive(Parser)]
#[command(name = "vestibot", about = "RAG chatbot over the Unicamp vestibular regulations")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch the source regulations, build the vector index, and persist it.
    Ingest {
        /// Source page to index (defaults to SOURCE_URL).
        #[arg(long)]
        url: Option<String>,
        /// CSS class selecting content blocks (defaults to CONTENT_CLASS).
        #[arg(long)]
        content_class: Option<String>,
    },
    /// Interactive question loop; an empty line exits.
    Chat,
    /// Web UI with a transcript and a question form.
    Serve {
        #[arg(long, default_value_t = 8080)]
        port: u16,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let mut config = Config::from_env()?;

    match cli.command {
        Commands::Ingest { url, content_class } => {
            if let Some(url) = url {
                config.source_url = url;
            }
            if let Some(content_class) = content_class {
                config.content_class = content_class;
            }
            let report = vestibot_chat::ingest(&config).await?;
            println!(
                "Indexed {} chunks from {} documents into {}",
                report.chunks,
                report.documents,
                config.index_dir.display()
            );
        }
        Commands::Chat => run_chat(Chatbot::from_config(config)).await?,
        Commands::Serve { port } => {
            vestibot_server::serve(Arc::new(Chatbot::from_config(config)), port).await?;
        }
    }

    Ok(())
}

/// Read questions from stdin until an empty line, answering each one.
/// Provider failures print a fallback line and keep the loop alive.
async fn run_chat(chatbot: Chatbot) -> anyhow::Result<()> {
    let mut editor = DefaultEditor::new()?;

    loop {
        match editor.readline("Pergunta: ") {
            Ok(line) => {
                let question = line.trim();
                if question.is_empty() {
                    break;
                }
                match chatbot.answer(question).await {
                    Ok(answer) => println!("{answer}"),
                    Err(e) => {
                        error!(error = %e, "failed to answer");
                        println!("Não consegui responder agora: {e}");
                    }
                }
            }
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(e) => return Err(e.into()),
        }
    }

    Ok(())
}
