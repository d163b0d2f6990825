use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use tfidf_humor::config::Config;
use tfidf_humor::mnemonic;
use tfidf_humor::output::terminal;
use tfidf_humor::pipeline::{self, DEFAULT_DOCUMENTS, DEFAULT_QUESTION};
use tfidf_humor::text::stop_words::StopWordSource;

/// tfidf-humor: find the document that answers your question.
///
/// Weights documents with TF-IDF, ranks them by cosine similarity, and
/// writes a silly sentence for every keyword you matched.
#[derive(Parser)]
#[command(name = "tfidf-humor", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score a question against a set of documents
    Compute {
        /// File with one document per line ("-" reads stdin)
        #[arg(long, conflicts_with = "doc")]
        docs_file: Option<PathBuf>,

        /// A document; repeat for several
        #[arg(long)]
        doc: Vec<String>,

        /// The question to answer
        #[arg(long, short)]
        question: Option<String>,

        /// Stop-word list: builtin, iso or none
        #[arg(long)]
        stop_words: Option<StopWordSource>,

        /// Drop tokens shorter than this
        #[arg(long)]
        min_token_length: Option<usize>,

        /// Seed for mnemonic selection
        #[arg(long)]
        seed: Option<u64>,

        /// Print the report as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Print a mnemonic sentence for a single word
    Mnemonic {
        word: String,

        /// Seed for template selection
        #[arg(long)]
        seed: Option<u64>,

        /// Print every template instead of a random one
        #[arg(long)]
        all: bool,
    },

    /// Serve the JSON API
    #[cfg(feature = "web")]
    Serve {
        /// Port to listen on (default: 3000)
        #[arg(long)]
        port: Option<u16>,

        /// Address to bind (default: 127.0.0.1)
        #[arg(long)]
        bind: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Logs go to stderr so --json output stays clean
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("tfidf_humor=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut config = Config::load()?;

    match cli.command {
        Commands::Compute {
            docs_file,
            doc,
            question,
            stop_words,
            min_token_length,
            seed,
            json,
        } => {
            if let Some(stop_words) = stop_words {
                config.stop_words = stop_words;
            }
            if let Some(min) = min_token_length {
                config.min_token_length = min;
            }
            if seed.is_some() {
                config.seed = seed;
            }

            let documents = match docs_file {
                Some(path) => read_documents(&path)?,
                None if !doc.is_empty() => doc.join("\n"),
                None => DEFAULT_DOCUMENTS.to_string(),
            };
            let question = question.unwrap_or_else(|| DEFAULT_QUESTION.to_string());

            info!(stop_words = %config.stop_words, "Running pipeline");
            let mut rng = mnemonic::seeded_rng(config.seed);
            match pipeline::run(&documents, &question, config.vectorizer_config(), &mut rng) {
                Ok(report) if json => println!("{}", serde_json::to_string_pretty(&report)?),
                Ok(report) => terminal::display_report(&report),
                Err(e) if json => println!(
                    "{}",
                    serde_json::to_string_pretty(&serde_json::json!({ "warning": e.to_string() }))?
                ),
                Err(e) => terminal::display_warning(&e),
            }
        }

        Commands::Mnemonic { word, seed, all } => {
            if all {
                for sentence in mnemonic::render_all(&word) {
                    println!("— {sentence}");
                }
            } else {
                let mut rng = mnemonic::seeded_rng(seed.or(config.seed));
                println!("— {}", mnemonic::generate(&word, &mut rng));
            }
        }

        #[cfg(feature = "web")]
        Commands::Serve { port, bind } => {
            if let Some(port) = port {
                config.port = port;
            }
            if let Some(bind) = bind {
                config.bind = bind;
            }
            tfidf_humor::web::run_server(config).await?;
        }
    }

    Ok(())
}

/// Read document text from a file, or from stdin when the path is "-".
fn read_documents(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read documents from stdin")?;
        return Ok(text);
    }
    std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read documents from {}", path.display()))
}
