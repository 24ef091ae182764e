use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use indexmap::IndexMap;
use tracing::info;

use lexis::config::Config;
use lexis::keywords::{KeywordEngine, KeywordResult, TfIdfKeywordEngine};
use lexis::output::terminal;
use lexis::text::decode_lenient;

/// Lexis: keyword extraction over a pre-fitted TF-IDF model.
///
/// Ranks the most distinctive vocabulary terms in a document and searches
/// the model's vocabulary.
#[derive(Parser)]
#[command(name = "lexis", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the upload form and JSON endpoints over HTTP
    #[cfg(feature = "web")]
    Serve {
        /// Port to listen on (default: LEXIS_PORT or 8000)
        #[arg(long)]
        port: Option<u16>,

        /// Address to bind (default: LEXIS_BIND or 127.0.0.1)
        #[arg(long)]
        bind: Option<String>,
    },

    /// Extract the top keywords from one or more text files
    Extract {
        /// Documents to analyze
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Number of keywords per document (default: LEXIS_TOP_N or 20)
        #[arg(long)]
        top_n: Option<usize>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Search the model vocabulary for terms containing QUERY
    Search {
        /// Case-insensitive substring (empty matches everything)
        query: String,

        /// Print JSON instead of a list
        #[arg(long)]
        json: bool,
    },

    /// Show statistics about the loaded model
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("lexis=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        #[cfg(feature = "web")]
        Commands::Serve { port, bind } => {
            // Fail before binding if the model can't be loaded
            let engine = build_engine(&config)?;
            let state = lexis::web::AppState::new(Arc::new(engine), config.max_upload_bytes);
            let port = port.unwrap_or(config.port);
            let bind = bind.unwrap_or_else(|| config.bind.clone());
            lexis::web::run_server(state, port, &bind).await?;
        }

        Commands::Extract { files, top_n, json } => {
            let mut engine = build_engine(&config)?;
            if let Some(n) = top_n {
                engine.top_n = n;
            }

            let pb = if files.len() > 1 && !json {
                let pb = ProgressBar::new(files.len() as u64);
                pb.set_style(
                    ProgressStyle::default_bar()
                        .template("  [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                        .expect("valid template")
                        .progress_chars("=> "),
                );
                Some(pb)
            } else {
                None
            };

            let mut results: IndexMap<String, KeywordResult> = IndexMap::new();
            for path in &files {
                let name = path.display().to_string();
                if let Some(ref pb) = pb {
                    pb.set_message(lexis::output::truncate_chars(&name, 40));
                }

                let bytes = std::fs::read(path)
                    .with_context(|| format!("Failed to read {}", path.display()))?;
                let text = decode_lenient(&bytes);
                results.insert(name, engine.extract_keywords(&text));

                if let Some(ref pb) = pb {
                    pb.inc(1);
                }
            }
            if let Some(pb) = pb {
                pb.finish_and_clear();
            }

            if json {
                let out = if results.len() == 1 {
                    serde_json::to_string_pretty(&results[0])?
                } else {
                    serde_json::to_string_pretty(&results)?
                };
                println!("{out}");
            } else {
                for (name, keywords) in &results {
                    terminal::display_keywords(name, keywords);
                }
            }
        }

        Commands::Search { query, json } => {
            let engine = build_engine(&config)?;
            let results = engine.search_vocabulary(&query);
            if json {
                println!("{}", serde_json::to_string_pretty(&results)?);
            } else {
                terminal::display_search_results(&query, &results, engine.search_limit);
            }
        }

        Commands::Info => {
            let model = config.load_model()?;
            terminal::display_model_info(&model, &config.model_dir.display().to_string());
            println!(
                "\n{}",
                format!(
                    "Defaults: top {} keywords, {} search matches",
                    config.top_n, config.search_limit
                )
                .dimmed()
            );
        }
    }

    Ok(())
}

/// Load the model artifact and build the keyword engine, or bail with a
/// message naming the model directory.
fn build_engine(config: &Config) -> Result<TfIdfKeywordEngine> {
    let model = config.load_model()?;
    info!(
        model_dir = %config.model_dir.display(),
        top_n = config.top_n,
        search_limit = config.search_limit,
        "Keyword engine ready"
    );
    Ok(TfIdfKeywordEngine::new(Arc::new(model))?.with_limits(config.top_n, config.search_limit))
}
