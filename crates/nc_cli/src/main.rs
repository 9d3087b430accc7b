use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use nc_analyze::TagExtractor;
use nc_core::{Language, Result};
use nc_extract::Pipeline;
use nc_inference::{DummyEngine, GenerationEngine, LlamaEngine, Summarizer};
use tracing::info;

#[derive(Parser, Debug)]
#[command(author, version, about = "Summarize, tag and relate news articles", long_about = None)]
struct Cli {
    /// Storage backend to use. Available backends: sqlite (default), memory
    #[arg(long, default_value = "sqlite")]
    storage: String,
    /// Database file for the sqlite backend
    #[arg(long, default_value = "news.db")]
    db_path: PathBuf,
    /// Llama API key. Without one the offline dummy engine is used.
    #[arg(long, env = "LLAMA_API_KEY")]
    api_key: Option<String>,
    /// Output language code: zh, en, th, vi, id, ms
    #[arg(long, default_value = "en")]
    language: String,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Process article URLs or pasted article text
    Process {
        /// URLs or raw article text, one submission each
        #[arg(required = true)]
        inputs: Vec<String>,
    },
    /// Find stored articles sharing tags with the query
    Similar {
        #[arg(required = true)]
        tags: Vec<String>,
        #[arg(long, default_value_t = 5)]
        limit: usize,
    },
    /// Show the most frequent tags
    Tags {
        #[arg(long, default_value_t = 10)]
        limit: usize,
    },
    /// Run the HTTP API server
    Serve {
        #[arg(long, default_value_t = 3000)]
        port: u16,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    let language = Language::from_code(&cli.language);

    let store = nc_storage::create_storage(&cli.storage, &cli.db_path).await?;
    info!("💾 Storage initialized successfully (using {})", cli.storage);

    let engine: Arc<dyn GenerationEngine> = match cli.api_key.as_deref() {
        Some(key) => Arc::new(LlamaEngine::connect(key).await?),
        None => {
            info!("🤖 No API key configured, using the offline dummy engine");
            Arc::new(DummyEngine::new())
        }
    };
    info!("🧠 Generation engine initialized successfully (using {})", engine.name());

    let pipeline = Pipeline::new(
        TagExtractor::new(language),
        Summarizer::new(engine),
        store,
    )?;

    match cli.command {
        Commands::Process { inputs } => {
            let results = pipeline.process_many(&inputs, language).await;
            for (input, result) in inputs.iter().zip(results) {
                match result {
                    Ok(processed) => {
                        let headline = if processed.title.is_empty() {
                            input.as_str()
                        } else {
                            processed.title.as_str()
                        };
                        println!("📰 {}\n", headline);
                        println!("{}\n", processed.summary);
                        println!("🏷️  Tags: {}", processed.tags.join(", "));
                        if !processed.stored {
                            println!("⚠️  Article was not persisted");
                        }
                        for related in &processed.related {
                            println!("🔗 {} ({} shared tags)", related.title, related.relevance);
                        }
                    }
                    Err(e) => eprintln!("Failed to process {}: {}", input, e),
                }
            }
        }
        Commands::Similar { tags, limit } => {
            let articles = pipeline.recommendations(&tags, limit).await;
            println!("Found {} related articles", articles.len());
            for article in articles {
                println!(
                    "🔗 {} - {} ({} shared tags)",
                    article.title, article.url, article.relevance
                );
            }
        }
        Commands::Tags { limit } => {
            for tag in pipeline.popular_tags(limit).await {
                println!("🏷️  {} ({})", tag.name, tag.count);
            }
        }
        Commands::Serve { port } => {
            let app = nc_web::create_app(nc_web::AppState { pipeline });
            let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
            info!("🌐 Listening on http://0.0.0.0:{}", port);
            axum::serve(listener, app).await?;
        }
    }

    Ok(())
}
