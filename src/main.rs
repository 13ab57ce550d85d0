mod cache;
mod config;
mod corpus;
mod engine;
mod error;
mod index;
mod output;
mod repl;
mod tokenizer;

use anyhow::{Context, Result, bail};
use clap::Parser;
use std::io;
use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::time::Instant;
use termcolor::StandardStream;

use config::AppConfig;
use engine::{EngineKind, SearchEngine};

#[derive(Parser)]
#[command(name = "bowix")]
#[command(about = "In-memory bag-of-words search engine with conjunctive queries")]
struct Cli {
    /// Files and directories to index
    #[arg(required = true)]
    paths: Vec<PathBuf>,

    /// Run a single query and exit instead of starting the interactive loop
    #[arg(long)]
    query: Option<String>,

    /// Search strategy: scan, bag, or inverted
    #[arg(long)]
    engine: Option<String>,

    /// Query results to keep in the LRU cache (0 disables caching)
    #[arg(long)]
    cache_capacity: Option<usize>,

    /// Disable the query result cache
    #[arg(long)]
    no_cache: bool,

    /// Print one-shot results as JSON
    #[arg(long)]
    json: bool,

    /// When to use colors: auto, always, never
    #[arg(long, default_value = "auto")]
    color: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;

    let color_choice = output::parse_color_choice(&cli.color)
        .with_context(|| format!("invalid color mode: {}", cli.color))?;

    let kind = match &cli.engine {
        Some(name) => match EngineKind::from_name(name) {
            Some(kind) => kind,
            None => bail!("unknown engine '{}' (expected scan, bag, or inverted)", name),
        },
        None => config.engine,
    };

    let capacity = cli.cache_capacity.unwrap_or(config.cache_capacity);

    let mut engine: Box<dyn SearchEngine> = kind.build();
    if !cli.no_cache && let Some(capacity) = NonZeroUsize::new(capacity) {
        engine = Box::new(cache::CachedEngine::new(engine, capacity));
    }

    let started = Instant::now();
    let summary = corpus::load_paths(engine.as_mut(), &cli.paths, &config)?;
    eprintln!(
        "bowix: indexed {} document(s) ({} skipped) in {:.1}ms [{} engine]",
        summary.documents,
        summary.skipped,
        started.elapsed().as_secs_f64() * 1000.0,
        kind.as_str()
    );

    match cli.query {
        Some(query) => {
            let response = repl::run_query(engine.as_ref(), &query);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&response)?);
            } else {
                let mut stdout = StandardStream::stdout(color_choice);
                output::print_results(&mut stdout, &response)?;
            }
        }
        None => {
            let stdin = io::stdin();
            let stdout = StandardStream::stdout(color_choice);
            repl::run(engine.as_ref(), stdin.lock(), stdout)?;
        }
    }

    Ok(())
}
