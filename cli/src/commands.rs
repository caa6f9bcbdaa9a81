use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use docret_config::Config;
use docret_core::loader::load_knowledge;
use docret_core::models::Chunk;
use docret_core::ranking::keyword_rank;
use docret_core::TextChunker;
use docret_pipeline::{fallback_answer, SearchResult};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Parser)]
#[command(name = "docret")]
#[command(about = "Chunk a document knowledge base into retrieval-ready passages", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Chunk the knowledge base and emit the chunks as JSON
    Chunk {
        /// Write to this file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,

        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
    },
    /// Ask a question against the knowledge base (offline keyword retrieval)
    Ask {
        /// The question
        query: String,

        /// Number of passages to retrieve
        #[arg(long)]
        top: Option<usize>,
    },
    /// Show corpus and chunk statistics
    Stats,
}

pub fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::from_file(path),
        None => Config::load(),
    }
}

fn load_chunks(config: &Config) -> Result<Vec<Chunk>> {
    let root = Path::new(&config.core.knowledge_dir);
    let documents =
        load_knowledge(root).with_context(|| format!("loading knowledge from {}", root.display()))?;
    info!("loaded {} documents from {}", documents.len(), root.display());

    let chunker = TextChunker::with_config(config.chunking.clone());
    Ok(chunker.chunk_corpus(&documents))
}

pub async fn handle_chunk(config: &Config, output: Option<PathBuf>, pretty: bool) -> Result<()> {
    let chunks = load_chunks(config)?;

    let json = if pretty {
        serde_json::to_string_pretty(&chunks)?
    } else {
        serde_json::to_string(&chunks)?
    };

    let output = output.or_else(|| config.core.chunk_output.clone().map(PathBuf::from));
    match output {
        Some(path) => {
            std::fs::write(&path, json)
                .with_context(|| format!("writing {}", path.display()))?;
            println!("Wrote {} chunks to {}", chunks.len(), path.display());
        }
        None => println!("{}", json),
    }

    Ok(())
}

pub async fn handle_ask(config: &Config, query: &str, top: Option<usize>) -> Result<()> {
    let chunks = load_chunks(config)?;

    let top_k = top.unwrap_or(config.search.top_k);
    let ranked = keyword_rank(query, &chunks, top_k);
    let results: Vec<SearchResult> = ranked.iter().map(SearchResult::from_scored).collect();

    if results.is_empty() {
        println!("{}", docret_pipeline::synthesize::NO_RESULTS_ANSWER);
    } else {
        println!("{}", fallback_answer(&results));
    }

    Ok(())
}

pub async fn handle_stats(config: &Config) -> Result<()> {
    let chunks = load_chunks(config)?;

    let mut per_category: BTreeMap<&str, usize> = BTreeMap::new();
    let mut max_len = 0;
    let mut total_len = 0;
    let mut oversized = 0;

    for chunk in &chunks {
        *per_category.entry(chunk.category.as_str()).or_default() += 1;
        let len = chunk.text.chars().count();
        total_len += len;
        max_len = max_len.max(len);
        if len > config.chunking.max_chunk_chars {
            oversized += 1;
        }
    }

    println!("Chunks: {}", chunks.len());
    for (category, count) in &per_category {
        println!("  {}: {}", category, count);
    }
    if !chunks.is_empty() {
        println!("Average chunk size: {} chars", total_len / chunks.len());
        println!("Largest chunk: {} chars", max_len);
        println!(
            "Over the {}-char ceiling (indivisible tokens): {}",
            config.chunking.max_chunk_chars, oversized
        );
    }

    Ok(())
}
