//! Query-side retrieval: embed the query, search the index, shape hits
//! for display.

use anyhow::Result;
use docret_core::models::ScoredChunk;
use docret_core::traits::Embedder;
use docret_index::{parse_record_key, MemoryVectorIndex};
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

/// A retrieved passage shaped for answer synthesis and display.
#[derive(Debug, Clone, Serialize)]
pub struct SearchResult {
    pub id: u64,
    pub title: String,
    pub category: String,
    pub text: String,
    /// Cosine similarity scaled to 0-100 for display
    pub relevance: f32,
    pub context: String,
}

impl SearchResult {
    /// Shape a keyword-ranked chunk like a vector hit so both retrieval
    /// paths feed the same synthesis code.
    pub fn from_scored(scored: &ScoredChunk) -> Self {
        Self {
            id: scored.chunk.id,
            title: scored.chunk.title.clone(),
            category: scored.chunk.category.clone(),
            text: scored.chunk.text.clone(),
            relevance: scored.score,
            context: scored.chunk.context.clone(),
        }
    }
}

/// Embed `query` and return the top-k most similar stored passages.
pub async fn vector_search(
    query: &str,
    embedder: Arc<dyn Embedder + Send + Sync>,
    index: &MemoryVectorIndex,
    top_k: usize,
) -> Result<Vec<SearchResult>> {
    let query_embedding = embedder.embed(query).await?;
    let matches = index.query(&query_embedding, top_k);
    debug!("query matched {} records", matches.len());

    let mut results = Vec::with_capacity(matches.len());
    for m in matches {
        results.push(SearchResult {
            id: parse_record_key(&m.id)?,
            title: m.metadata.title,
            category: m.metadata.category,
            text: m.metadata.text,
            relevance: m.score * 100.0,
            context: m.metadata.context,
        });
    }
    Ok(results)
}
