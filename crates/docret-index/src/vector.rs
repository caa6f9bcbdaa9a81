//! Vector records and an in-memory cosine-similarity index.
//!
//! Record keys are the chunk id formatted with a fixed prefix so the
//! numeric id survives the round trip through the vector store.

use anyhow::{anyhow, Result};
use docret_core::models::Chunk;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;

const RECORD_KEY_PREFIX: &str = "chunk_";

/// Stable string identifier for a chunk's stored vector.
pub fn record_key(chunk_id: u64) -> String {
    format!("{}{}", RECORD_KEY_PREFIX, chunk_id)
}

/// Recover the numeric chunk id from a record key.
pub fn parse_record_key(key: &str) -> Result<u64> {
    let digits = key
        .strip_prefix(RECORD_KEY_PREFIX)
        .ok_or_else(|| anyhow!("record key '{}' missing '{}' prefix", key, RECORD_KEY_PREFIX))?;
    digits
        .parse()
        .map_err(|_| anyhow!("record key '{}' has a non-numeric id", key))
}

/// Metadata stored alongside each vector for retrieval display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordMetadata {
    pub title: String,
    pub category: String,
    pub text: String,
    pub context: String,
}

/// One upserted vector-store record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VectorRecord {
    pub id: String,
    pub values: Vec<f32>,
    pub metadata: RecordMetadata,
}

impl VectorRecord {
    pub fn from_chunk(chunk: &Chunk, values: Vec<f32>) -> Self {
        Self {
            id: record_key(chunk.id),
            values,
            metadata: RecordMetadata {
                title: chunk.title.clone(),
                category: chunk.category.clone(),
                text: chunk.text.clone(),
                context: chunk.context.clone(),
            },
        }
    }
}

/// A similarity-search hit.
#[derive(Debug, Clone)]
pub struct VectorMatch {
    pub id: String,
    pub score: f32,
    pub metadata: RecordMetadata,
}

/// In-memory vector index with cosine-similarity top-k queries.
///
/// Keyed storage gives upsert semantics: re-ingesting a corpus replaces
/// records in place. A BTreeMap keeps iteration order stable so equal
/// scores resolve deterministically.
#[derive(Debug, Default)]
pub struct MemoryVectorIndex {
    records: BTreeMap<String, VectorRecord>,
}

impl MemoryVectorIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn upsert(&mut self, records: Vec<VectorRecord>) {
        for record in records {
            self.records.insert(record.id.clone(), record);
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&VectorRecord> {
        self.records.get(key)
    }

    /// Top-k records by cosine similarity to `query`.
    pub fn query(&self, query: &[f32], top_k: usize) -> Vec<VectorMatch> {
        let mut matches: Vec<VectorMatch> = self
            .records
            .values()
            .map(|record| VectorMatch {
                id: record.id.clone(),
                score: cosine_similarity(query, &record.values),
                metadata: record.metadata.clone(),
            })
            .collect();

        matches.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
        matches.truncate(top_k);
        matches
    }
}

fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }

    let dot: f32 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a * norm_b)
}
