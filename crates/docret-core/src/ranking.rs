//! Keyword relevance ranking over chunks.
//!
//! Deterministic term-frequency scoring used by the offline `ask` path
//! and as the last resort when no embedding service is reachable.

use crate::models::{Chunk, ScoredChunk};
use std::cmp::Ordering;

const TITLE_BOOST: f32 = 2.0;
const CATEGORY_BOOST: f32 = 1.5;

/// Score chunks against a query by case-insensitive term occurrence,
/// with boosts for title and category matches. Chunks that match no
/// term are dropped; ties are broken by chunk id so the ordering is
/// stable across runs.
pub fn keyword_rank(query: &str, chunks: &[Chunk], top_k: usize) -> Vec<ScoredChunk> {
    let terms: Vec<String> = query
        .to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect();

    if terms.is_empty() {
        return Vec::new();
    }

    let mut scored: Vec<ScoredChunk> = chunks
        .iter()
        .filter_map(|chunk| {
            let score = score_chunk(&terms, chunk);
            (score > 0.0).then(|| ScoredChunk {
                score,
                chunk: chunk.clone(),
            })
        })
        .collect();

    scored.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.chunk.id.cmp(&b.chunk.id))
    });
    scored.truncate(top_k);
    scored
}

fn score_chunk(terms: &[String], chunk: &Chunk) -> f32 {
    let text = chunk.text.to_lowercase();
    let title = chunk.title.to_lowercase();
    let category = chunk.category.to_lowercase();

    let mut score = 0.0;
    for term in terms {
        score += text.matches(term.as_str()).count() as f32;
        if title.contains(term.as_str()) {
            score += TITLE_BOOST;
        }
        if category.contains(term.as_str()) {
            score += CATEGORY_BOOST;
        }
    }
    score
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chunk(id: u64, category: &str, title: &str, text: &str) -> Chunk {
        Chunk {
            id,
            category: category.to_string(),
            title: title.to_string(),
            text: text.to_string(),
            chunk_index: 0,
            context: String::new(),
        }
    }

    #[test]
    fn matching_chunks_rank_above_weaker_ones() {
        let chunks = vec![
            chunk(0, "cloud", "cloud basics", "Storage and compute."),
            chunk(1, "iot", "iot sensors", "Sensors send sensor data to sensor hubs."),
        ];
        let ranked = keyword_rank("sensor", &chunks, 10);

        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].chunk.id, 1);
    }

    #[test]
    fn title_and_category_matches_boost_score() {
        let chunks = vec![
            chunk(0, "general", "overview", "iot appears once here: iot."),
            chunk(1, "iot", "iot basics", "Nothing relevant in the body."),
        ];
        let ranked = keyword_rank("iot", &chunks, 10);

        // Two body hits (2.0) lose to title (2.0) + category (1.5) boosts
        assert_eq!(ranked[0].chunk.id, 1);
        assert_eq!(ranked.len(), 2);
    }

    #[test]
    fn ties_break_by_chunk_id() {
        let chunks = vec![
            chunk(7, "a", "same", "word"),
            chunk(3, "b", "same", "word"),
        ];
        let ranked = keyword_rank("word same", &chunks, 10);
        assert_eq!(ranked[0].chunk.id, 3);
        assert_eq!(ranked[1].chunk.id, 7);
    }

    #[test]
    fn empty_query_returns_nothing() {
        let chunks = vec![chunk(0, "iot", "t", "text")];
        assert!(keyword_rank("   ", &chunks, 10).is_empty());
    }

    #[test]
    fn top_k_limits_results() {
        let chunks: Vec<Chunk> = (0..20)
            .map(|i| chunk(i, "iot", "t", "sensor data"))
            .collect();
        assert_eq!(keyword_rank("sensor", &chunks, 5).len(), 5);
    }
}
