use anyhow::Result;
use async_trait::async_trait;
use docret_config::Config;
use docret_core::models::Document;
use docret_core::traits::Embedder;
use docret_index::{record_key, MemoryVectorIndex};
use docret_pipeline::{ingest_corpus, vector_search};
use std::sync::Arc;

/// Deterministic bag-of-words embedder over a tiny fixed vocabulary.
/// Good enough to make similar texts land near each other.
struct MockEmbedder;

const VOCAB: &[&str] = &[
    "sensor", "protocol", "gateway", "cloud", "storage", "compute", "network", "security",
];

impl MockEmbedder {
    fn vector(text: &str) -> Vec<f32> {
        let lowered = text.to_lowercase();
        VOCAB
            .iter()
            .map(|term| lowered.matches(term).count() as f32)
            .collect()
    }
}

#[async_trait]
impl Embedder for MockEmbedder {
    async fn embed(&self, text: &str) -> Result<Vec<f32>> {
        Ok(Self::vector(text))
    }

    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
        Ok(texts.iter().map(|t| Self::vector(t)).collect())
    }
}

fn sample_corpus() -> Vec<Document> {
    vec![
        Document::new(
            "iot",
            "hcia iot basics",
            "Sensor nodes report readings over a gateway protocol.\n\n\
             Gateway devices forward sensor data upstream.",
        ),
        Document::new(
            "cloud",
            "cloud computing",
            "Cloud storage pools compute and storage resources.\n\n\
             Elastic compute scales with network demand.",
        ),
    ]
}

#[tokio::test]
async fn ingest_stores_one_record_per_chunk() {
    let documents = sample_corpus();
    let config = Config::default();
    let mut index = MemoryVectorIndex::new();

    let stored = ingest_corpus(&documents, &config, Arc::new(MockEmbedder), &mut index)
        .await
        .unwrap();

    // Two sections per document, all under the size ceiling
    assert_eq!(stored, 4);
    assert_eq!(index.len(), 4);
    for id in 0..4u64 {
        assert!(index.get(&record_key(id)).is_some(), "missing chunk_{}", id);
    }
}

#[tokio::test]
async fn search_returns_the_relevant_document_first() {
    let documents = sample_corpus();
    let config = Config::default();
    let mut index = MemoryVectorIndex::new();
    let embedder = Arc::new(MockEmbedder);

    ingest_corpus(&documents, &config, embedder.clone(), &mut index)
        .await
        .unwrap();

    let results = vector_search("sensor gateway readings", embedder.clone(), &index, 2)
        .await
        .unwrap();

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].category, "iot");
    assert!(results[0].relevance > 0.0);
    assert!(results[0].relevance <= 100.0 + 1e-3);

    let results = vector_search("compute storage", embedder, &index, 2)
        .await
        .unwrap();
    assert_eq!(results[0].category, "cloud");
}

#[tokio::test]
async fn reingest_replaces_records_instead_of_duplicating() {
    let documents = sample_corpus();
    let config = Config::default();
    let mut index = MemoryVectorIndex::new();
    let embedder = Arc::new(MockEmbedder);

    ingest_corpus(&documents, &config, embedder.clone(), &mut index)
        .await
        .unwrap();
    ingest_corpus(&documents, &config, embedder, &mut index)
        .await
        .unwrap();

    assert_eq!(index.len(), 4);
}

#[tokio::test]
async fn empty_corpus_ingests_nothing() {
    let config = Config::default();
    let mut index = MemoryVectorIndex::new();

    let stored = ingest_corpus(&[], &config, Arc::new(MockEmbedder), &mut index)
        .await
        .unwrap();

    assert_eq!(stored, 0);
    assert!(index.is_empty());
}

#[tokio::test]
async fn record_ids_parse_back_to_chunk_ids() {
    let documents = sample_corpus();
    let config = Config::default();
    let mut index = MemoryVectorIndex::new();
    let embedder = Arc::new(MockEmbedder);

    ingest_corpus(&documents, &config, embedder.clone(), &mut index)
        .await
        .unwrap();

    let results = vector_search("sensor", embedder, &index, 10).await.unwrap();
    let mut ids: Vec<u64> = results.iter().map(|r| r.id).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), results.len(), "ids must be unique");
    assert!(ids.iter().all(|&id| id < 4));
}
