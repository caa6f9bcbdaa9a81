//! Ingestion: chunk documents, embed the chunks, upsert vector records.

use anyhow::{bail, Result};
use docret_config::Config;
use docret_core::models::{Chunk, Document};
use docret_core::traits::Embedder;
use docret_core::TextChunker;
use docret_index::{MemoryVectorIndex, VectorRecord};
use std::sync::Arc;
use tracing::info;

/// Embedding input for a chunk: title, then category, then the passage
/// text, space separated.
pub fn embedding_input(chunk: &Chunk) -> String {
    format!("{} {} {}", chunk.title, chunk.category, chunk.text)
}

/// Chunk the corpus, embed every chunk in batches, and upsert the
/// resulting records. Returns how many records were stored.
///
/// Re-running ingestion recomputes the full record set; ids may shift
/// if document order or count changed, and upsert-by-key replaces any
/// stale records.
pub async fn ingest_corpus(
    documents: &[Document],
    config: &Config,
    embedder: Arc<dyn Embedder + Send + Sync>,
    index: &mut MemoryVectorIndex,
) -> Result<usize> {
    let chunker = TextChunker::with_config(config.chunking.clone());
    let chunks = chunker.chunk_corpus(documents);

    if chunks.is_empty() {
        info!("no chunks produced, nothing to ingest");
        return Ok(0);
    }

    info!(
        "embedding {} chunks from {} documents",
        chunks.len(),
        documents.len()
    );

    let batch_size = config.embedding.batch_size.max(1);
    let mut records = Vec::with_capacity(chunks.len());

    for batch in chunks.chunks(batch_size) {
        let texts: Vec<String> = batch.iter().map(embedding_input).collect();
        let embeddings = embedder.embed_batch(&texts).await?;

        if embeddings.len() != batch.len() {
            bail!(
                "embedding count mismatch: got {}, expected {}",
                embeddings.len(),
                batch.len()
            );
        }

        for (chunk, values) in batch.iter().zip(embeddings) {
            records.push(VectorRecord::from_chunk(chunk, values));
        }
    }

    let count = records.len();
    index.upsert(records);
    info!("stored {} vector records", count);
    Ok(count)
}
