//! Recursive, overlap-preserving document chunking.
//!
//! Documents are split along a four-level cascade: blank-line sections
//! first, then sentences, then words, falling back to a coarser strategy
//! only when the finer one cannot produce small-enough units. Chunks
//! produced directly from a section carry a neighboring-section preview
//! as context; chunks produced by sentence/word packing carry the
//! overlap text inherited from their predecessor instead.
//!
//! Chunking is a pure function of its input text and configuration: it
//! performs no I/O and has no failure modes.

pub mod overlap;
pub mod splitter;

pub use docret_config::ChunkingConfig;

use crate::models::{Chunk, Document};

/// Splits documents into retrieval-ready chunks.
pub struct TextChunker {
    config: ChunkingConfig,
}

impl TextChunker {
    pub fn new() -> Self {
        Self::with_config(ChunkingConfig::default())
    }

    pub fn with_config(config: ChunkingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ChunkingConfig {
        &self.config
    }

    /// Chunk every document in input order. Chunk ids are assigned by a
    /// single counter shared across all documents, incremented in
    /// production order, so the output is deterministic for a fixed
    /// corpus and configuration.
    pub fn chunk_corpus(&self, documents: &[Document]) -> Vec<Chunk> {
        let mut chunks = Vec::new();
        let mut next_id: u64 = 0;

        for document in documents {
            let produced = self.chunk_document(document, next_id);
            next_id += produced.len() as u64;
            chunks.extend(produced);
        }

        chunks
    }

    /// Chunk a single document, assigning ids starting at `start_id`.
    /// `chunk_index` restarts at 0 for every document.
    pub fn chunk_document(&self, document: &Document, start_id: u64) -> Vec<Chunk> {
        splitter::chunk_document(document, &self.config, start_id)
    }
}

impl Default for TextChunker {
    fn default() -> Self {
        Self::new()
    }
}

/// Chunk a corpus with the default configuration.
pub fn chunk_corpus(documents: &[Document]) -> Vec<Chunk> {
    TextChunker::new().chunk_corpus(documents)
}
