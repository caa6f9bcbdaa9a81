use serde::{Deserialize, Serialize};

/// One source document supplied by the loader.
///
/// Immutable input: produced once, consumed once by the chunker,
/// not retained afterward.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// Category the document belongs to (its parent directory)
    pub category: String,
    /// Human-readable title (file stem, dashes replaced by spaces)
    pub title: String,
    /// Raw unstructured text, blank lines delimit sections
    pub content: String,
}

impl Document {
    pub fn new(
        category: impl Into<String>,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            category: category.into(),
            title: title.into(),
            content: content.into(),
        }
    }
}

/// A bounded-length excerpt of a source document, the unit of retrieval.
///
/// `id` is globally unique across one corpus run and doubles as the
/// vector-store record identifier downstream. `chunk_index` is the
/// 0-based position within the source document only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chunk {
    pub id: u64,
    pub category: String,
    pub title: String,
    pub text: String,
    pub chunk_index: usize,
    /// Neighboring-section preview or overlap continuation; empty when
    /// the chunk has neither.
    pub context: String,
}

/// A chunk paired with a retrieval relevance score.
#[derive(Debug, Clone)]
pub struct ScoredChunk {
    pub score: f32,
    pub chunk: Chunk,
}
