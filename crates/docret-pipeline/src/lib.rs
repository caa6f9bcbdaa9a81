pub mod ingest;
pub mod query;
pub mod synthesize;

pub use ingest::{embedding_input, ingest_corpus};
pub use query::{vector_search, SearchResult};
pub use synthesize::{fallback_answer, synthesize_answer};
