pub mod chunking;
pub mod loader;
pub mod models;
pub mod ranking;
pub mod traits;

// Re-export the chunker entry points for convenience
pub use chunking::{chunk_corpus, TextChunker};
