//! Configuration type definitions
//!
//! This module contains all configuration structures organized by concern.
//! Each type is self-contained with validation and sensible defaults.

pub mod chunking;
pub mod core;
pub mod embedding;
pub mod llm;
pub mod search;

// Re-export all types for convenience
pub use chunking::ChunkingConfig;
pub use core::CoreConfig;
pub use embedding::{EmbeddingBackend, EmbeddingConfig};
pub use llm::LlmConfig;
pub use search::SearchConfig;

use serde::{Deserialize, Serialize};

/// Main configuration struct aggregating all settings
///
/// This is the top-level configuration that users interact with.
/// It's organized by functional area for clarity.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Core settings (knowledge directory, output paths)
    #[serde(default)]
    pub core: CoreConfig,

    /// Document chunking configuration
    #[serde(default)]
    pub chunking: ChunkingConfig,

    /// Embedding provider settings
    #[serde(default)]
    pub embedding: EmbeddingConfig,

    /// Retrieval behavior
    #[serde(default)]
    pub search: SearchConfig,

    /// LLM settings for answer synthesis
    #[serde(default)]
    pub llm: LlmConfig,
}

impl crate::validation::Validate for Config {
    fn validate(&self) -> crate::error::Result<()> {
        self.chunking.validate()?;
        self.embedding.validate()?;
        self.search.validate()?;
        self.llm.validate()?;
        Ok(())
    }
}

impl Config {
    /// Load config from the default location, falling back to defaults
    /// when no config file exists.
    pub fn load() -> anyhow::Result<Self> {
        Ok(crate::loader::load()?)
    }

    /// Load config from a specific file, format chosen by extension.
    pub fn from_file(path: impl AsRef<std::path::Path>) -> anyhow::Result<Self> {
        Ok(crate::loader::from_file(path.as_ref())?)
    }
}
