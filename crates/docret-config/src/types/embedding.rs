//! Embedding provider configuration

use serde::{Deserialize, Serialize};

/// Which embedding provider to use
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EmbeddingBackend {
    /// Hosted embedding API (provider chosen by the caller)
    External,
    /// Locally served model
    Local,
}

impl Default for EmbeddingBackend {
    fn default() -> Self {
        EmbeddingBackend::External
    }
}

/// Embedding provider settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmbeddingConfig {
    /// Provider backend
    #[serde(default)]
    pub backend: EmbeddingBackend,

    /// Model name passed to the provider
    #[serde(default = "default_model_name")]
    pub model_name: String,

    /// How many chunk texts to send per embedding request
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            backend: EmbeddingBackend::default(),
            model_name: default_model_name(),
            batch_size: default_batch_size(),
        }
    }
}

impl crate::validation::Validate for EmbeddingConfig {
    fn validate(&self) -> crate::error::Result<()> {
        use crate::validation::validate_positive;

        validate_positive("embedding.batch_size", self.batch_size, 0)?;
        Ok(())
    }
}

fn default_model_name() -> String {
    "sentence-transformers/all-MiniLM-L6-v2".to_string()
}

fn default_batch_size() -> usize {
    64
}
