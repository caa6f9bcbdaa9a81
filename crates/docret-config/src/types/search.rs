//! Retrieval configuration

use serde::{Deserialize, Serialize};

/// Retrieval behavior
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// How many passages to retrieve per query
    #[serde(default = "default_top_k")]
    pub top_k: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            top_k: default_top_k(),
        }
    }
}

impl crate::validation::Validate for SearchConfig {
    fn validate(&self) -> crate::error::Result<()> {
        use crate::validation::validate_positive;

        validate_positive("search.top_k", self.top_k, 0)?;
        Ok(())
    }
}

fn default_top_k() -> usize {
    8
}
