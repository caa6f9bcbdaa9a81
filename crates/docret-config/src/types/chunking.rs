//! Document chunking configuration

use serde::{Deserialize, Serialize};

/// Configuration for document chunking
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChunkingConfig {
    /// Maximum characters per chunk
    ///
    /// This is a soft ceiling: a single indivisible token (one very long
    /// word) is emitted whole even when it exceeds the limit.
    #[serde(default = "default_max_chunk_chars")]
    pub max_chunk_chars: usize,

    /// Approximate character budget for the overlap carried into the
    /// next chunk during sentence/word packing.
    ///
    /// Recommended: 10-20% of max_chunk_chars
    #[serde(default = "default_overlap_chars")]
    pub overlap_chars: usize,

    /// Assumed average word length used to convert the overlap budget
    /// into a word count (`overlap_chars / approx_word_chars`, floored).
    ///
    /// A heuristic with no compensating measurement of actual character
    /// length; chunks may under- or over-shoot the nominal overlap size.
    #[serde(default = "default_approx_word_chars")]
    pub approx_word_chars: usize,
}

impl Default for ChunkingConfig {
    fn default() -> Self {
        Self {
            max_chunk_chars: default_max_chunk_chars(),
            overlap_chars: default_overlap_chars(),
            approx_word_chars: default_approx_word_chars(),
        }
    }
}

impl crate::validation::Validate for ChunkingConfig {
    fn validate(&self) -> crate::error::Result<()> {
        use crate::error::ConfigError;
        use crate::validation::validate_positive;

        validate_positive("chunking.max_chunk_chars", self.max_chunk_chars, 0)?;
        validate_positive("chunking.approx_word_chars", self.approx_word_chars, 0)?;

        // overlap must be less than the chunk ceiling
        if self.overlap_chars >= self.max_chunk_chars {
            return Err(ConfigError::ValidationError {
                field: "chunking.overlap_chars".to_string(),
                message: format!(
                    "overlap_chars ({}) must be < max_chunk_chars ({})",
                    self.overlap_chars, self.max_chunk_chars
                ),
            });
        }

        Ok(())
    }
}

fn default_max_chunk_chars() -> usize {
    500
}

fn default_overlap_chars() -> usize {
    100
}

fn default_approx_word_chars() -> usize {
    5
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::Validate;

    #[test]
    fn test_default_is_valid() {
        let config = ChunkingConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_overlap_too_large() {
        let config = ChunkingConfig {
            max_chunk_chars: 100,
            overlap_chars: 100, // Equal to max
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_word_length_rejected() {
        let config = ChunkingConfig {
            approx_word_chars: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
