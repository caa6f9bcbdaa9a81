//! LLM configuration

use serde::{Deserialize, Serialize};

/// LLM (Large Language Model) configuration for answer synthesis
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    /// Model name
    ///
    /// Examples: "llama3-8b-8192", "gpt-4o-mini"
    #[serde(default = "default_model")]
    pub model: String,

    /// Maximum tokens for LLM responses
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// Sampling temperature
    #[serde(default = "default_temperature")]
    pub temperature: f32,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            max_tokens: default_max_tokens(),
            temperature: default_temperature(),
        }
    }
}

impl crate::validation::Validate for LlmConfig {
    fn validate(&self) -> crate::error::Result<()> {
        use crate::error::ConfigError;
        use crate::validation::validate_range;

        if self.model.is_empty() {
            return Err(ConfigError::ValidationError {
                field: "llm.model".to_string(),
                message: "Model name cannot be empty".to_string(),
            });
        }

        if self.max_tokens == 0 {
            return Err(ConfigError::ValidationError {
                field: "llm.max_tokens".to_string(),
                message: "max_tokens must be > 0".to_string(),
            });
        }

        validate_range("llm.temperature", self.temperature, 0.0, 2.0)?;

        Ok(())
    }
}

fn default_model() -> String {
    "llama3-8b-8192".to_string()
}

fn default_max_tokens() -> u32 {
    2000
}

fn default_temperature() -> f32 {
    0.7
}
