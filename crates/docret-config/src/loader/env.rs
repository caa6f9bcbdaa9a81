//! Environment variable configuration overlay
//!
//! Supports environment variables in the format:
//! `DOCRET_<section>_<field>=value`
//!
//! Examples:
//! - `DOCRET_CORE_KNOWLEDGE_DIR=./docs`
//! - `DOCRET_CHUNKING_MAX_CHUNK_CHARS=800`
//! - `DOCRET_SEARCH_TOP_K=12`

use crate::error::{ConfigError, Result};
use crate::types::{Config, EmbeddingBackend};
use std::env;

const ENV_PREFIX: &str = "DOCRET_";

/// Apply all `DOCRET_*` environment variables onto `config`.
pub fn apply_env(config: &mut Config) -> Result<()> {
    let vars: Vec<(String, String)> = env::vars()
        .filter(|(k, _)| k.starts_with(ENV_PREFIX))
        .collect();

    for (key, value) in vars {
        apply_var(config, &key, &value)?;
    }

    Ok(())
}

fn apply_var(config: &mut Config, key: &str, value: &str) -> Result<()> {
    let stripped = key.strip_prefix(ENV_PREFIX).unwrap_or(key);

    let (section, field) = stripped.split_once('_').ok_or_else(|| ConfigError::EnvVarError {
        var: key.to_string(),
        message: "Expected format: DOCRET_<section>_<field>".to_string(),
    })?;

    let section = section.to_lowercase();
    let field = field.to_lowercase();

    match section.as_str() {
        "core" => match field.as_str() {
            "knowledge_dir" => config.core.knowledge_dir = value.to_string(),
            "chunk_output" => config.core.chunk_output = Some(value.to_string()),
            _ => return unknown_field(key, &section, &field),
        },
        "chunking" => match field.as_str() {
            "max_chunk_chars" => config.chunking.max_chunk_chars = parse_usize(key, value)?,
            "overlap_chars" => config.chunking.overlap_chars = parse_usize(key, value)?,
            "approx_word_chars" => config.chunking.approx_word_chars = parse_usize(key, value)?,
            _ => return unknown_field(key, &section, &field),
        },
        "embedding" => match field.as_str() {
            "backend" => config.embedding.backend = parse_backend(key, value)?,
            "model_name" => config.embedding.model_name = value.to_string(),
            "batch_size" => config.embedding.batch_size = parse_usize(key, value)?,
            _ => return unknown_field(key, &section, &field),
        },
        "search" => match field.as_str() {
            "top_k" => config.search.top_k = parse_usize(key, value)?,
            _ => return unknown_field(key, &section, &field),
        },
        "llm" => match field.as_str() {
            "model" => config.llm.model = value.to_string(),
            "max_tokens" => {
                config.llm.max_tokens =
                    value.parse().map_err(|_| ConfigError::EnvVarError {
                        var: key.to_string(),
                        message: format!("expected an integer, got '{}'", value),
                    })?
            }
            "temperature" => {
                config.llm.temperature =
                    value.parse().map_err(|_| ConfigError::EnvVarError {
                        var: key.to_string(),
                        message: format!("expected a number, got '{}'", value),
                    })?
            }
            _ => return unknown_field(key, &section, &field),
        },
        _ => {
            return Err(ConfigError::EnvVarError {
                var: key.to_string(),
                message: format!("unknown config section '{}'", section),
            })
        }
    }

    Ok(())
}

fn parse_backend(key: &str, value: &str) -> Result<EmbeddingBackend> {
    match value.to_lowercase().as_str() {
        "external" => Ok(EmbeddingBackend::External),
        "local" => Ok(EmbeddingBackend::Local),
        other => Err(ConfigError::EnvVarError {
            var: key.to_string(),
            message: format!("expected 'external' or 'local', got '{}'", other),
        }),
    }
}

fn parse_usize(key: &str, value: &str) -> Result<usize> {
    value.parse().map_err(|_| ConfigError::EnvVarError {
        var: key.to_string(),
        message: format!("expected an integer, got '{}'", value),
    })
}

fn unknown_field(key: &str, section: &str, field: &str) -> Result<()> {
    Err(ConfigError::EnvVarError {
        var: key.to_string(),
        message: format!("unknown field '{}' in section '{}'", field, section),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_chunking_var() {
        let mut config = Config::default();
        apply_var(&mut config, "DOCRET_CHUNKING_MAX_CHUNK_CHARS", "750").unwrap();
        assert_eq!(config.chunking.max_chunk_chars, 750);
    }

    #[test]
    fn test_apply_core_var() {
        let mut config = Config::default();
        apply_var(&mut config, "DOCRET_CORE_KNOWLEDGE_DIR", "./docs").unwrap();
        assert_eq!(config.core.knowledge_dir, "./docs");
    }

    #[test]
    fn test_apply_llm_temperature() {
        let mut config = Config::default();
        apply_var(&mut config, "DOCRET_LLM_TEMPERATURE", "0.2").unwrap();
        assert_eq!(config.llm.temperature, 0.2);
    }

    #[test]
    fn test_apply_embedding_backend() {
        let mut config = Config::default();
        apply_var(&mut config, "DOCRET_EMBEDDING_BACKEND", "local").unwrap();
        assert_eq!(config.embedding.backend, EmbeddingBackend::Local);

        let err = apply_var(&mut config, "DOCRET_EMBEDDING_BACKEND", "hosted").unwrap_err();
        assert!(matches!(err, ConfigError::EnvVarError { .. }));
    }

    #[test]
    fn test_bad_integer_rejected() {
        let mut config = Config::default();
        let err = apply_var(&mut config, "DOCRET_SEARCH_TOP_K", "many").unwrap_err();
        assert!(matches!(err, ConfigError::EnvVarError { .. }));
    }

    #[test]
    fn test_unknown_section_rejected() {
        let mut config = Config::default();
        assert!(apply_var(&mut config, "DOCRET_NOPE_FIELD", "1").is_err());
    }
}
