//! Configuration error types

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {path}")]
    NotFound { path: String },

    #[error("unsupported config format: {extension} (expected yml, yaml, toml, or json)")]
    UnsupportedFormat { extension: String },

    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {message}")]
    ParseError { path: String, message: String },

    #[error("validation failed for {field}: {message}")]
    ValidationError { field: String, message: String },

    #[error("{field} must be greater than {min}, got {value}")]
    InvalidInteger {
        field: String,
        value: usize,
        min: usize,
    },

    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: String,
        value: f32,
        min: f32,
        max: f32,
    },

    #[error("invalid environment variable {var}: {message}")]
    EnvVarError { var: String, message: String },
}

impl ConfigError {
    pub fn parse(path: &str, err: impl std::fmt::Display) -> Self {
        ConfigError::ParseError {
            path: path.to_string(),
            message: err.to_string(),
        }
    }
}
