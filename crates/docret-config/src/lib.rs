//! Configuration management for docret
//!
//! This crate provides a validated configuration system with support for:
//! - Multiple formats (YAML, TOML, JSON)
//! - Config validation with helpful error messages
//! - Environment variable overrides (`DOCRET_<section>_<field>`)
//! - Type-safe configuration structs
//!
//! # Example
//!
//! ```no_run
//! use docret_config::Config;
//!
//! // Load from default location (.docret.{yml,yaml,toml,json})
//! let config = Config::load()?;
//!
//! // Or load from a specific file
//! let config = Config::from_file("path/to/config.toml")?;
//!
//! // Access config values
//! let chunk_size = config.chunking.max_chunk_chars;
//! let top_k = config.search.top_k;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod error;
pub mod loader;
pub mod types;
pub mod validation;

// Re-export main types for convenience
pub use error::{ConfigError, Result};
pub use types::*;

/// Trait for config validation
pub use validation::Validate;
