//! Configuration loading
//!
//! Precedence (lowest to highest): built-in defaults, config file,
//! `DOCRET_*` environment variables.

pub mod env;
pub mod formats;

use crate::error::{ConfigError, Result};
use crate::types::Config;
use crate::validation::Validate;
use std::path::Path;

/// File names probed in order by [`load`]
const DEFAULT_LOCATIONS: &[&str] = &[".docret.yml", ".docret.yaml", ".docret.toml", ".docret.json"];

/// Load configuration from the default location in the current directory,
/// then apply environment overrides. Missing file means defaults.
pub fn load() -> Result<Config> {
    let mut config = Config::default();

    for name in DEFAULT_LOCATIONS {
        if Path::new(name).exists() {
            config = from_file(Path::new(name))?;
            break;
        }
    }

    env::apply_env(&mut config)?;
    config.validate()?;
    Ok(config)
}

/// Load configuration from a specific file, format chosen by extension.
pub fn from_file(path: &Path) -> Result<Config> {
    let display = path.display().to_string();

    if !path.exists() {
        return Err(ConfigError::NotFound { path: display });
    }

    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
        path: display.clone(),
        source: e,
    })?;

    let extension = path
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("")
        .to_lowercase();

    let config = match extension.as_str() {
        "yml" | "yaml" => formats::yaml::parse(&content, &display)?,
        "toml" => formats::toml::parse(&content, &display)?,
        "json" => formats::json::parse(&content, &display)?,
        other => {
            return Err(ConfigError::UnsupportedFormat {
                extension: other.to_string(),
            })
        }
    };

    config.validate()?;
    Ok(config)
}
