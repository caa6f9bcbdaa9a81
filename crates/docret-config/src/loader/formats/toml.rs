//! TOML format parser

use crate::{error::ConfigError, Config, Result};

/// Parse configuration from a TOML string
pub fn parse(content: &str, path: &str) -> Result<Config> {
    ::toml::from_str(content).map_err(|e| ConfigError::parse(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_toml() {
        let toml = r#"
[chunking]
max_chunk_chars = 300
"#;
        let config = parse(toml, "test.toml").unwrap();
        assert_eq!(config.chunking.max_chunk_chars, 300);
    }
}
