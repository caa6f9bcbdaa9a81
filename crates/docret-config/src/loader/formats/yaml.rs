//! YAML format parser

use crate::{error::ConfigError, Config, Result};

/// Parse configuration from a YAML string
pub fn parse(content: &str, path: &str) -> Result<Config> {
    serde_yaml::from_str(content).map_err(|e| ConfigError::parse(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_yaml() {
        let yaml = r#"
search:
  top_k: 5
"#;
        let config = parse(yaml, "test.yml").unwrap();
        assert_eq!(config.search.top_k, 5);
    }

    #[test]
    fn test_parse_error_carries_path() {
        let err = parse("search: [broken", "test.yml").unwrap_err();
        assert!(err.to_string().contains("test.yml"));
    }
}
