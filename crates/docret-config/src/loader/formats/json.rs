//! JSON format parser

use crate::{error::ConfigError, Config, Result};

/// Parse configuration from a JSON string
pub fn parse(content: &str, path: &str) -> Result<Config> {
    serde_json::from_str(content).map_err(|e| ConfigError::parse(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_json() {
        let json = r#"{
            "embedding": {
                "model_name": "custom-model",
                "batch_size": 16
            }
        }"#;
        let config = parse(json, "test.json").unwrap();
        assert_eq!(config.embedding.model_name, "custom-model");
        assert_eq!(config.embedding.batch_size, 16);
    }
}
