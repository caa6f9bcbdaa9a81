//! Core configuration (knowledge directory, output paths)

use serde::{Deserialize, Serialize};

/// Core configuration for corpus location and chunk output
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoreConfig {
    /// Root directory of the knowledge base
    ///
    /// First-level subdirectories are categories; `*.txt` files inside
    /// them are documents.
    #[serde(default = "default_knowledge_dir")]
    pub knowledge_dir: String,

    /// Default output path for `docret chunk` when no `--output` is given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chunk_output: Option<String>,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            knowledge_dir: default_knowledge_dir(),
            chunk_output: None,
        }
    }
}

fn default_knowledge_dir() -> String {
    "knowledge".to_string()
}
