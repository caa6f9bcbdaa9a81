//! Format-specific configuration parsers

pub mod json;
pub mod toml;
pub mod yaml;
