//! Configuration loading from TOML files

mod attributes;
mod vocabulary;

pub use attributes::{AttackAttribute, AttributeCatalog, AttributeCategory};
pub use vocabulary::{CategoryPhrases, ParserVocabulary, TierMarkers};

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Configuration loading error
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Configuration validation error: {0}")]
    ValidationError(String),
}

/// Load a TOML file and deserialize it
pub fn load_toml<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: T = toml::from_str(&content)?;
    Ok(config)
}

/// Load a TOML string and deserialize it
pub fn parse_toml<T: serde::de::DeserializeOwned>(content: &str) -> Result<T, ConfigError> {
    let config: T = toml::from_str(content)?;
    Ok(config)
}

/// Parser vocabulary plus the attack attribute catalog
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    #[serde(default)]
    pub vocabulary: ParserVocabulary,
    #[serde(default)]
    pub attributes: AttributeCatalog,
}

impl AnalyzerConfig {
    /// Load and validate a config file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let config: AnalyzerConfig = load_toml(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate a config string
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: AnalyzerConfig = parse_toml(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.vocabulary.validate()?;
        self.attributes.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shipped_config_matches_defaults() {
        let toml = include_str!("../../config/analyzer.toml");
        let config = AnalyzerConfig::parse(toml).unwrap();
        assert_eq!(config, AnalyzerConfig::default());
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = AnalyzerConfig::parse("").unwrap();
        assert_eq!(config.attributes.len(), 13);
        assert_eq!(config.vocabulary.weak.keyword, "弱い");
    }

    #[test]
    fn test_invalid_toml_reports_parse_error() {
        let err = AnalyzerConfig::parse("[vocabulary\n").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn test_missing_file_reports_io_error() {
        let err = AnalyzerConfig::load(Path::new("/nonexistent/analyzer.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::IoError(_)));
    }
}
