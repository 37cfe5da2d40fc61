//! Parser vocabulary: keywords, indicator phrases and tier markers

use super::ConfigError;
use serde::{Deserialize, Serialize};

/// Words that recognize one resistance category on a line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryPhrases {
    /// Presence of this word classifies the line
    pub keyword: String,
    /// Phrases that end the attribute list, tried in order
    pub indicators: Vec<String>,
}

impl CategoryPhrases {
    pub fn new(keyword: &str, indicators: &[&str]) -> Self {
        CategoryPhrases {
            keyword: keyword.to_string(),
            indicators: indicators.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Text preceding the first indicator phrase found on the line
    ///
    /// Falls back to the whole line when no indicator occurs.
    pub fn attribute_part<'a>(&self, line: &'a str) -> &'a str {
        self.indicators
            .iter()
            .filter(|phrase| !phrase.is_empty())
            .find_map(|phrase| line.find(phrase.as_str()).map(|idx| &line[..idx]))
            .unwrap_or(line)
    }

    fn validate(&self, category: &str) -> Result<(), ConfigError> {
        if self.keyword.trim().is_empty() {
            return Err(ConfigError::ValidationError(format!(
                "{} keyword must not be empty",
                category
            )));
        }
        if self.indicators.iter().any(|p| p.trim().is_empty()) {
            return Err(ConfigError::ValidationError(format!(
                "{} indicator phrases must not be empty",
                category
            )));
        }
        Ok(())
    }
}

/// Parenthetical suffixes that gate an entry on the resistance tier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierMarkers {
    #[serde(default = "default_strong_marker")]
    pub strong: String,
    #[serde(default = "default_strongest_marker")]
    pub strongest: String,
}

impl Default for TierMarkers {
    fn default() -> Self {
        TierMarkers {
            strong: default_strong_marker(),
            strongest: default_strongest_marker(),
        }
    }
}

fn default_strong_marker() -> String {
    "（強の場合）".to_string()
}
fn default_strongest_marker() -> String {
    "（最強の場合）".to_string()
}

/// Everything the resistance text parser matches against
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParserVocabulary {
    #[serde(default = "default_weak")]
    pub weak: CategoryPhrases,
    #[serde(default = "default_half")]
    pub half: CategoryPhrases,
    #[serde(default = "default_null")]
    pub null: CategoryPhrases,
    #[serde(default)]
    pub markers: TierMarkers,
    /// Connector glyphs between attribute names
    #[serde(default = "default_delimiters")]
    pub delimiters: Vec<char>,
}

impl Default for ParserVocabulary {
    fn default() -> Self {
        ParserVocabulary {
            weak: default_weak(),
            half: default_half(),
            null: default_null(),
            markers: TierMarkers::default(),
            delimiters: default_delimiters(),
        }
    }
}

fn default_weak() -> CategoryPhrases {
    CategoryPhrases::new("弱い", &["に弱い", "が弱い"])
}
fn default_half() -> CategoryPhrases {
    CategoryPhrases::new("半減", &["を半減", "が半減"])
}
fn default_null() -> CategoryPhrases {
    CategoryPhrases::new("無効", &["を無効", "が無効"])
}
fn default_delimiters() -> Vec<char> {
    vec!['・', '･']
}

impl ParserVocabulary {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.weak.validate("weak")?;
        self.half.validate("half")?;
        self.null.validate("null")?;
        if self.markers.strong.trim().is_empty() || self.markers.strongest.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "tier markers must not be empty".to_string(),
            ));
        }
        if self.delimiters.is_empty() {
            return Err(ConfigError::ValidationError(
                "at least one attribute delimiter is required".to_string(),
            ));
        }
        if self.delimiters.iter().any(|c| c.is_whitespace()) {
            return Err(ConfigError::ValidationError(
                "whitespace cannot be used as an attribute delimiter".to_string(),
            ));
        }
        Ok(())
    }
}
