//! Attack attribute catalog

use super::ConfigError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Broad grouping of an attack attribute
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeCategory {
    #[default]
    Spell,
    InstantDeath,
    Ailment,
    Seal,
}

impl AttributeCategory {
    pub fn all() -> &'static [AttributeCategory] {
        &[
            AttributeCategory::Spell,
            AttributeCategory::InstantDeath,
            AttributeCategory::Ailment,
            AttributeCategory::Seal,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            AttributeCategory::Spell => "呪文",
            AttributeCategory::InstantDeath => "即死",
            AttributeCategory::Ailment => "状態異常",
            AttributeCategory::Seal => "封印",
        }
    }
}

/// One known attack attribute
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AttackAttribute {
    pub name: String,
    #[serde(default)]
    pub category: AttributeCategory,
}

impl AttackAttribute {
    pub fn new(name: impl Into<String>, category: AttributeCategory) -> Self {
        AttackAttribute {
            name: name.into(),
            category,
        }
    }
}

/// Ordered attack attributes; order drives report order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttributeCatalog {
    attributes: Vec<AttackAttribute>,
}

const DEFAULT_ATTRIBUTES: [(&str, AttributeCategory); 13] = [
    ("メラ", AttributeCategory::Spell),
    ("ギラ", AttributeCategory::Spell),
    ("ヒャド", AttributeCategory::Spell),
    ("バギ", AttributeCategory::Spell),
    ("イオ", AttributeCategory::Spell),
    ("デイン", AttributeCategory::Spell),
    ("ドルマ", AttributeCategory::Spell),
    ("ザキ", AttributeCategory::InstantDeath),
    ("マヒ", AttributeCategory::Ailment),
    ("眠り", AttributeCategory::Ailment),
    ("混乱", AttributeCategory::Ailment),
    ("毒", AttributeCategory::Ailment),
    ("マホトーン", AttributeCategory::Seal),
];

impl Default for AttributeCatalog {
    fn default() -> Self {
        AttributeCatalog {
            attributes: DEFAULT_ATTRIBUTES
                .iter()
                .map(|(name, category)| AttackAttribute::new(*name, *category))
                .collect(),
        }
    }
}

impl AttributeCatalog {
    pub fn new(attributes: Vec<AttackAttribute>) -> Self {
        AttributeCatalog { attributes }
    }

    /// Catalog with no attributes
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    pub fn iter(&self) -> impl Iterator<Item = &AttackAttribute> {
        self.attributes.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.attributes.iter().map(|a| a.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&AttackAttribute> {
        self.attributes.iter().find(|a| a.name == name)
    }

    /// Attributes belonging to one category, in catalog order
    pub fn by_category(&self, category: AttributeCategory) -> Vec<&AttackAttribute> {
        self.attributes
            .iter()
            .filter(|a| a.category == category)
            .collect()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();
        for attribute in &self.attributes {
            if attribute.name.trim().is_empty() {
                return Err(ConfigError::ValidationError(
                    "attack attribute names must not be blank".to_string(),
                ));
            }
            if !seen.insert(attribute.name.as_str()) {
                return Err(ConfigError::ValidationError(format!(
                    "duplicate attack attribute: {}",
                    attribute.name
                )));
            }
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a AttributeCatalog {
    type Item = &'a AttackAttribute;
    type IntoIter = std::slice::Iter<'a, AttackAttribute>;

    fn into_iter(self) -> Self::IntoIter {
        self.attributes.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AnalyzerConfig;

    #[test]
    fn test_default_catalog_order() {
        let catalog = AttributeCatalog::default();
        assert_eq!(catalog.len(), 13);
        let names: Vec<&str> = catalog.names().collect();
        assert_eq!(names.first(), Some(&"メラ"));
        assert_eq!(names.last(), Some(&"マホトーン"));
        assert!(catalog.validate().is_ok());
    }

    #[test]
    fn test_by_category() {
        let catalog = AttributeCatalog::default();
        assert_eq!(catalog.by_category(AttributeCategory::Spell).len(), 7);
        assert_eq!(catalog.by_category(AttributeCategory::Ailment).len(), 4);
        assert_eq!(catalog.get("ザキ").map(|a| a.category), Some(AttributeCategory::InstantDeath));
    }

    #[test]
    fn test_every_default_attribute_has_a_listed_category() {
        let catalog = AttributeCatalog::default();
        let grouped: usize = AttributeCategory::all()
            .iter()
            .map(|category| catalog.by_category(*category).len())
            .sum();
        assert_eq!(grouped, catalog.len());
        assert_eq!(AttributeCategory::Seal.label(), "封印");
    }

    #[test]
    fn test_parse_custom_catalog() {
        let toml = r#"
[[attributes]]
name = "炎ブレス"

[[attributes]]
name = "吹雪"
category = "spell"

[[attributes]]
name = "休み"
category = "ailment"
"#;
        let config = AnalyzerConfig::parse(toml).unwrap();
        let names: Vec<&str> = config.attributes.names().collect();
        assert_eq!(names, vec!["炎ブレス", "吹雪", "休み"]);
    }

    #[test]
    fn test_duplicate_attribute_rejected() {
        let toml = r#"
[[attributes]]
name = "メラ"

[[attributes]]
name = "メラ"
"#;
        let err = AnalyzerConfig::parse(toml).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn test_empty_catalog_is_valid() {
        assert!(AttributeCatalog::empty().validate().is_ok());
    }
}
