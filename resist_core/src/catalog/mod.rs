//! Creature catalog - name to creature record lookup

mod creature;
mod search;

pub use creature::{Creature, CreatureSummary, ResistanceInfo, Skill, Technique, UNKNOWN_FAMILY};
pub use search::{normalize_name, DEFAULT_SEARCH_LIMIT};

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Catalog loading error
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read catalog file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse catalog JSON: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// All known creatures keyed by name, iterated in name order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CreatureCatalog {
    creatures: BTreeMap<String, Creature>,
}

impl CreatureCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a catalog JSON file
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse a catalog JSON string
    pub fn parse(content: &str) -> Result<Self, CatalogError> {
        let catalog: CreatureCatalog = serde_json::from_str(content)?;
        Ok(catalog)
    }

    pub fn insert(&mut self, name: impl Into<String>, creature: Creature) {
        self.creatures.insert(name.into(), creature);
    }

    pub fn get(&self, name: &str) -> Option<&Creature> {
        self.creatures.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.creatures.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.creatures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.creatures.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.creatures.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Creature)> {
        self.creatures.iter().map(|(name, c)| (name.as_str(), c))
    }

    /// Creature count per family
    pub fn family_counts(&self) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for creature in self.creatures.values() {
            *counts
                .entry(creature.family_or_unknown().to_string())
                .or_insert(0) += 1;
        }
        counts
    }
}

impl FromIterator<(String, Creature)> for CreatureCatalog {
    fn from_iter<T: IntoIterator<Item = (String, Creature)>>(iter: T) -> Self {
        CreatureCatalog {
            creatures: iter.into_iter().collect(),
        }
    }
}
