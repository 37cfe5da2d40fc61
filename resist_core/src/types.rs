//! Core types shared by the parser and the analyzer

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Assumed power level of a creature's resistance trait
///
/// Chosen per creature at analysis time, never stored on the creature.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResistanceTier {
    #[default]
    Normal,
    Strong,
    Strongest,
}

impl ResistanceTier {
    /// Get all tiers in ascending order
    pub fn all() -> &'static [ResistanceTier] {
        &[
            ResistanceTier::Normal,
            ResistanceTier::Strong,
            ResistanceTier::Strongest,
        ]
    }

    /// Label used by the source documents
    pub fn label(&self) -> &'static str {
        match self {
            ResistanceTier::Normal => "通常",
            ResistanceTier::Strong => "強",
            ResistanceTier::Strongest => "最強",
        }
    }
}

impl fmt::Display for ResistanceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when a tier name is not recognized
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown resistance tier: {0}")]
pub struct UnknownTier(pub String);

impl FromStr for ResistanceTier {
    type Err = UnknownTier;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "通常" => Ok(ResistanceTier::Normal),
            "強" => Ok(ResistanceTier::Strong),
            "最強" => Ok(ResistanceTier::Strongest),
            other => match other.to_ascii_lowercase().as_str() {
                "normal" => Ok(ResistanceTier::Normal),
                "strong" => Ok(ResistanceTier::Strong),
                "strongest" => Ok(ResistanceTier::Strongest),
                _ => Err(UnknownTier(other.to_string())),
            },
        }
    }
}

/// Minimum tier a half/null entry needs, taken from the inline marker
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TierMarker {
    #[default]
    Untagged,
    RequiresStrong,
    RequiresStrongest,
}

impl TierMarker {
    /// Star suffix shown next to tagged entries
    pub fn stars(&self) -> &'static str {
        match self {
            TierMarker::Untagged => "",
            TierMarker::RequiresStrong => "★",
            TierMarker::RequiresStrongest => "★★",
        }
    }

    pub fn is_tagged(&self) -> bool {
        *self != TierMarker::Untagged
    }
}

/// An attribute name with the tier marker found on its source line
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaggedAttribute {
    pub name: String,
    #[serde(default)]
    pub marker: TierMarker,
}

impl TaggedAttribute {
    pub fn new(name: impl Into<String>, marker: TierMarker) -> Self {
        TaggedAttribute {
            name: name.into(),
            marker,
        }
    }

    pub fn untagged(name: impl Into<String>) -> Self {
        Self::new(name, TierMarker::Untagged)
    }

    /// Whether this entry covers the given attack attribute
    ///
    /// Entries match by containment, so `猛毒` covers `毒`.
    pub fn names(&self, attribute: &str) -> bool {
        names_attribute(&self.name, attribute)
    }
}

impl fmt::Display for TaggedAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.marker {
            TierMarker::Untagged => f.write_str(&self.name),
            marker => write!(f, "{} {}", self.name, marker.stars()),
        }
    }
}

/// Containment match between a parsed entry and a catalog attribute
pub(crate) fn names_attribute(entry: &str, attribute: &str) -> bool {
    !attribute.is_empty() && entry.contains(attribute)
}

/// Outcome of one attack attribute against one creature
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Weak,
    Half,
    Null,
    Normal,
    /// The creature has no resistance description at all
    Unknown,
}

impl Verdict {
    /// Label used by the source documents
    pub fn label(&self) -> &'static str {
        match self {
            Verdict::Weak => "弱点",
            Verdict::Half => "半減",
            Verdict::Null => "無効",
            Verdict::Normal => "通常",
            Verdict::Unknown => "情報なし",
        }
    }

    /// Half or Null
    pub fn is_resisted(&self) -> bool {
        matches!(self, Verdict::Half | Verdict::Null)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One creature selection in an analysis request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisEntry {
    pub creature: String,
    #[serde(default)]
    pub tier: ResistanceTier,
}

impl AnalysisEntry {
    pub fn new(creature: impl Into<String>, tier: ResistanceTier) -> Self {
        AnalysisEntry {
            creature: creature.into(),
            tier,
        }
    }
}

impl From<&str> for AnalysisEntry {
    fn from(s: &str) -> Self {
        AnalysisEntry::new(s, ResistanceTier::Normal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_ordering() {
        assert!(ResistanceTier::Normal < ResistanceTier::Strong);
        assert!(ResistanceTier::Strong < ResistanceTier::Strongest);
        assert_eq!(ResistanceTier::all().len(), 3);
    }

    #[test]
    fn test_tier_from_str() {
        assert_eq!("最強".parse::<ResistanceTier>(), Ok(ResistanceTier::Strongest));
        assert_eq!("強".parse::<ResistanceTier>(), Ok(ResistanceTier::Strong));
        assert_eq!("Normal".parse::<ResistanceTier>(), Ok(ResistanceTier::Normal));
        assert_eq!(" strongest ".parse::<ResistanceTier>(), Ok(ResistanceTier::Strongest));
        assert!("ultra".parse::<ResistanceTier>().is_err());
    }

    #[test]
    fn test_tagged_attribute_display() {
        assert_eq!(TaggedAttribute::untagged("イオ").to_string(), "イオ");
        assert_eq!(
            TaggedAttribute::new("ヒャド", TierMarker::RequiresStrong).to_string(),
            "ヒャド ★"
        );
        assert_eq!(
            TaggedAttribute::new("ドルマ", TierMarker::RequiresStrongest).to_string(),
            "ドルマ ★★"
        );
    }

    #[test]
    fn test_names_by_containment() {
        let entry = TaggedAttribute::untagged("猛毒");
        assert!(entry.names("毒"));
        assert!(!entry.names("マヒ"));
        assert!(!entry.names(""));
    }

    #[test]
    fn test_verdict_serialization() {
        let json = serde_json::to_string(&Verdict::Null).unwrap();
        assert_eq!(json, "\"null\"");
        let marker = serde_json::to_string(&TierMarker::RequiresStrongest).unwrap();
        assert_eq!(marker, "\"requires_strongest\"");
    }
}
