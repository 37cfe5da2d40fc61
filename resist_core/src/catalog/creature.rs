//! Creature records as delivered by the collector

use crate::parser::{ParsedResistance, ResistanceTextParser};
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;

/// Family name used when a creature has none
pub const UNKNOWN_FAMILY: &str = "未知";

/// One catalog entity
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Creature {
    #[serde(rename = "系統", default, skip_serializing_if = "Option::is_none")]
    pub family: Option<String>,
    #[serde(rename = "特性", default)]
    pub traits: Vec<String>,
    #[serde(rename = "耐性", default)]
    pub resistance: ResistanceInfo,
    #[serde(rename = "スキル", default)]
    pub skills: Vec<Skill>,
}

/// Raw resistance block
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResistanceInfo {
    #[serde(rename = "説明", default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    #[serde(rename = "スキル名")]
    pub name: String,
    #[serde(rename = "特技", default)]
    pub techniques: Vec<Technique>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Technique {
    #[serde(rename = "技名")]
    pub name: String,
    #[serde(rename = "SP", default)]
    pub sp: String,
    #[serde(rename = "効果", default)]
    pub effect: String,
}

impl Creature {
    pub fn family_or_unknown(&self) -> &str {
        self.family.as_deref().unwrap_or(UNKNOWN_FAMILY)
    }

    /// Resistance description, treating a blank one as absent
    pub fn description(&self) -> Option<&str> {
        self.resistance
            .description
            .as_deref()
            .filter(|d| !d.trim().is_empty())
    }

    /// Parse the description, or None when the creature has none
    pub fn parse_resistance(&self, parser: &ResistanceTextParser) -> Option<ParsedResistance> {
        self.description().map(|d| parser.parse(d))
    }

    /// Techniques across every skill
    pub fn technique_count(&self) -> usize {
        self.skills.iter().map(|skill| skill.techniques.len()).sum()
    }

    /// Side-by-side comparison row
    pub fn summary(&self, parser: &ResistanceTextParser) -> CreatureSummary {
        let (weak, half, null) = match self.parse_resistance(parser) {
            Some(parsed) => (
                join_or_none(parsed.weak.iter().map(String::as_str)),
                join_or_none(parsed.half.iter().map(|e| e.to_string())),
                join_or_none(parsed.null.iter().map(|e| e.to_string())),
            ),
            None => (NO_DATA.to_string(), NO_DATA.to_string(), NO_DATA.to_string()),
        };

        CreatureSummary {
            family: self.family_or_unknown().to_string(),
            traits: join_or_none(self.traits.iter().map(String::as_str)),
            weak,
            half,
            null,
            skill_count: self.skills.len(),
            technique_count: self.technique_count(),
        }
    }
}

const NONE: &str = "なし";
const NO_DATA: &str = "情報なし";

fn join_or_none<S: Borrow<str>>(items: impl Iterator<Item = S>) -> String {
    let parts: Vec<S> = items.collect();
    if parts.is_empty() {
        NONE.to_string()
    } else {
        parts.join("、")
    }
}

/// Flattened display values for comparing creatures
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatureSummary {
    pub family: String,
    pub traits: String,
    pub weak: String,
    pub half: String,
    pub null: String,
    pub skill_count: usize,
    pub technique_count: usize,
}

impl CreatureSummary {
    /// e.g. `2スキル / 5特技`
    pub fn skills_label(&self) -> String {
        format!("{}スキル / {}特技", self.skill_count, self.technique_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slime() -> Creature {
        serde_json::from_str(
            r#"{
                "系統": "スライム系",
                "特性": ["スモールボディ", "メラブレイク"],
                "耐性": { "説明": "ギラに弱い\nヒャドを半減（強の場合）\nイオを無効" },
                "スキル": [
                    {
                        "スキル名": "スライム",
                        "特技": [
                            { "技名": "ホイミ", "SP": "3", "効果": "HPを約30回復" }
                        ]
                    }
                ]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_deserialize_collector_record() {
        let creature = slime();
        assert_eq!(creature.family.as_deref(), Some("スライム系"));
        assert_eq!(creature.traits.len(), 2);
        assert_eq!(creature.skills[0].techniques[0].sp, "3");
        assert!(creature.description().is_some());
    }

    #[test]
    fn test_missing_fields_default() {
        let creature: Creature = serde_json::from_str(r#"{ "耐性": {} }"#).unwrap();
        assert!(creature.description().is_none());
        assert_eq!(creature.family_or_unknown(), UNKNOWN_FAMILY);
        assert!(creature.skills.is_empty());
    }

    #[test]
    fn test_blank_description_is_absent() {
        let creature: Creature =
            serde_json::from_str(r#"{ "耐性": { "説明": "  \n " } }"#).unwrap();
        assert!(creature
            .parse_resistance(&ResistanceTextParser::default())
            .is_none());
    }

    #[test]
    fn test_summary() {
        let summary = slime().summary(&ResistanceTextParser::default());
        assert_eq!(summary.family, "スライム系");
        assert_eq!(summary.traits, "スモールボディ、メラブレイク");
        assert_eq!(summary.weak, "ギラ");
        assert_eq!(summary.half, "ヒャド ★");
        assert_eq!(summary.null, "イオ");
        assert_eq!(summary.skill_count, 1);
        assert_eq!(summary.technique_count, 1);
        assert_eq!(summary.skills_label(), "1スキル / 1特技");
    }

    #[test]
    fn test_technique_count_sums_every_skill() {
        let technique = |name: &str| Technique {
            name: name.to_string(),
            ..Technique::default()
        };
        let creature = Creature {
            skills: vec![
                Skill {
                    name: "A".to_string(),
                    techniques: vec![technique("メラ"), technique("ギラ")],
                },
                Skill {
                    name: "B".to_string(),
                    techniques: vec![technique("ホイミ")],
                },
                Skill::default(),
            ],
            ..Creature::default()
        };
        let summary = creature.summary(&ResistanceTextParser::default());
        assert_eq!(creature.technique_count(), 3);
        assert_eq!(summary.skills_label(), "3スキル / 3特技");
    }

    #[test]
    fn test_summary_without_description() {
        let summary = Creature::default().summary(&ResistanceTextParser::default());
        assert_eq!(summary.weak, "情報なし");
        assert_eq!(summary.traits, "なし");
        assert_eq!(summary.family, "未知");
        assert_eq!(summary.skills_label(), "0スキル / 0特技");
    }
}
