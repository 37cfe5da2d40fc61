//! Analysis results

use crate::types::{AnalysisEntry, Verdict};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Verdict tallies for one attribute row
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerdictCounts {
    pub weak: usize,
    pub half: usize,
    pub null: usize,
    pub normal: usize,
    pub unknown: usize,
}

impl VerdictCounts {
    pub fn tally(verdicts: &[Verdict]) -> Self {
        let mut counts = VerdictCounts::default();
        for verdict in verdicts {
            match verdict {
                Verdict::Weak => counts.weak += 1,
                Verdict::Half => counts.half += 1,
                Verdict::Null => counts.null += 1,
                Verdict::Normal => counts.normal += 1,
                Verdict::Unknown => counts.unknown += 1,
            }
        }
        counts
    }

    pub fn total(&self) -> usize {
        self.weak + self.half + self.null + self.normal + self.unknown
    }
}

/// Why an attribute is blunted across the selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum IneffectiveClass {
    /// Every creature nullifies it
    AllNull,
    /// Some creatures nullify it
    PartialNull { count: usize },
    /// Every creature halves it
    AllHalf,
    /// Some creatures halve it, none nullify it
    PartialHalf { count: usize },
}

impl IneffectiveClass {
    /// Classify from tallies; Null outranks Half
    pub fn from_counts(counts: &VerdictCounts) -> Option<Self> {
        let total = counts.total();
        if counts.null > 0 {
            if counts.null == total {
                Some(IneffectiveClass::AllNull)
            } else {
                Some(IneffectiveClass::PartialNull { count: counts.null })
            }
        } else if counts.half > 0 {
            if counts.half == total {
                Some(IneffectiveClass::AllHalf)
            } else {
                Some(IneffectiveClass::PartialHalf { count: counts.half })
            }
        } else {
            None
        }
    }
}

impl fmt::Display for IneffectiveClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IneffectiveClass::AllNull => f.write_str("全員無効"),
            IneffectiveClass::PartialNull { count } => write!(f, "無効×{}", count),
            IneffectiveClass::AllHalf => f.write_str("全員半減"),
            IneffectiveClass::PartialHalf { count } => write!(f, "半減×{}", count),
        }
    }
}

/// Attribute that no selected creature halves or nullifies
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffectiveAttack {
    pub attribute: String,
    /// Creatures weak to it; non-zero marks a weakness hit
    pub weak_count: usize,
}

impl EffectiveAttack {
    pub fn is_weakness(&self) -> bool {
        self.weak_count > 0
    }
}

/// Attribute that at least one selected creature halves or nullifies
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IneffectiveAttack {
    pub attribute: String,
    pub class: IneffectiveClass,
}

/// Per-creature verdicts for one attribute plus its classification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeRow {
    pub attribute: String,
    /// One verdict per selection, in selection order
    pub verdicts: Vec<Verdict>,
    pub universally_effective: bool,
    pub universally_ineffective: bool,
    pub counts: VerdictCounts,
    pub ineffective: Option<IneffectiveClass>,
}

impl AttributeRow {
    pub fn new(attribute: impl Into<String>, verdicts: Vec<Verdict>) -> Self {
        let counts = VerdictCounts::tally(&verdicts);
        let ineffective = IneffectiveClass::from_counts(&counts);
        AttributeRow {
            attribute: attribute.into(),
            verdicts,
            universally_effective: counts.half == 0 && counts.null == 0,
            universally_ineffective: ineffective.is_some(),
            counts,
            ineffective,
        }
    }
}

/// Joint result for two or more creatures
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffectivenessReport {
    /// Valid selections, in request order; matrix columns
    pub selections: Vec<AnalysisEntry>,
    /// One row per catalog attribute, in catalog order
    pub rows: Vec<AttributeRow>,
    pub effective: Vec<EffectiveAttack>,
    pub ineffective: Vec<IneffectiveAttack>,
}

impl EffectivenessReport {
    /// The "not enough creatures" result
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_rows(selections: Vec<AnalysisEntry>, rows: Vec<AttributeRow>) -> Self {
        let effective = rows
            .iter()
            .filter(|r| r.universally_effective)
            .map(|r| EffectiveAttack {
                attribute: r.attribute.clone(),
                weak_count: r.counts.weak,
            })
            .collect();
        let ineffective = rows
            .iter()
            .filter_map(|r| {
                r.ineffective.map(|class| IneffectiveAttack {
                    attribute: r.attribute.clone(),
                    class,
                })
            })
            .collect();

        EffectivenessReport {
            selections,
            rows,
            effective,
            ineffective,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.selections.is_empty()
    }

    pub fn row(&self, attribute: &str) -> Option<&AttributeRow> {
        self.rows.iter().find(|r| r.attribute == attribute)
    }

    /// Verdict row for an attribute, if it is in the catalog
    pub fn verdicts(&self, attribute: &str) -> Option<&[Verdict]> {
        self.row(attribute).map(|r| r.verdicts.as_slice())
    }

    pub fn is_effective(&self, attribute: &str) -> bool {
        self.effective.iter().any(|e| e.attribute == attribute)
    }

    pub fn ineffective_class(&self, attribute: &str) -> Option<IneffectiveClass> {
        self.ineffective
            .iter()
            .find(|i| i.attribute == attribute)
            .map(|i| i.class)
    }
}

/// Half or Null outcome in a single-creature analysis
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResistedAttack {
    pub attribute: String,
    pub verdict: Verdict,
}

/// Partition of every catalog attribute for one creature
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SingleAnalysis {
    pub selection: AnalysisEntry,
    pub weak_attributes: Vec<String>,
    pub normal_attributes: Vec<String>,
    pub ineffective_attributes: Vec<ResistedAttack>,
    /// Filled instead of the other lists when there is no description
    pub unknown_attributes: Vec<String>,
}

impl SingleAnalysis {
    pub fn new(selection: AnalysisEntry) -> Self {
        SingleAnalysis {
            selection,
            weak_attributes: Vec::new(),
            normal_attributes: Vec::new(),
            ineffective_attributes: Vec::new(),
            unknown_attributes: Vec::new(),
        }
    }

    /// File one verdict under its partition
    pub fn push(&mut self, attribute: &str, verdict: Verdict) {
        let attribute = attribute.to_string();
        match verdict {
            Verdict::Weak => self.weak_attributes.push(attribute),
            Verdict::Normal => self.normal_attributes.push(attribute),
            Verdict::Half | Verdict::Null => self
                .ineffective_attributes
                .push(ResistedAttack { attribute, verdict }),
            Verdict::Unknown => self.unknown_attributes.push(attribute),
        }
    }

    pub fn has_resistance_data(&self) -> bool {
        self.unknown_attributes.is_empty()
    }

    /// Number of attributes across all partitions
    pub fn attribute_count(&self) -> usize {
        self.weak_attributes.len()
            + self.normal_attributes.len()
            + self.ineffective_attributes.len()
            + self.unknown_attributes.len()
    }
}
