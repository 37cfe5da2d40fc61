//! Tier-conditional attack effectiveness analysis
//!
//! - `resolve_verdict`: one attribute against one parsed description
//! - `analyze`: joint report for two or more creatures
//! - `analyze_single`: weak / normal / ineffective partition for one creature

mod report;
mod verdict;

pub use report::{
    AttributeRow, EffectiveAttack, EffectivenessReport, IneffectiveAttack, IneffectiveClass,
    ResistedAttack, SingleAnalysis, VerdictCounts,
};
pub use verdict::{half_gate_passes, null_gate_passes, resolve_creature_verdict, resolve_verdict};

use crate::catalog::CreatureCatalog;
use crate::config::{AnalyzerConfig, AttributeCatalog};
use crate::parser::{ParsedResistance, ResistanceTextParser};
use crate::types::{AnalysisEntry, ResistanceTier, Verdict};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Minimum number of valid selections for a joint report
pub const MIN_JOINT_SELECTIONS: usize = 2;

/// Result shape chosen by the number of valid selections
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum Analysis {
    /// No valid selection
    Empty,
    Single(SingleAnalysis),
    Joint(EffectivenessReport),
}

/// Parser plus attribute catalog
#[derive(Debug, Clone, Default)]
pub struct TierEffectivenessAnalyzer {
    parser: ResistanceTextParser,
    attributes: AttributeCatalog,
}

impl TierEffectivenessAnalyzer {
    pub fn new(parser: ResistanceTextParser, attributes: AttributeCatalog) -> Self {
        TierEffectivenessAnalyzer { parser, attributes }
    }

    pub fn from_config(config: AnalyzerConfig) -> Self {
        Self::new(ResistanceTextParser::new(config.vocabulary), config.attributes)
    }

    pub fn parser(&self) -> &ResistanceTextParser {
        &self.parser
    }

    pub fn attributes(&self) -> &AttributeCatalog {
        &self.attributes
    }

    /// Verdict for every catalog attribute, in catalog order
    pub fn verdicts(
        &self,
        parsed: Option<&ParsedResistance>,
        tier: ResistanceTier,
    ) -> Vec<Verdict> {
        self.attributes
            .names()
            .map(|attr| resolve_creature_verdict(parsed, attr, tier))
            .collect()
    }

    /// Selections whose creature exists in the catalog
    fn valid_selections<'a>(
        &self,
        entries: &'a [AnalysisEntry],
        catalog: &CreatureCatalog,
    ) -> Vec<&'a AnalysisEntry> {
        entries
            .iter()
            .filter(|entry| {
                let known = catalog.contains(&entry.creature);
                if !known {
                    debug!(creature = %entry.creature, "excluding unknown creature from analysis");
                }
                known
            })
            .collect()
    }

    /// Joint report for two or more creatures
    ///
    /// Unknown creatures are excluded. Fewer than two remaining selections
    /// give the empty report.
    pub fn analyze(
        &self,
        entries: &[AnalysisEntry],
        catalog: &CreatureCatalog,
    ) -> EffectivenessReport {
        let valid = self.valid_selections(entries, catalog);
        self.joint_report(&valid, catalog)
    }

    /// Joint report over selections already known to be in the catalog
    fn joint_report(
        &self,
        valid: &[&AnalysisEntry],
        catalog: &CreatureCatalog,
    ) -> EffectivenessReport {
        if valid.len() < MIN_JOINT_SELECTIONS {
            debug!(valid = valid.len(), "not enough creatures for a joint report");
            return EffectivenessReport::empty();
        }

        // Parse each description once per request
        let parsed: Vec<Option<ParsedResistance>> = valid
            .iter()
            .map(|entry| {
                catalog
                    .get(&entry.creature)
                    .and_then(|c| c.parse_resistance(&self.parser))
            })
            .collect();

        let rows = self
            .attributes
            .names()
            .map(|attr| {
                let verdicts = valid
                    .iter()
                    .zip(&parsed)
                    .map(|(entry, parsed)| {
                        resolve_creature_verdict(parsed.as_ref(), attr, entry.tier)
                    })
                    .collect();
                AttributeRow::new(attr, verdicts)
            })
            .collect();

        let selections = valid.iter().map(|entry| (*entry).clone()).collect();
        EffectivenessReport::from_rows(selections, rows)
    }

    /// Partition every catalog attribute for one creature
    ///
    /// Returns None when the creature is not in the catalog.
    pub fn analyze_single(
        &self,
        entry: &AnalysisEntry,
        catalog: &CreatureCatalog,
    ) -> Option<SingleAnalysis> {
        let creature = catalog.get(&entry.creature)?;
        let parsed = creature.parse_resistance(&self.parser);

        let mut analysis = SingleAnalysis::new(entry.clone());
        for (attr, verdict) in self
            .attributes
            .names()
            .zip(self.verdicts(parsed.as_ref(), entry.tier))
        {
            analysis.push(attr, verdict);
        }
        Some(analysis)
    }

    /// Single or joint analysis depending on how many selections are valid
    pub fn analyze_selection(
        &self,
        entries: &[AnalysisEntry],
        catalog: &CreatureCatalog,
    ) -> Analysis {
        let valid = self.valid_selections(entries, catalog);
        match valid.as_slice() {
            [] => Analysis::Empty,
            [only] => self
                .analyze_single(only, catalog)
                .map_or(Analysis::Empty, Analysis::Single),
            _ => Analysis::Joint(self.joint_report(&valid, catalog)),
        }
    }
}

/// Joint report with the built-in vocabulary and attribute catalog
pub fn analyze(entries: &[AnalysisEntry], catalog: &CreatureCatalog) -> EffectivenessReport {
    TierEffectivenessAnalyzer::default().analyze(entries, catalog)
}

/// Single-creature partition with the built-in vocabulary and attribute catalog
pub fn analyze_single(entry: &AnalysisEntry, catalog: &CreatureCatalog) -> Option<SingleAnalysis> {
    TierEffectivenessAnalyzer::default().analyze_single(entry, catalog)
}
