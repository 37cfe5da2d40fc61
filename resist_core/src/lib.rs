//! resist_core - Resistance text parsing and attack effectiveness analysis
//!
//! This library provides:
//! - ResistanceTextParser: raw resistance descriptions to weak/half/null lists
//! - TierEffectivenessAnalyzer: tier-gated verdicts per creature and attribute
//! - EffectivenessReport: joint classification across several creatures
//! - CreatureCatalog: the collector's creature records, with name search

pub mod analysis;
pub mod catalog;
pub mod config;
pub mod parser;
pub mod prelude;
pub mod types;

// Re-export core types for convenience
pub use analysis::{
    analyze, analyze_single, resolve_verdict, Analysis, AttributeRow, EffectiveAttack,
    EffectivenessReport, IneffectiveAttack, IneffectiveClass, SingleAnalysis,
    TierEffectivenessAnalyzer,
};
pub use catalog::{CatalogError, Creature, CreatureCatalog, CreatureSummary};
pub use config::{
    AnalyzerConfig, AttackAttribute, AttributeCatalog, AttributeCategory, ConfigError,
    ParserVocabulary,
};
pub use parser::{parse, ParseOutcome, ParsedResistance, ResistanceTextParser};
pub use types::{AnalysisEntry, ResistanceTier, TaggedAttribute, TierMarker, Verdict};
