//! Prelude module for convenient imports
//!
//! ```rust
//! use resist_core::prelude::*;
//! ```

// Core types
pub use crate::types::{AnalysisEntry, ResistanceTier, TaggedAttribute, TierMarker, Verdict};

// Parsing
pub use crate::parser::{parse, ParsedResistance, ResistanceTextParser};

// Analysis
pub use crate::analysis::{
    analyze, analyze_single, resolve_verdict, Analysis, EffectivenessReport, IneffectiveClass,
    SingleAnalysis, TierEffectivenessAnalyzer,
};

// Catalogs and config
pub use crate::catalog::{Creature, CreatureCatalog};
pub use crate::config::{AnalyzerConfig, AttributeCatalog};
