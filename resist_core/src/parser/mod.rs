//! Resistance text parser
//!
//! Turns a raw resistance description into weak / half / null lists.
//! Each line expresses one category; the first matching rule wins:
//! - weak keyword: names before the weak indicator go to `weak`
//! - half keyword: names go to `half`, tagged `RequiresStrong` when the
//!   strong marker is on the line
//! - null keyword: names go to `null`, tagged `RequiresStrongest` when the
//!   strongest marker is on the line
//!
//! Lines matching none of these are dropped. Parsing never fails.

mod split;

pub use split::split_attributes;

use crate::config::{CategoryPhrases, ParserVocabulary};
use crate::types::{names_attribute, TaggedAttribute, TierMarker};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Structured form of one creature's resistance description
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedResistance {
    /// Weak entries never carry a tier marker
    pub weak: Vec<String>,
    pub half: Vec<TaggedAttribute>,
    pub null: Vec<TaggedAttribute>,
}

impl ParsedResistance {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when no category has any entry
    pub fn is_empty(&self) -> bool {
        self.weak.is_empty() && self.half.is_empty() && self.null.is_empty()
    }

    /// Total number of entries across categories
    pub fn entry_count(&self) -> usize {
        self.weak.len() + self.half.len() + self.null.len()
    }

    /// Whether any weak entry covers the attribute
    pub fn is_weak_to(&self, attribute: &str) -> bool {
        self.weak.iter().any(|w| names_attribute(w, attribute))
    }

    /// Half entries covering the attribute
    pub fn half_entries<'a>(
        &'a self,
        attribute: &'a str,
    ) -> impl Iterator<Item = &'a TaggedAttribute> {
        self.half.iter().filter(move |e| e.names(attribute))
    }

    /// Null entries covering the attribute
    pub fn null_entries<'a>(
        &'a self,
        attribute: &'a str,
    ) -> impl Iterator<Item = &'a TaggedAttribute> {
        self.null.iter().filter(move |e| e.names(attribute))
    }
}

/// Parse result with the number of lines that matched no rule
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseOutcome {
    pub parsed: ParsedResistance,
    pub dropped_lines: usize,
}

/// Line classifier driven by a [`ParserVocabulary`]
#[derive(Debug, Clone, Default)]
pub struct ResistanceTextParser {
    vocabulary: ParserVocabulary,
}

impl ResistanceTextParser {
    pub fn new(vocabulary: ParserVocabulary) -> Self {
        ResistanceTextParser { vocabulary }
    }

    pub fn vocabulary(&self) -> &ParserVocabulary {
        &self.vocabulary
    }

    /// Parse a raw description
    pub fn parse(&self, raw: &str) -> ParsedResistance {
        self.parse_with_diagnostics(raw).parsed
    }

    /// Parse a raw description and count the unrecognized lines
    pub fn parse_with_diagnostics(&self, raw: &str) -> ParseOutcome {
        let mut outcome = ParseOutcome::default();

        for line in raw.lines().map(str::trim).filter(|l| !l.is_empty()) {
            if !self.classify_line(line, &mut outcome.parsed) {
                outcome.dropped_lines += 1;
            }
        }

        if outcome.dropped_lines > 0 {
            debug!(
                dropped = outcome.dropped_lines,
                "resistance description had unrecognized lines"
            );
        }

        outcome
    }

    /// Append the entries of one line; false when no rule matched
    fn classify_line(&self, line: &str, parsed: &mut ParsedResistance) -> bool {
        let vocab = &self.vocabulary;

        if line.contains(vocab.weak.keyword.as_str()) {
            let part = vocab.weak.attribute_part(line);
            parsed
                .weak
                .extend(split_attributes(part, &vocab.delimiters));
        } else if line.contains(vocab.half.keyword.as_str()) {
            parsed.half.extend(self.tagged_entries(
                line,
                &vocab.half,
                &vocab.markers.strong,
                TierMarker::RequiresStrong,
            ));
        } else if line.contains(vocab.null.keyword.as_str()) {
            parsed.null.extend(self.tagged_entries(
                line,
                &vocab.null,
                &vocab.markers.strongest,
                TierMarker::RequiresStrongest,
            ));
        } else {
            return false;
        }

        true
    }

    fn tagged_entries(
        &self,
        line: &str,
        phrases: &CategoryPhrases,
        marker: &str,
        tag: TierMarker,
    ) -> Vec<TaggedAttribute> {
        let part = phrases.attribute_part(line);
        let (part, tag) = if line.contains(marker) {
            (part.replace(marker, ""), tag)
        } else {
            (part.to_string(), TierMarker::Untagged)
        };

        split_attributes(&part, &self.vocabulary.delimiters)
            .into_iter()
            .map(|name| TaggedAttribute::new(name, tag))
            .collect()
    }
}

/// Parse with the built-in vocabulary
pub fn parse(raw: &str) -> ParsedResistance {
    ResistanceTextParser::default().parse(raw)
}
