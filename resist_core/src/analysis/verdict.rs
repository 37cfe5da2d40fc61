//! Single-creature verdict resolution
//!
//! Precedence is Null, then Half, then Weak, then Normal. Each half/null
//! entry only counts when its tier gate passes:
//!
//! | tier      | null gate                     | half gate                   |
//! |-----------|-------------------------------|-----------------------------|
//! | Normal    | always                        | always                      |
//! | Strong    | any marker                    | `RequiresStrong` only       |
//! | Strongest | `RequiresStrongest` only      | always                      |

use crate::parser::ParsedResistance;
use crate::types::{ResistanceTier, TierMarker, Verdict};

/// Whether a null entry with this marker applies at the tier
pub fn null_gate_passes(tier: ResistanceTier, marker: TierMarker) -> bool {
    match tier {
        ResistanceTier::Normal => true,
        ResistanceTier::Strong => marker.is_tagged(),
        ResistanceTier::Strongest => marker == TierMarker::RequiresStrongest,
    }
}

/// Whether a half entry with this marker applies at the tier
pub fn half_gate_passes(tier: ResistanceTier, marker: TierMarker) -> bool {
    match tier {
        ResistanceTier::Normal => true,
        ResistanceTier::Strong => marker == TierMarker::RequiresStrong,
        ResistanceTier::Strongest => true,
    }
}

/// Resolve one attack attribute against a parsed description
pub fn resolve_verdict(
    parsed: &ParsedResistance,
    attribute: &str,
    tier: ResistanceTier,
) -> Verdict {
    if parsed
        .null_entries(attribute)
        .any(|e| null_gate_passes(tier, e.marker))
    {
        return Verdict::Null;
    }

    if parsed
        .half_entries(attribute)
        .any(|e| half_gate_passes(tier, e.marker))
    {
        return Verdict::Half;
    }

    if parsed.is_weak_to(attribute) {
        return Verdict::Weak;
    }

    Verdict::Normal
}

/// Resolve against a creature that may have no description at all
pub fn resolve_creature_verdict(
    parsed: Option<&ParsedResistance>,
    attribute: &str,
    tier: ResistanceTier,
) -> Verdict {
    match parsed {
        Some(parsed) => resolve_verdict(parsed, attribute, tier),
        None => Verdict::Unknown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;
    use crate::types::TaggedAttribute;

    const TIERS: [ResistanceTier; 3] = [
        ResistanceTier::Normal,
        ResistanceTier::Strong,
        ResistanceTier::Strongest,
    ];

    fn half_only(marker: TierMarker) -> ParsedResistance {
        ParsedResistance {
            half: vec![TaggedAttribute::new("ヒャド", marker)],
            ..ParsedResistance::default()
        }
    }

    fn null_only(marker: TierMarker) -> ParsedResistance {
        ParsedResistance {
            null: vec![TaggedAttribute::new("ヒャド", marker)],
            ..ParsedResistance::default()
        }
    }

    fn verdicts(parsed: &ParsedResistance) -> Vec<Verdict> {
        TIERS
            .iter()
            .map(|tier| resolve_verdict(parsed, "ヒャド", *tier))
            .collect()
    }

    #[test]
    fn test_untagged_half_skips_strong_tier() {
        // Untagged half applies at Normal and Strongest but not Strong
        let parsed = half_only(TierMarker::Untagged);
        assert_eq!(
            verdicts(&parsed),
            vec![Verdict::Half, Verdict::Normal, Verdict::Half]
        );
    }

    #[test]
    fn test_strong_tagged_half() {
        let parsed = half_only(TierMarker::RequiresStrong);
        assert_eq!(
            verdicts(&parsed),
            vec![Verdict::Half, Verdict::Half, Verdict::Half]
        );
    }

    #[test]
    fn test_strongest_tagged_half() {
        let parsed = half_only(TierMarker::RequiresStrongest);
        assert_eq!(
            verdicts(&parsed),
            vec![Verdict::Half, Verdict::Normal, Verdict::Half]
        );
    }

    #[test]
    fn test_untagged_null_only_at_normal() {
        let parsed = null_only(TierMarker::Untagged);
        assert_eq!(
            verdicts(&parsed),
            vec![Verdict::Null, Verdict::Normal, Verdict::Normal]
        );
    }

    #[test]
    fn test_strong_tagged_null() {
        let parsed = null_only(TierMarker::RequiresStrong);
        assert_eq!(
            verdicts(&parsed),
            vec![Verdict::Null, Verdict::Null, Verdict::Normal]
        );
    }

    #[test]
    fn test_strongest_tagged_null() {
        let parsed = null_only(TierMarker::RequiresStrongest);
        assert_eq!(
            verdicts(&parsed),
            vec![Verdict::Null, Verdict::Null, Verdict::Null]
        );
    }

    #[test]
    fn test_null_takes_precedence_over_weak() {
        let parsed = parse("ギラに弱い\nギラを無効");
        assert_eq!(
            resolve_verdict(&parsed, "ギラ", ResistanceTier::Normal),
            Verdict::Null
        );
    }

    #[test]
    fn test_gated_out_null_falls_through_to_weak() {
        let parsed = parse("ギラに弱い\nギラを無効");
        assert_eq!(
            resolve_verdict(&parsed, "ギラ", ResistanceTier::Strong),
            Verdict::Weak
        );
    }

    #[test]
    fn test_half_takes_precedence_over_weak() {
        let parsed = parse("バギに弱い\nバギを半減");
        assert_eq!(
            resolve_verdict(&parsed, "バギ", ResistanceTier::Normal),
            Verdict::Half
        );
    }

    #[test]
    fn test_any_passing_entry_is_enough() {
        // The untagged null fails at Strongest but the tagged one passes
        let parsed = parse("イオを無効\nイオを無効（最強の場合）");
        assert_eq!(
            resolve_verdict(&parsed, "イオ", ResistanceTier::Strongest),
            Verdict::Null
        );
    }

    #[test]
    fn test_unmentioned_is_normal() {
        let parsed = parse("メラに弱い");
        for tier in TIERS {
            assert_eq!(resolve_verdict(&parsed, "デイン", tier), Verdict::Normal);
        }
    }

    #[test]
    fn test_missing_description_is_unknown() {
        for tier in TIERS {
            assert_eq!(resolve_creature_verdict(None, "メラ", tier), Verdict::Unknown);
        }
    }
}
