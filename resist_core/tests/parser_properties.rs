//! Property tests for the parser and verdict resolution

use proptest::prelude::*;
use resist_core::{
    parse, resolve_verdict, AttributeCatalog, ParsedResistance, ResistanceTier, Verdict,
};

/// Lines made of katakana and punctuation, free of category keywords
fn keywordless_line() -> impl Strategy<Value = String> {
    "[ァ-ヶ・（）ー ]{0,24}"
}

/// Attribute names that never contain a catalog attribute
fn outside_name() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["炎ブレス", "吹雪", "休み", "ルカニ", "マヌーサ", "踊り"])
        .prop_map(str::to_string)
}

fn tier() -> impl Strategy<Value = ResistanceTier> {
    prop::sample::select(ResistanceTier::all().to_vec())
}

proptest! {
    #[test]
    fn keywordless_text_parses_empty(lines in prop::collection::vec(keywordless_line(), 0..8)) {
        let raw = lines.join("\n");
        prop_assert_eq!(parse(&raw), ParsedResistance::default());
    }

    #[test]
    fn parsing_is_idempotent(
        weak in prop::collection::vec(outside_name(), 0..4),
        half in prop::collection::vec(outside_name(), 0..4),
        strong in any::<bool>(),
    ) {
        let mut raw = String::new();
        if !weak.is_empty() {
            raw.push_str(&format!("{}に弱い\n", weak.join("・")));
        }
        if !half.is_empty() {
            raw.push_str(&format!("{}を半減{}\n", half.join("・"), if strong { "（強の場合）" } else { "" }));
        }

        let first = parse(&raw);
        let second = parse(&raw);
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first.weak.len(), weak.len());
        prop_assert_eq!(first.half.len(), half.len());
    }

    #[test]
    fn unmentioned_attributes_are_normal(
        weak in prop::collection::vec(outside_name(), 1..4),
        null in prop::collection::vec(outside_name(), 0..4),
        tier in tier(),
    ) {
        let mut raw = format!("{}に弱い\n", weak.join("・"));
        if !null.is_empty() {
            raw.push_str(&format!("{}を無効（最強の場合）\n", null.join("・")));
        }
        let parsed = parse(&raw);

        for attribute in AttributeCatalog::default().names() {
            prop_assert_eq!(resolve_verdict(&parsed, attribute, tier), Verdict::Normal);
        }
    }

    #[test]
    fn delimiter_runs_never_yield_blank_names(
        names in prop::collection::vec(outside_name(), 1..5),
        run in 1usize..4,
    ) {
        let glue = format!(" {} ", "・".repeat(run));
        let parsed = parse(&format!("{}を無効", names.join(&glue)));
        prop_assert_eq!(parsed.null.len(), names.len());
        prop_assert!(parsed.null.iter().all(|e| !e.name.trim().is_empty()));
    }
}
