//! Plain-text rendering of analysis results

use std::fmt::Write as _;

use resist_core::analysis::{EffectiveAttack, IneffectiveAttack, IneffectiveClass, ResistedAttack};
use resist_core::{
    AttributeCatalog, AttributeCategory, CreatureSummary, EffectivenessReport, SingleAnalysis,
    Verdict,
};

fn effective_line(attack: &EffectiveAttack) -> String {
    if attack.is_weakness() {
        format!("🔥 {} (弱点×{})", attack.attribute, attack.weak_count)
    } else {
        format!("⚡ {}", attack.attribute)
    }
}

fn ineffective_line(attack: &IneffectiveAttack) -> String {
    let icon = match attack.class {
        IneffectiveClass::AllNull | IneffectiveClass::PartialNull { .. } => "❌",
        IneffectiveClass::AllHalf => "🔽",
        IneffectiveClass::PartialHalf { .. } => "📉",
    };
    format!("{icon} {} ({})", attack.attribute, attack.class)
}

fn resisted_line(attack: &ResistedAttack) -> String {
    let icon = if attack.verdict == Verdict::Null { "❌" } else { "🔽" };
    format!("{icon} {} ({})", attack.attribute, attack.verdict)
}

fn section(out: &mut String, title: &str, lines: &[String], empty: &str) {
    let _ = writeln!(out, "{title}");
    if lines.is_empty() {
        let _ = writeln!(out, "  {empty}");
    }
    for line in lines {
        let _ = writeln!(out, "  {line}");
    }
}

/// Joint report: effective list, ineffective list, then the verdict matrix
pub fn joint(report: &EffectivenessReport) -> String {
    let mut out = String::new();

    let effective: Vec<String> = report.effective.iter().map(effective_line).collect();
    section(&mut out, "✅ 効果的な攻撃", &effective, "全員に共通して効きやすい攻撃はありません");

    let ineffective: Vec<String> = report.ineffective.iter().map(ineffective_line).collect();
    section(&mut out, "⚠️ 注意すべき攻撃", &ineffective, "注意すべき攻撃はありません");

    let headers: Vec<String> = report
        .selections
        .iter()
        .map(|s| format!("{}({})", s.creature, s.tier))
        .collect();
    let _ = writeln!(out, "\n属性\t{}", headers.join("\t"));
    for row in &report.rows {
        let cells: Vec<&str> = row.verdicts.iter().map(Verdict::label).collect();
        let _ = writeln!(out, "{}\t{}", row.attribute, cells.join("\t"));
    }

    out.trim_end().to_string()
}

/// Normal attributes grouped by category, in catalog order
fn normal_lines(analysis: &SingleAnalysis, attributes: &AttributeCatalog) -> Vec<String> {
    let is_normal = |name: &str| analysis.normal_attributes.iter().any(|n| n == name);

    let mut lines: Vec<String> = AttributeCategory::all()
        .iter()
        .filter_map(|category| {
            let names: Vec<&str> = attributes
                .by_category(*category)
                .into_iter()
                .map(|a| a.name.as_str())
                .filter(|name| is_normal(*name))
                .collect();
            (!names.is_empty()).then(|| format!("⚡ {}: {}", category.label(), names.join("、")))
        })
        .collect();

    // Attributes the catalog does not know keep their own line
    lines.extend(
        analysis
            .normal_attributes
            .iter()
            .filter(|name| attributes.get(name).is_none())
            .map(|name| format!("⚡ {name}")),
    );
    lines
}

/// Single-creature partition
pub fn single(analysis: &SingleAnalysis, attributes: &AttributeCatalog) -> String {
    let mut out = format!(
        "🎯 {} (耐性レベル: {})\n",
        analysis.selection.creature, analysis.selection.tier
    );

    if !analysis.has_resistance_data() {
        out.push_str("耐性情報がありません");
        return out;
    }

    let mut effective: Vec<String> = analysis
        .weak_attributes
        .iter()
        .map(|a| format!("🔥 {a}"))
        .collect();
    effective.extend(normal_lines(analysis, attributes));
    section(&mut out, "✅ 効果的な攻撃", &effective, "効果的な攻撃がありません");

    let resisted: Vec<String> = analysis.ineffective_attributes.iter().map(resisted_line).collect();
    section(&mut out, "⚠️ 効きにくい攻撃", &resisted, "すべての攻撃が有効です");

    out.trim_end().to_string()
}

/// One comparison row per selected creature
pub fn comparison(rows: &[(String, CreatureSummary)]) -> String {
    let mut out = String::from("モンスター\t系統\t特性\t弱点\t半減\t無効\tスキル");
    for (name, summary) in rows {
        let _ = write!(
            out,
            "\n{name}\t{}\t{}\t{}\t{}\t{}\t{}",
            summary.family,
            summary.traits,
            summary.weak,
            summary.half,
            summary.null,
            summary.skills_label()
        );
    }
    out
}
