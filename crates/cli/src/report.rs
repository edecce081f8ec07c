use anyhow::Result;
use console::style;
use numera_hypothesis::VocabularySet;
use numera_protocol::{serialize_json_pretty, BuildOutput, PROFILE_SCHEMA_VERSION};
use serde::Serialize;

const RULE_WIDTH: usize = 60;

pub fn render_build_text(out: &BuildOutput) -> Result<String> {
    let heavy = "=".repeat(RULE_WIDTH);
    let light = "-".repeat(RULE_WIDTH);

    let mut text = String::new();
    text.push_str(&format!("{heavy}\n"));
    text.push_str(&format!(
        "{}\n",
        style("  Numerical hypothesis builder (phase 1)").bold()
    ));
    text.push_str(&format!("{heavy}\n"));
    text.push_str(&format!("{}\n", style("Study profile:").cyan()));
    text.push_str(&serialize_json_pretty(&out.profile)?);
    text.push_str("\n\n");
    text.push_str(&format!("{}\n", style("Research question:").cyan()));
    text.push_str(&format!("{}\n", out.question));
    text.push_str(&format!("{light}\n"));
    text.push_str("Phase 1 complete. Next: define the reference policies.\n");
    Ok(text)
}

#[derive(Debug, Serialize)]
pub struct VocabularyReport {
    pub schema_version: u32,
    pub sets: Vec<VocabularySetReport>,
}

#[derive(Debug, Serialize)]
pub struct VocabularySetReport {
    pub name: &'static str,
    pub title: &'static str,
    pub members: Vec<VocabularyMemberReport>,
}

#[derive(Debug, Serialize)]
pub struct VocabularyMemberReport {
    pub position: usize,
    pub key: &'static str,
    pub label: &'static str,
}

pub fn vocabulary_report(sets: &[VocabularySet]) -> VocabularyReport {
    VocabularyReport {
        schema_version: PROFILE_SCHEMA_VERSION,
        sets: sets
            .iter()
            .map(|set| VocabularySetReport {
                name: set.name(),
                title: set.title(),
                members: set
                    .entries()
                    .into_iter()
                    .map(|entry| VocabularyMemberReport {
                        position: entry.position,
                        key: entry.key,
                        label: entry.label,
                    })
                    .collect(),
            })
            .collect(),
    }
}

pub fn render_vocabulary_text(report: &VocabularyReport) -> String {
    let mut text = String::new();
    for (idx, set) in report.sets.iter().enumerate() {
        if idx > 0 {
            text.push('\n');
        }
        text.push_str(&format!("{} ({})\n", style(set.title).bold(), set.name));
        let key_width = set.members.iter().map(|m| m.key.len()).max().unwrap_or(0);
        for member in &set.members {
            text.push_str(&format!(
                "  [{}] {:<key_width$}  {}\n",
                member.position, member.key, member.label
            ));
        }
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use numera_hypothesis::{AnalysisUnitKind, Hypothesis, NumericalSourceKind, PhenomenonKind};

    #[test]
    fn build_text_contains_profile_and_question() {
        console::set_colors_enabled(false);
        let hypothesis = Hypothesis::new(
            PhenomenonKind::Balance,
            AnalysisUnitKind::Letter,
            "و",
            "entire corpus",
            NumericalSourceKind::ExplicitInText,
            "7",
        );
        let out = BuildOutput::new(hypothesis.to_profile(), hypothesis.to_question_text());
        let text = render_build_text(&out).unwrap();
        assert!(text.contains("\"target_text\": \"و\""), "{text}");
        assert!(text.contains(&out.question));
        assert!(text.contains("Research question:"));
    }

    #[test]
    fn vocabulary_report_keeps_menu_order() {
        let report = vocabulary_report(&[VocabularySet::NumericalSource]);
        let keys: Vec<_> = report.sets[0].members.iter().map(|m| m.key).collect();
        assert_eq!(
            keys,
            [
                "explicit-in-text",
                "explicit-numeral",
                "derived-by-count",
                "derived-by-coding"
            ]
        );
        let text = render_vocabulary_text(&report);
        assert!(text.contains("[3] derived-by-count "), "{text}");
    }
}
