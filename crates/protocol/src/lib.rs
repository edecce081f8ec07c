use anyhow::{Context, Result};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub const PROFILE_SCHEMA_VERSION: u32 = 1;

/// Study profile: the hand-off record for the analysis phase.
///
/// Field order is the serialized key order. Enumerated fields carry display
/// labels, free-text fields are passed through verbatim.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct StudyProfile {
    /// Display label of the numerical phenomenon.
    pub phenomenon_type: String,
    /// Display label of the analysis unit.
    pub analysis_unit: String,
    /// Linguistic object being counted (a word, a letter, ...).
    pub target_text: String,
    /// Portion of the corpus under analysis.
    pub text_scope: String,
    /// Display label of the numerical-value provenance.
    pub numerical_source: String,
    /// Value to compare against, kept as raw text.
    pub comparison_value: String,
}

impl StudyProfile {
    pub const KEYS: [&'static str; 6] = [
        "phenomenon_type",
        "analysis_unit",
        "target_text",
        "text_scope",
        "numerical_source",
        "comparison_value",
    ];
}

#[derive(Debug, Serialize, Deserialize, Clone, JsonSchema)]
pub struct BuildOutput {
    pub schema_version: u32,
    pub profile: StudyProfile,
    pub question: String,
}

impl BuildOutput {
    pub fn new(profile: StudyProfile, question: String) -> Self {
        Self {
            schema_version: PROFILE_SCHEMA_VERSION,
            profile,
            question,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, JsonSchema)]
pub struct ErrorEnvelope {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

pub fn serialize_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string(value).map_err(Into::into)
}

pub fn serialize_json_pretty<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).map_err(Into::into)
}

pub fn parse_profile(raw: &str) -> Result<StudyProfile> {
    serde_json::from_str(raw).context("Invalid study profile JSON")
}

pub fn profile_schema() -> Result<String> {
    let schema = schemars::schema_for!(StudyProfile);
    serialize_json_pretty(&schema)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> StudyProfile {
        StudyProfile {
            phenomenon_type: "التكرار العددي".to_string(),
            analysis_unit: "الكلمة".to_string(),
            target_text: "يوم".to_string(),
            text_scope: "القرآن كاملاً".to_string(),
            numerical_source: "مستنبط - محسوب (محصى)".to_string(),
            comparison_value: "365".to_string(),
        }
    }

    #[test]
    fn keys_serialize_in_declared_order() {
        let raw = serialize_json(&sample()).unwrap();
        let positions: Vec<usize> = StudyProfile::KEYS
            .iter()
            .map(|key| raw.find(&format!("\"{key}\"")).expect("key present"))
            .collect();
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted);
    }

    #[test]
    fn right_to_left_text_is_not_escaped() {
        let raw = serialize_json_pretty(&sample()).unwrap();
        assert!(raw.contains("\"target_text\": \"يوم\""), "{raw}");
        assert!(!raw.contains("\\u"));
    }

    #[test]
    fn parse_profile_rejects_unknown_and_missing_keys() {
        let mut value = serde_json::to_value(sample()).unwrap();
        value["extra"] = serde_json::json!("x");
        assert!(parse_profile(&value.to_string()).is_err());

        let missing = r#"{"phenomenon_type":"التكرار العددي"}"#;
        assert!(parse_profile(missing).is_err());
    }

    #[test]
    fn parse_profile_accepts_serialized_profile() {
        let raw = serialize_json(&sample()).unwrap();
        assert_eq!(parse_profile(&raw).unwrap(), sample());
    }

    #[test]
    fn schema_lists_all_profile_keys() {
        let schema = profile_schema().unwrap();
        for key in StudyProfile::KEYS {
            assert!(schema.contains(key), "schema missing {key}");
        }
    }
}
