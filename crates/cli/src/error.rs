use numera_hypothesis::HypothesisError;
use numera_protocol::ErrorEnvelope;
use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum CliError {
    #[error("Missing {flag}: prompts are disabled (no terminal or --no-input)")]
    MissingInput { flag: &'static str },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

pub(crate) fn error_envelope(err: &anyhow::Error) -> ErrorEnvelope {
    let message = format!("{err:#}");

    if let Some(HypothesisError::InvalidVocabularyValue { set, value }) =
        err.chain().find_map(|cause| cause.downcast_ref::<HypothesisError>())
    {
        return ErrorEnvelope {
            code: "invalid_vocabulary_value".to_string(),
            message,
            details: Some(serde_json::json!({ "set": set.name(), "value": value })),
            hint: Some(format!("Run `numera vocab --set {}` to list valid values", set.name())),
        };
    }

    if let Some(CliError::MissingInput { flag }) =
        err.chain().find_map(|cause| cause.downcast_ref::<CliError>())
    {
        return ErrorEnvelope {
            code: "missing_input".to_string(),
            message,
            details: None,
            hint: Some(format!("Pass {flag} or run in a terminal without --no-input")),
        };
    }

    if let Some(CliError::InvalidConfig(_)) =
        err.chain().find_map(|cause| cause.downcast_ref::<CliError>())
    {
        return ErrorEnvelope {
            code: "invalid_config".to_string(),
            message,
            details: None,
            hint: Some("Unset the variable or pass the matching flag".to_string()),
        };
    }

    if err.chain().any(|cause| cause.is::<serde_json::Error>()) {
        return ErrorEnvelope {
            code: "invalid_profile".to_string(),
            message,
            details: None,
            hint: Some("Run `numera schema` to see the expected study profile shape".to_string()),
        };
    }

    ErrorEnvelope {
        code: "internal".to_string(),
        message,
        details: None,
        hint: None,
    }
}
