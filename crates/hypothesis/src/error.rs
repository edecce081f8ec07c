use crate::vocabulary::VocabularySet;
use thiserror::Error;

/// Result type for hypothesis operations
pub type Result<T> = std::result::Result<T, HypothesisError>;

/// Errors raised while building a hypothesis record
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HypothesisError {
    /// A value does not belong to its controlled vocabulary
    #[error("Invalid {set} value: {value:?}")]
    InvalidVocabularyValue { set: VocabularySet, value: String },
}

impl HypothesisError {
    /// Create an invalid vocabulary value error
    pub fn invalid_value(set: VocabularySet, value: impl Into<String>) -> Self {
        Self::InvalidVocabularyValue {
            set,
            value: value.into(),
        }
    }

    /// Stable machine-readable code
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidVocabularyValue { .. } => "invalid_vocabulary_value",
        }
    }
}
