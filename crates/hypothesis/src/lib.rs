//! Hypothesis records for numerical-pattern studies.
//!
//! A researcher picks one value from each controlled vocabulary, names a
//! target, a scope and a comparison value, and gets back:
//! - a [`StudyProfile`] (six keys, labels for enumerated fields) for the
//!   analysis phase
//! - a research question rendered from a fixed template
//!
//! Everything here is pure and synchronous.

pub mod error;
pub mod hypothesis;
pub mod question;
pub mod vocabulary;

pub use error::{HypothesisError, Result};
pub use hypothesis::Hypothesis;
pub use numera_protocol::StudyProfile;
pub use question::QuestionLanguage;
pub use vocabulary::{
    AnalysisUnitKind, NumericalSourceKind, PhenomenonKind, Vocabulary, VocabularyEntry,
    VocabularySet,
};
