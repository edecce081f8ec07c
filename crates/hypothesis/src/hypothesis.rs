use crate::error::Result;
use crate::question::{self, QuestionLanguage, QuestionParts};
use crate::vocabulary::{AnalysisUnitKind, NumericalSourceKind, PhenomenonKind, Vocabulary};
use numera_protocol::StudyProfile;

/// A numerical-pattern hypothesis.
///
/// Immutable once built: fields are private and there are no setters.
/// `target`, `scope` and `comparison_value` are opaque text and are never
/// validated here; the analysis phase owns their interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hypothesis {
    phenomenon: PhenomenonKind,
    unit: AnalysisUnitKind,
    target: String,
    scope: String,
    numerical_source: NumericalSourceKind,
    comparison_value: String,
}

impl Hypothesis {
    pub fn new(
        phenomenon: PhenomenonKind,
        unit: AnalysisUnitKind,
        target: impl Into<String>,
        scope: impl Into<String>,
        numerical_source: NumericalSourceKind,
        comparison_value: impl Into<String>,
    ) -> Self {
        Self {
            phenomenon,
            unit,
            target: target.into(),
            scope: scope.into(),
            numerical_source,
            comparison_value: comparison_value.into(),
        }
    }

    /// Build from symbolic keys, failing on the first key outside its set.
    pub fn from_keys(
        phenomenon: &str,
        unit: &str,
        target: impl Into<String>,
        scope: impl Into<String>,
        numerical_source: &str,
        comparison_value: impl Into<String>,
    ) -> Result<Self> {
        let phenomenon = PhenomenonKind::from_key(phenomenon)?;
        let unit = AnalysisUnitKind::from_key(unit)?;
        let numerical_source = NumericalSourceKind::from_key(numerical_source)?;
        Ok(Self::new(
            phenomenon,
            unit,
            target,
            scope,
            numerical_source,
            comparison_value,
        ))
    }

    /// Rebuild from a study profile. Enumerated fields are matched by label.
    pub fn from_profile(profile: &StudyProfile) -> Result<Self> {
        let phenomenon = PhenomenonKind::from_label(&profile.phenomenon_type)?;
        let unit = AnalysisUnitKind::from_label(&profile.analysis_unit)?;
        let numerical_source = NumericalSourceKind::from_label(&profile.numerical_source)?;
        Ok(Self::new(
            phenomenon,
            unit,
            profile.target_text.clone(),
            profile.text_scope.clone(),
            numerical_source,
            profile.comparison_value.clone(),
        ))
    }

    pub fn phenomenon(&self) -> PhenomenonKind {
        self.phenomenon
    }

    pub fn unit(&self) -> AnalysisUnitKind {
        self.unit
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn scope(&self) -> &str {
        &self.scope
    }

    pub fn numerical_source(&self) -> NumericalSourceKind {
        self.numerical_source
    }

    pub fn comparison_value(&self) -> &str {
        &self.comparison_value
    }

    pub fn to_profile(&self) -> StudyProfile {
        StudyProfile {
            phenomenon_type: self.phenomenon.label().to_string(),
            analysis_unit: self.unit.label().to_string(),
            target_text: self.target.clone(),
            text_scope: self.scope.clone(),
            numerical_source: self.numerical_source.label().to_string(),
            comparison_value: self.comparison_value.clone(),
        }
    }

    /// The research question, in English.
    pub fn to_question_text(&self) -> String {
        self.question_text(QuestionLanguage::English)
    }

    pub fn question_text(&self, language: QuestionLanguage) -> String {
        question::render(
            language,
            &QuestionParts {
                phenomenon: self.phenomenon.label(),
                target: &self.target,
                unit: self.unit.label(),
                scope: &self.scope,
                value: &self.comparison_value,
                source: self.numerical_source.label(),
            },
        )
    }
}

impl From<&Hypothesis> for StudyProfile {
    fn from(hypothesis: &Hypothesis) -> Self {
        hypothesis.to_profile()
    }
}

impl TryFrom<&StudyProfile> for Hypothesis {
    type Error = crate::error::HypothesisError;

    fn try_from(profile: &StudyProfile) -> Result<Self> {
        Hypothesis::from_profile(profile)
    }
}
