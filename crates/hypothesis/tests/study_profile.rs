use numera_hypothesis::{
    AnalysisUnitKind, Hypothesis, HypothesisError, NumericalSourceKind, PhenomenonKind,
    StudyProfile, VocabularySet,
};
use pretty_assertions::assert_eq;

fn with_source(source: NumericalSourceKind) -> Hypothesis {
    Hypothesis::new(
        PhenomenonKind::Repetition,
        AnalysisUnitKind::Word,
        "day",
        "entire corpus",
        source,
        "365",
    )
}

#[test]
fn repetition_of_day_profile_and_question() {
    let hypothesis = with_source(NumericalSourceKind::DerivedByCount);

    let profile = hypothesis.to_profile();
    assert_eq!(profile.phenomenon_type, PhenomenonKind::Repetition.label());

    let question = hypothesis.to_question_text();
    assert!(question.contains("365"), "{question}");
    assert!(question.contains("day"), "{question}");
}

#[test]
fn changing_source_only_changes_source_output() {
    let counted = with_source(NumericalSourceKind::DerivedByCount);
    let explicit = with_source(NumericalSourceKind::ExplicitInText);

    let mut counted_profile = counted.to_profile();
    let explicit_profile = explicit.to_profile();
    assert_eq!(
        explicit_profile.numerical_source,
        NumericalSourceKind::ExplicitInText.label()
    );
    counted_profile.numerical_source = explicit_profile.numerical_source.clone();
    assert_eq!(counted_profile, explicit_profile);

    let counted_question = counted.to_question_text();
    let explicit_question = explicit.to_question_text();
    assert_ne!(counted_question, explicit_question);
    assert_eq!(
        counted_question.replace(
            NumericalSourceKind::DerivedByCount.label(),
            NumericalSourceKind::ExplicitInText.label()
        ),
        explicit_question
    );
}

#[test]
fn empty_free_text_is_accepted() {
    let hypothesis = Hypothesis::from_keys("balance", "letter", "", "", "explicit-numeral", "")
        .expect("empty text must not fail");

    let profile = hypothesis.to_profile();
    assert_eq!(profile.target_text, "");
    assert_eq!(profile.text_scope, "");
    assert_eq!(profile.comparison_value, "");
}

#[test]
fn question_text_is_stable_across_calls() {
    for phenomenon in PhenomenonKind::ALL {
        for unit in AnalysisUnitKind::ALL {
            let hypothesis = Hypothesis::new(
                *phenomenon,
                *unit,
                "و",
                "سورة البقرة",
                NumericalSourceKind::DerivedByCoding,
                "19",
            );
            assert_eq!(hypothesis.to_question_text(), hypothesis.to_question_text());
        }
    }
}

#[test]
fn profile_carries_labels_and_verbatim_text_for_every_member() {
    for phenomenon in PhenomenonKind::ALL {
        for unit in AnalysisUnitKind::ALL {
            for source in NumericalSourceKind::ALL {
                let target = format!("{} target", unit.key());
                let hypothesis =
                    Hypothesis::new(*phenomenon, *unit, target.clone(), "scope ", *source, " 7 ");
                let profile = hypothesis.to_profile();
                assert_eq!(profile.phenomenon_type, phenomenon.label());
                assert_eq!(profile.analysis_unit, unit.label());
                assert_eq!(profile.numerical_source, source.label());
                assert_eq!(profile.target_text, target);
                assert_eq!(profile.text_scope, "scope ");
                assert_eq!(profile.comparison_value, " 7 ");
                assert_eq!(Hypothesis::from_profile(&profile).unwrap(), hypothesis);
            }
        }
    }
}

#[test]
fn unknown_vocabulary_value_fails_construction() {
    let result = Hypothesis::from_keys("harmony", "word", "day", "all", "derived-by-count", "1");
    assert_eq!(
        result,
        Err(HypothesisError::InvalidVocabularyValue {
            set: VocabularySet::Phenomenon,
            value: "harmony".to_string(),
        })
    );
}

#[test]
fn profile_json_round_trip_preserves_arabic() {
    let hypothesis = Hypothesis::new(
        PhenomenonKind::Symmetry,
        AnalysisUnitKind::Chapter,
        "يوم",
        "القرآن كاملاً",
        NumericalSourceKind::ExplicitNumeral,
        "٣٦٥",
    );
    let json = serde_json::to_string_pretty(&hypothesis.to_profile()).unwrap();
    assert!(json.contains("\"target_text\": \"يوم\""), "{json}");
    assert!(json.contains(AnalysisUnitKind::Chapter.label()));

    let parsed: StudyProfile = serde_json::from_str(&json).unwrap();
    assert_eq!(Hypothesis::try_from(&parsed).unwrap(), hypothesis);
}
