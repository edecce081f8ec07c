//! Controlled vocabularies.
//!
//! Each set is a closed enum. Members carry a stable symbolic key (flags,
//! logs) and a fixed display label (menus, study profiles). Member order is
//! the canonical menu order.

use crate::error::{HypothesisError, Result};
use std::fmt;
use std::str::FromStr;

/// Names of the closed sets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VocabularySet {
    Phenomenon,
    AnalysisUnit,
    NumericalSource,
}

impl VocabularySet {
    pub const ALL: [VocabularySet; 3] = [
        VocabularySet::Phenomenon,
        VocabularySet::AnalysisUnit,
        VocabularySet::NumericalSource,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            VocabularySet::Phenomenon => "phenomenon",
            VocabularySet::AnalysisUnit => "analysis_unit",
            VocabularySet::NumericalSource => "numerical_source",
        }
    }

    /// Menu heading
    pub const fn title(self) -> &'static str {
        match self {
            VocabularySet::Phenomenon => "Numerical phenomenon",
            VocabularySet::AnalysisUnit => "Unit of analysis",
            VocabularySet::NumericalSource => "Source of the numeric value",
        }
    }

    /// Members of the set in menu order
    pub fn entries(self) -> Vec<VocabularyEntry> {
        match self {
            VocabularySet::Phenomenon => collect_entries::<PhenomenonKind>(),
            VocabularySet::AnalysisUnit => collect_entries::<AnalysisUnitKind>(),
            VocabularySet::NumericalSource => collect_entries::<NumericalSourceKind>(),
        }
    }
}

impl fmt::Display for VocabularySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for VocabularySet {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "phenomenon" | "phenomenon_type" => Ok(VocabularySet::Phenomenon),
            "analysis_unit" | "unit" => Ok(VocabularySet::AnalysisUnit),
            "numerical_source" | "source" => Ok(VocabularySet::NumericalSource),
            other => Err(format!(
                "unknown vocabulary set '{other}' (expected phenomenon, analysis_unit or numerical_source)"
            )),
        }
    }
}

/// One member of a set, detached from its enum type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VocabularyEntry {
    /// 1-based menu position
    pub position: usize,
    pub key: &'static str,
    pub label: &'static str,
}

fn collect_entries<V: Vocabulary>() -> Vec<VocabularyEntry> {
    V::members()
        .iter()
        .enumerate()
        .map(|(idx, member)| VocabularyEntry {
            position: idx + 1,
            key: member.key(),
            label: member.label(),
        })
        .collect()
}

/// A closed set of labelled values.
pub trait Vocabulary: Copy + Eq + fmt::Debug + 'static {
    const SET: VocabularySet;

    fn members() -> &'static [Self];

    fn key(self) -> &'static str;

    fn label(self) -> &'static str;

    fn from_key(key: &str) -> Result<Self> {
        Self::members()
            .iter()
            .copied()
            .find(|member| member.key() == key)
            .ok_or_else(|| HypothesisError::invalid_value(Self::SET, key))
    }

    fn from_label(label: &str) -> Result<Self> {
        Self::members()
            .iter()
            .copied()
            .find(|member| member.label() == label)
            .ok_or_else(|| HypothesisError::invalid_value(Self::SET, label))
    }

    /// Resolve a 1-based menu position.
    fn from_position(position: usize) -> Result<Self> {
        position
            .checked_sub(1)
            .and_then(|idx| Self::members().get(idx))
            .copied()
            .ok_or_else(|| HypothesisError::invalid_value(Self::SET, position.to_string()))
    }

    /// 1-based menu position.
    fn position(self) -> usize {
        Self::members()
            .iter()
            .position(|member| *member == self)
            .map_or(0, |idx| idx + 1)
    }
}

macro_rules! controlled_vocabulary {
    (
        $(#[$meta:meta])*
        $name:ident in $set:ident {
            $($variant:ident => ($key:literal, $label:literal),)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant,)+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant,)+];

            pub const fn key(self) -> &'static str {
                match self {
                    $($name::$variant => $key,)+
                }
            }

            pub const fn label(self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }
        }

        impl Vocabulary for $name {
            const SET: VocabularySet = VocabularySet::$set;

            fn members() -> &'static [Self] {
                Self::ALL
            }

            fn key(self) -> &'static str {
                $name::key(self)
            }

            fn label(self) -> &'static str {
                $name::label(self)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }

        impl FromStr for $name {
            type Err = HypothesisError;

            fn from_str(s: &str) -> Result<Self> {
                <$name as Vocabulary>::from_key(s.trim())
            }
        }
    };
}

controlled_vocabulary! {
    /// Kind of numerical pattern under study
    PhenomenonKind in Phenomenon {
        Repetition => ("repetition", "التكرار العددي"),
        Balance => ("balance", "التوازن العددي"),
        Proportionality => ("proportionality", "التناسب العددي"),
        Concordance => ("concordance", "التوافقات العددية"),
        Symmetry => ("symmetry", "التماثل العددي"),
        Proximity => ("proximity", "التقارب العددي"),
        Crypticity => ("crypticity", "الترميز/التشفير"),
    }
}

controlled_vocabulary! {
    /// Textual unit being counted
    AnalysisUnitKind in AnalysisUnit {
        Letter => ("letter", "الحرف"),
        Word => ("word", "الكلمة"),
        Verse => ("verse", "الآية"),
        Chapter => ("chapter", "السورة"),
        Root => ("root", "الجذر"),
    }
}

controlled_vocabulary! {
    /// How the comparison value was obtained
    NumericalSourceKind in NumericalSource {
        ExplicitInText => ("explicit-in-text", "صريح - مكتوب نصًا"),
        ExplicitNumeral => ("explicit-numeral", "صريح - مرقوم رقمًا"),
        DerivedByCount => ("derived-by-count", "مستنبط - محسوب (محصى)"),
        DerivedByCoding => ("derived-by-coding", "مستنبط - مُرمّز"),
    }
}
