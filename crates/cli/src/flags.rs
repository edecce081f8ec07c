use clap::ValueEnum;
use numera_hypothesis::QuestionLanguage;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Default, ValueEnum)]
pub(crate) enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    pub(crate) fn parse_env(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "text" => Some(OutputFormat::Text),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum QuestionLangFlag {
    En,
    Ar,
}

impl QuestionLangFlag {
    pub(crate) const fn as_domain(self) -> QuestionLanguage {
        match self {
            QuestionLangFlag::En => QuestionLanguage::English,
            QuestionLangFlag::Ar => QuestionLanguage::Arabic,
        }
    }
}
