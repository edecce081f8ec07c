use std::fmt;
use std::str::FromStr;

/// Language of the rendered research question
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum QuestionLanguage {
    #[default]
    English,
    Arabic,
}

impl QuestionLanguage {
    pub const fn as_str(self) -> &'static str {
        match self {
            QuestionLanguage::English => "en",
            QuestionLanguage::Arabic => "ar",
        }
    }
}

impl fmt::Display for QuestionLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QuestionLanguage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(QuestionLanguage::English),
            "ar" | "arabic" => Ok(QuestionLanguage::Arabic),
            other => Err(format!("unknown question language '{other}' (expected en or ar)")),
        }
    }
}

/// Values substituted into a question template.
pub(crate) struct QuestionParts<'a> {
    pub phenomenon: &'a str,
    pub target: &'a str,
    pub unit: &'a str,
    pub scope: &'a str,
    pub value: &'a str,
    pub source: &'a str,
}

pub(crate) fn render(language: QuestionLanguage, parts: &QuestionParts<'_>) -> String {
    let QuestionParts {
        phenomenon,
        target,
        unit,
        scope,
        value,
        source,
    } = parts;
    match language {
        QuestionLanguage::English => format!(
            "Does {phenomenon} for '{target}' as a unit of '{unit}' within the scope of '{scope}' \
             equal the numeric value '{value}' (source: {source})?"
        ),
        QuestionLanguage::Arabic => format!(
            "❓ هل {phenomenon} لـ '{target}' كوحدة '{unit}' في نطاق '{scope}' \
             يساوي القيمة العددية '{value}' (مصدر: {source})؟"
        ),
    }
}
