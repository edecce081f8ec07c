use anyhow::Result;
use numera_hypothesis::QuestionLanguage;
use std::env;

use crate::error::CliError;
use crate::flags::{OutputFormat, QuestionLangFlag};

pub(crate) const FORMAT_ENV: &str = "NUMERA_FORMAT";
pub(crate) const QUESTION_LANG_ENV: &str = "NUMERA_QUESTION_LANG";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct OutputConfig {
    pub format: OutputFormat,
    pub question_lang: QuestionLanguage,
}

// Flag beats environment beats default. The environment is only consulted
// when the flag is absent.

pub(crate) fn resolve_format(flag: Option<OutputFormat>) -> Result<OutputFormat> {
    resolve_format_with(flag, || env::var(FORMAT_ENV).ok())
}

pub(crate) fn resolve_question_lang(flag: Option<QuestionLangFlag>) -> Result<QuestionLanguage> {
    resolve_question_lang_with(flag, || env::var(QUESTION_LANG_ENV).ok())
}

fn resolve_format_with(
    flag: Option<OutputFormat>,
    env_value: impl FnOnce() -> Option<String>,
) -> Result<OutputFormat> {
    if let Some(flag) = flag {
        return Ok(flag);
    }
    match env_value() {
        Some(raw) => OutputFormat::parse_env(&raw)
            .ok_or_else(|| {
                CliError::InvalidConfig(format!("{FORMAT_ENV}={raw:?} is not one of text, json"))
                    .into()
            }),
        None => Ok(OutputFormat::default()),
    }
}

fn resolve_question_lang_with(
    flag: Option<QuestionLangFlag>,
    env_value: impl FnOnce() -> Option<String>,
) -> Result<QuestionLanguage> {
    if let Some(flag) = flag {
        return Ok(flag.as_domain());
    }
    match env_value() {
        Some(raw) => raw
            .parse::<QuestionLanguage>()
            .map_err(|err| CliError::InvalidConfig(format!("{QUESTION_LANG_ENV}: {err}")).into()),
        None => Ok(QuestionLanguage::default()),
    }
}
