use anyhow::{Context, Result};
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Select};
use numera_hypothesis::{
    AnalysisUnitKind, Hypothesis, NumericalSourceKind, PhenomenonKind, Vocabulary,
};

use crate::error::CliError;

/// Raw answers gathered from flags. `None` means "ask".
#[derive(Debug, Default, Clone)]
pub(crate) struct Answers {
    pub phenomenon: Option<String>,
    pub unit: Option<String>,
    pub target: Option<String>,
    pub scope: Option<String>,
    pub source: Option<String>,
    pub value: Option<String>,
}

/// Resolves answers into a hypothesis, prompting for whatever is missing.
pub(crate) struct Collector {
    interactive: bool,
    theme: ColorfulTheme,
}

impl Collector {
    pub(crate) fn new(interactive: bool) -> Self {
        Self {
            interactive,
            theme: ColorfulTheme::default(),
        }
    }

    pub(crate) fn collect(&self, answers: Answers) -> Result<Hypothesis> {
        let phenomenon: PhenomenonKind =
            self.choice(answers.phenomenon.as_deref(), "--phenomenon")?;
        let unit: AnalysisUnitKind = self.choice(answers.unit.as_deref(), "--unit")?;
        let target = self.text(
            answers.target,
            "--target",
            "Target text to count (e.g. 'day' or a single letter)",
        )?;
        let scope = self.text(
            answers.scope,
            "--scope",
            "Scope of the corpus (e.g. 'entire corpus' or 'chapter 2')",
        )?;
        let source: NumericalSourceKind = self.choice(answers.source.as_deref(), "--source")?;
        let value = self.text(
            answers.value,
            "--value",
            "Numeric value to test (e.g. 365)",
        )?;

        log::debug!(
            "collected hypothesis: phenomenon={} unit={} source={}",
            phenomenon.key(),
            unit.key(),
            source.key()
        );
        Ok(Hypothesis::new(phenomenon, unit, target, scope, source, value))
    }

    fn choice<V: Vocabulary>(&self, key: Option<&str>, flag: &'static str) -> Result<V> {
        if let Some(key) = key {
            return V::from_key(key.trim()).with_context(|| format!("Failed to resolve {flag}"));
        }
        if !self.interactive {
            return Err(CliError::MissingInput { flag }.into());
        }

        let items: Vec<String> = V::members()
            .iter()
            .map(|member| format!("{} ({})", member.label(), member.key()))
            .collect();
        let idx = Select::with_theme(&self.theme)
            .with_prompt(V::SET.title())
            .items(items.as_slice())
            .default(0)
            .interact()
            .with_context(|| format!("Failed to read {}", V::SET))?;
        let member = V::from_position(idx + 1)?;
        log::debug!("{}: {}", V::SET, member.key());
        Ok(member)
    }

    fn text(&self, value: Option<String>, flag: &'static str, prompt: &str) -> Result<String> {
        if let Some(value) = value {
            return Ok(value);
        }
        if !self.interactive {
            return Err(CliError::MissingInput { flag }.into());
        }

        Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
            .with_context(|| format!("Failed to read {flag}"))
    }
}
