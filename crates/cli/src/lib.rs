use anyhow::{Context as AnyhowContext, Result};
use clap::{Args, Parser, Subcommand};
use numera_hypothesis::{Hypothesis, QuestionLanguage, VocabularySet};
use numera_protocol::{parse_profile, profile_schema, serialize_json, BuildOutput};
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

mod collector;
mod config;
mod error;
mod flags;
mod report;

use collector::{Answers, Collector};
use config::OutputConfig;
use flags::{OutputFormat, QuestionLangFlag};

#[derive(Parser)]
#[command(name = "numera")]
#[command(about = "Build study profiles for numerical-pattern hypotheses", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Quiet mode: log only warnings/errors
    #[arg(long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a hypothesis, prompting for anything not given as a flag
    Build(BuildArgs),

    /// List the controlled vocabularies
    Vocab(VocabArgs),

    /// Render the research question of an existing study profile
    Question(QuestionArgs),

    /// Print the JSON Schema of a study profile
    Schema,
}

#[derive(Args, Default)]
struct OutputArgs {
    /// Output format (overrides NUMERA_FORMAT)
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// Research question language (overrides NUMERA_QUESTION_LANG)
    #[arg(long, value_enum)]
    question_lang: Option<QuestionLangFlag>,
}

#[derive(Args, Default)]
struct BuildArgs {
    /// Phenomenon key (see `numera vocab --set phenomenon`)
    #[arg(long)]
    phenomenon: Option<String>,

    /// Analysis unit key (see `numera vocab --set analysis_unit`)
    #[arg(long)]
    unit: Option<String>,

    /// Target text to count
    #[arg(long)]
    target: Option<String>,

    /// Portion of the corpus under analysis
    #[arg(long)]
    scope: Option<String>,

    /// Numerical source key (see `numera vocab --set numerical_source`)
    #[arg(long)]
    source: Option<String>,

    /// Comparison value, kept as raw text
    #[arg(long)]
    value: Option<String>,

    /// Never prompt; fail if a value is missing
    #[arg(long)]
    no_input: bool,

    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Args)]
struct VocabArgs {
    /// Only list this set (phenomenon, analysis_unit, numerical_source)
    #[arg(long)]
    set: Option<VocabularySet>,

    /// Output format (overrides NUMERA_FORMAT)
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,
}

#[derive(Args)]
struct QuestionArgs {
    /// Study profile JSON file, or `-` for stdin
    #[arg(long, default_value = "-")]
    profile: PathBuf,

    #[command(flatten)]
    output: OutputArgs,
}

pub fn main_entry() -> Result<()> {
    let mut cli = Cli::parse();
    let command = cli
        .command
        .take()
        .unwrap_or_else(|| Commands::Build(BuildArgs::default()));

    let format = match &command {
        Commands::Build(args) => config::resolve_format(args.output.format),
        Commands::Question(args) => config::resolve_format(args.output.format),
        Commands::Vocab(args) => config::resolve_format(args.format),
        Commands::Schema => Ok(OutputFormat::Json),
    }?;

    // Keep stdout clean for JSON consumers.
    if format == OutputFormat::Json {
        cli.quiet = true;
    }

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if cli.quiet {
        builder.filter_level(log::LevelFilter::Warn);
    } else if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();

    let result = run(command, format);
    if let Err(err) = &result {
        if format == OutputFormat::Json {
            println!("{}", serialize_json(&error::error_envelope(err))?);
        }
    }
    result
}

fn run(command: Commands, format: OutputFormat) -> Result<()> {
    let question_lang = match &command {
        Commands::Build(args) => config::resolve_question_lang(args.output.question_lang)?,
        Commands::Question(args) => config::resolve_question_lang(args.output.question_lang)?,
        Commands::Vocab(_) | Commands::Schema => QuestionLanguage::default(),
    };
    let output = OutputConfig {
        format,
        question_lang,
    };

    match command {
        Commands::Build(args) => run_build(args, output),
        Commands::Vocab(args) => run_vocab(args, output),
        Commands::Question(args) => run_question(args, output),
        Commands::Schema => run_schema(),
    }
}

fn run_build(args: BuildArgs, output: OutputConfig) -> Result<()> {
    let interactive = !args.no_input && console::Term::stderr().is_term();
    log::debug!("collecting hypothesis (interactive={interactive})");

    let answers = Answers {
        phenomenon: args.phenomenon,
        unit: args.unit,
        target: args.target,
        scope: args.scope,
        source: args.source,
        value: args.value,
    };
    let hypothesis = Collector::new(interactive).collect(answers)?;
    print_hypothesis(&hypothesis, output)
}

fn run_question(args: QuestionArgs, output: OutputConfig) -> Result<()> {
    let raw = if args.profile.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read study profile from stdin")?;
        buf
    } else {
        fs::read_to_string(&args.profile)
            .with_context(|| format!("Failed to read {}", args.profile.display()))?
    };

    let profile = parse_profile(&raw)?;
    let hypothesis =
        Hypothesis::from_profile(&profile).context("Study profile does not match vocabularies")?;
    print_hypothesis(&hypothesis, output)
}

fn print_hypothesis(hypothesis: &Hypothesis, output: OutputConfig) -> Result<()> {
    let out = BuildOutput::new(
        hypothesis.to_profile(),
        hypothesis.question_text(output.question_lang),
    );
    match output.format {
        OutputFormat::Json => println!("{}", serialize_json(&out)?),
        OutputFormat::Text => print!("{}", report::render_build_text(&out)?),
    }
    Ok(())
}

fn run_vocab(args: VocabArgs, output: OutputConfig) -> Result<()> {
    let sets = match args.set {
        Some(set) => vec![set],
        None => VocabularySet::ALL.to_vec(),
    };
    let vocab = report::vocabulary_report(&sets);
    match output.format {
        OutputFormat::Json => println!("{}", serialize_json(&vocab)?),
        OutputFormat::Text => print!("{}", report::render_vocabulary_text(&vocab)),
    }
    Ok(())
}

fn run_schema() -> Result<()> {
    println!("{}", profile_schema()?);
    Ok(())
}
