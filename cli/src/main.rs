//! CLI entrypoint for hallucination-guard
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use colored::Colorize;
use guard_application::{
    AnswerSource, KnowledgeBasePolicy, LoadKnowledgeBaseUseCase, NoProgress, RunValidationInput,
    RunValidationUseCase, ValidationProgressNotifier, ValidationRun,
};
use guard_domain::{DuplicatePolicy, LoadFailurePolicy, OutputFormat, Question, Validator};
use guard_infrastructure::{
    ConfigLoader, FileConfig, JsonKnowledgeBaseLoader, ReportWriter, ScriptedAnswerSource,
    load_question_list,
};
use guard_presentation::{Cli, ConsoleFormatter, MarkdownReport, ProgressReporter, SimpleProgress};
use std::fs::OpenOptions;
use std::io::IsTerminal;
use std::path::Path;
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    let config = load_config(&cli)?;

    // Held until exit so buffered file log lines are flushed
    let _log_guard = init_logging(cli.verbose, config.output.log_path().as_deref())?;

    if cli.no_color || !config.output.color {
        colored::control::set_override(false);
    }

    info!("Starting hallucination-guard");

    if let Err(e) = run(&cli, &config).await {
        error!("Error during execution: {:#}", e);
        return Err(e);
    }

    Ok(())
}

/// Merge configuration files with command line overrides
fn load_config(cli: &Cli) -> Result<FileConfig> {
    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref()).context("Failed to load configuration")?
    };

    if let Some(kb) = &cli.kb {
        config.knowledge_base.path = kb.display().to_string();
    }
    if cli.fail_fast {
        config.knowledge_base.on_load_failure = LoadFailurePolicy::FailFast;
    }
    if cli.strict_duplicates {
        config.knowledge_base.duplicates = DuplicatePolicy::Reject;
    }
    if cli.skip_kb_questions {
        config.questions.include_kb_questions = false;
    }
    if !cli.questions.is_empty() {
        config.questions.extra = cli.questions.clone();
        config.questions.file = None;
    }
    if let Some(file) = &cli.questions_file {
        config.questions.file = Some(file.display().to_string());
    }
    if let Some(script) = &cli.script {
        config.answer_source.script = Some(script.display().to_string());
    }
    if let Some(results) = &cli.results {
        config.output.results_path = results.display().to_string();
    }
    if let Some(summary) = &cli.summary {
        config.output.summary_path = summary.display().to_string();
    }
    if let Some(log_file) = &cli.log_file {
        config.output.log_file = log_file.clone();
    }
    if let Some(format) = cli.output {
        config.output.format = Some(format.into());
    }

    let issues = config.validate();
    if !issues.is_empty() {
        for issue in &issues {
            eprintln!("{} {}", "Config error:".red().bold(), issue);
        }
        bail!("Invalid configuration ({} issue(s))", issues.len());
    }

    Ok(config)
}

/// Console logging filtered by verbosity (RUST_LOG wins), plus an optional log file
fn init_logging(verbose: u8, log_path: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let filter = if std::env::var_os("RUST_LOG").is_some() {
        EnvFilter::from_default_env()
    } else {
        match verbose {
            0 => EnvFilter::new("warn"),
            1 => EnvFilter::new("info"),
            2 => EnvFilter::new("debug"),
            _ => EnvFilter::new("trace"), // -vvv or more
        }
    };

    let (file_layer, guard) = match log_path {
        Some(path) => {
            if let Some(parent) = path.parent()
                && !parent.as_os_str().is_empty()
            {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create log directory {}", parent.display()))?;
            }
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            let (writer, guard) = tracing_appender::non_blocking(file);
            let layer = fmt::layer().with_ansi(false).with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(file_layer)
        .init();

    Ok(guard)
}

async fn run(cli: &Cli, config: &FileConfig) -> Result<()> {
    // === Knowledge base ===
    let policy: KnowledgeBasePolicy = config.knowledge_base.policy();
    let loader = JsonKnowledgeBaseLoader::new(&config.knowledge_base.path);
    let loaded = LoadKnowledgeBaseUseCase::new(loader)
        .execute(policy)
        .context("Failed to load knowledge base")?;

    if let Some(reason) = &loaded.degraded
        && !cli.quiet
    {
        eprintln!(
            "{} {} (continuing with an empty knowledge base)",
            "Warning:".yellow().bold(),
            reason
        );
    }

    // === Questions ===
    let extra = extra_questions(config)?;
    let input = RunValidationInput::assemble(
        &loaded.knowledge_base,
        config.questions.include_kb_questions,
        extra,
    );
    if input.is_empty() {
        warn!("No questions to ask");
    }

    // === Dependency Injection ===
    let source: Arc<dyn AnswerSource> = Arc::new(answer_source(config)?);
    let use_case = RunValidationUseCase::new(source, Validator::new(loaded.knowledge_base));

    let format = config.output.format.unwrap_or_default();
    let progress: Box<dyn ValidationProgressNotifier> = if cli.quiet || format == OutputFormat::Json {
        Box::new(NoProgress)
    } else if std::io::stderr().is_terminal() {
        Box::new(ProgressReporter::new())
    } else {
        Box::new(SimpleProgress)
    };

    let run = use_case
        .execute_with_progress(input, progress.as_ref())
        .await
        .context("Validation run aborted")?;

    // === Reports ===
    write_reports(config, &run)?;

    let output = match format {
        OutputFormat::Summary => ConsoleFormatter::format_summary(&run),
        OutputFormat::Full => ConsoleFormatter::format_full(&run),
        OutputFormat::Json => ConsoleFormatter::format_json(&run),
    };
    println!("{}", output);

    if !cli.quiet && format != OutputFormat::Json {
        println!("{}", "Hallucination detection completed successfully!".green());
        match config.output.log_path() {
            Some(log) => println!(
                "Check {} for detailed logs and {} for the results summary.",
                log.display(),
                config.output.summary_path
            ),
            None => println!("Check {} for the results summary.", config.output.summary_path),
        }
    }

    Ok(())
}

/// Configured extra questions: the question list file when set, otherwise `[questions].extra`
fn extra_questions(config: &FileConfig) -> Result<Vec<Question>> {
    if let Some(file) = &config.questions.file {
        return load_question_list(file)
            .with_context(|| format!("Failed to load question list {}", file));
    }

    config
        .questions
        .extra
        .iter()
        .map(|text| Question::try_new(text.as_str()).context("Invalid extra question"))
        .collect()
}

fn answer_source(config: &FileConfig) -> Result<ScriptedAnswerSource> {
    let source = match &config.answer_source.script {
        Some(path) => ScriptedAnswerSource::from_file(path)
            .with_context(|| format!("Failed to load answer script {}", path))?,
        None => ScriptedAnswerSource::builtin(),
    };
    info!("Answer script covers {} questions", source.len());

    Ok(source.with_fallback(config.answer_source.fallback_answer.clone()))
}

fn write_reports(config: &FileConfig, run: &ValidationRun) -> Result<()> {
    let writer = ReportWriter::new(&config.output.results_path, &config.output.summary_path);

    writer
        .write_results(&run.records)
        .context("Failed to write results")?;
    info!("Results saved to {}", writer.results_path().display());

    writer
        .write_summary(&MarkdownReport::render(run))
        .context("Failed to write summary")?;
    info!("Summary generated and saved to {}", writer.summary_path().display());

    Ok(())
}
