//! CLI command definitions

use clap::{Parser, ValueEnum};
use guard_domain::OutputFormat;
use std::path::PathBuf;

/// Console output format for a finished run
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ConsoleFormat {
    /// Overview counts only
    Summary,
    /// Overview plus the per-question table
    Full,
    /// Records as JSON
    Json,
}

impl From<ConsoleFormat> for OutputFormat {
    fn from(format: ConsoleFormat) -> Self {
        match format {
            ConsoleFormat::Summary => OutputFormat::Summary,
            ConsoleFormat::Full => OutputFormat::Full,
            ConsoleFormat::Json => OutputFormat::Json,
        }
    }
}

/// CLI arguments for hallucination-guard
#[derive(Parser, Debug)]
#[command(name = "hallucination-guard")]
#[command(author, version, about = "Validate model answers against a knowledge base, retrying once on failure")]
#[command(long_about = r#"
hallucination-guard asks an answer source a list of questions and checks every
answer against a JSON knowledge base.

Each answer is classified as:
  VALID                question known, answer matches
  RETRY_MISMATCH       question known, answer differs
  RETRY_OUT_OF_DOMAIN  question not in the knowledge base

Any RETRY_* result is asked exactly once more; the retry's result is final.

Configuration files are loaded from (in priority order):
1. GUARD_* environment variables
2. --config <path>     Explicit config file
3. ./guard.toml        Project-level config
4. ~/.config/hallucination-guard/config.toml   Global config

Example:
  hallucination-guard --kb kb.json
  hallucination-guard --kb kb.json -q "What is 2+2?" -q "What color is a unicorn?"
  hallucination-guard --kb kb.json --fail-fast --output full
"#)]
pub struct Cli {
    /// Knowledge base JSON document
    #[arg(long, value_name = "PATH")]
    pub kb: Option<PathBuf>,

    /// Extra question to ask (can be specified multiple times; replaces configured extras)
    #[arg(short = 'Q', long = "question", value_name = "TEXT")]
    pub questions: Vec<String>,

    /// Question list file (JSON array or one question per line)
    #[arg(long, value_name = "PATH")]
    pub questions_file: Option<PathBuf>,

    /// Only ask the extra questions, not the knowledge base's own
    #[arg(long)]
    pub skip_kb_questions: bool,

    /// Answer script JSON (question -> list of answers); built-in script when omitted
    #[arg(long, value_name = "PATH")]
    pub script: Option<PathBuf>,

    /// Where to write the JSON results document
    #[arg(long, value_name = "PATH")]
    pub results: Option<PathBuf>,

    /// Where to write the Markdown summary report
    #[arg(long, value_name = "PATH")]
    pub summary: Option<PathBuf>,

    /// Log file (empty string disables file logging)
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<String>,

    /// Abort when the knowledge base cannot be loaded instead of running with an empty one
    #[arg(long)]
    pub fail_fast: bool,

    /// Reject knowledge bases with duplicate questions
    #[arg(long)]
    pub strict_duplicates: bool,

    /// Console output format
    #[arg(short, long, value_enum)]
    pub output: Option<ConsoleFormat>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
