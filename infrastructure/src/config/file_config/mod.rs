//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod answer_source;
mod knowledge_base;
mod output;
mod questions;

pub use answer_source::FileAnswerSourceConfig;
pub use knowledge_base::FileKnowledgeBaseConfig;
pub use output::FileOutputConfig;
pub use questions::{DEFAULT_EXTRA_QUESTIONS, FileQuestionsConfig};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("{0} cannot be empty")]
    EmptyPath(&'static str),

    #[error("results_path and summary_path both point to {0}")]
    ConflictingOutputPaths(String),

    #[error("no questions to ask: include_kb_questions is false and no extra questions are configured")]
    NoQuestions,
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Knowledge base document and loading policies
    pub knowledge_base: FileKnowledgeBaseConfig,
    /// Which questions are asked
    pub questions: FileQuestionsConfig,
    /// Scripted answer source settings
    pub answer_source: FileAnswerSourceConfig,
    /// Output files and console format
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the configuration, returning every detected problem.
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut issues = Vec::new();

        if self.knowledge_base.path.trim().is_empty() {
            issues.push(ConfigValidationError::EmptyPath("knowledge_base.path"));
        }
        if self.output.results_path.trim().is_empty() {
            issues.push(ConfigValidationError::EmptyPath("output.results_path"));
        }
        if self.output.summary_path.trim().is_empty() {
            issues.push(ConfigValidationError::EmptyPath("output.summary_path"));
        }
        if !self.output.results_path.trim().is_empty()
            && self.output.results_path == self.output.summary_path
        {
            issues.push(ConfigValidationError::ConflictingOutputPaths(
                self.output.results_path.clone(),
            ));
        }
        if !self.questions.include_kb_questions
            && self.questions.extra.is_empty()
            && self.questions.file.is_none()
        {
            issues.push(ConfigValidationError::NoQuestions);
        }

        issues
    }
}
