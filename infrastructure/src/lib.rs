//! Infrastructure layer for hallucination-guard
//!
//! This crate contains adapters that implement the ports defined in the
//! application layer, plus configuration loading and report file output.

pub mod answer_source;
pub mod config;
pub mod knowledge;
pub mod questions;
pub mod report;

// Re-export commonly used types
pub use answer_source::{DEFAULT_FALLBACK_ANSWER, ScriptLoadError, ScriptedAnswerSource};
pub use config::{
    ConfigLoader, ConfigValidationError, DEFAULT_EXTRA_QUESTIONS, FileAnswerSourceConfig,
    FileConfig, FileKnowledgeBaseConfig, FileOutputConfig, FileQuestionsConfig,
};
pub use knowledge::{JsonKnowledgeBaseLoader, KnowledgeBaseDocument};
pub use questions::{QuestionListError, load_question_list};
pub use report::{ReportError, ReportWriter};
