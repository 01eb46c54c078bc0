//! Progress notification port
//!
//! Defines the interface for reporting progress during a validation run.

use guard_domain::{QuestionRecord, RunSummary, ValidationResult};

/// Which attempt of a question is being reported
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attempt {
    First,
    Retry,
}

impl Attempt {
    pub fn as_str(&self) -> &'static str {
        match self {
            Attempt::First => "first",
            Attempt::Retry => "retry",
        }
    }
}

impl std::fmt::Display for Attempt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Callback for progress updates during a validation run
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (progress bar, plain lines, ...).
pub trait ValidationProgressNotifier: Send + Sync {
    /// Called once before the first question
    fn on_run_start(&self, total_questions: usize);

    /// Called when an answer has been obtained and validated
    fn on_attempt(&self, question: &str, attempt: Attempt, answer: &str, result: &ValidationResult);

    /// Called when a question (including its retry) is finished
    fn on_question_complete(&self, record: &QuestionRecord);

    /// Called once after the last question
    fn on_run_complete(&self, _summary: &RunSummary) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ValidationProgressNotifier for NoProgress {
    fn on_run_start(&self, _total_questions: usize) {}
    fn on_attempt(&self, _question: &str, _attempt: Attempt, _answer: &str, _result: &ValidationResult) {}
    fn on_question_complete(&self, _record: &QuestionRecord) {}
}
