//! Answer source port
//!
//! Defines the interface for asking questions to whatever produces the
//! answers under test (a language model, a scripted stand-in, ...).

use async_trait::async_trait;
use guard_domain::Question;
use thiserror::Error;

/// Errors that can occur while obtaining an answer
#[derive(Error, Debug)]
pub enum AnswerSourceError {
    #[error("Answer source unavailable: {0}")]
    Unavailable(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Other error: {0}")]
    Other(String),
}

/// Source of answers for the validation run
///
/// Implementations may keep per-question state: asking the same question
/// twice in a row can yield a different answer (attempt memory). The only
/// contract the run relies on is that the answer is a deterministic
/// function of the question and the source's own attempt counter.
#[async_trait]
pub trait AnswerSource: Send + Sync {
    /// Ask a question and get the answer text
    async fn ask(&self, question: &Question) -> Result<String, AnswerSourceError>;

    /// Short name used in logs
    fn name(&self) -> &str {
        "answer-source"
    }
}
