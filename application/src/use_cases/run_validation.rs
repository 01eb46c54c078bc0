//! Run Validation use case
//!
//! Asks every question once, validates the answer, retries exactly once
//! when the first attempt lands in the retry family, and aggregates the
//! records into a [`RunSummary`].
//!
//! Questions are processed strictly one after another in input order; a
//! question's retry always completes before the next question is asked.

use crate::ports::answer_source::{AnswerSource, AnswerSourceError};
use crate::ports::progress::{Attempt, NoProgress, ValidationProgressNotifier};
use chrono::{DateTime, Utc};
use guard_domain::{
    DomainError, KnowledgeBase, Question, QuestionRecord, RunSummary, ValidationResult, Validator,
};
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, error, info, warn};

/// Errors that can occur during a validation run
#[derive(Error, Debug)]
pub enum RunValidationError {
    #[error("Answer source failed on '{question}' ({attempt} attempt): {source}")]
    AnswerSource {
        question: String,
        attempt: Attempt,
        #[source]
        source: AnswerSourceError,
    },

    #[error("Record error: {0}")]
    Record(#[from] DomainError),
}

/// Input for the RunValidation use case
#[derive(Debug, Clone, Default)]
pub struct RunValidationInput {
    /// Questions in the order they are asked
    pub questions: Vec<Question>,
}

impl RunValidationInput {
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    /// Build the question list: the knowledge base's own questions in
    /// document order (when `include_kb_questions`), followed by `extra`.
    ///
    /// Blank knowledge base questions are skipped with a warning.
    pub fn assemble(
        knowledge_base: &KnowledgeBase,
        include_kb_questions: bool,
        extra: impl IntoIterator<Item = Question>,
    ) -> Self {
        let mut questions = Vec::new();

        if include_kb_questions {
            for text in knowledge_base.questions() {
                match Question::try_new(text) {
                    Ok(q) => questions.push(q),
                    Err(e) => warn!("Skipping knowledge base entry: {}", e),
                }
            }
        }

        questions.extend(extra);
        Self { questions }
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

/// Complete result of a validation run
#[derive(Debug, Clone, Serialize)]
pub struct ValidationRun {
    /// One record per question, in input order
    pub records: Vec<QuestionRecord>,
    pub summary: RunSummary,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl ValidationRun {
    fn new(records: Vec<QuestionRecord>, started_at: DateTime<Utc>) -> Self {
        let summary = RunSummary::from_records(&records);
        Self {
            records,
            summary,
            started_at,
            finished_at: Utc::now(),
        }
    }

    /// Wall-clock duration of the run
    pub fn duration(&self) -> chrono::Duration {
        self.finished_at - self.started_at
    }
}

/// Use case for running answer validation over a question list
pub struct RunValidationUseCase<S: AnswerSource + ?Sized> {
    source: Arc<S>,
    validator: Validator,
}

impl<S: AnswerSource + ?Sized> RunValidationUseCase<S> {
    pub fn new(source: Arc<S>, validator: Validator) -> Self {
        Self { source, validator }
    }

    pub fn validator(&self) -> &Validator {
        &self.validator
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(&self, input: RunValidationInput) -> Result<ValidationRun, RunValidationError> {
        self.execute_with_progress(input, &NoProgress).await
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &self,
        input: RunValidationInput,
        progress: &dyn ValidationProgressNotifier,
    ) -> Result<ValidationRun, RunValidationError> {
        let started_at = Utc::now();
        info!(
            "Starting validation of {} questions against {}",
            input.len(),
            self.source.name()
        );
        progress.on_run_start(input.len());

        let mut records = Vec::with_capacity(input.len());
        for question in &input.questions {
            let record = self.process_question(question, progress).await?;
            progress.on_question_complete(&record);
            records.push(record);
        }

        let run = ValidationRun::new(records, started_at);
        info!(
            "Validation finished: {} of {} correct after retries",
            run.summary.final_correct, run.summary.total
        );
        progress.on_run_complete(&run.summary);
        Ok(run)
    }

    /// First attempt, then at most one retry
    async fn process_question(
        &self,
        question: &Question,
        progress: &dyn ValidationProgressNotifier,
    ) -> Result<QuestionRecord, RunValidationError> {
        info!("Processing question: {}", question);

        let (answer, validation) = self.attempt(question, Attempt::First, progress).await?;
        let needs_retry = validation.needs_retry();
        let mut record = QuestionRecord::first_attempt(question.content(), answer, validation);

        if needs_retry {
            info!("Retrying question: {}", question);
            let (retry_answer, retry_validation) =
                self.attempt(question, Attempt::Retry, progress).await?;
            record.record_retry(retry_answer, retry_validation)?;
        }

        debug!(
            "Completed '{}' with final status {}",
            question,
            record.final_status()
        );
        Ok(record)
    }

    /// Ask once and validate the answer
    async fn attempt(
        &self,
        question: &Question,
        attempt: Attempt,
        progress: &dyn ValidationProgressNotifier,
    ) -> Result<(String, ValidationResult), RunValidationError> {
        let answer = self.source.ask(question).await.map_err(|source| {
            error!(
                "Answer source failed on '{}' ({} attempt): {}",
                question, attempt, source
            );
            RunValidationError::AnswerSource {
                question: question.content().to_string(),
                attempt,
                source,
            }
        })?;
        info!("Model answer ({}): {}", attempt, answer);

        let validation = self.validator.validate(question.content(), &answer);
        info!(
            "Validation result ({}): {} - {}",
            attempt, validation.status, validation.message
        );
        progress.on_attempt(question.content(), attempt, &answer, &validation);

        Ok((answer, validation))
    }
}
