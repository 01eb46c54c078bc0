//! Per-question record of a validation run

use crate::core::error::DomainError;
use crate::validation::status::ValidationStatus;
use crate::validation::value_objects::ValidationResult;
use serde::{Deserialize, Serialize};

/// Outcome of asking and validating one question, including the optional retry.
///
/// Created from the first attempt; the only later change is
/// [`QuestionRecord::record_retry`], which can happen at most once and only
/// when the first attempt landed in the retry family. `final_status` always
/// equals the retry status when retried, the first status otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionRecord {
    question: String,
    first_answer: String,
    first_validation: ValidationResult,
    retried: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    retry_answer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    retry_validation: Option<ValidationResult>,
    final_status: ValidationStatus,
}

impl QuestionRecord {
    /// Record the first attempt for a question
    pub fn first_attempt(
        question: impl Into<String>,
        answer: impl Into<String>,
        validation: ValidationResult,
    ) -> Self {
        let final_status = validation.status;
        Self {
            question: question.into(),
            first_answer: answer.into(),
            first_validation: validation,
            retried: false,
            retry_answer: None,
            retry_validation: None,
            final_status,
        }
    }

    /// Attach the single retry attempt.
    ///
    /// Fails when the first attempt was valid or a retry is already attached.
    pub fn record_retry(
        &mut self,
        answer: impl Into<String>,
        validation: ValidationResult,
    ) -> Result<(), DomainError> {
        if !self.first_validation.needs_retry() {
            return Err(DomainError::RetryNotAllowed {
                question: self.question.clone(),
                status: self.first_validation.status,
            });
        }
        if self.retried {
            return Err(DomainError::RetryAlreadyRecorded(self.question.clone()));
        }

        self.retried = true;
        self.final_status = validation.status;
        self.retry_answer = Some(answer.into());
        self.retry_validation = Some(validation);
        Ok(())
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn first_answer(&self) -> &str {
        &self.first_answer
    }

    pub fn first_validation(&self) -> &ValidationResult {
        &self.first_validation
    }

    pub fn retried(&self) -> bool {
        self.retried
    }

    pub fn retry_answer(&self) -> Option<&str> {
        self.retry_answer.as_deref()
    }

    pub fn retry_validation(&self) -> Option<&ValidationResult> {
        self.retry_validation.as_ref()
    }

    pub fn final_status(&self) -> ValidationStatus {
        self.final_status
    }

    /// Whether the question was covered by the knowledge base, judged by the first attempt
    pub fn is_in_domain(&self) -> bool {
        self.first_validation.status.is_in_domain()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_attempt_valid() {
        let record = QuestionRecord::first_attempt("What is 2+2?", "4", ValidationResult::valid());
        assert!(!record.retried());
        assert_eq!(record.final_status(), ValidationStatus::Valid);
        assert!(record.retry_answer().is_none());
    }

    #[test]
    fn test_retry_sets_final_status() {
        let mut record = QuestionRecord::first_attempt(
            "What is the capital of France?",
            "London",
            ValidationResult::mismatch(),
        );
        record.record_retry("Paris", ValidationResult::valid()).unwrap();

        assert!(record.retried());
        assert_eq!(record.retry_answer(), Some("Paris"));
        assert_eq!(record.final_status(), ValidationStatus::Valid);
        assert_eq!(
            record.first_validation().status,
            ValidationStatus::RetryMismatch
        );
    }

    #[test]
    fn test_failed_retry_is_final() {
        let mut record = QuestionRecord::first_attempt(
            "What is the population of Mars?",
            "There is no permanent human population on Mars",
            ValidationResult::out_of_domain(),
        );
        record
            .record_retry(
                "There is no permanent human population on Mars",
                ValidationResult::out_of_domain(),
            )
            .unwrap();
        assert_eq!(record.final_status(), ValidationStatus::RetryOutOfDomain);
    }

    #[test]
    fn test_retry_rejected_after_valid_first_attempt() {
        let mut record = QuestionRecord::first_attempt("What is 2+2?", "4", ValidationResult::valid());
        let err = record.record_retry("4", ValidationResult::valid()).unwrap_err();
        assert!(matches!(err, DomainError::RetryNotAllowed { .. }));
        assert!(!record.retried());
    }

    #[test]
    fn test_second_retry_rejected() {
        let mut record =
            QuestionRecord::first_attempt("q", "a", ValidationResult::mismatch());
        record.record_retry("b", ValidationResult::mismatch()).unwrap();
        let err = record.record_retry("c", ValidationResult::valid()).unwrap_err();
        assert_eq!(err, DomainError::RetryAlreadyRecorded("q".to_string()));
        assert_eq!(record.final_status(), ValidationStatus::RetryMismatch);
        assert_eq!(record.retry_answer(), Some("b"));
    }

    #[test]
    fn test_serialized_shape_without_retry() {
        let record = QuestionRecord::first_attempt("What is 2+2?", "4", ValidationResult::valid());
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "question": "What is 2+2?",
                "first_answer": "4",
                "first_validation": {
                    "status": "VALID",
                    "message": "Answer matches knowledge base"
                },
                "retried": false,
                "final_status": "VALID"
            })
        );
    }

    #[test]
    fn test_serialized_shape_with_retry() {
        let mut record = QuestionRecord::first_attempt(
            "What year did World War II end?",
            "1944",
            ValidationResult::mismatch(),
        );
        record.record_retry("1945", ValidationResult::valid()).unwrap();
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["retried"], true);
        assert_eq!(value["retry_answer"], "1945");
        assert_eq!(value["retry_validation"]["status"], "VALID");
        assert_eq!(value["final_status"], "VALID");

        let back: QuestionRecord = serde_json::from_value(value).unwrap();
        assert_eq!(back, record);
    }
}
