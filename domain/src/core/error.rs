//! Domain error types

use crate::validation::status::ValidationStatus;
use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid question: {0}")]
    InvalidQuestion(String),

    #[error("Duplicate knowledge base question: {0}")]
    DuplicateQuestion(String),

    #[error("Retry not allowed for question '{question}' (first status: {status})")]
    RetryNotAllowed {
        question: String,
        status: ValidationStatus,
    },

    #[error("Retry already recorded for question '{0}'")]
    RetryAlreadyRecorded(String),
}

impl DomainError {
    /// Check if this error comes from building the knowledge base
    pub fn is_knowledge_base_error(&self) -> bool {
        matches!(self, DomainError::DuplicateQuestion(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_question_display() {
        let error = DomainError::DuplicateQuestion("what is 2+2?".to_string());
        assert_eq!(
            error.to_string(),
            "Duplicate knowledge base question: what is 2+2?"
        );
    }

    #[test]
    fn test_retry_not_allowed_display() {
        let error = DomainError::RetryNotAllowed {
            question: "What is 2+2?".to_string(),
            status: ValidationStatus::Valid,
        };
        assert_eq!(
            error.to_string(),
            "Retry not allowed for question 'What is 2+2?' (first status: VALID)"
        );
    }

    #[test]
    fn test_is_knowledge_base_error() {
        assert!(DomainError::DuplicateQuestion("q".to_string()).is_knowledge_base_error());
        assert!(!DomainError::InvalidQuestion("".to_string()).is_knowledge_base_error());
        assert!(!DomainError::RetryAlreadyRecorded("q".to_string()).is_knowledge_base_error());
    }
}
