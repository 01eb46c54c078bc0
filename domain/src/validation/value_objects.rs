//! Validation value objects

use crate::validation::status::ValidationStatus;
use serde::{Deserialize, Serialize};

/// Result of validating one answer (Value Object)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub status: ValidationStatus,
    pub message: String,
}

impl ValidationResult {
    pub const VALID_MESSAGE: &'static str = "Answer matches knowledge base";
    pub const MISMATCH_MESSAGE: &'static str = "RETRY: answer differs from KB";
    pub const OUT_OF_DOMAIN_MESSAGE: &'static str = "RETRY: out-of-domain";

    pub fn valid() -> Self {
        Self::with_status(ValidationStatus::Valid)
    }

    pub fn mismatch() -> Self {
        Self::with_status(ValidationStatus::RetryMismatch)
    }

    pub fn out_of_domain() -> Self {
        Self::with_status(ValidationStatus::RetryOutOfDomain)
    }

    /// Result carrying the standard message for `status`
    pub fn with_status(status: ValidationStatus) -> Self {
        let message = match status {
            ValidationStatus::Valid => Self::VALID_MESSAGE,
            ValidationStatus::RetryMismatch => Self::MISMATCH_MESSAGE,
            ValidationStatus::RetryOutOfDomain => Self::OUT_OF_DOMAIN_MESSAGE,
        };
        Self {
            status,
            message: message.to_string(),
        }
    }

    pub fn needs_retry(&self) -> bool {
        self.status.is_retry()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_messages() {
        assert_eq!(ValidationResult::valid().message, "Answer matches knowledge base");
        assert_eq!(
            ValidationResult::mismatch().message,
            "RETRY: answer differs from KB"
        );
        assert_eq!(ValidationResult::out_of_domain().message, "RETRY: out-of-domain");
    }

    #[test]
    fn test_serialized_shape() {
        let value = serde_json::to_value(ValidationResult::mismatch()).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "status": "RETRY_MISMATCH",
                "message": "RETRY: answer differs from KB"
            })
        );
    }
}
