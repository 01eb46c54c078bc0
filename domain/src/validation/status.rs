//! Validation status tag

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Outcome of validating one answer against the knowledge base.
///
/// Serialized as `VALID`, `RETRY_MISMATCH` and `RETRY_OUT_OF_DOMAIN`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValidationStatus {
    /// Question is known and the answer matches
    Valid,
    /// Question is known but the answer differs from the expected one
    RetryMismatch,
    /// Question is not in the knowledge base
    RetryOutOfDomain,
}

impl ValidationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValidationStatus::Valid => "VALID",
            ValidationStatus::RetryMismatch => "RETRY_MISMATCH",
            ValidationStatus::RetryOutOfDomain => "RETRY_OUT_OF_DOMAIN",
        }
    }

    /// Whether this status belongs to the retry family and earns one more attempt
    pub fn is_retry(&self) -> bool {
        matches!(
            self,
            ValidationStatus::RetryMismatch | ValidationStatus::RetryOutOfDomain
        )
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationStatus::Valid)
    }

    /// Whether the question was covered by the knowledge base
    pub fn is_in_domain(&self) -> bool {
        !matches!(self, ValidationStatus::RetryOutOfDomain)
    }
}

impl std::fmt::Display for ValidationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ValidationStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "VALID" => Ok(ValidationStatus::Valid),
            "RETRY_MISMATCH" => Ok(ValidationStatus::RetryMismatch),
            "RETRY_OUT_OF_DOMAIN" => Ok(ValidationStatus::RetryOutOfDomain),
            other => Err(format!("unknown validation status: {other}")),
        }
    }
}
