//! Knowledge base loading policies

use serde::{Deserialize, Serialize};

/// What to do when the knowledge base document cannot be loaded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadFailurePolicy {
    /// Log the failure and continue with an empty knowledge base (default).
    ///
    /// Every question then validates as out-of-domain.
    #[default]
    Degrade,
    /// Abort the run
    FailFast,
}

/// How questions that normalize to the same key are handled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
    /// The later entry replaces the earlier answer (default)
    #[default]
    LastWriteWins,
    /// Refuse to build the knowledge base
    Reject,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        assert_eq!(LoadFailurePolicy::default(), LoadFailurePolicy::Degrade);
        assert_eq!(DuplicatePolicy::default(), DuplicatePolicy::LastWriteWins);
    }

    #[test]
    fn test_snake_case_names() {
        let policy: LoadFailurePolicy = serde_json::from_str("\"fail_fast\"").unwrap();
        assert_eq!(policy, LoadFailurePolicy::FailFast);
        let json = serde_json::to_string(&DuplicatePolicy::LastWriteWins).unwrap();
        assert_eq!(json, "\"last_write_wins\"");
    }
}
