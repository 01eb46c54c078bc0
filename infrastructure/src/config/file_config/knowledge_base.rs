//! Knowledge base configuration from TOML (`[knowledge_base]` section)

use guard_application::KnowledgeBasePolicy;
use guard_domain::{DuplicatePolicy, LoadFailurePolicy};
use serde::{Deserialize, Serialize};

/// Raw knowledge base configuration from TOML
///
/// # Example
///
/// ```toml
/// [knowledge_base]
/// path = "kb.json"
/// on_load_failure = "degrade"     # "degrade" or "fail_fast"
/// duplicates = "last_write_wins"  # "last_write_wins" or "reject"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileKnowledgeBaseConfig {
    /// Path to the JSON knowledge base document
    pub path: String,
    pub on_load_failure: LoadFailurePolicy,
    pub duplicates: DuplicatePolicy,
}

impl Default for FileKnowledgeBaseConfig {
    fn default() -> Self {
        Self {
            path: "kb.json".to_string(),
            on_load_failure: LoadFailurePolicy::default(),
            duplicates: DuplicatePolicy::default(),
        }
    }
}

impl FileKnowledgeBaseConfig {
    pub fn policy(&self) -> KnowledgeBasePolicy {
        KnowledgeBasePolicy::default()
            .with_on_load_failure(self.on_load_failure)
            .with_duplicates(self.duplicates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_from_config() {
        let config = FileKnowledgeBaseConfig {
            on_load_failure: LoadFailurePolicy::FailFast,
            ..Default::default()
        };
        let policy = config.policy();
        assert_eq!(policy.on_load_failure, LoadFailurePolicy::FailFast);
        assert_eq!(policy.duplicates, DuplicatePolicy::LastWriteWins);
    }
}
