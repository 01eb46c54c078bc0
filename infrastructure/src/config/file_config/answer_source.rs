//! Answer source configuration from TOML (`[answer_source]` section)

use serde::{Deserialize, Serialize};

/// Raw answer source configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileAnswerSourceConfig {
    /// JSON file mapping question -> ordered answers; built-in script when unset
    pub script: Option<String>,
    /// Answer given to questions the script does not know
    pub fallback_answer: String,
}

impl Default for FileAnswerSourceConfig {
    fn default() -> Self {
        Self {
            script: None,
            fallback_answer: crate::answer_source::DEFAULT_FALLBACK_ANSWER.to_string(),
        }
    }
}
