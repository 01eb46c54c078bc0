//! Question list configuration from TOML (`[questions]` section)

use serde::{Deserialize, Serialize};

/// Questions asked after the knowledge base questions when nothing else is configured.
///
/// None of them is covered by the bundled knowledge base, so they exercise
/// the out-of-domain path.
pub const DEFAULT_EXTRA_QUESTIONS: [&str; 5] = [
    "What is the population of Mars?",
    "What color is a unicorn?",
    "How many moons does Earth have?",
    "What is the capital of Atlantis?",
    "What is 2+2?",
];

/// Raw question list configuration from TOML
///
/// ```toml
/// [questions]
/// include_kb_questions = true
/// extra = ["What is the population of Mars?"]
/// file = "questions.txt"   # replaces `extra` when set
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileQuestionsConfig {
    /// Ask every knowledge base question first, in document order
    pub include_kb_questions: bool,
    /// Additional questions asked after the knowledge base ones
    pub extra: Vec<String>,
    /// Question list file (JSON array or one question per line)
    pub file: Option<String>,
}

impl Default for FileQuestionsConfig {
    fn default() -> Self {
        Self {
            include_kb_questions: true,
            extra: DEFAULT_EXTRA_QUESTIONS.iter().map(|q| q.to_string()).collect(),
            file: None,
        }
    }
}
