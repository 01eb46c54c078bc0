//! Question value object

use crate::core::error::DomainError;
use crate::knowledge::matcher::normalize;
use serde::{Deserialize, Serialize};

/// A question to be put to the answer source (Value Object)
///
/// Keeps the original text for display and reports; comparisons against the
/// knowledge base go through [`Question::normalized`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Question {
    content: String,
}

impl Question {
    /// Create a new question
    ///
    /// # Panics
    /// Panics if the content is empty or only whitespace
    pub fn new(content: impl Into<String>) -> Self {
        let content = content.into();
        assert!(!content.trim().is_empty(), "Question cannot be empty");
        Self { content }
    }

    /// Try to create a new question, rejecting empty or blank text
    pub fn try_new(content: impl Into<String>) -> Result<Self, DomainError> {
        let content = content.into();
        if content.trim().is_empty() {
            Err(DomainError::InvalidQuestion(
                "question text is empty".to_string(),
            ))
        } else {
            Ok(Self { content })
        }
    }

    /// Get the question content as written
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Normalized form used as the knowledge base lookup key
    pub fn normalized(&self) -> String {
        normalize(&self.content)
    }

    /// Consume and return the inner content
    pub fn into_content(self) -> String {
        self.content
    }
}

impl std::fmt::Display for Question {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.content)
    }
}

impl From<&str> for Question {
    fn from(s: &str) -> Self {
        Question::new(s)
    }
}

impl From<String> for Question {
    fn from(s: String) -> Self {
        Question::new(s)
    }
}
