//! Knowledge base entities

use crate::config::DuplicatePolicy;
use crate::core::error::DomainError;
use crate::knowledge::matcher::normalize;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single question/answer pair as it appears in the knowledge base document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnowledgeBaseEntry {
    pub question: String,
    pub answer: String,
}

impl KnowledgeBaseEntry {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

/// Ground-truth lookup keyed by normalized question text.
///
/// Immutable once built. Lookups normalize the incoming question and do an
/// exact key match; there is no fuzzy or substring lookup here.
#[derive(Debug, Clone, Default)]
pub struct KnowledgeBase {
    /// Entries in document order, duplicates included
    entries: Vec<KnowledgeBaseEntry>,
    /// Normalized question -> trimmed answer
    answers: HashMap<String, String>,
    /// Normalized questions whose earlier answer was replaced by a later entry
    overwritten: Vec<String>,
}

impl KnowledgeBase {
    /// An empty knowledge base; every question is out-of-domain.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build the lookup from entries in document order.
    ///
    /// With [`DuplicatePolicy::LastWriteWins`] a later entry whose question
    /// normalizes to an existing key replaces the earlier answer, and the key
    /// is listed in [`KnowledgeBase::overwritten`]. With
    /// [`DuplicatePolicy::Reject`] the first such collision is an error.
    pub fn from_entries(
        entries: Vec<KnowledgeBaseEntry>,
        policy: DuplicatePolicy,
    ) -> Result<Self, DomainError> {
        let mut answers = HashMap::with_capacity(entries.len());
        let mut overwritten = Vec::new();

        for entry in &entries {
            let key = normalize(&entry.question);
            let previous = answers.insert(key.clone(), entry.answer.trim().to_string());
            if previous.is_some() {
                match policy {
                    DuplicatePolicy::LastWriteWins => overwritten.push(key),
                    DuplicatePolicy::Reject => return Err(DomainError::DuplicateQuestion(key)),
                }
            }
        }

        Ok(Self {
            entries,
            answers,
            overwritten,
        })
    }

    /// Look up the expected answer for a question.
    ///
    /// Returns `None` for out-of-domain questions.
    pub fn lookup(&self, question: &str) -> Option<&str> {
        self.answers.get(&normalize(question)).map(String::as_str)
    }

    /// Check whether a question is covered by the knowledge base
    pub fn contains(&self, question: &str) -> bool {
        self.lookup(question).is_some()
    }

    /// Number of distinct normalized questions
    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    /// Entries as loaded, in document order (duplicates included)
    pub fn entries(&self) -> &[KnowledgeBaseEntry] {
        &self.entries
    }

    /// Question texts in document order, as written in the document
    pub fn questions(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.question.as_str())
    }

    /// Normalized keys that were overwritten by a later duplicate
    pub fn overwritten(&self) -> &[String] {
        &self.overwritten
    }
}
