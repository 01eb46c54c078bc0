//! Application-level configuration.
//!
//! - [`KnowledgeBasePolicy`] — how the knowledge base load reacts to failures
//!   and duplicate questions

use guard_domain::{DuplicatePolicy, LoadFailurePolicy};
use serde::{Deserialize, Serialize};

/// Knowledge base loading behavior.
///
/// Used by [`LoadKnowledgeBaseUseCase`](crate::use_cases::load_knowledge_base::LoadKnowledgeBaseUseCase).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnowledgeBasePolicy {
    /// Missing or malformed document: degrade to an empty KB or abort
    pub on_load_failure: LoadFailurePolicy,
    /// Questions that normalize to the same key
    pub duplicates: DuplicatePolicy,
}

impl KnowledgeBasePolicy {
    // ==================== Builder Methods ====================

    pub fn with_on_load_failure(mut self, policy: LoadFailurePolicy) -> Self {
        self.on_load_failure = policy;
        self
    }

    pub fn with_duplicates(mut self, policy: DuplicatePolicy) -> Self {
        self.duplicates = policy;
        self
    }

    /// Abort on load failure and reject duplicate questions
    pub fn strict() -> Self {
        Self {
            on_load_failure: LoadFailurePolicy::FailFast,
            duplicates: DuplicatePolicy::Reject,
        }
    }
}
