//! Load Knowledge Base use case
//!
//! Applies the configured [`KnowledgeBasePolicy`] around a
//! [`KnowledgeBaseLoader`]: degraded mode turns a missing or malformed
//! document into an empty knowledge base, fail-fast propagates the error.

use crate::config::KnowledgeBasePolicy;
use crate::ports::knowledge_loader::{KnowledgeBaseLoader, LoadError};
use guard_domain::{KnowledgeBase, LoadFailurePolicy};
use tracing::{error, info, warn};

/// Output of the LoadKnowledgeBase use case
#[derive(Debug)]
pub struct LoadKnowledgeBaseOutput {
    pub knowledge_base: KnowledgeBase,
    /// The load failure that was downgraded to an empty knowledge base
    pub degraded: Option<LoadError>,
}

impl LoadKnowledgeBaseOutput {
    pub fn is_degraded(&self) -> bool {
        self.degraded.is_some()
    }
}

/// Use case for loading the knowledge base under a policy
pub struct LoadKnowledgeBaseUseCase<L: KnowledgeBaseLoader> {
    loader: L,
}

impl<L: KnowledgeBaseLoader> LoadKnowledgeBaseUseCase<L> {
    pub fn new(loader: L) -> Self {
        Self { loader }
    }

    /// Load the knowledge base.
    ///
    /// A [`LoadError::Rejected`] (duplicate questions under the reject
    /// policy) is always returned as an error: it only happens when strict
    /// loading was asked for explicitly.
    pub fn execute(&self, policy: KnowledgeBasePolicy) -> Result<LoadKnowledgeBaseOutput, LoadError> {
        let source = self.loader.source();

        match self.loader.load(policy.duplicates) {
            Ok(knowledge_base) => {
                for key in knowledge_base.overwritten() {
                    warn!(
                        "Duplicate question '{}' in {}: keeping the last answer",
                        key, source
                    );
                }
                info!(
                    "Loaded {} knowledge base entries from {}",
                    knowledge_base.len(),
                    source
                );
                Ok(LoadKnowledgeBaseOutput {
                    knowledge_base,
                    degraded: None,
                })
            }
            Err(e @ LoadError::Rejected(_)) => {
                error!("{}", e);
                Err(e)
            }
            Err(e) => match policy.on_load_failure {
                LoadFailurePolicy::FailFast => {
                    error!("{}", e);
                    Err(e)
                }
                LoadFailurePolicy::Degrade => {
                    warn!(
                        "{}; continuing with an empty knowledge base (all questions are out-of-domain)",
                        e
                    );
                    Ok(LoadKnowledgeBaseOutput {
                        knowledge_base: KnowledgeBase::empty(),
                        degraded: Some(e),
                    })
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use guard_domain::{DuplicatePolicy, KnowledgeBaseEntry};

    // ==================== Test Mocks ====================

    enum Outcome {
        Entries(Vec<KnowledgeBaseEntry>),
        NotFound,
        Malformed,
    }

    struct MockLoader {
        outcome: Outcome,
    }

    impl KnowledgeBaseLoader for MockLoader {
        fn source(&self) -> String {
            "mock.json".to_string()
        }

        fn load(&self, duplicates: DuplicatePolicy) -> Result<KnowledgeBase, LoadError> {
            match &self.outcome {
                Outcome::Entries(entries) => {
                    Ok(KnowledgeBase::from_entries(entries.clone(), duplicates)?)
                }
                Outcome::NotFound => Err(LoadError::NotFound {
                    path: self.source(),
                }),
                Outcome::Malformed => Err(LoadError::Parse {
                    path: self.source(),
                    reason: "EOF while parsing".to_string(),
                }),
            }
        }
    }

    fn use_case(outcome: Outcome) -> LoadKnowledgeBaseUseCase<MockLoader> {
        LoadKnowledgeBaseUseCase::new(MockLoader { outcome })
    }

    fn duplicated() -> Vec<KnowledgeBaseEntry> {
        vec![
            KnowledgeBaseEntry::new("What is 2+2?", "5"),
            KnowledgeBaseEntry::new("what is 2+2?", "4"),
        ]
    }

    // ==================== Tests ====================

    #[test]
    fn test_loads_entries() {
        let output = use_case(Outcome::Entries(vec![KnowledgeBaseEntry::new(
            "What is the currency of Japan?",
            "Yen",
        )]))
        .execute(KnowledgeBasePolicy::default())
        .unwrap();

        assert!(!output.is_degraded());
        assert_eq!(
            output.knowledge_base.lookup("what is the currency of japan?"),
            Some("Yen")
        );
    }

    #[test]
    fn test_missing_document_degrades_to_empty() {
        let output = use_case(Outcome::NotFound)
            .execute(KnowledgeBasePolicy::default())
            .unwrap();

        assert!(output.is_degraded());
        assert!(output.knowledge_base.is_empty());
        assert!(output.degraded.unwrap().is_not_found());
    }

    #[test]
    fn test_malformed_document_degrades_to_empty() {
        let output = use_case(Outcome::Malformed)
            .execute(KnowledgeBasePolicy::default())
            .unwrap();
        assert!(output.degraded.unwrap().is_parse_error());
    }

    #[test]
    fn test_fail_fast_propagates() {
        let policy = KnowledgeBasePolicy::default().with_on_load_failure(LoadFailurePolicy::FailFast);

        let err = use_case(Outcome::NotFound).execute(policy).unwrap_err();
        assert!(err.is_not_found());

        let err = use_case(Outcome::Malformed).execute(policy).unwrap_err();
        assert!(err.is_parse_error());
    }

    #[test]
    fn test_duplicates_last_write_wins_by_default() {
        let output = use_case(Outcome::Entries(duplicated()))
            .execute(KnowledgeBasePolicy::default())
            .unwrap();
        assert_eq!(output.knowledge_base.lookup("What is 2+2?"), Some("4"));
        assert_eq!(output.knowledge_base.overwritten().len(), 1);
    }

    #[test]
    fn test_rejected_duplicates_fail_even_when_degrading() {
        let policy = KnowledgeBasePolicy::default().with_duplicates(DuplicatePolicy::Reject);
        let err = use_case(Outcome::Entries(duplicated()))
            .execute(policy)
            .unwrap_err();
        assert!(matches!(err, LoadError::Rejected(_)));
    }
}
