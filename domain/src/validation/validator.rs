//! Validator - classifies answers against the knowledge base

use crate::knowledge::entities::KnowledgeBase;
use crate::knowledge::matcher::is_match;
use crate::validation::value_objects::ValidationResult;

/// Classifies (question, answer) pairs.
///
/// Holds no state besides the immutable [`KnowledgeBase`], so repeated calls
/// with the same input always give the same result. Out-of-domain questions
/// and mismatching answers are ordinary results, never errors.
#[derive(Debug, Clone, Default)]
pub struct Validator {
    knowledge_base: KnowledgeBase,
}

impl Validator {
    pub fn new(knowledge_base: KnowledgeBase) -> Self {
        Self { knowledge_base }
    }

    /// Validate `answer` as a response to `question`.
    pub fn validate(&self, question: &str, answer: &str) -> ValidationResult {
        match self.knowledge_base.lookup(question) {
            None => ValidationResult::out_of_domain(),
            Some(expected) if is_match(expected, answer) => ValidationResult::valid(),
            Some(_) => ValidationResult::mismatch(),
        }
    }

    /// The stored answer for `question`, if the knowledge base has one
    pub fn expected_answer(&self, question: &str) -> Option<&str> {
        self.knowledge_base.lookup(question)
    }

    pub fn knowledge_base(&self) -> &KnowledgeBase {
        &self.knowledge_base
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DuplicatePolicy;
    use crate::knowledge::entities::KnowledgeBaseEntry;
    use crate::validation::status::ValidationStatus;

    fn validator(entries: &[(&str, &str)]) -> Validator {
        let entries = entries
            .iter()
            .map(|(q, a)| KnowledgeBaseEntry::new(*q, *a))
            .collect();
        Validator::new(KnowledgeBase::from_entries(entries, DuplicatePolicy::default()).unwrap())
    }

    #[test]
    fn test_mismatch_then_valid() {
        let v = validator(&[("what is the capital of france?", "Paris")]);

        let first = v.validate("What is the capital of France?", "London");
        assert_eq!(first.status, ValidationStatus::RetryMismatch);
        assert_eq!(first.message, "RETRY: answer differs from KB");

        let retry = v.validate("What is the capital of France?", "Paris");
        assert_eq!(retry.status, ValidationStatus::Valid);
        assert_eq!(retry.message, "Answer matches knowledge base");
    }

    #[test]
    fn test_exact_match_is_valid() {
        let v = validator(&[("what is 2+2?", "4")]);
        assert_eq!(v.validate("What is 2+2?", "4"), ValidationResult::valid());
    }

    #[test]
    fn test_out_of_domain_regardless_of_answer() {
        let v = validator(&[("what is 2+2?", "4")]);
        for answer in ["4", "", "There is no permanent human population on Mars", "Paris"] {
            let result = v.validate("What is the population of Mars?", answer);
            assert_eq!(result.status, ValidationStatus::RetryOutOfDomain);
            assert_eq!(result.message, "RETRY: out-of-domain");
        }
    }

    #[test]
    fn test_expected_answer_validates() {
        let pairs = [
            ("What is the chemical symbol for water?", "H2O"),
            ("Who wrote the novel '1984'?", "George Orwell"),
            ("What is the speed of light in vacuum?", "299,792,458 meters per second"),
        ];
        let v = validator(&pairs);
        for (question, _) in pairs {
            let expected = v.expected_answer(question).unwrap().to_string();
            assert!(v.validate(question, &expected).status.is_valid());
        }
    }

    #[test]
    fn test_expected_answer_absent() {
        let v = validator(&[("what is 2+2?", "4")]);
        assert_eq!(v.expected_answer("What color is a unicorn?"), None);
        assert_eq!(v.expected_answer("WHAT IS 2+2?"), Some("4"));
    }

    #[test]
    fn test_empty_knowledge_base_is_all_out_of_domain() {
        let v = Validator::default();
        assert_eq!(
            v.validate("What is the capital of France?", "Paris").status,
            ValidationStatus::RetryOutOfDomain
        );
    }
}
