//! Domain layer for hallucination-guard
//!
//! This crate contains the core business rules: the knowledge base used as
//! ground truth, the answer matcher, the validator that classifies answers,
//! and the per-question records and summaries produced by a validation run.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Validation
//!
//! Every (question, answer) pair is classified into exactly one
//! [`ValidationStatus`]:
//!
//! - **Valid**: the question is in the knowledge base and the answer matches
//! - **RetryMismatch**: the question is known but the answer differs
//! - **RetryOutOfDomain**: the question is not in the knowledge base
//!
//! The two `Retry*` statuses form the *retry family*: a run asks the answer
//! source exactly one more time when the first attempt lands there.

pub mod config;
pub mod core;
pub mod knowledge;
pub mod run;
pub mod validation;

// Re-export commonly used types
pub use config::{DuplicatePolicy, LoadFailurePolicy, OutputFormat};
pub use core::{error::DomainError, question::Question, string::truncate_with_ellipsis};
pub use knowledge::{
    entities::{KnowledgeBase, KnowledgeBaseEntry},
    matcher::{is_match, normalize},
};
pub use run::{record::QuestionRecord, summary::RunSummary};
pub use validation::{
    status::ValidationStatus, validator::Validator, value_objects::ValidationResult,
};
