//! Application layer for hallucination-guard
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::KnowledgeBasePolicy;
pub use ports::{
    answer_source::{AnswerSource, AnswerSourceError},
    knowledge_loader::{KnowledgeBaseLoader, LoadError},
    progress::{Attempt, NoProgress, ValidationProgressNotifier},
};
pub use use_cases::load_knowledge_base::{LoadKnowledgeBaseOutput, LoadKnowledgeBaseUseCase};
pub use use_cases::run_validation::{
    RunValidationError, RunValidationInput, RunValidationUseCase, ValidationRun,
};
