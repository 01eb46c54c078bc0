//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod load_knowledge_base;
pub mod run_validation;
