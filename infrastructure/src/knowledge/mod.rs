//! Knowledge base adapters.
//!
//! Provides [`JsonKnowledgeBaseLoader`], which implements the
//! [`KnowledgeBaseLoader`](guard_application::KnowledgeBaseLoader) port for
//! JSON documents.

mod json_loader;

pub use json_loader::{JsonKnowledgeBaseLoader, KnowledgeBaseDocument};
