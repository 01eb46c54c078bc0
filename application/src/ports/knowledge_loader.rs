//! Knowledge base loader port

use guard_domain::{DomainError, DuplicatePolicy, KnowledgeBase};
use thiserror::Error;

/// Errors that can occur while loading the knowledge base.
///
/// Not-found and parse failures are separate variants so callers can tell
/// a missing document from a malformed one.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Knowledge base not found: {path}")]
    NotFound { path: String },

    #[error("Invalid knowledge base document {path}: {reason}")]
    Parse { path: String, reason: String },

    #[error("Could not read knowledge base {path}: {reason}")]
    Io { path: String, reason: String },

    #[error("Knowledge base rejected: {0}")]
    Rejected(#[from] DomainError),
}

impl LoadError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, LoadError::NotFound { .. })
    }

    pub fn is_parse_error(&self) -> bool {
        matches!(self, LoadError::Parse { .. })
    }
}

/// Loads the knowledge base from some document.
///
/// Implementations live in the infrastructure layer.
pub trait KnowledgeBaseLoader: Send + Sync {
    /// Human-readable location of the document (for logs)
    fn source(&self) -> String;

    /// Read and parse the document, building the lookup with `duplicates`
    fn load(&self, duplicates: DuplicatePolicy) -> Result<KnowledgeBase, LoadError>;
}
