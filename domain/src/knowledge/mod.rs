//! Knowledge base - the ground truth answers are checked against.
//!
//! - [`entities::KnowledgeBase`] — normalized question → answer lookup
//! - [`matcher`] — text normalization and the lenient answer match

pub mod entities;
pub mod matcher;
