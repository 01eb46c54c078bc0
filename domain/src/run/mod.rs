//! Validation run results.
//!
//! - [`record::QuestionRecord`] — everything that happened for one question
//! - [`summary::RunSummary`] — aggregate counts derived from all records

pub mod record;
pub mod summary;
