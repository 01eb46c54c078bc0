//! Core domain concepts shared across all subdomains.
//!
//! - [`question::Question`] — a validated, non-empty question
//! - [`error::DomainError`] — domain-level errors
//! - [`string`] — display helpers used by reports

pub mod error;
pub mod question;
pub mod string;
