//! Answer validation.
//!
//! - [`status::ValidationStatus`] — the three-way classification tag
//! - [`value_objects::ValidationResult`] — status plus human-readable message
//! - [`validator::Validator`] — classifies (question, answer) pairs

pub mod status;
pub mod validator;
pub mod value_objects;
