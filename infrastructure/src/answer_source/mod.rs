//! Answer source adapters.
//!
//! [`ScriptedAnswerSource`] stands in for a language model: it replays a
//! fixed script of answers per question, which keeps runs reproducible.

mod scripted;

pub use scripted::{DEFAULT_FALLBACK_ANSWER, ScriptLoadError, ScriptedAnswerSource};
