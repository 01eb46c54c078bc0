//! Output formatting for validation runs

pub mod console;
pub mod formatter;
pub mod markdown;
