//! Presentation layer for hallucination-guard
//!
//! This crate contains the CLI definition, the Markdown summary report,
//! console output formatters and progress reporters.

pub mod cli;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::{Cli, ConsoleFormat};
pub use output::console::ConsoleFormatter;
pub use output::formatter::RunFormatter;
pub use output::markdown::MarkdownReport;
pub use progress::reporter::{ProgressReporter, SimpleProgress};
