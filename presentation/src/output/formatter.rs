//! Output formatter trait

use guard_application::ValidationRun;

/// Trait for formatting validation runs
pub trait RunFormatter {
    /// Format the overview counts only
    fn format_summary(&self, run: &ValidationRun) -> String;

    /// Format the overview and the per-question table
    fn format_full(&self, run: &ValidationRun) -> String;

    /// Format the records as JSON
    fn format_json(&self, run: &ValidationRun) -> String;
}
