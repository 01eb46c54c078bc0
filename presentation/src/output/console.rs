//! Console output formatter for validation runs

use crate::output::formatter::RunFormatter;
use colored::{ColoredString, Colorize};
use guard_application::ValidationRun;
use guard_domain::{QuestionRecord, RunSummary, ValidationStatus, truncate_with_ellipsis};

/// Formats validation runs for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the overview counts
    pub fn format_summary(run: &ValidationRun) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Hallucination Detection Results"));
        output.push('\n');
        output.push_str(&Self::overview(&run.summary));
        output.push_str(&Self::footer());

        output
    }

    /// Format the overview and one line per question
    pub fn format_full(run: &ValidationRun) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Hallucination Detection Results"));
        output.push('\n');
        output.push_str(&Self::overview(&run.summary));

        output.push_str(&Self::section_header("Questions"));
        for record in &run.records {
            output.push_str(&Self::record_line(record));
        }

        output.push_str(&Self::footer());

        output
    }

    /// Format the records as JSON
    pub fn format_json(run: &ValidationRun) -> String {
        serde_json::to_string_pretty(&run.records).unwrap_or_else(|_| "[]".to_string())
    }

    fn overview(summary: &RunSummary) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "{} {} ({} in knowledge base, {} out of domain)\n",
            "Questions:".cyan().bold(),
            summary.total,
            summary.in_domain,
            summary.out_of_domain
        ));

        output.push_str(&Self::section_header("First Attempt"));
        output.push_str(&format!(
            "  Correct:        {}\n",
            summary.ratio(summary.first_attempt_correct)
        ));
        output.push_str(&format!(
            "  Retries needed: {}\n",
            summary.ratio(summary.retried)
        ));

        output.push_str(&Self::section_header("After Retries"));
        output.push_str(&format!(
            "  Correct:        {}\n",
            summary.ratio(summary.final_correct).green()
        ));
        let incorrect = summary.ratio(summary.final_incorrect);
        output.push_str(&format!(
            "  Incorrect:      {}\n",
            if summary.final_incorrect == 0 {
                incorrect.normal()
            } else {
                incorrect.red()
            }
        ));

        output
    }

    fn record_line(record: &QuestionRecord) -> String {
        let retry = match record.retry_answer() {
            Some(answer) => format!(
                " -> {} {}",
                Self::status(record.final_status()),
                truncate_with_ellipsis(answer, 30).dimmed()
            ),
            None => String::new(),
        };

        format!(
            "  {} {}\n      {} {}{}\n",
            Self::marker(record.final_status()),
            truncate_with_ellipsis(record.question(), 60).bold(),
            Self::status(record.first_validation().status),
            truncate_with_ellipsis(record.first_answer(), 30).dimmed(),
            retry
        )
    }

    fn marker(status: ValidationStatus) -> ColoredString {
        if status.is_valid() {
            "v".green()
        } else {
            "x".red()
        }
    }

    fn status(status: ValidationStatus) -> ColoredString {
        match status {
            ValidationStatus::Valid => status.as_str().green(),
            ValidationStatus::RetryMismatch => status.as_str().yellow(),
            ValidationStatus::RetryOutOfDomain => status.as_str().magenta(),
        }
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }
}

impl RunFormatter for ConsoleFormatter {
    fn format_summary(&self, run: &ValidationRun) -> String {
        Self::format_summary(run)
    }

    fn format_full(&self, run: &ValidationRun) -> String {
        Self::format_full(run)
    }

    fn format_json(&self, run: &ValidationRun) -> String {
        Self::format_json(run)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use guard_domain::ValidationResult;

    fn sample_run() -> ValidationRun {
        let mut retried =
            QuestionRecord::first_attempt("What color is a unicorn?", "Pink", ValidationResult::out_of_domain());
        retried
            .record_retry("Unicorns are white", ValidationResult::out_of_domain())
            .unwrap();
        let records = vec![
            QuestionRecord::first_attempt("What is 2+2?", "4", ValidationResult::valid()),
            retried,
        ];
        let summary = RunSummary::from_records(&records);
        let now = Utc::now();
        ValidationRun {
            records,
            summary,
            started_at: now,
            finished_at: now,
        }
    }

    #[test]
    fn test_format_summary_counts() {
        colored::control::set_override(false);
        let output = ConsoleFormatter::format_summary(&sample_run());

        assert!(output.contains("Questions: 2 (1 in knowledge base, 1 out of domain)"));
        assert!(output.contains("Correct:        1/2 (50.0%)"));
        assert!(!output.contains("What is 2+2?"));
    }

    #[test]
    fn test_format_full_lists_questions() {
        colored::control::set_override(false);
        let output = ConsoleFormatter::format_full(&sample_run());

        assert!(output.contains("v What is 2+2?"));
        assert!(output.contains("x What color is a unicorn?"));
        assert!(output.contains("RETRY_OUT_OF_DOMAIN Pink -> RETRY_OUT_OF_DOMAIN Unicorns are white"));
    }

    #[test]
    fn test_format_json_is_record_array() {
        let output = ConsoleFormatter::format_json(&sample_run());
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        let records = value.as_array().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0]["final_status"], "VALID");
        assert_eq!(records[1]["retried"], true);
    }
}
