//! Progress reporting for validation runs

use colored::Colorize;
use guard_application::{Attempt, ValidationProgressNotifier};
use guard_domain::{QuestionRecord, RunSummary, ValidationResult, truncate_with_ellipsis};
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;

/// Reports progress during a validation run with a progress bar
pub struct ProgressReporter {
    bar: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            bar: Mutex::new(None),
        }
    }

    fn bar_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-")
    }

    fn with_bar(&self, f: impl FnOnce(&ProgressBar)) {
        if let Ok(guard) = self.bar.lock()
            && let Some(pb) = guard.as_ref()
        {
            f(pb);
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ValidationProgressNotifier for ProgressReporter {
    fn on_run_start(&self, total_questions: usize) {
        let pb = ProgressBar::new(total_questions as u64);
        pb.set_style(Self::bar_style());
        pb.set_prefix("Validating");
        pb.set_message("Starting...");

        if let Ok(mut guard) = self.bar.lock() {
            *guard = Some(pb);
        }
    }

    fn on_attempt(&self, question: &str, attempt: Attempt, _answer: &str, result: &ValidationResult) {
        if attempt == Attempt::Retry || result.needs_retry() {
            let message = format!("{} {}", attempt, truncate_with_ellipsis(question, 40));
            self.with_bar(|pb| pb.set_message(message));
        }
    }

    fn on_question_complete(&self, record: &QuestionRecord) {
        let status = if record.final_status().is_valid() {
            format!("{} {}", "v".green(), truncate_with_ellipsis(record.question(), 40))
        } else {
            format!("{} {}", "x".red(), truncate_with_ellipsis(record.question(), 40))
        };
        self.with_bar(|pb| {
            pb.set_message(status);
            pb.inc(1);
        });
    }

    fn on_run_complete(&self, summary: &RunSummary) {
        if let Ok(mut guard) = self.bar.lock()
            && let Some(pb) = guard.take()
        {
            pb.finish_with_message(format!(
                "{} {} correct",
                "done".green(),
                summary.ratio(summary.final_correct)
            ));
        }
    }
}

/// Simple text-based progress (no fancy UI)
pub struct SimpleProgress;

impl ValidationProgressNotifier for SimpleProgress {
    fn on_run_start(&self, total_questions: usize) {
        println!(
            "{} {} ({} questions)",
            "->".cyan(),
            "Validating answers".bold(),
            total_questions
        );
    }

    fn on_attempt(&self, _question: &str, attempt: Attempt, answer: &str, result: &ValidationResult) {
        if attempt == Attempt::Retry {
            println!(
                "    {} {} ({})",
                "retry:".yellow(),
                truncate_with_ellipsis(answer, 40),
                result.status
            );
        }
    }

    fn on_question_complete(&self, record: &QuestionRecord) {
        if record.final_status().is_valid() {
            println!("  {} {}", "v".green(), record.question());
        } else {
            println!(
                "  {} {} ({})",
                "x".red(),
                record.question(),
                record.final_status()
            );
        }
    }

    fn on_run_complete(&self, summary: &RunSummary) {
        println!(
            "{} {} correct after retries\n",
            "->".cyan(),
            summary.ratio(summary.final_correct)
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_reporter_lifecycle() {
        let reporter = ProgressReporter::new();
        let record = QuestionRecord::first_attempt("What is 2+2?", "4", ValidationResult::valid());
        let summary = RunSummary::from_records(std::slice::from_ref(&record));

        reporter.on_run_start(1);
        reporter.on_attempt("What is 2+2?", Attempt::First, "4", &ValidationResult::valid());
        reporter.on_question_complete(&record);
        reporter.on_run_complete(&summary);

        assert!(reporter.bar.lock().unwrap().is_none());
    }

    #[test]
    fn test_progress_reporter_ignores_events_without_run() {
        let reporter = ProgressReporter::default();
        let record = QuestionRecord::first_attempt("q", "a", ValidationResult::out_of_domain());

        reporter.on_question_complete(&record);
        reporter.on_run_complete(&RunSummary::default());

        assert!(reporter.bar.lock().unwrap().is_none());
    }
}
