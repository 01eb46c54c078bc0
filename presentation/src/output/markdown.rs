//! Markdown summary report

use guard_application::ValidationRun;
use guard_domain::{QuestionRecord, truncate_with_ellipsis};

/// Maximum characters of a question shown in the detail table
pub const QUESTION_WIDTH: usize = 50;
/// Maximum characters of a first answer shown in the detail table
pub const ANSWER_WIDTH: usize = 30;

/// Renders a finished run as the Markdown summary document
pub struct MarkdownReport;

impl MarkdownReport {
    pub fn render(run: &ValidationRun) -> String {
        let summary = &run.summary;
        let mut output = String::new();

        output.push_str("# Hallucination Detection Summary\n\n");
        output.push_str(&format!(
            "_Run started {} and finished {} ({} ms)_\n\n",
            run.started_at.format("%Y-%m-%d %H:%M:%S UTC"),
            run.finished_at.format("%Y-%m-%d %H:%M:%S UTC"),
            run.duration().num_milliseconds().max(0)
        ));

        output.push_str("## Overview\n");
        output.push_str(&format!("- **Total Questions**: {}\n", summary.total));
        output.push_str(&format!("- **KB Questions**: {}\n", summary.in_domain));
        output.push_str(&format!(
            "- **Out-of-Domain Questions**: {}\n\n",
            summary.out_of_domain
        ));

        output.push_str("## First Attempt Results\n");
        output.push_str(&format!(
            "- **Correct**: {}\n",
            summary.ratio(summary.first_attempt_correct)
        ));
        output.push_str(&format!(
            "- **Retries Needed**: {}\n\n",
            summary.ratio(summary.retried)
        ));

        output.push_str("## Final Results (After Retries)\n");
        output.push_str(&format!(
            "- **Correct**: {}\n",
            summary.ratio(summary.final_correct)
        ));
        output.push_str(&format!(
            "- **Incorrect**: {}\n\n",
            summary.ratio(summary.final_incorrect)
        ));

        output.push_str("## Detailed Results\n\n");
        output.push_str("| Question | First Answer | Validation | Retried | Final Status |\n");
        output.push_str("|----------|-------------|------------|---------|-------------|\n");
        for record in &run.records {
            output.push_str(&Self::row(record));
        }

        output
    }

    fn row(record: &QuestionRecord) -> String {
        format!(
            "| {} | {} | {} | {} | {} |\n",
            Self::cell(record.question(), QUESTION_WIDTH),
            Self::cell(record.first_answer(), ANSWER_WIDTH),
            record.first_validation().status,
            if record.retried() { "Yes" } else { "No" },
            record.final_status()
        )
    }

    /// Truncate, then keep the cell on one line and out of the column syntax
    fn cell(text: &str, width: usize) -> String {
        truncate_with_ellipsis(text, width)
            .replace('|', "\\|")
            .replace(['\r', '\n'], " ")
    }
}
