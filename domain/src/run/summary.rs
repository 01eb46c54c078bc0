//! Run summary aggregation

use crate::run::record::QuestionRecord;
use serde::{Deserialize, Serialize};

/// Aggregate counts over all records of a run.
///
/// Always derived from the full record list via [`RunSummary::from_records`];
/// never updated incrementally. In-domain / out-of-domain split uses the
/// first-attempt classification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    pub total: usize,
    pub in_domain: usize,
    pub out_of_domain: usize,
    pub first_attempt_correct: usize,
    pub retried: usize,
    pub final_correct: usize,
    pub final_incorrect: usize,
}

impl RunSummary {
    pub fn from_records(records: &[QuestionRecord]) -> Self {
        let total = records.len();
        let in_domain = records.iter().filter(|r| r.is_in_domain()).count();
        let first_attempt_correct = records
            .iter()
            .filter(|r| r.first_validation().status.is_valid())
            .count();
        let retried = records.iter().filter(|r| r.retried()).count();
        let final_correct = records
            .iter()
            .filter(|r| r.final_status().is_valid())
            .count();

        Self {
            total,
            in_domain,
            out_of_domain: total - in_domain,
            first_attempt_correct,
            retried,
            final_correct,
            final_incorrect: total - final_correct,
        }
    }

    /// `count` as a percentage of the total; 0.0 for an empty run
    pub fn percentage(&self, count: usize) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            count as f64 / self.total as f64 * 100.0
        }
    }

    /// `count/total (pp.p%)`, e.g. `6/10 (60.0%)`
    pub fn ratio(&self, count: usize) -> String {
        format!("{}/{} ({:.1}%)", count, self.total, self.percentage(count))
    }
}
