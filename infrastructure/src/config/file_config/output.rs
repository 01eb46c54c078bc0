//! Output configuration from TOML (`[output]` section)

use guard_domain::OutputFormat;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw output configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// JSON results document
    pub results_path: String,
    /// Markdown summary report
    pub summary_path: String,
    /// Log file; empty disables file logging
    pub log_file: String,
    /// Console output format (uses domain type)
    pub format: Option<OutputFormat>,
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            results_path: "validation_results.json".to_string(),
            summary_path: "summary.md".to_string(),
            log_file: "run.log".to_string(),
            format: None,
            color: true,
        }
    }
}

impl FileOutputConfig {
    /// Log file path, or `None` when file logging is disabled
    pub fn log_path(&self) -> Option<PathBuf> {
        let trimmed = self.log_file.trim();
        (!trimmed.is_empty()).then(|| PathBuf::from(trimmed))
    }
}
