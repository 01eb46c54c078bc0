//! Atomic report writer

use guard_domain::QuestionRecord;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

/// Errors writing report files
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Could not write {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not serialize results: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Writes the results and summary documents of a run
#[derive(Debug, Clone)]
pub struct ReportWriter {
    results_path: PathBuf,
    summary_path: PathBuf,
}

impl ReportWriter {
    pub fn new(results_path: impl Into<PathBuf>, summary_path: impl Into<PathBuf>) -> Self {
        Self {
            results_path: results_path.into(),
            summary_path: summary_path.into(),
        }
    }

    pub fn results_path(&self) -> &Path {
        &self.results_path
    }

    pub fn summary_path(&self) -> &Path {
        &self.summary_path
    }

    /// Write the records as a pretty-printed JSON array
    pub fn write_results(&self, records: &[QuestionRecord]) -> Result<(), ReportError> {
        let mut json = serde_json::to_vec_pretty(records)?;
        json.push(b'\n');
        write_atomic(&self.results_path, &json)?;
        info!("Results saved to {}", self.results_path.display());
        Ok(())
    }

    /// Write the rendered summary report
    pub fn write_summary(&self, report: &str) -> Result<(), ReportError> {
        write_atomic(&self.summary_path, report.as_bytes())?;
        info!("Summary generated and saved to {}", self.summary_path.display());
        Ok(())
    }
}

/// Write `contents` to a sibling temp file, then rename it over `path`.
fn write_atomic(path: &Path, contents: &[u8]) -> Result<(), ReportError> {
    let io_err = |source| ReportError::Io {
        path: path.display().to_string(),
        source,
    };

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(io_err)?;
    }

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "report".to_string());
    let tmp_path = path.with_file_name(format!(".{}.tmp", file_name));

    let result = (|| {
        let mut file = fs::File::create(&tmp_path)?;
        file.write_all(contents)?;
        file.sync_all()?;
        fs::rename(&tmp_path, path)
    })();

    if result.is_err() {
        let _ = fs::remove_file(&tmp_path);
    }
    result.map_err(io_err)
}
