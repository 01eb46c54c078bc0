//! JSON knowledge base loader.
//!
//! Expected document shape:
//!
//! ```json
//! {
//!   "knowledge_base": [
//!     { "question": "What is the capital of France?", "answer": "Paris" }
//!   ]
//! }
//! ```

use guard_application::ports::knowledge_loader::{KnowledgeBaseLoader, LoadError};
use guard_domain::{DuplicatePolicy, KnowledgeBase, KnowledgeBaseEntry};
use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

/// On-disk knowledge base document
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KnowledgeBaseDocument {
    pub knowledge_base: Vec<KnowledgeBaseEntry>,
}

/// Loads the knowledge base from a JSON file
#[derive(Debug, Clone)]
pub struct JsonKnowledgeBaseLoader {
    path: PathBuf,
}

impl JsonKnowledgeBaseLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parse a document from a string (`origin` is only used in errors)
    pub fn parse(
        content: &str,
        origin: &str,
        duplicates: DuplicatePolicy,
    ) -> Result<KnowledgeBase, LoadError> {
        let document: KnowledgeBaseDocument =
            serde_json::from_str(content).map_err(|e| LoadError::Parse {
                path: origin.to_string(),
                reason: e.to_string(),
            })?;

        debug!(
            "Parsed {} knowledge base entries from {}",
            document.knowledge_base.len(),
            origin
        );
        Ok(KnowledgeBase::from_entries(document.knowledge_base, duplicates)?)
    }
}

impl KnowledgeBaseLoader for JsonKnowledgeBaseLoader {
    fn source(&self) -> String {
        self.path.display().to_string()
    }

    fn load(&self, duplicates: DuplicatePolicy) -> Result<KnowledgeBase, LoadError> {
        let origin = self.source();
        let content = std::fs::read_to_string(&self.path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => LoadError::NotFound {
                path: origin.clone(),
            },
            _ => LoadError::Io {
                path: origin.clone(),
                reason: e.to_string(),
            },
        })?;

        Self::parse(&content, &origin, duplicates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const SAMPLE: &str = r#"{
  "knowledge_base": [
    { "question": "What is the capital of France?", "answer": "Paris" },
    { "question": "What is the chemical symbol for water?", "answer": " H2O " }
  ]
}"#;

    #[test]
    fn test_load_valid_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("kb.json");
        fs::write(&path, SAMPLE).unwrap();

        let kb = JsonKnowledgeBaseLoader::new(&path)
            .load(DuplicatePolicy::default())
            .unwrap();
        assert_eq!(kb.len(), 2);
        assert_eq!(kb.lookup("what is the capital of france?"), Some("Paris"));
        assert_eq!(kb.lookup("What is the chemical symbol for water?"), Some("H2O"));
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = JsonKnowledgeBaseLoader::new(dir.path().join("missing.json"))
            .load(DuplicatePolicy::default())
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_invalid_json_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("kb.json");
        fs::write(&path, "{ \"knowledge_base\": [ ").unwrap();

        let err = JsonKnowledgeBaseLoader::new(&path)
            .load(DuplicatePolicy::default())
            .unwrap_err();
        assert!(err.is_parse_error());
    }

    #[test]
    fn test_wrong_shape_is_parse_error() {
        let err = JsonKnowledgeBaseLoader::parse(
            r#"[{"question": "q", "answer": "a"}]"#,
            "inline",
            DuplicatePolicy::default(),
        )
        .unwrap_err();
        assert!(err.is_parse_error());

        let err = JsonKnowledgeBaseLoader::parse(
            r#"{"knowledge_base": [{"question": "q"}]}"#,
            "inline",
            DuplicatePolicy::default(),
        )
        .unwrap_err();
        assert!(err.is_parse_error());
    }

    #[test]
    fn test_duplicates_follow_policy() {
        let doc = r#"{"knowledge_base": [
            {"question": "How many continents are there?", "answer": "6"},
            {"question": "how many continents are there?", "answer": "7"}
        ]}"#;

        let kb = JsonKnowledgeBaseLoader::parse(doc, "inline", DuplicatePolicy::LastWriteWins)
            .unwrap();
        assert_eq!(kb.lookup("How many continents are there?"), Some("7"));

        let err =
            JsonKnowledgeBaseLoader::parse(doc, "inline", DuplicatePolicy::Reject).unwrap_err();
        assert!(matches!(err, LoadError::Rejected(_)));
    }

    #[test]
    fn test_directory_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = JsonKnowledgeBaseLoader::new(dir.path())
            .load(DuplicatePolicy::default())
            .unwrap_err();
        assert!(!err.is_not_found());
        assert!(!err.is_parse_error());
    }
}
