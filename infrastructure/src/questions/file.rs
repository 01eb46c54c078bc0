//! Question list loading.
//!
//! Two formats are accepted:
//! - `.json`: an array of strings
//! - anything else: one question per line; blank lines and `#` comments are skipped

use guard_domain::Question;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// Errors loading a question list file
#[derive(Debug, Error)]
pub enum QuestionListError {
    #[error("Could not read question list {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid question list {path}: {reason}")]
    Parse { path: String, reason: String },
}

/// Load questions from `path`, keeping file order
pub fn load_question_list(path: impl AsRef<Path>) -> Result<Vec<Question>, QuestionListError> {
    let path = path.as_ref();
    let origin = path.display().to_string();
    let content = std::fs::read_to_string(path).map_err(|source| QuestionListError::Io {
        path: origin.clone(),
        source,
    })?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let questions = if is_json {
        parse_json(&content, &origin)?
    } else {
        parse_lines(&content)
    };

    debug!("Loaded {} questions from {}", questions.len(), origin);
    Ok(questions)
}

fn parse_json(content: &str, origin: &str) -> Result<Vec<Question>, QuestionListError> {
    let texts: Vec<String> =
        serde_json::from_str(content).map_err(|e| QuestionListError::Parse {
            path: origin.to_string(),
            reason: e.to_string(),
        })?;

    texts
        .into_iter()
        .enumerate()
        .map(|(i, text)| {
            Question::try_new(text).map_err(|e| QuestionListError::Parse {
                path: origin.to_string(),
                reason: format!("entry {}: {}", i, e),
            })
        })
        .collect()
}

fn parse_lines(content: &str) -> Vec<Question> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| Question::try_new(line).ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_text_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("questions.txt");
        fs::write(
            &path,
            "# edge cases\nWhat is 2+2?\n\n  What color is a unicorn?  \n",
        )
        .unwrap();

        let questions = load_question_list(&path).unwrap();
        let texts: Vec<_> = questions.iter().map(|q| q.content()).collect();
        assert_eq!(texts, vec!["What is 2+2?", "What color is a unicorn?"]);
    }

    #[test]
    fn test_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("questions.json");
        fs::write(&path, r#"["What is 2+2?", "How many moons does Earth have?"]"#).unwrap();

        let questions = load_question_list(&path).unwrap();
        assert_eq!(questions.len(), 2);
        assert_eq!(questions[1].content(), "How many moons does Earth have?");
    }

    #[test]
    fn test_json_blank_entry_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("questions.json");
        fs::write(&path, r#"["What is 2+2?", "  "]"#).unwrap();

        let err = load_question_list(&path).unwrap_err();
        assert!(matches!(err, QuestionListError::Parse { .. }));
        assert!(err.to_string().contains("entry 1"));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_question_list(dir.path().join("none.txt")).unwrap_err();
        assert!(matches!(err, QuestionListError::Io { .. }));
    }
}
