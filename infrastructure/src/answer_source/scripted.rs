//! Scripted answer source with per-question attempt memory.

use async_trait::async_trait;
use guard_application::ports::answer_source::{AnswerSource, AnswerSourceError};
use guard_domain::Question;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Mutex;
use thiserror::Error;
use tracing::debug;

/// Answer for questions the script does not cover
pub const DEFAULT_FALLBACK_ANSWER: &str = "I don't know the answer to that question.";

/// Built-in script: a wrong answer first and the right one on retry for the
/// knowledge base questions, a single answer for the edge-case questions.
const BUILTIN_SCRIPT: &[(&str, &[&str])] = &[
    ("What is the capital of France?", &["London", "Paris"]),
    ("What is the largest planet in our solar system?", &["Saturn", "Jupiter"]),
    ("What is the chemical symbol for water?", &["H20", "H2O"]),
    ("Who wrote the novel '1984'?", &["Aldous Huxley", "George Orwell"]),
    (
        "What is the speed of light in vacuum?",
        &["300,000 km/s", "299,792,458 meters per second"],
    ),
    ("What year did World War II end?", &["1944", "1945"]),
    ("What is the smallest unit of matter?", &["Molecule", "Atom"]),
    ("How many continents are there?", &["6", "7"]),
    ("What is the currency of Japan?", &["Yuan", "Yen"]),
    (
        "What is the boiling point of water at sea level?",
        &["212 degrees Fahrenheit", "100 degrees Celsius"],
    ),
    (
        "What is the population of Mars?",
        &["There is no permanent human population on Mars"],
    ),
    (
        "What color is a unicorn?",
        &["Unicorns are mythical creatures and don't exist"],
    ),
    ("How many moons does Earth have?", &["1"]),
    ("What is the capital of Atlantis?", &["Atlantis is a fictional place"]),
    ("What is 2+2?", &["4"]),
];

/// Errors loading a script file
#[derive(Debug, Error)]
pub enum ScriptLoadError {
    #[error("Could not read answer script {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid answer script {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Replays scripted answers.
///
/// Attempt `n` for a question returns the `n`-th scripted answer, or the
/// last one once the script is exhausted. Questions are matched on their
/// exact text. Unknown questions (or an empty answer list) get the fallback
/// answer. Attempt counters belong to the instance.
pub struct ScriptedAnswerSource {
    script: HashMap<String, Vec<String>>,
    fallback: String,
    attempts: Mutex<HashMap<String, usize>>,
}

impl ScriptedAnswerSource {
    pub fn new(script: HashMap<String, Vec<String>>) -> Self {
        Self {
            script,
            fallback: DEFAULT_FALLBACK_ANSWER.to_string(),
            attempts: Mutex::new(HashMap::new()),
        }
    }

    /// The built-in demo script
    pub fn builtin() -> Self {
        let script = BUILTIN_SCRIPT
            .iter()
            .map(|(q, answers)| {
                (
                    q.to_string(),
                    answers.iter().map(|a| a.to_string()).collect(),
                )
            })
            .collect();
        Self::new(script)
    }

    /// Load a script from a JSON object of `question -> [answers]`
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ScriptLoadError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ScriptLoadError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let script: HashMap<String, Vec<String>> =
            serde_json::from_str(&content).map_err(|source| ScriptLoadError::Parse {
                path: path.display().to_string(),
                source,
            })?;
        Ok(Self::new(script))
    }

    pub fn with_fallback(mut self, fallback: impl Into<String>) -> Self {
        self.fallback = fallback.into();
        self
    }

    /// How many times `question` has been answered from the script so far
    pub fn attempts(&self, question: &str) -> usize {
        self.attempts
            .lock()
            .map(|attempts| attempts.get(question).copied().unwrap_or(0))
            .unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.script.len()
    }

    pub fn is_empty(&self) -> bool {
        self.script.is_empty()
    }
}

#[async_trait]
impl AnswerSource for ScriptedAnswerSource {
    async fn ask(&self, question: &Question) -> Result<String, AnswerSourceError> {
        let Some(answers) = self.script.get(question.content()) else {
            debug!("No scripted answer for '{}', using fallback", question);
            return Ok(self.fallback.clone());
        };
        let Some(last) = answers.last() else {
            return Ok(self.fallback.clone());
        };

        let mut attempts = self
            .attempts
            .lock()
            .map_err(|e| AnswerSourceError::Other(format!("attempt counter poisoned: {e}")))?;
        let attempt = attempts.entry(question.content().to_string()).or_insert(0);
        let answer = answers.get(*attempt).unwrap_or(last).clone();
        *attempt += 1;

        Ok(answer)
    }

    fn name(&self) -> &str {
        "scripted"
    }
}
