//! Configuration file loading for hallucination-guard
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `GUARD_*` environment variables (`GUARD_OUTPUT__COLOR=false`)
//! 2. `--config <path>` specified file
//! 3. Project root: `./guard.toml` or `./.guard.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/hallucination-guard/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, DEFAULT_EXTRA_QUESTIONS, FileAnswerSourceConfig, FileConfig,
    FileKnowledgeBaseConfig, FileOutputConfig, FileQuestionsConfig,
};
pub use loader::ConfigLoader;
