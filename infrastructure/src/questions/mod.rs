//! Question list files.

mod file;

pub use file::{QuestionListError, load_question_list};
