//! Report files.
//!
//! Results and summary documents are written atomically: the content goes to
//! a temporary file next to the target, which is then renamed into place.
//! A failed write never leaves a partial document behind.

mod writer;

pub use writer::{ReportError, ReportWriter};
