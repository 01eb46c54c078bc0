//! Configuration value objects shared across layers.

pub mod output_format;
pub mod policy;

pub use output_format::OutputFormat;
pub use policy::{DuplicatePolicy, LoadFailurePolicy};
