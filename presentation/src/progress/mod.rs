//! Progress reporting for validation runs

pub mod reporter;
