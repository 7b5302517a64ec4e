//! Error types for validation failures.
//!
//! Issues describe what was wrong with the data; [`InvalidSchema`] carries
//! them out of the strict `parse` entry point.

mod invalid;
mod issue;

pub use invalid::InvalidSchema;
pub use issue::{Issue, Issues};
