//! The error returned by the strict parsing entry point.

use super::issue::Issues;

/// Returned by [`SchemaLike::parse`](crate::SchemaLike::parse) when the input
/// does not satisfy the schema.
///
/// Carries every issue recorded during the run, in the same order that
/// [`SchemaLike::parse_safe`](crate::SchemaLike::parse_safe) reports them.
///
/// # Example
///
/// ```rust
/// use assay::{Schema, SchemaLike};
/// use serde_json::json;
///
/// let err = Schema::string().min(3).parse(&json!("ab")).unwrap_err();
///
/// assert_eq!(err.issues().len(), 1);
/// assert_eq!(
///     err.issues().first().message,
///     "Value must contain at least {3} character(s)."
/// );
/// ```
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("The data provided for this schema is invalid. {issues}")]
pub struct InvalidSchema {
    issues: Issues,
}

impl InvalidSchema {
    /// Wraps a non-empty issue list.
    pub fn new(issues: Issues) -> Self {
        Self { issues }
    }

    /// Returns the issues that made the data invalid.
    pub fn issues(&self) -> &Issues {
        &self.issues
    }

    /// Consumes the error and returns its issues.
    pub fn into_issues(self) -> Issues {
        self.issues
    }
}

impl From<Issues> for InvalidSchema {
    fn from(issues: Issues) -> Self {
        Self::new(issues)
    }
}
