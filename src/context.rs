//! Per-run parse context.
//!
//! A [`ParseContext`] carries the current path and every issue recorded during
//! one top-level `parse`/`parse_safe` call. It is threaded by `&mut` through
//! every nested `parse_with_context` call so nested issues land in a single
//! list, already localized.

use crate::error::{Issue, Issues};
use crate::path::Path;

/// Mutable accumulator for a single validation run.
///
/// Issues are append-only: nothing is ever removed once recorded. The path
/// follows stack discipline; `pop_path` always undoes the latest `push_path`.
///
/// # Example
///
/// ```rust
/// use assay::ParseContext;
///
/// let mut context = ParseContext::new();
/// context.push_path("address");
/// context.push_path("city");
/// context.add_issue("The value is required.");
/// context.pop_path();
/// context.pop_path();
///
/// assert!(context.has_issues());
/// assert_eq!(context.issues()[0].path, "address.city");
/// ```
#[derive(Debug, Default)]
pub struct ParseContext {
    path: Path,
    issues: Vec<Issue>,
}

impl ParseContext {
    /// Creates an empty context positioned at the root.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a segment to the current path.
    pub fn push_path(&mut self, segment: impl Into<String>) {
        self.path.push(segment);
    }

    /// Removes and returns the latest path segment, or `None` at the root.
    pub fn pop_path(&mut self) -> Option<String> {
        self.path.pop()
    }

    /// Returns the current path, dot-joined.
    pub fn current_path(&self) -> String {
        self.path.to_string()
    }

    /// Records an issue at the path as it stands right now.
    pub fn add_issue(&mut self, message: impl Into<String>) {
        let issue = Issue::new(self.current_path(), message);
        self.issues.push(issue);
    }

    /// Returns true if any issue has been recorded.
    pub fn has_issues(&self) -> bool {
        !self.issues.is_empty()
    }

    /// Returns the number of issues recorded so far.
    pub fn issue_count(&self) -> usize {
        self.issues.len()
    }

    /// Returns the issues recorded so far, in order.
    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    /// Ends the run, returning the issues or `None` if there were none.
    pub fn into_issues(self) -> Option<Issues> {
        Issues::from_vec(self.issues)
    }
}
