//! Validation issue types.
//!
//! This module provides [`Issue`] for a single localized validation failure and
//! [`Issues`] for the non-empty list a failed run produces.

use std::fmt::{self, Display};

use stillwater::prelude::*;

/// A single validation failure, localized by path.
///
/// The path is the dot-joined sequence of field names leading to the value
/// that failed (e.g. `address.city`), or an empty string for the root value.
///
/// # Example
///
/// ```rust
/// use assay::Issue;
///
/// let issue = Issue::new("address.city", "The value is required.");
///
/// assert_eq!(issue.path, "address.city");
/// assert_eq!(issue.to_string(), "address.city: The value is required.");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Issue {
    /// Dot-joined path to the failing value; empty for the root.
    pub path: String,
    /// Human-readable description of the failure.
    pub message: String,
}

impl Issue {
    /// Creates a new issue at the given path.
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Returns true if the issue concerns the root value.
    pub fn is_root(&self) -> bool {
        self.path.is_empty()
    }
}

impl Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_root() {
            write!(f, "(root): {}", self.message)
        } else {
            write!(f, "{}: {}", self.path, self.message)
        }
    }
}

const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<Issue>();
    assert_sync::<Issue>();
};

/// A non-empty, ordered list of validation issues.
///
/// `Issues` wraps a `NonEmptyVec<Issue>` so a failed validation can never
/// carry zero issues. Order is the order in which the issues were recorded,
/// which for object schemas is field-declaration order.
///
/// # Combining Issues
///
/// `Issues` implements `Semigroup`:
///
/// ```rust
/// use assay::{Issue, Issues};
/// use stillwater::prelude::*;
///
/// let name = Issues::single(Issue::new("name", "The value is required."));
/// let email = Issues::single(Issue::new("email", "The value is required."));
///
/// let combined = name.combine(email);
/// assert_eq!(combined.len(), 2);
/// assert_eq!(combined.first().path, "name");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Issues(NonEmptyVec<Issue>);

impl Issues {
    /// Creates an `Issues` containing a single issue.
    pub fn single(issue: Issue) -> Self {
        Self(NonEmptyVec::singleton(issue))
    }

    /// Creates an `Issues` from a `NonEmptyVec` of issues.
    pub fn from_non_empty(issues: NonEmptyVec<Issue>) -> Self {
        Self(issues)
    }

    /// Creates an `Issues` from a vec, or `None` if the vec is empty.
    pub fn from_vec(issues: Vec<Issue>) -> Option<Self> {
        NonEmptyVec::from_vec(issues).map(Self)
    }

    /// Returns the number of issues.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; present for API consistency.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns an iterator over the issues in recording order.
    pub fn iter(&self) -> impl Iterator<Item = &Issue> {
        self.0.iter()
    }

    /// Returns the first recorded issue.
    pub fn first(&self) -> &Issue {
        self.0.head()
    }

    /// Returns all issues recorded at exactly the given path.
    pub fn at_path(&self, path: &str) -> Vec<&Issue> {
        self.0.iter().filter(|i| i.path == path).collect()
    }

    /// Returns the messages of all issues, in order.
    pub fn messages(&self) -> Vec<&str> {
        self.0.iter().map(|i| i.message.as_str()).collect()
    }

    /// Converts this list into a `Vec<Issue>`.
    pub fn into_vec(self) -> Vec<Issue> {
        self.0.into_vec()
    }
}

impl Semigroup for Issues {
    fn combine(self, other: Self) -> Self {
        Issues(self.0.combine(other.0))
    }
}

impl Display for Issues {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Validation failed with {} issue(s):", self.len())?;
        for (i, issue) in self.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, issue)?;
        }
        Ok(())
    }
}

impl std::error::Error for Issues {}

impl IntoIterator for Issues {
    type Item = Issue;
    type IntoIter = std::vec::IntoIter<Issue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_vec().into_iter()
    }
}

impl<'a> IntoIterator for &'a Issues {
    type Item = &'a Issue;
    type IntoIter = Box<dyn Iterator<Item = &'a Issue> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.0.iter())
    }
}

const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<Issues>();
    assert_sync::<Issues>();
};
