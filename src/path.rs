//! Path representation for locating values in nested structures.
//!
//! [`Path`] is a stack of field-name segments. Object schemas push a segment
//! before delegating to a field schema and pop it afterwards, so the path
//! always names the value currently being validated.

use std::fmt::{self, Display};

/// A stack of field-name segments, rendered dot-joined.
///
/// # Example
///
/// ```rust
/// use assay::Path;
///
/// let mut path = Path::root();
/// path.push("address");
/// path.push("city");
/// assert_eq!(path.to_string(), "address.city");
///
/// assert_eq!(path.pop().as_deref(), Some("city"));
/// assert_eq!(path.to_string(), "address");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Path {
    segments: Vec<String>,
}

impl Path {
    /// Creates an empty path representing the root value.
    pub fn root() -> Self {
        Self::default()
    }

    /// Appends a segment.
    pub fn push(&mut self, segment: impl Into<String>) {
        self.segments.push(segment.into());
    }

    /// Removes and returns the most recently pushed segment, or `None` at the root.
    pub fn pop(&mut self) -> Option<String> {
        self.segments.pop()
    }
}

impl Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                write!(f, ".")?;
            }
            write!(f, "{}", segment)?;
        }
        Ok(())
    }
}
