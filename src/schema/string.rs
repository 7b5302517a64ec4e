//! String schema validation.
//!
//! This module provides [`StringSchema`] for validating string values with
//! length bounds and email format checks.

use email_address::EmailAddress;
use serde_json::Value;

use crate::context::ParseContext;

use super::base::SchemaCore;
use super::traits::SchemaLike;
use super::value_type_name;

/// A schema for validating string values.
///
/// Non-string input is reported as a type mismatch and the constraints are
/// skipped. Otherwise every constraint runs and each failure is reported.
///
/// # Example
///
/// ```rust
/// use assay::{Schema, SchemaLike};
/// use serde_json::json;
///
/// let schema = Schema::string().min(3).max(20);
///
/// assert!(schema.parse_safe(&json!("alice")).is_success());
/// assert!(schema.parse_safe(&json!("al")).is_failure());
/// assert!(schema.parse_safe(&json!(42)).is_failure());
/// ```
#[derive(Clone)]
pub struct StringSchema {
    core: SchemaCore<String>,
}

impl StringSchema {
    /// Creates a new required string schema with no constraints.
    pub fn new() -> Self {
        Self {
            core: SchemaCore::new(),
        }
    }

    /// Requires at least `min` characters (Unicode scalar values).
    ///
    /// Length is a character count, not a byte length: `"日本"` has two
    /// characters but six UTF-8 bytes.
    ///
    /// # Example
    ///
    /// ```rust
    /// use assay::{Schema, SchemaLike};
    /// use serde_json::json;
    ///
    /// let result = Schema::string().min(10).parse_safe(&json!("John Doe"));
    /// let issues = result.into_result().unwrap_err();
    ///
    /// assert_eq!(issues.first().message, "Value must contain at least {10} character(s).");
    /// ```
    pub fn min(mut self, min: usize) -> Self {
        self.core.add_check(move |value: &String| {
            if value.chars().count() < min {
                Err(format!("Value must contain at least {{{}}} character(s).", min))
            } else {
                Ok(())
            }
        });
        self
    }

    /// Allows at most `max` characters (Unicode scalar values), not bytes.
    pub fn max(mut self, max: usize) -> Self {
        self.core.add_check(move |value: &String| {
            if value.chars().count() > max {
                Err(format!("Value must contain at most {{{}}} character(s).", max))
            } else {
                Ok(())
            }
        });
        self
    }

    /// Requires a valid email address.
    ///
    /// Addresses are checked against RFC 5322 by [`EmailAddress::is_valid`],
    /// so quoted local parts and bracketed domain literals are accepted.
    ///
    /// # Example
    ///
    /// ```rust
    /// use assay::{Schema, SchemaLike};
    /// use serde_json::json;
    ///
    /// let schema = Schema::string().email().error("please enter an email");
    ///
    /// assert!(schema.parse_safe(&json!("user@example.com")).is_success());
    ///
    /// let issues = schema.parse_safe(&json!("not-an-email")).into_result().unwrap_err();
    /// assert_eq!(issues.first().message, "please enter an email");
    /// ```
    pub fn email(mut self) -> Self {
        self.core.add_check(|value: &String| {
            if EmailAddress::is_valid(value) {
                Ok(())
            } else {
                Err("Value must contain a valid email address.".to_string())
            }
        });
        self
    }
}

impl Default for StringSchema {
    fn default() -> Self {
        Self::new()
    }
}

impl SchemaLike for StringSchema {
    type Output = String;

    fn core(&self) -> &SchemaCore<String> {
        &self.core
    }

    fn core_mut(&mut self) -> &mut SchemaCore<String> {
        &mut self.core
    }

    fn parse_data(&self, data: &Value, context: &mut ParseContext) -> Option<String> {
        match data.as_str() {
            Some(s) => Some(s.to_string()),
            None => {
                let message = self.core.type_message_or_else(|| {
                    format!(
                        "Value must be a string, received {{{}}}.",
                        value_type_name(data)
                    )
                });
                context.add_issue(message);
                None
            }
        }
    }

    fn to_value(&self, output: String) -> Value {
        Value::String(output)
    }
}
