//! Schema definitions for validation.
//!
//! Every schema type implements [`SchemaLike`]: it narrows a raw JSON value
//! into its output type and inherits the shared parsing engine, which handles
//! required/optional/default input, runs checks and refinements, and collects
//! every issue instead of stopping at the first.
//!
//! # Example
//!
//! ```rust
//! use assay::{Schema, SchemaLike};
//! use serde_json::json;
//!
//! let schema = Schema::string().min(1).max(100);
//!
//! let result = schema.parse_safe(&json!("hello"));
//! assert!(result.is_success());
//! ```

mod base;
mod object;
mod string;
mod traits;

use serde_json::Value;

pub use base::{DefaultValue, SchemaCore, REFINE_MESSAGE, REQUIRED_MESSAGE};
pub use object::{FieldMap, ObjectSchema};
pub use string::StringSchema;
pub use traits::{SchemaLike, ValueSchema};

/// Entry point for creating validation schemas.
///
/// # Example
///
/// ```rust
/// use assay::{FieldMap, Schema, SchemaLike};
/// use serde_json::json;
///
/// let user = Schema::object(
///     FieldMap::new()
///         .field("name", Schema::string().min(1))
///         .field("email", Schema::string().email())
///         .field("role", Schema::string().optional().default("member".to_string())),
/// );
///
/// let parsed = user
///     .parse(&json!({"name": "Alice", "email": "alice@example.com"}))
///     .unwrap()
///     .unwrap();
/// assert_eq!(parsed["role"], "member");
/// ```
pub struct Schema;

impl Schema {
    /// Creates a new string schema.
    ///
    /// # Example
    ///
    /// ```rust
    /// use assay::{Schema, SchemaLike};
    /// use serde_json::json;
    ///
    /// let schema = Schema::string().min(5);
    ///
    /// assert!(schema.parse_safe(&json!("hello")).is_success());
    /// assert!(schema.parse_safe(&json!("hi")).is_failure());
    /// ```
    pub fn string() -> StringSchema {
        StringSchema::new()
    }

    /// Creates a new object schema over the given fields.
    ///
    /// Accepts a [`FieldMap`] or another [`ObjectSchema`] (whose fields are
    /// taken).
    pub fn object(fields: impl Into<FieldMap>) -> ObjectSchema {
        ObjectSchema::new(fields)
    }
}

/// Returns the type name used in narrowing messages.
pub(crate) fn value_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_i64() || n.is_u64() => "integer",
        Value::Number(_) => "float",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
