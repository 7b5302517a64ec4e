//! # Assay
//!
//! Composable schema validation for already-decoded JSON data. Build a schema
//! describing the expected shape and constraints, then run it against
//! untrusted input to get either the normalized value or the full list of
//! issues, each localized by a dot-joined path such as `address.city`.
//!
//! ## Overview
//!
//! Validation never stops at the first problem: every field of an object is
//! attempted and every constraint on a well-typed value is evaluated, so a
//! single run reports everything that needs fixing. A value that fails basic
//! type narrowing skips its own constraints, since they could not be applied
//! meaningfully, but its siblings are still validated.
//!
//! ## Core Types
//!
//! - [`Schema`]: Entry point for creating schemas (`Schema::string()`, `Schema::object(..)`)
//! - [`SchemaLike`]: The contract every schema implements, with `parse` and `parse_safe`
//! - [`Issue`]: One validation failure (path + message)
//! - [`Issues`]: A non-empty list of issues
//! - [`InvalidSchema`]: The error returned by `parse`
//! - [`ParseContext`]: The per-run accumulator threaded through nested schemas
//!
//! ## Example
//!
//! ```rust
//! use assay::{FieldMap, Schema, SchemaLike};
//! use serde_json::json;
//!
//! let schema = Schema::object(
//!     FieldMap::new()
//!         .field("name", Schema::string().min(1))
//!         .field("address", Schema::object(
//!             FieldMap::new().field("city", Schema::string()),
//!         )),
//! );
//!
//! let result = schema.parse_safe(&json!({"name": "Ada", "address": {"city": "London"}}));
//! assert!(result.is_success());
//!
//! let issues = schema
//!     .parse_safe(&json!({"address": {"city": 123}}))
//!     .into_result()
//!     .unwrap_err();
//! assert_eq!(issues.len(), 2);
//! assert_eq!(issues.first().path, "name");
//! assert_eq!(issues.into_vec()[1].path, "address.city");
//! ```

pub mod context;
pub mod error;
pub mod path;
pub mod schema;

pub use context::ParseContext;
pub use error::{InvalidSchema, Issue, Issues};
pub use path::Path;
pub use schema::{
    DefaultValue, FieldMap, ObjectSchema, Schema, SchemaCore, SchemaLike, StringSchema,
    ValueSchema,
};

/// Outcome of [`SchemaLike::parse_safe`]: the parsed value or a non-empty list of issues.
pub type ValidationResult<T> = stillwater::Validation<T, Issues>;
