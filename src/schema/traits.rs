//! Traits for schema polymorphism.
//!
//! [`SchemaLike`] is the contract every schema type implements. A type only
//! supplies its narrowing step (`parse_data`) and access to its
//! [`SchemaCore`]; the required/default handling, checks, refinements and
//! both entry points are shared. [`ValueSchema`] is the type-erased view used
//! to store heterogeneous field schemas inside an object schema.

use std::sync::Arc;

use serde_json::Value;
use stillwater::Validation;
use tracing::{debug, trace};

use crate::context::ParseContext;
use crate::error::InvalidSchema;
use crate::ValidationResult;

use super::base::{DefaultValue, SchemaCore, REFINE_MESSAGE};

/// A schema that narrows raw JSON values into `Self::Output`.
///
/// # Implementing a new schema type
///
/// ```rust
/// use assay::{ParseContext, SchemaCore, SchemaLike};
/// use serde_json::Value;
///
/// struct BoolSchema {
///     core: SchemaCore<bool>,
/// }
///
/// impl SchemaLike for BoolSchema {
///     type Output = bool;
///
///     fn core(&self) -> &SchemaCore<bool> {
///         &self.core
///     }
///
///     fn core_mut(&mut self) -> &mut SchemaCore<bool> {
///         &mut self.core
///     }
///
///     fn parse_data(&self, data: &Value, context: &mut ParseContext) -> Option<bool> {
///         match data.as_bool() {
///             Some(b) => Some(b),
///             None => {
///                 context.add_issue("Value must be a boolean.");
///                 None
///             }
///         }
///     }
///
///     fn to_value(&self, output: bool) -> Value {
///         Value::Bool(output)
///     }
/// }
///
/// let schema = BoolSchema { core: SchemaCore::new() }.optional().default(true);
/// assert_eq!(schema.parse(&Value::Null).unwrap(), Some(true));
/// ```
pub trait SchemaLike: Send + Sync {
    /// The narrowed type produced by this schema.
    type Output: Clone + Send + Sync + 'static;

    /// Returns the shared configuration.
    fn core(&self) -> &SchemaCore<Self::Output>;

    /// Returns the shared configuration for the builder methods.
    fn core_mut(&mut self) -> &mut SchemaCore<Self::Output>;

    /// Narrows a non-null raw value.
    ///
    /// On a type mismatch, records an issue in `context` and returns `None`;
    /// it must never panic on bad data. Composite schemas may return a value
    /// and still record issues for their children.
    fn parse_data(&self, data: &Value, context: &mut ParseContext) -> Option<Self::Output>;

    /// Converts a narrowed value back into JSON for embedding in a parent.
    fn to_value(&self, output: Self::Output) -> Value;

    /// Accepts null or absent input instead of reporting it as required.
    fn optional(mut self) -> Self
    where
        Self: Sized,
    {
        self.core_mut().set_optional();
        self
    }

    /// Sets the value produced for null or absent input on an optional schema.
    fn default(mut self, value: Self::Output) -> Self
    where
        Self: Sized,
    {
        self.core_mut().set_default(DefaultValue::Literal(value));
        self
    }

    /// Sets a function producing the value for null or absent input on an
    /// optional schema. It is called on every such input.
    fn default_with<F>(mut self, producer: F) -> Self
    where
        Self: Sized,
        F: Fn() -> Self::Output + Send + Sync + 'static,
    {
        self.core_mut()
            .set_default(DefaultValue::Producer(Arc::new(producer)));
        self
    }

    /// Adds a predicate that records an issue when it returns false.
    ///
    /// The value passes through unchanged either way, so later refinements
    /// and transforms still run. The message defaults to `"Invalid value"`;
    /// follow with [`error`](Self::error) to customize it.
    fn refine<F>(mut self, predicate: F) -> Self
    where
        Self: Sized,
        F: Fn(&Self::Output) -> bool + Send + Sync + 'static,
    {
        self.core_mut().add_predicate(predicate, REFINE_MESSAGE);
        self
    }

    /// Adds a function that replaces the value.
    fn transform<F>(mut self, transform: F) -> Self
    where
        Self: Sized,
        F: Fn(Self::Output) -> Self::Output + Send + Sync + 'static,
    {
        self.core_mut().add_transform(transform);
        self
    }

    /// Sets the message of the most recent constraint or refinement.
    ///
    /// Before any constraint is added, sets the message used when the value
    /// has the wrong type. Directly after [`transform`](Self::transform) it has
    /// no effect, since a transform cannot fail.
    fn error(mut self, message: impl Into<String>) -> Self
    where
        Self: Sized,
    {
        self.core_mut().set_message(message);
        self
    }

    /// Validates `data`, returning the parsed value or every issue found.
    ///
    /// `Ok(None)` means the input was null and the schema is optional with
    /// no default.
    fn parse(&self, data: &Value) -> Result<Option<Self::Output>, InvalidSchema> {
        self.parse_safe(data).into_result().map_err(InvalidSchema::new)
    }

    /// Validates `data` without failing: the result is either the parsed
    /// value or the complete, non-empty list of issues.
    fn parse_safe(&self, data: &Value) -> ValidationResult<Option<Self::Output>> {
        let mut context = ParseContext::new();
        let value = self.parse_with_context(Some(data), &mut context);

        match context.into_issues() {
            Some(issues) => {
                debug!(issues = issues.len(), "validation failed");
                Validation::Failure(issues)
            }
            None => {
                debug!("validation succeeded");
                Validation::Success(value)
            }
        }
    }

    /// Validates `data` into an existing context.
    ///
    /// Composite schemas call this on their children so every issue lands in
    /// the one context of the top-level run, under the current path. Checks
    /// and refinements run only if this call's own narrowing recorded no
    /// issues; sibling schemas are unaffected.
    fn parse_with_context(
        &self,
        data: Option<&Value>,
        context: &mut ParseContext,
    ) -> Option<Self::Output> {
        let core = self.core();
        let data = match data {
            None | Some(Value::Null) => return core.resolve_absent(context),
            Some(data) => data,
        };

        let before = context.issue_count();
        let parsed = self.parse_data(data, context)?;

        if context.issue_count() > before {
            trace!(path = %context.current_path(), "narrowing reported issues, skipping checks");
            return Some(parsed);
        }

        core.run_checks(&parsed, context);
        if context.issue_count() > before {
            return Some(parsed);
        }

        Some(core.run_refinements(parsed, context))
    }
}

/// A type-erased schema producing JSON values.
///
/// Every [`SchemaLike`] is a `ValueSchema`, which lets object schemas hold
/// fields of different schema types.
///
/// # Example
///
/// ```rust
/// use assay::{Schema, SchemaLike, ValueSchema};
/// use std::sync::Arc;
///
/// let fields: Vec<Arc<dyn ValueSchema>> = vec![
///     Arc::new(Schema::string().min(1)),
///     Arc::new(Schema::string().email().optional()),
/// ];
/// assert_eq!(fields.len(), 2);
/// ```
pub trait ValueSchema: Send + Sync {
    /// Validates `data` into `context`, producing JSON.
    fn parse_value(&self, data: Option<&Value>, context: &mut ParseContext) -> Option<Value>;
}

impl<S: SchemaLike> ValueSchema for S {
    fn parse_value(&self, data: Option<&Value>, context: &mut ParseContext) -> Option<Value> {
        self.parse_with_context(data, context)
            .map(|output| self.to_value(output))
    }
}
