//! Object schema validation.
//!
//! This module provides [`ObjectSchema`] for validating keyed structures
//! field by field, and [`FieldMap`], the ordered field-name to schema mapping
//! it is built from.

use std::sync::Arc;

use indexmap::IndexMap;
use serde_json::{Map, Value};

use crate::context::ParseContext;

use super::base::SchemaCore;
use super::traits::{SchemaLike, ValueSchema};
use super::value_type_name;

/// An ordered mapping from field name to field schema.
///
/// Inserting an existing name replaces its schema but keeps the field in its
/// original position.
///
/// # Example
///
/// ```rust
/// use assay::{FieldMap, Schema};
///
/// let fields = FieldMap::new()
///     .field("name", Schema::string())
///     .field("email", Schema::string().email())
///     .field("name", Schema::string().min(1));
///
/// assert_eq!(fields.keys().collect::<Vec<_>>(), vec!["name", "email"]);
/// ```
#[derive(Clone, Default)]
pub struct FieldMap {
    fields: IndexMap<String, Arc<dyn ValueSchema>>,
}

impl FieldMap {
    /// Creates an empty field map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a field and returns the map.
    pub fn field<S>(mut self, name: impl Into<String>, schema: S) -> Self
    where
        S: ValueSchema + 'static,
    {
        self.insert(name, schema);
        self
    }

    /// Adds or replaces a field.
    pub fn insert<S>(&mut self, name: impl Into<String>, schema: S)
    where
        S: ValueSchema + 'static,
    {
        self.fields.insert(name.into(), Arc::new(schema));
    }

    /// Merges `other` into this map; its entries win on conflicting names.
    pub fn merge(&mut self, other: FieldMap) {
        for (name, schema) in other.fields {
            self.fields.insert(name, schema);
        }
    }

    /// Returns the number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if there are no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Returns true if a field with this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Returns the field names in order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    fn iter(&self) -> impl Iterator<Item = (&String, &Arc<dyn ValueSchema>)> {
        self.fields.iter()
    }
}

/// A schema for validating objects field by field.
///
/// Accepts JSON objects, and arrays indexed by numeric field names. Every
/// field is validated even after earlier ones fail, and each issue is
/// reported under the field's path (e.g. `address.city`). The output holds
/// exactly the declared fields, in declaration order; a field that failed or
/// resolved to nothing is `null`.
///
/// # Example
///
/// ```rust
/// use assay::{FieldMap, Schema, SchemaLike};
/// use serde_json::json;
///
/// let schema = Schema::object(
///     FieldMap::new()
///         .field("name", Schema::string())
///         .field("email", Schema::string()),
/// );
///
/// let issues = schema.parse_safe(&json!({})).into_result().unwrap_err();
/// let paths: Vec<_> = issues.iter().map(|i| i.path.as_str()).collect();
/// assert_eq!(paths, vec!["name", "email"]);
/// ```
#[derive(Clone)]
pub struct ObjectSchema {
    core: SchemaCore<Map<String, Value>>,
    fields: FieldMap,
}

impl ObjectSchema {
    /// Creates a required object schema over the given fields.
    pub fn new(fields: impl Into<FieldMap>) -> Self {
        Self {
            core: SchemaCore::new(),
            fields: fields.into(),
        }
    }

    /// Adds or replaces a single field.
    pub fn field<S>(mut self, name: impl Into<String>, schema: S) -> Self
    where
        S: ValueSchema + 'static,
    {
        self.fields.insert(name, schema);
        self
    }

    /// Merges the fields of another object schema or field map into this one.
    ///
    /// Later entries win on conflicting names while keeping the original
    /// position. Only fields are merged; the other schema's own settings
    /// (optional, default, refinements) are not.
    ///
    /// # Example
    ///
    /// ```rust
    /// use assay::{FieldMap, Schema, SchemaLike};
    /// use serde_json::json;
    ///
    /// let base = Schema::object(FieldMap::new().field("name", Schema::string()));
    /// let schema = base.extend(Schema::object(
    ///     FieldMap::new().field("email", Schema::string().email()),
    /// ));
    ///
    /// let parsed = schema
    ///     .parse(&json!({"name": "John Doe", "email": "john@doe.com"}))
    ///     .unwrap()
    ///     .unwrap();
    /// assert_eq!(parsed["email"], "john@doe.com");
    /// ```
    pub fn extend(mut self, other: impl Into<FieldMap>) -> Self {
        self.fields.merge(other.into());
        self
    }

    /// Returns the field map.
    pub fn fields(&self) -> &FieldMap {
        &self.fields
    }

    fn parse_fields<'a>(
        &self,
        lookup: impl Fn(&str) -> Option<&'a Value>,
        context: &mut ParseContext,
    ) -> Map<String, Value> {
        let mut output = Map::new();
        for (name, schema) in self.fields.iter() {
            context.push_path(name.as_str());
            let value = schema.parse_value(lookup(name.as_str()), context);
            output.insert(name.clone(), value.unwrap_or(Value::Null));
            context.pop_path();
        }
        output
    }
}

impl From<ObjectSchema> for FieldMap {
    fn from(schema: ObjectSchema) -> Self {
        schema.fields
    }
}

impl SchemaLike for ObjectSchema {
    type Output = Map<String, Value>;

    fn core(&self) -> &SchemaCore<Map<String, Value>> {
        &self.core
    }

    fn core_mut(&mut self) -> &mut SchemaCore<Map<String, Value>> {
        &mut self.core
    }

    fn parse_data(&self, data: &Value, context: &mut ParseContext) -> Option<Map<String, Value>> {
        match data {
            Value::Object(map) => Some(self.parse_fields(|name| map.get(name), context)),
            Value::Array(items) => Some(self.parse_fields(
                |name| array_index(name).and_then(|i| items.get(i)),
                context,
            )),
            other => {
                let message = self.core.type_message_or_else(|| {
                    format!(
                        "Value must be an object or an array, received {{{}}}.",
                        value_type_name(other)
                    )
                });
                context.add_issue(message);
                None
            }
        }
    }

    fn to_value(&self, output: Map<String, Value>) -> Value {
        Value::Object(output)
    }
}

/// Parses a field name as an array position. Only the canonical decimal
/// form counts, so `"+0"` and `"00"` name no element.
fn array_index(name: &str) -> Option<usize> {
    name.parse::<usize>()
        .ok()
        .filter(|i| i.to_string() == name)
}
