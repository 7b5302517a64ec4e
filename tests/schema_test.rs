//! Integration tests for the shared parsing engine: required/optional/default
//! handling, refinements, transforms, and the two entry points.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use assay::{FieldMap, InvalidSchema, Issue, ParseContext, Schema, SchemaCore, SchemaLike};
use serde_json::{json, Value};

/// Passes any non-null value through untouched.
struct AnySchema {
    core: SchemaCore<Value>,
}

impl AnySchema {
    fn new() -> Self {
        Self {
            core: SchemaCore::new(),
        }
    }
}

impl SchemaLike for AnySchema {
    type Output = Value;

    fn core(&self) -> &SchemaCore<Value> {
        &self.core
    }

    fn core_mut(&mut self) -> &mut SchemaCore<Value> {
        &mut self.core
    }

    fn parse_data(&self, data: &Value, _context: &mut ParseContext) -> Option<Value> {
        Some(data.clone())
    }

    fn to_value(&self, output: Value) -> Value {
        output
    }
}

fn issues_of<S: SchemaLike>(schema: &S, value: &Value) -> Vec<Issue> {
    match schema.parse_safe(value).into_result() {
        Ok(_) => Vec::new(),
        Err(issues) => issues.into_vec(),
    }
}

#[test]
fn test_accepts_valid_value() {
    let schema = AnySchema::new();
    let result = schema.parse_safe(&json!("John Doe")).into_result();
    assert_eq!(result.unwrap(), Some(json!("John Doe")));
}

#[test]
fn test_required_null_yields_single_root_issue() {
    let schema = AnySchema::new();
    assert_eq!(
        issues_of(&schema, &Value::Null),
        vec![Issue::new("", "The value is required.")]
    );
}

#[test]
fn test_optional_null_yields_none() {
    let schema = AnySchema::new().optional();
    let result = schema.parse_safe(&Value::Null).into_result();
    assert_eq!(result.unwrap(), None);
}

#[test]
fn test_optional_with_literal_default() {
    let schema = Schema::string().optional().default("John Doe".to_string());
    assert_eq!(
        schema.parse(&Value::Null).unwrap(),
        Some("John Doe".to_string())
    );
}

#[test]
fn test_default_order_does_not_matter() {
    let schema = Schema::string().default("x".to_string()).optional();
    assert_eq!(schema.parse(&Value::Null).unwrap(), Some("x".to_string()));
}

#[test]
fn test_default_ignored_when_required() {
    let schema = Schema::string().default("x".to_string());
    assert!(schema.parse(&Value::Null).is_err());
}

#[test]
fn test_default_not_used_for_present_value() {
    let schema = Schema::string().optional().default("x".to_string());
    assert_eq!(schema.parse(&json!("y")).unwrap(), Some("y".to_string()));
}

#[test]
fn test_default_producer_is_not_memoized() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let schema = Schema::string()
        .optional()
        .default_with(move || format!("call-{}", counter.fetch_add(1, Ordering::SeqCst)));

    assert_eq!(schema.parse(&Value::Null).unwrap(), Some("call-0".to_string()));
    assert_eq!(schema.parse(&Value::Null).unwrap(), Some("call-1".to_string()));
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[test]
fn test_default_skips_checks_and_refinements() {
    let schema = Schema::string()
        .min(100)
        .transform(|s| s.to_uppercase())
        .optional()
        .default("short".to_string());

    assert_eq!(schema.parse(&Value::Null).unwrap(), Some("short".to_string()));
}

#[test]
fn test_refinement_passes() {
    let schema = AnySchema::new().refine(|v| v.is_string());
    assert!(schema.parse_safe(&json!("John Doe")).is_success());
}

#[test]
fn test_refinement_failure_uses_given_message() {
    let schema = AnySchema::new()
        .refine(|v| v.is_null())
        .error("Value must be null");

    assert_eq!(
        issues_of(&schema, &json!("John Doe")),
        vec![Issue::new("", "Value must be null")]
    );
}

#[test]
fn test_refinement_failure_default_message() {
    let schema = AnySchema::new().refine(|_| false);
    assert_eq!(
        issues_of(&schema, &json!(1)),
        vec![Issue::new("", "Invalid value")]
    );
}

#[test]
fn test_transform_replaces_value() {
    let schema = Schema::string().transform(|s| format!("{} Doe", s));
    assert_eq!(
        schema.parse(&json!("John")).unwrap(),
        Some("John Doe".to_string())
    );
}

#[test]
fn test_transforms_apply_in_registration_order() {
    let schema = Schema::string()
        .transform(|s| format!("{}a", s))
        .transform(|s| format!("{}b", s));

    assert_eq!(schema.parse(&json!("")).unwrap(), Some("ab".to_string()));
}

#[test]
fn test_failed_refinement_does_not_stop_later_steps() {
    let seen = Arc::new(AtomicUsize::new(0));
    let tracker = Arc::clone(&seen);

    let schema = Schema::string()
        .refine(|s| s.len() > 10)
        .error("too short")
        .transform(move |s| {
            tracker.fetch_add(1, Ordering::SeqCst);
            s.to_uppercase()
        })
        .refine(|s| s == "JOHN")
        .error("never shown");

    let issues = issues_of(&schema, &json!("john"));

    assert_eq!(seen.load(Ordering::SeqCst), 1);
    assert_eq!(issues, vec![Issue::new("", "too short")]);
}

#[test]
fn test_refinement_sees_unchanged_value_after_failure() {
    let schema = Schema::string()
        .refine(|_| false)
        .refine(|s| s == "original")
        .error("value was altered");

    assert_eq!(
        issues_of(&schema, &json!("original")),
        vec![Issue::new("", "Invalid value")]
    );
}

#[test]
fn test_all_failing_refinements_reported() {
    let schema = Schema::string()
        .refine(|_| false)
        .error("first")
        .refine(|_| false)
        .error("second");

    let messages: Vec<_> = issues_of(&schema, &json!("x"))
        .into_iter()
        .map(|i| i.message)
        .collect();
    assert_eq!(messages, vec!["first", "second"]);
}

#[test]
fn test_failed_check_skips_refinements() {
    let ran = Arc::new(AtomicUsize::new(0));
    let tracker = Arc::clone(&ran);

    let schema = Schema::string().min(10).refine(move |_| {
        tracker.fetch_add(1, Ordering::SeqCst);
        true
    });

    assert_eq!(issues_of(&schema, &json!("short")).len(), 1);
    assert_eq!(ran.load(Ordering::SeqCst), 0);
}

#[test]
fn test_type_failure_skips_checks() {
    let schema = Schema::string().min(10).max(1).email();
    let issues = issues_of(&schema, &json!(4));

    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].message, "Value must be a string, received {integer}.");
}

#[test]
fn test_parse_and_parse_safe_agree() {
    let schema = Schema::object(
        FieldMap::new()
            .field("name", Schema::string().min(2))
            .field("email", Schema::string().email())
            .field("nick", Schema::string().optional()),
    );

    let inputs = [
        json!({"name": "Al", "email": "al@example.com"}),
        json!({"name": "A", "email": "nope"}),
        json!({}),
        json!("scalar"),
        Value::Null,
    ];

    for input in &inputs {
        let safe = schema.parse_safe(input).into_result();
        let strict = schema.parse(input);

        match (safe, strict) {
            (Ok(a), Ok(b)) => assert_eq!(a, b),
            (Err(issues), Err(err)) => assert_eq!(&issues, err.issues()),
            (safe, strict) => panic!("entry points disagree: {:?} vs {:?}", safe, strict),
        }
    }
}

#[test]
fn test_parse_error_is_invalid_schema() {
    let err: InvalidSchema = Schema::string().parse(&json!(4)).unwrap_err();
    assert_eq!(err.issues().len(), 1);
    assert!(err.to_string().contains("received {integer}"));
}

#[test]
fn test_schema_reuse_across_runs() {
    let schema = Schema::string().min(3);

    assert!(schema.parse_safe(&json!("ab")).is_failure());
    assert!(schema.parse_safe(&json!("abc")).is_success());
    assert_eq!(issues_of(&schema, &json!("ab")).len(), 1);
}
