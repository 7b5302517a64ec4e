//! Configuration shared by every schema type.
//!
//! [`SchemaCore`] holds what the parsing engine needs regardless of the
//! concrete type: the required flag, the default value, registered checks
//! and refinements. Leaf schemas embed one and expose it through
//! [`SchemaLike::core`](super::SchemaLike::core).

use std::fmt;
use std::sync::Arc;

use tracing::warn;

use crate::context::ParseContext;

/// Message recorded when a required value is null or absent.
pub const REQUIRED_MESSAGE: &str = "The value is required.";

/// Message recorded by a failing refinement that was given no message.
pub const REFINE_MESSAGE: &str = "Invalid value";

type CheckFn<T> = Arc<dyn Fn(&T) -> Result<(), String> + Send + Sync>;
type PredicateFn<T> = Arc<dyn Fn(&T) -> bool + Send + Sync>;
type TransformFn<T> = Arc<dyn Fn(T) -> T + Send + Sync>;
type ProducerFn<T> = Arc<dyn Fn() -> T + Send + Sync>;

/// The value produced for an optional schema when the input is absent.
///
/// Producers are invoked on every absent input; their output is never cached.
pub enum DefaultValue<T> {
    /// A fixed value, cloned on each use.
    Literal(T),
    /// A function called on each use.
    Producer(ProducerFn<T>),
}

impl<T: Clone> DefaultValue<T> {
    /// Produces the default value.
    pub fn resolve(&self) -> T {
        match self {
            DefaultValue::Literal(value) => value.clone(),
            DefaultValue::Producer(produce) => produce(),
        }
    }
}

impl<T: Clone> Clone for DefaultValue<T> {
    fn clone(&self) -> Self {
        match self {
            DefaultValue::Literal(value) => DefaultValue::Literal(value.clone()),
            DefaultValue::Producer(produce) => DefaultValue::Producer(Arc::clone(produce)),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for DefaultValue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DefaultValue::Literal(value) => f.debug_tuple("Literal").field(value).finish(),
            DefaultValue::Producer(_) => f.write_str("Producer(..)"),
        }
    }
}

struct Check<T> {
    rule: CheckFn<T>,
    message: Option<String>,
}

impl<T> Clone for Check<T> {
    fn clone(&self) -> Self {
        Self {
            rule: Arc::clone(&self.rule),
            message: self.message.clone(),
        }
    }
}

enum Refinement<T> {
    Predicate {
        predicate: PredicateFn<T>,
        message: String,
    },
    Transform(TransformFn<T>),
}

impl<T> Clone for Refinement<T> {
    fn clone(&self) -> Self {
        match self {
            Refinement::Predicate { predicate, message } => Refinement::Predicate {
                predicate: Arc::clone(predicate),
                message: message.clone(),
            },
            Refinement::Transform(transform) => Refinement::Transform(Arc::clone(transform)),
        }
    }
}

/// The rule a subsequent `error()` call customizes.
#[derive(Clone, Copy)]
enum MessageTarget {
    Check(usize),
    Refinement(usize),
    /// Transforms cannot fail, so they carry no message.
    Transform,
}

/// Type-independent schema configuration.
///
/// Built once through the fluent methods on [`SchemaLike`](super::SchemaLike)
/// and the leaf-specific constraint builders, then only read while parsing.
pub struct SchemaCore<T> {
    required: bool,
    default: Option<DefaultValue<T>>,
    checks: Vec<Check<T>>,
    refinements: Vec<Refinement<T>>,
    type_message: Option<String>,
    message_target: Option<MessageTarget>,
}

impl<T> SchemaCore<T> {
    /// Creates a required schema configuration with no rules.
    pub fn new() -> Self {
        Self {
            required: true,
            default: None,
            checks: Vec::new(),
            refinements: Vec::new(),
            type_message: None,
            message_target: None,
        }
    }

    /// Returns true unless `set_optional` was called.
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// Makes null or absent input acceptable.
    pub fn set_optional(&mut self) {
        self.required = false;
    }

    /// Stores the value produced for absent input on an optional schema.
    pub fn set_default(&mut self, default: DefaultValue<T>) {
        self.default = Some(default);
    }

    /// Returns the stored default, if any.
    pub fn default_value(&self) -> Option<&DefaultValue<T>> {
        self.default.as_ref()
    }

    /// Registers a type-specific check.
    ///
    /// The rule returns `Err(message)` to record one issue at the current
    /// path. Checks run in registration order, only when narrowing succeeded.
    pub fn add_check<F>(&mut self, rule: F)
    where
        F: Fn(&T) -> Result<(), String> + Send + Sync + 'static,
    {
        self.checks.push(Check {
            rule: Arc::new(rule),
            message: None,
        });
        self.message_target = Some(MessageTarget::Check(self.checks.len() - 1));
    }

    /// Registers a predicate refinement.
    pub fn add_predicate<F>(&mut self, predicate: F, message: impl Into<String>)
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        self.refinements.push(Refinement::Predicate {
            predicate: Arc::new(predicate),
            message: message.into(),
        });
        self.message_target = Some(MessageTarget::Refinement(self.refinements.len() - 1));
    }

    /// Registers a transform.
    pub fn add_transform<F>(&mut self, transform: F)
    where
        F: Fn(T) -> T + Send + Sync + 'static,
    {
        self.refinements.push(Refinement::Transform(Arc::new(transform)));
        self.message_target = Some(MessageTarget::Transform);
    }

    /// Overrides the message of the most recent check or predicate refinement,
    /// or the narrowing message if none has been registered yet.
    ///
    /// Directly after a transform this does nothing: earlier rules keep their
    /// messages.
    pub fn set_message(&mut self, message: impl Into<String>) {
        let message = message.into();
        match self.message_target {
            Some(MessageTarget::Check(i)) => self.checks[i].message = Some(message),
            Some(MessageTarget::Refinement(i)) => {
                if let Refinement::Predicate { message: m, .. } = &mut self.refinements[i] {
                    *m = message;
                }
            }
            Some(MessageTarget::Transform) => {
                warn!(message = %message, "error() after transform() has no rule to apply to");
            }
            None => self.type_message = Some(message),
        }
    }

    /// Returns the custom narrowing message, or builds the default one.
    pub fn type_message_or_else(&self, default: impl FnOnce() -> String) -> String {
        self.type_message.clone().unwrap_or_else(default)
    }

    /// Returns the number of registered checks.
    pub fn check_count(&self) -> usize {
        self.checks.len()
    }

    /// Returns the number of registered refinements and transforms.
    pub fn refinement_count(&self) -> usize {
        self.refinements.len()
    }

    /// Runs every check against `value`, recording one issue per failure.
    pub fn run_checks(&self, value: &T, context: &mut ParseContext) {
        for check in &self.checks {
            if let Err(message) = (check.rule)(value) {
                context.add_issue(check.message.clone().unwrap_or(message));
            }
        }
    }

    /// Threads `value` through every refinement and transform in order.
    ///
    /// A failing predicate records an issue and passes the value on unchanged,
    /// so later refinements and transforms still run.
    pub fn run_refinements(&self, mut value: T, context: &mut ParseContext) -> T {
        for refinement in &self.refinements {
            value = match refinement {
                Refinement::Predicate { predicate, message } => {
                    if !predicate(&value) {
                        context.add_issue(message.as_str());
                    }
                    value
                }
                Refinement::Transform(transform) => transform(value),
            };
        }
        value
    }
}

impl<T: Clone> SchemaCore<T> {
    /// Handles null or absent input: records the required issue, or resolves
    /// the default afresh.
    pub fn resolve_absent(&self, context: &mut ParseContext) -> Option<T> {
        if self.required {
            context.add_issue(REQUIRED_MESSAGE);
            return None;
        }
        self.default.as_ref().map(DefaultValue::resolve)
    }
}

impl<T> Default for SchemaCore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for SchemaCore<T> {
    fn clone(&self) -> Self {
        Self {
            required: self.required,
            default: self.default.clone(),
            checks: self.checks.clone(),
            refinements: self.refinements.clone(),
            type_message: self.type_message.clone(),
            message_target: self.message_target,
        }
    }
}
