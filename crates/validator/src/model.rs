//! Models and rule functions.

use crate::check::Check;
use crate::error::ValidateError;
use serde_json::{Map, Value};
use std::borrow::Cow;
use std::fmt;

/// A rule-declaration function.
///
/// Called once per run with the dispatcher; declares which validators apply
/// to which fields.
pub type RuleFn<'f> = dyn Fn(&mut Check<'_>) -> Result<(), ValidateError> + 'f;

type BoxedRules = Box<dyn Fn(&mut Check<'_>) -> Result<(), ValidateError> + Send + Sync>;

/// Something that can be validated.
///
/// The engine only reads from a model. Types that carry their own rules
/// return them from [`Model::rules`]; the runner falls back to these when
/// no explicit rule function is given.
pub trait Model {
    /// The field-name → value record predicates observe.
    fn record(&self) -> Cow<'_, Value>;

    /// Rules attached to the model, if any.
    fn rules(&self) -> Option<&RuleFn<'_>> {
        None
    }
}

impl Model for Value {
    fn record(&self) -> Cow<'_, Value> {
        Cow::Borrowed(self)
    }
}

impl Model for Map<String, Value> {
    fn record(&self) -> Cow<'_, Value> {
        Cow::Owned(Value::Object(self.clone()))
    }
}

impl<M: Model + ?Sized> Model for &M {
    fn record(&self) -> Cow<'_, Value> {
        (**self).record()
    }

    fn rules(&self) -> Option<&RuleFn<'_>> {
        (**self).rules()
    }
}

/// A record bundled with its rules.
///
/// # Examples
///
/// ```
/// use skymma_validator::{validate, Form};
/// use serde_json::json;
///
/// let mut form = Form::new(json!({ "username": "", "email": "" })).with_rules(|check| {
///     check.field("username").required()?.min_length(4)?.max_length(12)?;
///     check.field("email").required()?.email()?;
///     Ok(())
/// });
///
/// assert!(validate(&form).unwrap().as_object().is_invalid());
///
/// form.set("username", "my username");
/// form.set("email", "correct@email.com");
/// assert!(validate(&form).unwrap().as_object().is_valid());
/// ```
#[derive(Default)]
pub struct Form {
    record: Value,
    rules: Option<BoxedRules>,
}

impl Form {
    /// Creates a form over `record` with no rules attached.
    pub fn new(record: Value) -> Self {
        Self {
            record,
            rules: None,
        }
    }

    /// Attaches rules, replacing any already attached.
    pub fn with_rules<F>(mut self, rules: F) -> Self
    where
        F: Fn(&mut Check<'_>) -> Result<(), ValidateError> + Send + Sync + 'static,
    {
        self.rules = Some(Box::new(rules));
        self
    }

    /// Reads a field.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.record.get(field)
    }

    /// Writes a field. A non-object record is replaced by an empty object first.
    pub fn set(&mut self, field: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        if !self.record.is_object() {
            self.record = Value::Object(Map::new());
        }
        if let Value::Object(map) = &mut self.record {
            map.insert(field.into(), value.into());
        }
        self
    }

    /// Returns whether rules are attached.
    pub fn has_rules(&self) -> bool {
        self.rules.is_some()
    }
}

impl Model for Form {
    fn record(&self) -> Cow<'_, Value> {
        Cow::Borrowed(&self.record)
    }

    fn rules(&self) -> Option<&RuleFn<'_>> {
        self.rules.as_deref().map(|rules| rules as &RuleFn<'_>)
    }
}

impl fmt::Debug for Form {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Form")
            .field("record", &self.record)
            .field("rules", &self.rules.as_ref().map(|_| "<function>"))
            .finish()
    }
}
