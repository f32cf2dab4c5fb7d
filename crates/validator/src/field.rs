//! Per-field validator.
//!
//! A [`FieldValidator`] is created the first time a rule references a field
//! in a run. It snapshots the field's value at that moment and accumulates one
//! record per distinct validator name.

use crate::error::ValidateError;
use crate::record::ValidationRecord;
use crate::registry::{Context, Registry};
use crate::validators::names;
use crate::value;
use serde_json::Value;

/// Accumulates the check outcomes for one field in one run.
#[derive(Debug)]
pub struct FieldValidator<'a> {
    field: String,
    value: Value,
    model: &'a Value,
    registry: &'a Registry,
    records: Vec<ValidationRecord>,
}

impl<'a> FieldValidator<'a> {
    /// Binds `field` of `model`, snapshotting its current value.
    ///
    /// Missing fields snapshot as `null`.
    pub fn new(field: impl Into<String>, model: &'a Value, registry: &'a Registry) -> Self {
        let field = field.into();
        let value = model.get(&field).map_or(Value::Null, value::snapshot);
        Self {
            field,
            value,
            model,
            registry,
            records: Vec::new(),
        }
    }

    /// Name of the bound field.
    pub fn field(&self) -> &str {
        &self.field
    }

    /// The snapshot taken when the field was first referenced.
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// The model being validated.
    pub fn model(&self) -> &'a Value {
        self.model
    }

    /// Runs the validator registered under `name` with `args`.
    ///
    /// The registry is consulted at call time, so validators registered after
    /// this field was bound are visible.
    pub fn invoke(&mut self, name: &str, args: &[Value]) -> Result<&mut Self, ValidateError> {
        let predicate = self
            .registry
            .get(name)
            .ok_or_else(|| ValidateError::UnknownValidator {
                field: self.field.clone(),
                name: name.to_owned(),
            })?;

        let ctx = Context {
            field: &self.field,
            value: &self.value,
            model: self.model,
        };
        let valid = predicate(&ctx, args).map_err(|source| ValidateError::Predicate {
            field: self.field.clone(),
            name: name.to_owned(),
            source,
        })?;

        tracing::trace!(field = %self.field, validator = name, valid, "evaluated check");
        self.record(name, valid, None);
        Ok(self)
    }

    /// Records an outcome computed by the rule itself.
    ///
    /// Bypasses the registry; used for checks that are not single-field
    /// predicates, such as matching a confirmation field. `message` is kept
    /// only when `valid` is false.
    pub fn set_valid(&mut self, name: &str, valid: bool, message: Option<&str>) -> &mut Self {
        self.record(name, valid, message.map(str::to_owned));
        self
    }

    /// The field's records in first-invocation order.
    pub fn validity(&self) -> &[ValidationRecord] {
        &self.records
    }

    pub(crate) fn into_records(self) -> Vec<ValidationRecord> {
        self.records
    }

    fn record(&mut self, name: &str, valid: bool, message: Option<String>) {
        let record = ValidationRecord::new(self.field.as_str(), name, valid, message);
        match self.records.iter_mut().find(|r| r.name == name) {
            Some(existing) => {
                existing.valid = record.valid;
                existing.message = record.message;
            }
            None => self.records.push(record),
        }
    }

    // ------------------------------------------------------------------------
    // Built-in shorthands. Each goes through `invoke`, so a re-registered
    // built-in name is honoured.
    // ------------------------------------------------------------------------

    /// `required`
    pub fn required(&mut self) -> Result<&mut Self, ValidateError> {
        self.invoke(names::REQUIRED, &[])
    }

    /// `email`
    pub fn email(&mut self) -> Result<&mut Self, ValidateError> {
        self.invoke(names::EMAIL, &[])
    }

    /// `minLength(min)`
    pub fn min_length(&mut self, min: usize) -> Result<&mut Self, ValidateError> {
        self.invoke(names::MIN_LENGTH, &[Value::from(min)])
    }

    /// `maxLength(max)`
    pub fn max_length(&mut self, max: usize) -> Result<&mut Self, ValidateError> {
        self.invoke(names::MAX_LENGTH, &[Value::from(max)])
    }

    /// `min(min)`
    pub fn min(&mut self, min: impl Into<Value>) -> Result<&mut Self, ValidateError> {
        self.invoke(names::MIN, &[min.into()])
    }

    /// `max(max)`
    pub fn max(&mut self, max: impl Into<Value>) -> Result<&mut Self, ValidateError> {
        self.invoke(names::MAX, &[max.into()])
    }
}
