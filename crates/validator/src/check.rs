//! Run orchestrator.
//!
//! A [`Check`] is the dispatcher handed to a rule function. It binds a
//! [`FieldValidator`] to each field on first reference and later flattens
//! every field's records into the run's result.

use crate::field::FieldValidator;
use crate::record::ValidationRecord;
use crate::registry::Registry;
use indexmap::IndexMap;
use serde_json::Value;

/// Field-name → validator mapping for one run.
#[derive(Debug)]
pub struct Check<'a> {
    model: &'a Value,
    registry: &'a Registry,
    fields: IndexMap<String, FieldValidator<'a>>,
}

impl<'a> Check<'a> {
    /// Starts an empty run over `model`.
    pub fn new(model: &'a Value, registry: &'a Registry) -> Self {
        Self {
            model,
            registry,
            fields: IndexMap::new(),
        }
    }

    /// Returns the validator for `field`, binding it on first reference.
    ///
    /// Binding snapshots the field's value; later calls for the same field
    /// return the same validator.
    pub fn field(&mut self, field: &str) -> &mut FieldValidator<'a> {
        let (model, registry) = (self.model, self.registry);
        self.fields.entry(field.to_owned()).or_insert_with(|| {
            tracing::trace!(field, "bound field");
            FieldValidator::new(field, model, registry)
        })
    }

    /// The model under validation.
    ///
    /// The reference outlives any borrow of the check, so rules can read
    /// sibling fields while holding a field validator.
    pub fn model(&self) -> &'a Value {
        self.model
    }

    /// Number of fields referenced so far.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns whether no field has been referenced yet.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Flattens all records: fields in first-reference order, records in
    /// first-invocation order within each field.
    pub fn collect(self) -> Vec<ValidationRecord> {
        self.fields
            .into_values()
            .flat_map(FieldValidator::into_records)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn field_is_bound_once() {
        let registry = Registry::with_builtins();
        let model = json!({ "username": "" });
        let mut check = Check::new(&model, &registry);

        check.field("username").required().unwrap();
        check.field("username").min_length(4).unwrap();

        assert_eq!(check.len(), 1);
        assert_eq!(check.collect().len(), 2);
    }

    #[test]
    fn collect_keeps_first_reference_order() {
        let registry = Registry::with_builtins();
        let model = json!({ "a": "x", "b": "y" });
        let mut check = Check::new(&model, &registry);

        check.field("b").required().unwrap();
        check.field("a").required().unwrap();
        check.field("b").email().unwrap();

        let order: Vec<(String, String)> = check
            .collect()
            .into_iter()
            .map(|r| (r.field, r.name))
            .collect();
        assert_eq!(
            order,
            vec![
                ("b".to_owned(), "required".to_owned()),
                ("b".to_owned(), "email".to_owned()),
                ("a".to_owned(), "required".to_owned()),
            ]
        );
    }

    #[test]
    fn model_is_readable_while_field_is_borrowed() {
        let registry = Registry::new();
        let model = json!({ "password": "X", "passwordConfirm": "X" });
        let mut check = Check::new(&model, &registry);

        let m = check.model();
        check
            .field("passwordConfirm")
            .set_valid("confirm", m["password"] == m["passwordConfirm"], None);

        assert!(check.collect()[0].valid);
    }

    #[test]
    fn bound_field_without_checks_yields_nothing() {
        let registry = Registry::new();
        let model = json!({ "a": 1 });
        let mut check = Check::new(&model, &registry);
        check.field("a");
        assert!(check.collect().is_empty());
    }
}
