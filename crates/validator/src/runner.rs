//! Validation runner.
//!
//! Resolves the rule function for a model, drives one [`Check`], and returns
//! the flat, ordered [`ValidationResult`].

use crate::check::Check;
use crate::error::ValidateError;
use crate::model::{Model, RuleFn};
use crate::record::ValidationRecord;
use crate::registry::{self, Registry};
use crate::report::{self, ListReport, ObjectReport};
use serde::Serialize;
use std::ops::Deref;
use std::sync::OnceLock;

// ============================================================================
// RESULT
// ============================================================================

/// Records produced by one run, in field-first-reference order.
///
/// Either report shape can be derived from it without re-running the rules.
/// The object report is built on first request and cached.
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    records: Vec<ValidationRecord>,
    object: OnceLock<ObjectReport>,
}

impl ValidationResult {
    /// Wraps already computed records.
    pub fn new(records: Vec<ValidationRecord>) -> Self {
        Self {
            records,
            object: OnceLock::new(),
        }
    }

    /// The records, in order.
    pub fn records(&self) -> &[ValidationRecord] {
        &self.records
    }

    pub fn into_records(self) -> Vec<ValidationRecord> {
        self.records
    }

    /// Whether every record passed.
    pub fn is_valid(&self) -> bool {
        self.records.iter().all(|r| r.valid)
    }

    /// The object-shaped report.
    pub fn as_object(&self) -> &ObjectReport {
        self.object.get_or_init(|| report::to_object(&self.records))
    }

    /// The list-shaped report.
    pub fn as_list(&self) -> ListReport {
        report::to_list(&self.records)
    }
}

impl Deref for ValidationResult {
    type Target = [ValidationRecord];

    fn deref(&self) -> &Self::Target {
        &self.records
    }
}

impl<'a> IntoIterator for &'a ValidationResult {
    type Item = &'a ValidationRecord;
    type IntoIter = std::slice::Iter<'a, ValidationRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl IntoIterator for ValidationResult {
    type Item = ValidationRecord;
    type IntoIter = std::vec::IntoIter<ValidationRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl Serialize for ValidationResult {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.records.serialize(serializer)
    }
}

// ============================================================================
// RUNNER
// ============================================================================

/// Runs rule functions against models using one registry.
#[derive(Debug, Clone, Copy)]
pub struct Runner<'r> {
    registry: &'r Registry,
}

impl Runner<'static> {
    /// A runner over the global registry.
    pub fn global() -> Self {
        Self::new(registry::global())
    }
}

impl<'r> Runner<'r> {
    pub fn new(registry: &'r Registry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &'r Registry {
        self.registry
    }

    /// Validates `model`.
    ///
    /// Rule resolution: `rules` if given, else the model's attached rules,
    /// else [`ValidateError::NoRules`] before any field is touched. The rule
    /// function runs exactly once. Any error it returns aborts the run with
    /// no partial result.
    pub fn run<M>(
        &self,
        model: &M,
        rules: Option<&RuleFn<'_>>,
    ) -> Result<ValidationResult, ValidateError>
    where
        M: Model + ?Sized,
    {
        let Some(rules) = rules.or_else(|| model.rules()) else {
            tracing::debug!("no rules defined for model");
            return Err(ValidateError::NoRules);
        };

        let _span = tracing::debug_span!("validate").entered();
        let record = model.record();
        let mut check = Check::new(&record, self.registry);

        if let Err(error) = rules(&mut check) {
            tracing::debug!(%error, code = error.code(), "validation run aborted");
            return Err(error);
        }

        let fields = check.len();
        let result = ValidationResult::new(check.collect());
        tracing::debug!(
            fields,
            records = result.len(),
            valid = result.is_valid(),
            "validation run complete"
        );
        Ok(result)
    }

    /// Validates `model` with an explicit rule function.
    pub fn run_with<M, F>(&self, model: &M, rules: F) -> Result<ValidationResult, ValidateError>
    where
        M: Model + ?Sized,
        F: Fn(&mut Check<'_>) -> Result<(), ValidateError>,
    {
        let rules: &RuleFn<'_> = &rules;
        self.run(model, Some(rules))
    }
}

// ============================================================================
// FREE FUNCTIONS (global registry)
// ============================================================================

/// Validates `model` with its attached rules.
pub fn validate<M>(model: &M) -> Result<ValidationResult, ValidateError>
where
    M: Model + ?Sized,
{
    Runner::global().run(model, None)
}

/// Validates `model` with an explicit rule function.
///
/// # Examples
///
/// ```
/// use skymma_validator::validate_with;
/// use serde_json::json;
///
/// let result = validate_with(&json!({ "age": 1 }), |check| {
///     check.field("age").min(18)?;
///     Ok(())
/// })
/// .unwrap();
///
/// assert_eq!(result.as_object().failed("age", "min"), Some(true));
/// ```
pub fn validate_with<M, F>(model: &M, rules: F) -> Result<ValidationResult, ValidateError>
where
    M: Model + ?Sized,
    F: Fn(&mut Check<'_>) -> Result<(), ValidateError>,
{
    Runner::global().run_with(model, rules)
}

/// Validates `model` and returns the object-shaped report directly.
pub fn validate_as_object<M>(
    model: &M,
    rules: Option<&RuleFn<'_>>,
) -> Result<ObjectReport, ValidateError>
where
    M: Model + ?Sized,
{
    let result = Runner::global().run(model, rules)?;
    Ok(report::to_object(&result))
}

/// Validates `model` and returns the list-shaped report directly.
pub fn validate_as_list<M>(
    model: &M,
    rules: Option<&RuleFn<'_>>,
) -> Result<ListReport, ValidateError>
where
    M: Model + ?Sized,
{
    Runner::global().run(model, rules).map(|result| result.as_list())
}
