//! Report shapes.
//!
//! Two pure reductions over a run's records:
//!
//! - [`to_object`] → [`ObjectReport`], nested per field with aggregate flags:
//!
//!   ```text
//!   { <field>: { $valid, $invalid, <validator>: failed },
//!     $valid, $invalid,
//!     $messages: { <field>: { <validator>: message | null } } }
//!   ```
//!
//!   Per-validator flags are **inverted**: `true` means the check failed.
//!
//! - [`to_list`] → [`ListReport`], the raw records grouped by field:
//!
//!   ```text
//!   { <field>: [ { name, valid, message }, ... ] }
//!   ```
//!
//! Both visit every record; nothing short-circuits on the first failure.

use crate::record::ValidationRecord;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

// ============================================================================
// OBJECT REPORT
// ============================================================================

/// Per-field slice of an [`ObjectReport`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldReport {
    #[serde(rename = "$valid")]
    valid: bool,
    #[serde(rename = "$invalid")]
    invalid: bool,
    #[serde(flatten)]
    failed: IndexMap<String, bool>,
}

impl FieldReport {
    fn new() -> Self {
        Self {
            valid: true,
            invalid: false,
            failed: IndexMap::new(),
        }
    }

    /// AND over every check on this field.
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Negation of [`is_valid`](Self::is_valid).
    pub fn is_invalid(&self) -> bool {
        self.invalid
    }

    /// Whether the named check **failed**. `None` if it never ran.
    pub fn failed(&self, name: &str) -> Option<bool> {
        self.failed.get(name).copied()
    }

    /// Validator name → failed flag, in first-invocation order.
    pub fn checks(&self) -> impl Iterator<Item = (&str, bool)> {
        self.failed.iter().map(|(name, failed)| (name.as_str(), *failed))
    }
}

/// Object-shaped report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ObjectReport {
    #[serde(flatten)]
    fields: IndexMap<String, FieldReport>,
    #[serde(rename = "$valid")]
    valid: bool,
    #[serde(rename = "$invalid")]
    invalid: bool,
    #[serde(rename = "$messages")]
    messages: IndexMap<String, IndexMap<String, Option<String>>>,
}

impl ObjectReport {
    /// AND over every check in the run. True when nothing was checked.
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Negation of [`is_valid`](Self::is_valid).
    pub fn is_invalid(&self) -> bool {
        self.invalid
    }

    /// Report for one field. `None` if the rules never checked it.
    pub fn field(&self, field: &str) -> Option<&FieldReport> {
        self.fields.get(field)
    }

    /// Shorthand for `field(field)?.failed(name)`.
    pub fn failed(&self, field: &str, name: &str) -> Option<bool> {
        self.field(field)?.failed(name)
    }

    /// Message recorded for a check, if it failed with one.
    pub fn message(&self, field: &str, name: &str) -> Option<&str> {
        self.messages.get(field)?.get(name)?.as_deref()
    }

    /// Field → validator → message, including `None` entries.
    pub fn messages(&self) -> &IndexMap<String, IndexMap<String, Option<String>>> {
        &self.messages
    }

    /// Field reports in first-reference order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &FieldReport)> {
        self.fields.iter().map(|(name, report)| (name.as_str(), report))
    }
}

/// Reduces records into the object-shaped report.
pub fn to_object(records: &[ValidationRecord]) -> ObjectReport {
    let mut report = ObjectReport {
        fields: IndexMap::new(),
        valid: true,
        invalid: false,
        messages: IndexMap::new(),
    };

    for record in records {
        let field = report
            .fields
            .entry(record.field.clone())
            .or_insert_with(FieldReport::new);
        field.failed.insert(record.name.clone(), !record.valid);
        field.valid &= record.valid;
        field.invalid = !field.valid;

        report
            .messages
            .entry(record.field.clone())
            .or_default()
            .insert(record.name.clone(), record.message.clone());

        report.valid &= record.valid;
    }
    report.invalid = !report.valid;

    report
}

// ============================================================================
// LIST REPORT
// ============================================================================

/// One record as it appears in a [`ListReport`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordView {
    pub name: String,
    pub valid: bool,
    pub message: Option<String>,
}

impl From<&ValidationRecord> for RecordView {
    fn from(record: &ValidationRecord) -> Self {
        Self {
            name: record.name.clone(),
            valid: record.valid,
            message: record.message.clone(),
        }
    }
}

/// List-shaped report: field → records, not inverted, not aggregated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ListReport(IndexMap<String, Vec<RecordView>>);

impl ListReport {
    /// Records for one field. `None` if the rules never checked it.
    pub fn field(&self, field: &str) -> Option<&[RecordView]> {
        self.0.get(field).map(Vec::as_slice)
    }

    /// Fields in first-reference order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[RecordView])> {
        self.0.iter().map(|(name, views)| (name.as_str(), views.as_slice()))
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns whether no field was checked.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> IndexMap<String, Vec<RecordView>> {
        self.0
    }
}

/// Groups records by field.
pub fn to_list(records: &[ValidationRecord]) -> ListReport {
    let mut fields: IndexMap<String, Vec<RecordView>> = IndexMap::new();
    for record in records {
        fields
            .entry(record.field.clone())
            .or_default()
            .push(RecordView::from(record));
    }
    ListReport(fields)
}
