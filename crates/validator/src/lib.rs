//! # skymma-validator
//!
//! A lightweight, extensible field-validation engine for form models.
//!
//! ## Quick Start
//!
//! ```
//! use skymma_validator::prelude::*;
//! use serde_json::json;
//!
//! let model = json!({ "username": "", "email": "" });
//!
//! let result = validate_with(&model, |check| {
//!     check.field("username").required()?.min_length(4)?.max_length(12)?;
//!     check.field("email").required()?.email()?;
//!     Ok(())
//! })
//! .unwrap();
//!
//! let report = result.as_object();
//! assert!(report.is_invalid());
//! // Per-check flags are inverted: `true` means the check failed.
//! assert_eq!(report.failed("username", "required"), Some(true));
//! ```
//!
//! ## How a run works
//!
//! 1. The [`Runner`] resolves a rule function: the explicit one, else the
//!    one attached to the model ([`Model::rules`]).
//! 2. The rule function gets a [`Check`]. `check.field(name)` binds a
//!    [`FieldValidator`] on first reference, snapshotting the value
//!    (text is trimmed).
//! 3. Each named check looks up its predicate in the [`Registry`] and
//!    records `{field, name, valid, message}`. Re-running a name on the same
//!    field overwrites its record in place.
//! 4. The flat [`ValidationResult`] can be reduced to an [`ObjectReport`]
//!    or a [`ListReport`].
//!
//! ## Custom validators
//!
//! [`add_validator`] registers a predicate globally; last registration wins,
//! built-ins included. For checks that span fields, use
//! [`FieldValidator::set_valid`] inside the rule function.
//!
//! ## Built-in validators
//!
//! `required`, `email`, `minLength`, `maxLength`, `min`, `max`. See
//! [`validators`].

pub mod check;
pub mod error;
pub mod field;
mod macros;
pub mod model;
pub mod prelude;
pub mod record;
pub mod registry;
pub mod report;
pub mod runner;
pub mod validators;
pub mod value;

pub use check::Check;
pub use error::{PredicateError, ValidateError};
pub use field::FieldValidator;
pub use model::{Form, Model, RuleFn};
pub use record::ValidationRecord;
pub use registry::{Context, Predicate, Registry, add_validator};
pub use report::{FieldReport, ListReport, ObjectReport, RecordView, to_list, to_object};
pub use runner::{
    Runner, ValidationResult, validate, validate_as_list, validate_as_object, validate_with,
};
