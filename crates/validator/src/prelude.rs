//! Prelude module for convenient imports.
//!
//! ```rust,ignore
//! use skymma_validator::prelude::*;
//! ```

pub use crate::{
    Check, Context, FieldValidator, Form, ListReport, Model, ObjectReport, PredicateError,
    Registry, RuleFn, Runner, ValidateError, ValidationRecord, ValidationResult, add_validator,
    validate, validate_as_list, validate_as_object, validate_with,
};
