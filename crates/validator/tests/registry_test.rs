//! Custom validators and registry isolation.
//!
//! The global registry is shared by every test in this binary, so tests that
//! register on it use names no other test touches.

use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use skymma_validator::prelude::*;
use skymma_validator::registry;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

#[test]
fn custom_validator_via_global_registry() {
    add_validator("mustBeBulle", |ctx, args| Ok(args.first() == Some(ctx.value)));

    let mut form = Form::new(json!({ "username": "" })).with_rules(|check| {
        check.field("username").invoke("mustBeBulle", &[json!("a bulle")])?;
        Ok(())
    });

    let result = validate(&form).unwrap();
    let report = result.as_object();
    assert_eq!(report.failed("username", "mustBeBulle"), Some(true));
    assert!(report.field("username").unwrap().is_invalid());

    form.set("username", "a bulle");
    let result = validate(&form).unwrap();
    let report = result.as_object();
    assert_eq!(report.failed("username", "mustBeBulle"), Some(false));
    assert!(report.field("username").unwrap().is_valid());
}

#[test]
fn global_registry_has_builtins() {
    for name in ["required", "email", "minLength", "maxLength", "min", "max"] {
        assert!(registry::global().contains(name), "missing built-in {name}");
    }
}

#[test]
fn overriding_a_builtin_changes_typed_shorthand() {
    let registry = Registry::with_builtins();
    registry.add_validator("required", |ctx, _| Ok(ctx.value != &Value::Null));

    let result = Runner::new(&registry)
        .run_with(&json!({ "name": "" }), |check| {
            check.field("name").required()?;
            Ok(())
        })
        .unwrap();

    // "" is present under the override.
    assert!(result.is_valid());
}

#[test]
fn isolated_registry_does_not_see_global_registrations() {
    add_validator("onlyGlobal", |_, _| Ok(true));

    let registry = Registry::with_builtins();
    let err = Runner::new(&registry)
        .run_with(&json!({}), |check| {
            check.field("a").invoke("onlyGlobal", &[])?;
            Ok(())
        })
        .unwrap_err();

    assert_eq!(
        err,
        ValidateError::UnknownValidator {
            field: "a".into(),
            name: "onlyGlobal".into(),
        }
    );
}

#[test]
fn predicate_receives_model_and_positional_args() {
    let registry = Registry::new();
    registry.add_validator("between", |ctx, args| {
        let lo = args
            .first()
            .and_then(Value::as_f64)
            .ok_or(PredicateError::MissingArgument { index: 0 })?;
        let hi = args
            .get(1)
            .and_then(Value::as_f64)
            .ok_or(PredicateError::MissingArgument { index: 1 })?;
        let v = ctx.value.as_f64().unwrap_or(f64::NAN);
        Ok(ctx.model.is_object() && v >= lo && v <= hi)
    });

    let result = Runner::new(&registry)
        .run_with(&json!({ "n": 5 }), |check| {
            check.field("n").invoke("between", &[json!(1), json!(10)])?;
            Ok(())
        })
        .unwrap();
    assert!(result.is_valid());
}

#[test]
fn custom_predicate_error_propagates() {
    let registry = Registry::new();
    registry.add_validator("explodes", |_, _| Err(PredicateError::custom("boom")));

    let err = Runner::new(&registry)
        .run_with(&json!({ "a": 1 }), |check| {
            check.field("a").invoke("explodes", &[])?;
            Ok(())
        })
        .unwrap_err();

    assert_eq!(err.to_string(), "validator `explodes` failed on field `a`: boom");
}

#[test]
fn predicates_are_looked_up_per_invocation() {
    let registry = Registry::new();
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    registry.add_validator("counted", move |_, _| {
        counter.fetch_add(1, Ordering::SeqCst);
        Ok(true)
    });

    Runner::new(&registry)
        .run_with(&json!({}), |check| {
            check.field("a").invoke("counted", &[])?;
            check.field("a").invoke("counted", &[])?;
            check.field("b").invoke("counted", &[])?;
            Ok(())
        })
        .unwrap();

    assert_eq!(calls.load(Ordering::SeqCst), 3);
}

#[test]
fn registration_between_fields_within_a_run() {
    let registry = Registry::new();
    let result = Runner::new(&registry)
        .run_with(&json!({ "a": "x" }), |check| {
            let field = check.field("a");
            registry.add_validator("late", |ctx, _| Ok(ctx.value == "x"));
            field.invoke("late", &[])?;
            Ok(())
        })
        .unwrap();
    assert!(result.is_valid());
}
