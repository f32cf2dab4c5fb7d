//! Property-based tests for skymma-validator.

use proptest::prelude::*;
use serde_json::{Value, json};
use skymma_validator::prelude::*;

fn run(
    value: Value,
    rules: impl Fn(&mut Check<'_>) -> Result<(), ValidateError>,
) -> ValidationResult {
    let registry = Registry::with_builtins();
    Runner::new(&registry)
        .run_with(&json!({ "f": value }), rules)
        .unwrap()
}

// ============================================================================
// FALSY PASSES: every built-in except `required` accepts an empty value
// ============================================================================

fn falsy() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        Just(json!("")),
        Just(json!(0)),
        Just(json!(false)),
        "[ \t\n]{0,8}".prop_map(Value::String),
    ]
}

proptest! {
    #[test]
    fn optional_builtins_accept_falsy(value in falsy(), n in 0usize..50) {
        let result = run(value, |check| {
            check
                .field("f")
                .email()?
                .min_length(n)?
                .max_length(n)?
                .min(n as f64)?
                .max(n as f64)?;
            Ok(())
        });
        prop_assert!(result.is_valid());
    }

    #[test]
    fn required_rejects_falsy(value in falsy()) {
        let result = run(value, |check| {
            check.field("f").required()?;
            Ok(())
        });
        prop_assert!(!result.is_valid());
    }
}

// ============================================================================
// IDEMPOTENCY: the same rules over the same model give the same records
// ============================================================================

proptest! {
    #[test]
    fn runs_are_idempotent(s in ".{0,30}") {
        let rules = |check: &mut Check<'_>| -> Result<(), ValidateError> {
            check.field("f").required()?.min_length(3)?.max_length(10)?.email()?;
            Ok(())
        };
        let first = run(json!(s), rules);
        let second = run(json!(s), rules);
        prop_assert_eq!(first.records(), second.records());
    }

    #[test]
    fn repeated_checks_never_duplicate(s in ".{0,20}", repeats in 1usize..5) {
        let result = run(json!(s), |check| {
            for _ in 0..repeats {
                check.field("f").min_length(2)?.required()?;
            }
            Ok(())
        });
        prop_assert_eq!(result.len(), 2);
    }
}

// ============================================================================
// TRIMMING: surrounding whitespace never changes an outcome
// ============================================================================

proptest! {
    #[test]
    fn padding_is_invisible(s in "[a-z@.]{0,20}", left in "[ \t]{0,4}", right in "[ \t]{0,4}") {
        let rules = |check: &mut Check<'_>| -> Result<(), ValidateError> {
            check.field("f").required()?.min_length(4)?.email()?;
            Ok(())
        };
        let plain = run(json!(s), rules);
        let padded = run(json!(format!("{left}{s}{right}")), rules);
        prop_assert_eq!(plain.records(), padded.records());
    }
}

// ============================================================================
// REPORT CONSISTENCY: object flags are the negation of record validity
// ============================================================================

proptest! {
    #[test]
    fn object_report_inverts_records(n in -100i64..100, bound in -100i64..100) {
        let result = run(json!(n), |check| {
            check.field("f").min(bound)?.max(bound)?;
            Ok(())
        });
        let report = result.as_object();
        for record in &result {
            prop_assert_eq!(report.failed(&record.field, &record.name), Some(!record.valid));
        }
        prop_assert_eq!(report.is_valid(), result.iter().all(|r| r.valid));
    }
}
