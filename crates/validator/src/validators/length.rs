//! Length validators
//!
//! Text length is measured in Unicode scalar values (chars), arrays by
//! element count. Other non-empty values have no length and fail.

use crate::macros::predicate;
use crate::value::length;

// ============================================================================
// MIN LENGTH
// ============================================================================

predicate! {
    /// Valid iff the value is empty or its length is at least `n`.
    pub fn min_length(ctx, min: number) when present {
        length(ctx.value).is_some_and(|len| len as f64 >= min)
    }
}

// ============================================================================
// MAX LENGTH
// ============================================================================

predicate! {
    /// Valid iff the value is empty or its length is at most `n`.
    pub fn max_length(ctx, max: number) when present {
        length(ctx.value).is_some_and(|len| len as f64 <= max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PredicateError;
    use crate::validators::test_support::check;
    use rstest::rstest;
    use serde_json::{Value, json};

    #[rstest]
    #[case(json!("abcd"), 4.0, true)]
    #[case(json!("abc"), 4.0, false)]
    #[case(json!("my username"), 4.0, true)]
    #[case(json!("héé"), 3.0, true)]
    #[case(json!([1, 2]), 3.0, false)]
    #[case(json!(12345), 1.0, false)]
    #[case(json!(""), 4.0, true)]
    #[case(json!(null), 4.0, true)]
    fn min_length_cases(#[case] value: Value, #[case] n: f64, #[case] expected: bool) {
        assert_eq!(check(min_length, value, &[json!(n)]), Ok(expected));
    }

    #[rstest]
    #[case(json!("my username"), 12.0, true)]
    #[case(json!("a much longer username"), 12.0, false)]
    #[case(json!([1, 2, 3]), 3.0, true)]
    #[case(json!(""), 0.0, true)]
    fn max_length_cases(#[case] value: Value, #[case] n: f64, #[case] expected: bool) {
        assert_eq!(check(max_length, value, &[json!(n)]), Ok(expected));
    }

    #[test]
    fn empty_value_passes_without_a_bound() {
        assert_eq!(check(min_length, json!(""), &[]), Ok(true));
        assert_eq!(check(max_length, json!(null), &[json!("twelve")]), Ok(true));
    }

    #[test]
    fn missing_bound_is_an_error_when_present() {
        assert_eq!(
            check(min_length, json!("abc"), &[]),
            Err(PredicateError::MissingArgument { index: 0 })
        );
        assert!(matches!(
            check(max_length, json!("abc"), &[json!("twelve")]),
            Err(PredicateError::InvalidArgument { index: 0, .. })
        ));
    }

    #[test]
    fn astral_chars_count_once() {
        // Two scalar values, four UTF-16 code units.
        assert_eq!(check(min_length, json!("\u{1F600}\u{1F600}"), &[json!(3)]), Ok(false));
        assert_eq!(check(max_length, json!("\u{1F600}\u{1F600}"), &[json!(2)]), Ok(true));
    }

    #[test]
    fn numeric_text_bound_is_accepted() {
        assert_eq!(check(min_length, json!("abcd"), &[json!("4")]), Ok(true));
    }
}
