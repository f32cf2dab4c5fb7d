//! String content validators

use std::sync::LazyLock;

use crate::macros::predicate;

// Explicit ASCII classes: `(?i)` would fold in non-ASCII letters such as
// U+212A KELVIN SIGN.
static EMAIL_REGEX: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,4}$").unwrap()
});

// ============================================================================
// EMAIL VALIDATOR
// ============================================================================

predicate! {
    /// Valid iff the value is empty or looks like `local@domain.tld`.
    ///
    /// The top-level domain must be 2–4 ASCII letters. Either case is
    /// accepted, ASCII only. Non-text values never match.
    pub fn email(ctx) when present {
        ctx.value.as_str().is_some_and(|s| EMAIL_REGEX.is_match(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validators::test_support::check;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case("correct@email.com")]
    #[case("email@email.se")]
    #[case("first.last+tag@sub.example.org")]
    #[case("UPPER@EXAMPLE.COM")]
    #[case("a%b_c-d@x-y.io")]
    fn accepts(#[case] input: &str) {
        assert_eq!(check(email, json!(input), &[]), Ok(true));
    }

    #[rstest]
    #[case("falsy email address")]
    #[case("no-at-sign.com")]
    #[case("missing@tld")]
    #[case("tld@too.longtld")]
    #[case("digits@tld.c0m")]
    #[case("two@@ats.com")]
    #[case("user@example.\u{212A}\u{212A}")]
    #[case("u\u{17F}er@example.com")]
    #[case("us\u{E9}r@example.com")]
    fn rejects(#[case] input: &str) {
        assert_eq!(check(email, json!(input), &[]), Ok(false));
    }

    #[test]
    fn empty_passes() {
        assert_eq!(check(email, json!(""), &[]), Ok(true));
        assert_eq!(check(email, json!(null), &[]), Ok(true));
    }

    #[test]
    fn non_text_fails() {
        assert_eq!(check(email, json!(42), &[]), Ok(false));
        assert_eq!(check(email, json!(["a@b.cd"]), &[]), Ok(false));
    }
}
