//! Loose value semantics over `serde_json::Value`.
//!
//! Form models carry loosely typed values: an empty string, `null` and `0`
//! all mean "nothing entered", numbers arrive as text, and so on. The helpers
//! here pin those rules down once so every predicate agrees on them.

use crate::error::PredicateError;
use serde_json::Value;

/// Returns whether a value counts as present.
///
/// `null`, `false`, `0`, and `""` are falsy; arrays and objects are always
/// truthy, even when empty.
#[must_use]
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Takes the per-run snapshot of a field value.
///
/// Text is trimmed of surrounding whitespace; everything else is cloned as is.
#[must_use]
pub fn snapshot(value: &Value) -> Value {
    match value {
        Value::String(s) => Value::String(s.trim().to_owned()),
        other => other.clone(),
    }
}

/// Length of a value, if it has one.
///
/// Strings count Unicode scalar values (an emoji is 1, not 2 UTF-16 code
/// units), arrays count elements.
#[must_use]
pub fn length(value: &Value) -> Option<usize> {
    match value {
        Value::String(s) => Some(s.chars().count()),
        Value::Array(items) => Some(items.len()),
        _ => None,
    }
}

/// Coerces a value to a number.
///
/// Numbers pass through, text is parsed after trimming (see
/// [`parse_number`]), booleans map to 1/0. Anything else is not numeric.
#[must_use]
pub fn to_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => parse_number(s),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        _ => None,
    }
}

/// Parses numeric text the way form input is usually read.
///
/// Accepts decimal and exponent notation, unsigned `0x`/`0o`/`0b` integers,
/// and the literal `Infinity` with an optional sign. Other alphabetic
/// spellings (`inf`, `infinity`, `NaN`) are rejected.
#[must_use]
pub fn parse_number(text: &str) -> Option<f64> {
    let text = text.trim();

    let radix = match text.get(..2) {
        Some("0x" | "0X") => 16,
        Some("0o" | "0O") => 8,
        Some("0b" | "0B") => 2,
        _ => 10,
    };
    if radix != 10 {
        let digits = &text[2..];
        if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
            return None;
        }
        return u64::from_str_radix(digits, radix).ok().map(|n| n as f64);
    }

    match text {
        "Infinity" | "+Infinity" => return Some(f64::INFINITY),
        "-Infinity" => return Some(f64::NEG_INFINITY),
        _ => {}
    }
    if text
        .chars()
        .any(|c| c.is_ascii_alphabetic() && !matches!(c, 'e' | 'E'))
    {
        return None;
    }
    text.parse::<f64>().ok()
}

/// Reads positional argument `index` as a number.
pub fn number_arg(args: &[Value], index: usize) -> Result<f64, PredicateError> {
    let arg = args
        .get(index)
        .ok_or(PredicateError::MissingArgument { index })?;
    to_number(arg).ok_or(PredicateError::InvalidArgument {
        index,
        expected: "a number".into(),
    })
}
