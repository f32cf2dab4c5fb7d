//! Validation records.

use serde::{Deserialize, Serialize};

/// Outcome of one check on one field within one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationRecord {
    /// Field the check ran against.
    pub field: String,
    /// Validator name, as registered or as passed to `set_valid`.
    pub name: String,
    /// Whether the check passed.
    pub valid: bool,
    /// Failure message. Only manual records carry one, and only when invalid.
    pub message: Option<String>,
}

impl ValidationRecord {
    /// Creates a record. The message is dropped when `valid` is true.
    pub fn new(
        field: impl Into<String>,
        name: impl Into<String>,
        valid: bool,
        message: Option<String>,
    ) -> Self {
        Self {
            field: field.into(),
            name: name.into(),
            valid,
            message: if valid { None } else { message },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn message_only_kept_when_invalid() {
        let ok = ValidationRecord::new("a", "confirm", true, Some("msg".into()));
        assert_eq!(ok.message, None);
        let bad = ValidationRecord::new("a", "confirm", false, Some("msg".into()));
        assert_eq!(bad.message.as_deref(), Some("msg"));
    }

    #[test]
    fn serializes_with_null_message() {
        let record = ValidationRecord::new("email", "required", true, None);
        assert_eq!(
            serde_json::to_value(&record).unwrap(),
            json!({ "field": "email", "name": "required", "valid": true, "message": null })
        );
    }
}
