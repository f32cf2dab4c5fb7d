//! Error types for validation runs.
//!
//! A run either returns a complete [`ValidationResult`](crate::ValidationResult)
//! or aborts with a [`ValidateError`]. Failed checks are *not* errors: they are
//! recorded as `valid: false` records. Errors are reserved for runs that cannot
//! complete at all.

use std::borrow::Cow;

/// Error raised by a predicate while evaluating a check.
///
/// Built-in predicates only fail on malformed call-site arguments. Custom
/// predicates can surface their own failures through [`PredicateError::custom`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PredicateError {
    /// A positional argument the predicate needs was not supplied.
    #[error("missing argument #{index}")]
    MissingArgument { index: usize },

    /// A positional argument has the wrong shape.
    #[error("invalid argument #{index}: expected {expected}")]
    InvalidArgument {
        index: usize,
        expected: Cow<'static, str>,
    },

    /// Failure reported by a user-registered predicate.
    #[error("{0}")]
    Custom(String),
}

impl PredicateError {
    /// Creates a custom predicate failure.
    pub fn custom(message: impl Into<String>) -> Self {
        Self::Custom(message.into())
    }
}

/// Error that aborts a validation run.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidateError {
    /// Neither an explicit rule function nor model-attached rules exist.
    #[error("no rules defined for model")]
    NoRules,

    /// A rule dispatched a validator name that is not registered.
    #[error("unknown validator `{name}` on field `{field}`")]
    UnknownValidator { field: String, name: String },

    /// A predicate failed while evaluating a check.
    #[error("validator `{name}` failed on field `{field}`: {source}")]
    Predicate {
        field: String,
        name: String,
        #[source]
        source: PredicateError,
    },
}

impl ValidateError {
    /// Broad error category for grouping in logs.
    #[must_use]
    pub fn category(&self) -> &str {
        match self {
            Self::NoRules => "configuration",
            Self::UnknownValidator { .. } => "dispatch",
            Self::Predicate { .. } => "predicate",
        }
    }

    /// Machine-readable error code for programmatic handling.
    #[must_use]
    pub fn code(&self) -> &str {
        match self {
            Self::NoRules => "VALIDATE_NO_RULES",
            Self::UnknownValidator { .. } => "VALIDATE_UNKNOWN_VALIDATOR",
            Self::Predicate { .. } => "VALIDATE_PREDICATE",
        }
    }
}
