//! Logger setup errors

use thiserror::Error;

/// Result type for logger setup
pub type LogResult<T> = Result<T, LogError>;

/// Errors raised while installing the global subscriber
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum LogError {
    /// The level string is not a valid `EnvFilter` directive
    #[error("invalid filter `{filter}`: {reason}")]
    Filter {
        /// The rejected filter string
        filter: String,
        /// Parser message
        reason: String,
    },

    /// A global subscriber was already set
    #[error("logger already initialized: {0}")]
    AlreadyInitialized(String),
}

impl LogError {
    /// Stable error code
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Filter { .. } => "LOG_INVALID_FILTER",
            Self::AlreadyInitialized(_) => "LOG_ALREADY_INITIALIZED",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_filter() {
        let err = LogError::Filter {
            filter: "x=loud".into(),
            reason: "bad level".into(),
        };
        assert_eq!(err.to_string(), "invalid filter `x=loud`: bad level");
        assert_eq!(err.code(), "LOG_INVALID_FILTER");
    }
}
