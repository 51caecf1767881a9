//! # Status Errors
//!
//! Two classes, kept as separate types:
//!
//! - [`StatusError`]: recoverable data errors returned through `Result`
//!   (bad lookup path, failing refresh, encoding failures).
//! - [`Misuse`]: programming errors in the code wiring the status tree
//!   (duplicate key, removing what is not there). Never returned; they
//!   abort the current operation with a panic.

use std::num::ParseIntError;

use thiserror::Error;

use crate::observability::Logger;

/// Result type for status operations
pub type StatusResult<T> = Result<T, StatusError>;

/// Recoverable status errors
#[derive(Debug, Error)]
pub enum StatusError {
    /// Path segment is neither a known key nor a decimal row number
    #[error("invalid path segment '{segment}': {source}")]
    InvalidPath {
        segment: String,
        #[source]
        source: ParseIntError,
    },

    /// Multi-segment navigation reached nothing
    #[error("no status entry at '{0}'")]
    NotFound(String),

    /// An entry failed to refresh its live fields
    #[error("refresh failed: {0}")]
    Refresh(String),

    /// JSON encoding failed
    #[error("JSON encoding failed: {0}")]
    Encode(#[from] serde_json::Error),

    /// A value has no JSON representation
    #[error("unsupported value: {0}")]
    Unsupported(String),

    /// Human rendering failed
    #[error("render failed: {0}")]
    Render(String),
}

impl StatusError {
    /// Refresh failure with a message
    pub fn refresh(message: impl Into<String>) -> Self {
        StatusError::Refresh(message.into())
    }

    /// Stable error code, used by the command line
    pub fn code(&self) -> &'static str {
        match self {
            StatusError::InvalidPath { .. } => "LOGSTAT_STATUS_INVALID_PATH",
            StatusError::NotFound(_) => "LOGSTAT_STATUS_NOT_FOUND",
            StatusError::Refresh(_) => "LOGSTAT_STATUS_REFRESH_FAILED",
            StatusError::Encode(_) | StatusError::Unsupported(_) => "LOGSTAT_STATUS_ENCODE_FAILED",
            StatusError::Render(_) => "LOGSTAT_STATUS_RENDER_FAILED",
        }
    }
}

/// Programming errors made while wiring a status tree
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Misuse {
    /// Key registered twice
    #[error("key '{0}' already exists")]
    DuplicateKey(String),

    /// Keys must be non-empty
    #[error("key must not be empty")]
    EmptyKey,

    /// Removal from an array that never held an entry
    #[error("array has no entries")]
    NoEntries,

    /// Removal of a key that is not registered
    #[error("entry '{0}' not found")]
    MissingKey(String),
}

impl Misuse {
    /// Log at FATAL and panic
    #[track_caller]
    pub fn abort(self) -> ! {
        let reason = self.to_string();
        Logger::fatal("STATUS_MISUSE", &[("reason", reason.as_str())]);
        panic!("status misuse: {}", reason);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_path_keeps_cause() {
        let source = "abc".parse::<i64>().unwrap_err();
        let err = StatusError::InvalidPath {
            segment: "abc".to_string(),
            source,
        };
        assert!(std::error::Error::source(&err).is_some());
        assert!(err.to_string().contains("'abc'"));
        assert_eq!(err.code(), "LOGSTAT_STATUS_INVALID_PATH");
    }

    #[test]
    fn test_misuse_display() {
        assert_eq!(
            Misuse::DuplicateKey("a".to_string()).to_string(),
            "key 'a' already exists"
        );
        assert_eq!(Misuse::NoEntries.to_string(), "array has no entries");
    }

    #[test]
    #[should_panic(expected = "status misuse: entry 'x' not found")]
    fn test_misuse_abort_panics() {
        Misuse::MissingKey("x".to_string()).abort();
    }
}
