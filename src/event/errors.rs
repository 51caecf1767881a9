//! # Event Errors

use thiserror::Error;

/// Result type for event operations
pub type EventResult<T> = Result<T, EventError>;

/// Event encoding errors
#[derive(Debug, Error)]
pub enum EventError {
    /// A field value cannot be represented as JSON
    #[error("unsupported value for field '{field}': {source}")]
    Unsupported {
        field: String,
        #[source]
        source: serde_json::Error,
    },

    /// Serializing the event failed
    #[error("event encoding failed: {0}")]
    Encode(#[source] serde_json::Error),

    /// Bytes are not a JSON object
    #[error("event decoding failed: {0}")]
    Decode(#[source] serde_json::Error),
}
