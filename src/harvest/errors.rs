//! # Harvest Errors

use std::io;

use thiserror::Error;

use crate::event::EventError;

/// Result type for harvesting
pub type HarvestResult<T> = Result<T, HarvestError>;

/// Errors raised while reading a stream
#[derive(Debug, Error)]
pub enum HarvestError {
    /// Opening, seeking or reading the file failed
    #[error("I/O error on '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    /// The resume offset lies past the end of the file (truncated or replaced)
    #[error("resume offset {offset} is beyond the end of '{path}' ({len} bytes)")]
    OffsetBeyondEnd { path: String, offset: u64, len: u64 },

    /// Encoding the event failed
    #[error(transparent)]
    Event(#[from] EventError),
}

impl HarvestError {
    pub(crate) fn io(path: &str, source: io::Error) -> Self {
        HarvestError::Io {
            path: path.to_string(),
            source,
        }
    }
}
