//! Live per-stream progress, shared between a harvester and the status tree

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde::Serialize;
use serde_json::Value;

use crate::status::{Number, Record, StatusEntry, StatusResult, Text};

/// What the harvester is doing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StreamState {
    /// A harvester is attached and reading
    Reading,
    /// Reached the end of complete lines, or not started
    Idle,
}

impl StreamState {
    pub fn as_str(&self) -> &'static str {
        match self {
            StreamState::Reading => "reading",
            StreamState::Idle => "idle",
        }
    }
}

/// Point-in-time copy of a stream's progress
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StreamProgress {
    pub path: String,
    /// Where reading resumes
    pub offset: u64,
    /// Events produced since the harvester was opened
    pub lines: u64,
    pub state: StreamState,
}

/// Shared handle on a stream's progress
///
/// Clones observe the same progress; the harvester writes, the status
/// tree reads.
#[derive(Debug, Clone)]
pub struct StreamStatus {
    shared: Arc<Mutex<StreamProgress>>,
}

impl StreamStatus {
    pub fn new(path: impl Into<String>, offset: u64) -> Self {
        Self {
            shared: Arc::new(Mutex::new(StreamProgress {
                path: path.into(),
                offset,
                lines: 0,
                state: StreamState::Idle,
            })),
        }
    }

    fn lock(&self) -> MutexGuard<'_, StreamProgress> {
        // Progress is plain data, a panicked writer cannot leave it torn
        self.shared.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn snapshot(&self) -> StreamProgress {
        self.lock().clone()
    }

    pub(crate) fn set_state(&self, state: StreamState) {
        self.lock().state = state;
    }

    pub(crate) fn record_line(&self, offset: u64) {
        let mut progress = self.lock();
        progress.offset = offset;
        progress.lines += 1;
    }

    pub(crate) fn skip_to(&self, offset: u64) {
        self.lock().offset = offset;
    }

    fn as_record(&self) -> Record {
        let progress = self.snapshot();
        Record::new()
            .field("path", Text::from(progress.path))
            .field("offset", Number::from(progress.offset))
            .field("lines", Number::from(progress.lines))
            .field("state", Text::from(progress.state.as_str()))
    }
}

impl StatusEntry for StreamStatus {
    fn to_json(&self) -> StatusResult<Value> {
        Ok(serde_json::to_value(self.snapshot())?)
    }

    fn render_human(&self, indent: &str) -> StatusResult<String> {
        self.as_record().render_human(indent)
    }
}
