//! # Log Events
//!
//! One structured log record: field name to arbitrary JSON value,
//! encoded as a JSON object verbatim.

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::descriptor::Stream;
use super::errors::{EventError, EventResult};
use crate::status::{StatusEntry, StatusResult};

/// Field holding the original line
pub const FIELD_MESSAGE: &str = "message";
/// Field holding the stream identity
pub const FIELD_PATH: &str = "path";
/// Field holding the byte offset the line started at
pub const FIELD_OFFSET: &str = "offset";
/// Field holding the time the event was read
pub const FIELD_TIMESTAMP: &str = "@timestamp";

/// A single structured log event
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Event(Map<String, Value>);

impl Event {
    /// Create an event with no fields
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the event for one line read from `stream` at `offset`
    pub fn from_line(line: &str, stream: &dyn Stream, offset: u64) -> Self {
        Self::new()
            .with_field(FIELD_MESSAGE, line)
            .with_field(FIELD_PATH, stream.identity())
            .with_field(FIELD_OFFSET, offset)
            .with_field(
                FIELD_TIMESTAMP,
                Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            )
    }

    /// Set a field, builder style
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Set a field from any serializable value
    ///
    /// Fails without touching the event when `value` has no JSON form
    /// (e.g. a map with non-string keys).
    pub fn insert<T: Serialize>(&mut self, key: impl Into<String>, value: T) -> EventResult<()> {
        let key = key.into();
        let value = serde_json::to_value(value).map_err(|source| EventError::Unsupported {
            field: key.clone(),
            source,
        })?;
        self.0.insert(key, value);
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.0.remove(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Fields in key order
    pub fn fields(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// JSON encoding of the whole event
    pub fn encode(&self) -> EventResult<Vec<u8>> {
        serde_json::to_vec(&self.0).map_err(EventError::Encode)
    }

    /// Parse an encoded event; anything but a JSON object is rejected
    pub fn decode(bytes: &[u8]) -> EventResult<Self> {
        serde_json::from_slice(bytes).map_err(EventError::Decode)
    }
}

impl From<Map<String, Value>> for Event {
    fn from(fields: Map<String, Value>) -> Self {
        Event(fields)
    }
}

impl From<Event> for Map<String, Value> {
    fn from(event: Event) -> Self {
        event.0
    }
}

impl StatusEntry for Event {
    fn to_json(&self) -> StatusResult<Value> {
        Ok(Value::Object(self.0.clone()))
    }

    /// The encoded event on one line
    fn render_human(&self, _indent: &str) -> StatusResult<String> {
        Ok(serde_json::to_string(&self.0)?)
    }
}
