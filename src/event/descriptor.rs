//! # Event Descriptors
//!
//! An encoded event plus the stream it was read from and the offset to
//! resume that stream at.

use std::fmt;
use std::sync::Arc;

use super::errors::EventResult;
use super::event::Event;

/// Identity of a source of events (a file, a socket, ...)
pub trait Stream: fmt::Debug + Send + Sync {
    /// Stable identity, used as the `path` of events and as the status key
    fn identity(&self) -> &str;
}

/// Where an encoded event came from
#[derive(Debug, Clone)]
pub struct EventDescriptor {
    /// Stream the event was read from. Not owned.
    pub stream: Arc<dyn Stream>,
    /// Resumption offset: first byte after this event in the stream
    pub offset: u64,
    /// JSON-encoded event
    pub event: Vec<u8>,
}

impl EventDescriptor {
    /// Encode `event` and attach its position
    pub fn new(stream: Arc<dyn Stream>, offset: u64, event: &Event) -> EventResult<Self> {
        Ok(Self {
            stream,
            offset,
            event: event.encode()?,
        })
    }

    /// Identity of the originating stream
    pub fn stream_identity(&self) -> &str {
        self.stream.identity()
    }

    /// Decode the carried event
    pub fn decode_event(&self) -> EventResult<Event> {
        Event::decode(&self.event)
    }
}
