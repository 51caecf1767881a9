//! # Events
//!
//! Structured log events as produced by the harvester, the descriptor
//! recording where each one came from, and a bounded buffer of recent
//! events for the admin interface.

mod buffer;
mod descriptor;
mod errors;
#[allow(clippy::module_inception)]
mod event;

pub use buffer::{RecentEvents, DEFAULT_CAPACITY};
pub use descriptor::{EventDescriptor, Stream};
pub use errors::{EventError, EventResult};
pub use event::{Event, FIELD_MESSAGE, FIELD_OFFSET, FIELD_PATH, FIELD_TIMESTAMP};
