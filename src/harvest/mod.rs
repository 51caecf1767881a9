//! # Harvesting
//!
//! Reads file streams line by line from a resume offset and produces
//! [`EventDescriptor`](crate::event::EventDescriptor)s, publishing live
//! progress as a status entry.

mod errors;
mod harvester;
mod status;

pub use errors::{HarvestError, HarvestResult};
pub use harvester::{FileStream, Harvester};
pub use status::{StreamProgress, StreamState, StreamStatus};
