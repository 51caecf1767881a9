//! logstat - introspectable runtime status for a log shipper
//!
//! - `status`: the status model served by an admin interface
//! - `event`: structured log events and their resumption descriptors
//! - `harvest`: line-by-line file reading that produces those events

pub mod cli;
pub mod config;
pub mod event;
pub mod harvest;
pub mod observability;
pub mod status;
