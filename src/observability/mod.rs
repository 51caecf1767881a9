//! Observability for the status model and the harvester
//!
//! - Structured logging (JSON lines on stderr)
//! - Begin/complete scopes around units of work
//!
//! ```ignore
//! use logstat::observability::{Logger, ObservationScope};
//!
//! Logger::warn("STATUS_REFRESH_FAILED", &[("key", "streams")]);
//!
//! let scope = ObservationScope::new("HARVEST");
//! // ... do work ...
//! scope.complete();
//! ```

mod logger;
mod scope;

pub use logger::{Logger, Severity};
pub use scope::ObservationScope;
