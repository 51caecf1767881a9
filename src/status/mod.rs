//! Introspectable status model for the admin interface
//!
//! Producers register named [`StatusEntry`] values in a [`KeyedArray`]
//! (or a [`Record`]) while wiring the process. An admin request then
//! refreshes the tree with [`StatusEntry::update`], resolves a path with
//! [`resolve`] and encodes the result with [`render`].
//!
//! ```ignore
//! use logstat::status::{render, resolve, Format, KeyedArray, Number, StatusEntry};
//!
//! let mut root = KeyedArray::new();
//! root.add_entry("count", Number::from(42));
//! root.update()?;
//! let text = render(resolve(&root, "count")?, Format::Human)?;
//! ```
//!
//! Nothing here is synchronized; share a tree across threads behind a
//! `Mutex`.

mod array;
mod entry;
mod errors;
mod format;
mod path;
mod record;
mod values;

pub use array::KeyedArray;
pub use entry::StatusEntry;
pub use errors::{Misuse, StatusError, StatusResult};
pub use format::{render, Format};
pub use path::resolve;
pub use record::Record;
pub use values::{Callback, Counter, Flag, Number, Text};

/// Indentation added per nesting level in the human-readable form
pub const INDENTATION: &str = "  ";
