//! Ordered status collection addressable by key or by row
//!
//! Rows follow insertion order and stay dense: removing an entry moves
//! every later entry up one row, and the key index is adjusted to match.

use std::collections::HashMap;
use std::fmt;

use serde_json::Value;

use super::entry::{render_blocks, StatusEntry};
use super::errors::{Misuse, StatusError, StatusResult};
use crate::observability::Logger;

struct Slot {
    key: String,
    entry: Box<dyn StatusEntry>,
}

/// Ordered collection of status entries with a key index
///
/// Not synchronized: wrap it in a `Mutex` (or keep it on one thread)
/// when more than one context reads or mutates it.
#[derive(Default)]
pub struct KeyedArray {
    /// Key to row. `None` until the first insertion.
    index: Option<HashMap<String, usize>>,
    /// Entries in row order
    slots: Vec<Slot>,
}

impl KeyedArray {
    /// Create an empty array
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `entry` under `key` at the next row
    ///
    /// # Panics
    ///
    /// If `key` is empty or already registered.
    #[track_caller]
    pub fn add_entry(&mut self, key: impl Into<String>, entry: impl StatusEntry + 'static) {
        self.add_boxed(key, Box::new(entry));
    }

    /// [`add_entry`](Self::add_entry) for an already boxed entry
    #[track_caller]
    pub fn add_boxed(&mut self, key: impl Into<String>, entry: Box<dyn StatusEntry>) {
        let key = key.into();
        if key.is_empty() {
            Misuse::EmptyKey.abort();
        }

        let index = self.index.get_or_insert_with(HashMap::new);
        if index.contains_key(&key) {
            Misuse::DuplicateKey(key).abort();
        }

        index.insert(key.clone(), self.slots.len());
        self.slots.push(Slot { key, entry });
    }

    /// Remove the entry under `key` and hand it back
    ///
    /// Later rows shift down by one; their keys keep resolving to the
    /// same entries.
    ///
    /// # Panics
    ///
    /// If nothing was ever added, or `key` is not registered.
    #[track_caller]
    pub fn remove_entry(&mut self, key: &str) -> Box<dyn StatusEntry> {
        let Some(index) = self.index.as_mut() else {
            Misuse::NoEntries.abort();
        };

        let Some(row) = index.remove(key) else {
            Misuse::MissingKey(key.to_string()).abort();
        };

        for stored in index.values_mut() {
            if *stored > row {
                *stored -= 1;
            }
        }

        self.slots.remove(row).entry
    }

    /// Resolve `path` as a key first, then as a decimal row number
    ///
    /// - unknown key that is not an integer: `Err(InvalidPath)`
    /// - integer outside `0..len`: `Ok(None)`
    /// - nothing ever added: `Ok(None)` for any path
    pub fn get(&self, path: &str) -> StatusResult<Option<&dyn StatusEntry>> {
        let Some(index) = self.index.as_ref() else {
            return Ok(None);
        };

        if let Some(&row) = index.get(path) {
            return Ok(Some(self.slots[row].entry.as_ref()));
        }

        let row: i64 = path.parse().map_err(|source| StatusError::InvalidPath {
            segment: path.to_string(),
            source,
        })?;

        if row < 0 || row >= self.slots.len() as i64 {
            return Ok(None);
        }

        Ok(Some(self.slots[row as usize].entry.as_ref()))
    }

    /// Exact key lookup, without the row fallback
    pub fn get_key(&self, key: &str) -> Option<&dyn StatusEntry> {
        let row = *self.index.as_ref()?.get(key)?;
        Some(self.slots[row].entry.as_ref())
    }

    /// Mutable exact key lookup
    pub fn get_key_mut(&mut self, key: &str) -> Option<&mut (dyn StatusEntry + 'static)> {
        let row = *self.index.as_ref()?.get(key)?;
        Some(self.slots[row].entry.as_mut())
    }

    /// Current row of `key`
    pub fn row_of(&self, key: &str) -> Option<usize> {
        self.index.as_ref()?.get(key).copied()
    }

    /// Whether `key` is registered
    pub fn contains_key(&self, key: &str) -> bool {
        self.row_of(key).is_some()
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the array holds no entries
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Keys in row order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.slots.iter().map(|slot| slot.key.as_str())
    }

    /// `(key, entry)` pairs in row order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &dyn StatusEntry)> {
        self.slots
            .iter()
            .map(|slot| (slot.key.as_str(), slot.entry.as_ref()))
    }

    /// JSON array of the entries in row order; keys are not included
    pub fn encode_json(&self) -> StatusResult<Value> {
        self.slots
            .iter()
            .map(|slot| slot.entry.to_json())
            .collect::<StatusResult<Vec<_>>>()
            .map(Value::Array)
    }
}

impl StatusEntry for KeyedArray {
    /// Refresh every entry in row order, stopping at the first failure
    fn update(&mut self) -> StatusResult<()> {
        for slot in &mut self.slots {
            if let Err(err) = slot.entry.update() {
                let reason = err.to_string();
                Logger::warn(
                    "STATUS_REFRESH_FAILED",
                    &[("key", slot.key.as_str()), ("reason", reason.as_str())],
                );
                return Err(err);
            }
        }
        Ok(())
    }

    fn to_json(&self) -> StatusResult<Value> {
        self.encode_json()
    }

    /// Blocks prefixed by primary key, in row order. Empty if nothing was added.
    fn render_human(&self, indent: &str) -> StatusResult<String> {
        if self.index.is_none() {
            return Ok(String::new());
        }
        render_blocks(indent, self.iter())
    }

    fn child(&self, segment: &str) -> StatusResult<Option<&dyn StatusEntry>> {
        self.get(segment)
    }
}

impl fmt::Debug for KeyedArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.keys()).finish()
    }
}
