//! Named fields rendered as one object

use serde_json::{Map, Value};

use super::array::KeyedArray;
use super::entry::StatusEntry;
use super::errors::StatusResult;

/// A set of named status fields
///
/// Fields keep their insertion order in the human form. The JSON form
/// is an object keyed by field name.
#[derive(Debug, Default)]
pub struct Record {
    fields: KeyedArray,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`insert`](Self::insert)
    #[track_caller]
    pub fn field(mut self, name: impl Into<String>, entry: impl StatusEntry + 'static) -> Self {
        self.insert(name, entry);
        self
    }

    /// Add a field
    ///
    /// # Panics
    ///
    /// If `name` is empty or already present.
    #[track_caller]
    pub fn insert(&mut self, name: impl Into<String>, entry: impl StatusEntry + 'static) {
        self.fields.add_entry(name, entry);
    }

    pub fn get(&self, name: &str) -> Option<&dyn StatusEntry> {
        self.fields.get_key(name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl StatusEntry for Record {
    fn update(&mut self) -> StatusResult<()> {
        self.fields.update()
    }

    fn to_json(&self) -> StatusResult<Value> {
        let mut object = Map::new();
        for (name, entry) in self.fields.iter() {
            object.insert(name.to_string(), entry.to_json()?);
        }
        Ok(Value::Object(object))
    }

    fn render_human(&self, indent: &str) -> StatusResult<String> {
        self.fields.render_human(indent)
    }

    fn child(&self, segment: &str) -> StatusResult<Option<&dyn StatusEntry>> {
        Ok(self.get(segment))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status::{Flag, Number, Text};
    use serde_json::json;

    fn sample() -> Record {
        Record::new()
            .field("path", Text::from("/var/log/app.log"))
            .field("offset", Number::from(120))
            .field("dead", Flag(false))
    }

    #[test]
    fn test_record_json_object() {
        assert_eq!(
            sample().to_json().unwrap(),
            json!({"path": "/var/log/app.log", "offset": 120, "dead": false})
        );
    }

    #[test]
    fn test_record_human_keeps_field_order() {
        assert_eq!(
            sample().render_human("").unwrap(),
            "path: /var/log/app.log\noffset: 120\ndead: false"
        );
    }

    #[test]
    fn test_record_child_by_name_only() {
        let record = sample();
        assert!(record.child("offset").unwrap().is_some());
        assert!(record.child("1").unwrap().is_none());
    }

    #[test]
    #[should_panic(expected = "already exists")]
    fn test_record_duplicate_field_panics() {
        let _ = sample().field("path", Text::from("again"));
    }
}
