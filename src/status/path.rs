//! Slash-separated lookups through nested status entries

use super::entry::StatusEntry;
use super::errors::{StatusError, StatusResult};

/// Walk `path` from `root`, one [`child`](StatusEntry::child) lookup per segment
///
/// Empty segments are skipped, so `""` and `"/"` return `root`.
/// Inside a [`KeyedArray`](super::KeyedArray) each segment is a key or
/// a row number.
pub fn resolve<'a>(root: &'a dyn StatusEntry, path: &str) -> StatusResult<&'a dyn StatusEntry> {
    let mut current = root;
    let mut walked = String::new();

    for segment in path.split('/').filter(|s| !s.is_empty()) {
        walked.push('/');
        walked.push_str(segment);

        current = current
            .child(segment)?
            .ok_or_else(|| StatusError::NotFound(walked.clone()))?;
    }

    Ok(current)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status::{KeyedArray, Number, Record};
    use serde_json::json;

    fn tree() -> Record {
        let mut streams = KeyedArray::new();
        streams.add_entry("a.log", Record::new().field("offset", Number::from(10)));
        streams.add_entry("b.log", Record::new().field("offset", Number::from(20)));
        Record::new().field("streams", streams)
    }

    #[test]
    fn test_resolve_root() {
        let root = tree();
        assert!(resolve(&root, "").is_ok());
        assert!(resolve(&root, "/").is_ok());
    }

    #[test]
    fn test_resolve_by_key_and_row() {
        let root = tree();
        let by_key = resolve(&root, "streams/b.log/offset").unwrap();
        let by_row = resolve(&root, "/streams/1/offset/").unwrap();
        assert_eq!(by_key.to_json().unwrap(), json!(20));
        assert_eq!(by_row.to_json().unwrap(), json!(20));
    }

    #[test]
    fn test_resolve_missing_reports_path() {
        let root = tree();
        let err = resolve(&root, "streams/5/offset").err().unwrap();
        assert_eq!(err.to_string(), "no status entry at '/streams/5'");
    }

    #[test]
    fn test_resolve_invalid_segment() {
        let root = tree();
        let err = resolve(&root, "streams/c.log").err().unwrap();
        assert!(matches!(err, StatusError::InvalidPath { .. }));
    }

    #[test]
    fn test_resolve_through_leaf() {
        let root = tree();
        let err = resolve(&root, "streams/0/offset/deeper").err().unwrap();
        assert!(matches!(err, StatusError::NotFound(_)));
    }
}
