//! Keyed Array Tests
//!
//! - Key and row lookups agree before and after removals
//! - Lookup paths: key first, then decimal row
//! - JSON form follows row order; human form is keyed
//! - Refresh stops at the first failure

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use logstat::status::{
    render, Format, KeyedArray, Number, Record, StatusEntry, StatusError, StatusResult, Text,
};
use serde_json::{json, Value};

// =============================================================================
// Helper Functions
// =============================================================================

fn json_at(array: &KeyedArray, path: &str) -> Option<Value> {
    array
        .get(path)
        .unwrap()
        .map(|entry| entry.to_json().unwrap())
}

/// Entry that counts refreshes and optionally fails them
struct Probe {
    refreshed: Arc<AtomicUsize>,
    fail: bool,
}

impl Probe {
    fn new(refreshed: &Arc<AtomicUsize>, fail: bool) -> Self {
        Self {
            refreshed: Arc::clone(refreshed),
            fail,
        }
    }
}

impl StatusEntry for Probe {
    fn update(&mut self) -> StatusResult<()> {
        self.refreshed.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(StatusError::refresh("probe failed"));
        }
        Ok(())
    }

    fn to_json(&self) -> StatusResult<Value> {
        Ok(json!(self.refreshed.load(Ordering::SeqCst)))
    }

    fn render_human(&self, _indent: &str) -> StatusResult<String> {
        Ok(self.refreshed.load(Ordering::SeqCst).to_string())
    }
}

// =============================================================================
// Dual Addressing
// =============================================================================

/// Every key and every original row resolve to the inserted entry.
#[test]
fn test_key_and_row_lookups_agree() {
    let mut array = KeyedArray::new();
    let keys = ["alpha", "beta", "gamma", "delta", "epsilon"];
    for (i, key) in keys.iter().enumerate() {
        array.add_entry(*key, Number::from(i as i64 * 10));
    }

    for (i, key) in keys.iter().enumerate() {
        let expected = json!(i * 10);
        assert_eq!(json_at(&array, key), Some(expected.clone()));
        assert_eq!(json_at(&array, &i.to_string()), Some(expected));
    }
}

/// Removing a middle key keeps later keys pointing at their own entries.
#[test]
fn test_remove_middle_key_shifts_rows() {
    let mut array = KeyedArray::new();
    array.add_entry("A", Text::from("value-a"));
    array.add_entry("B", Text::from("value-b"));
    array.add_entry("C", Text::from("value-c"));

    array.remove_entry("B");

    assert!(array.get("B").is_err(), "removed key is no longer a key");
    assert_eq!(json_at(&array, "C"), Some(json!("value-c")));
    assert_eq!(json_at(&array, "1"), Some(json!("value-c")));
    assert_eq!(json_at(&array, "A"), Some(json!("value-a")));
    assert_eq!(json_at(&array, "2"), None);
}

/// Removing then re-adding a key appends it at the end.
#[test]
fn test_readd_after_remove() {
    let mut array = KeyedArray::new();
    array.add_entry("A", Number::from(1));
    array.add_entry("B", Number::from(2));
    array.add_entry("C", Number::from(3));

    array.remove_entry("A");
    array.add_entry("A", Number::from(4));

    assert_eq!(array.keys().collect::<Vec<_>>(), vec!["B", "C", "A"]);
    assert_eq!(json_at(&array, "A"), Some(json!(4)));
    assert_eq!(json_at(&array, "2"), Some(json!(4)));
    assert_eq!(json_at(&array, "B"), Some(json!(2)));
}

/// Many removals in arbitrary order never desynchronize the index.
#[test]
fn test_repeated_removals_keep_index_dense() {
    let mut array = KeyedArray::new();
    for i in 0..10 {
        array.add_entry(format!("k{}", i), Number::from(i));
    }

    for key in ["k3", "k0", "k9", "k5"] {
        array.remove_entry(key);
    }

    let remaining: Vec<&str> = array.keys().collect();
    assert_eq!(remaining, vec!["k1", "k2", "k4", "k6", "k7", "k8"]);
    for (row, key) in remaining.iter().enumerate() {
        assert_eq!(array.row_of(key), Some(row));
        assert_eq!(json_at(&array, key), json_at(&array, &row.to_string()));
    }
}

// =============================================================================
// Lookup Paths
// =============================================================================

/// Neither a key nor an integer: parse error, not "not found".
#[test]
fn test_non_numeric_unknown_path_is_error() {
    let mut array = KeyedArray::new();
    array.add_entry("a", Number::from(1));

    let err = array.get("bogus").err().unwrap();
    assert!(matches!(err, StatusError::InvalidPath { ref segment, .. } if segment == "bogus"));
}

/// Out-of-range rows are "not found" without an error.
#[test]
fn test_out_of_range_row_is_not_found() {
    let mut array = KeyedArray::new();
    array.add_entry("a", Number::from(1));
    array.add_entry("b", Number::from(2));
    array.add_entry("c", Number::from(3));

    assert!(array.get("5").unwrap().is_none());
    assert!(array.get("3").unwrap().is_none());
    assert!(array.get("-1").unwrap().is_none());
}

/// An array that never had an entry finds nothing and reports no error.
#[test]
fn test_uninitialized_array_lookup() {
    let array = KeyedArray::new();
    assert!(array.get("anything").unwrap().is_none());
    assert!(array.get("0").unwrap().is_none());
}

// =============================================================================
// Encodings
// =============================================================================

/// JSON is an array in row order with no key names.
#[test]
fn test_json_follows_row_order() {
    let mut array = KeyedArray::new();
    array.add_entry("zulu", Text::from("X"));
    array.add_entry("alpha", Text::from("Y"));
    array.add_entry("mike", Text::from("Z"));

    let encoded = array.encode_json().unwrap();
    assert_eq!(encoded, json!(["X", "Y", "Z"]));
    assert!(!encoded.to_string().contains("zulu"));
}

/// An entry that cannot encode fails the whole array.
#[test]
fn test_json_failure_propagates() {
    let mut array = KeyedArray::new();
    array.add_entry("ok", Number::from(1));
    array.add_entry("bad", Number::from(f64::INFINITY));

    assert!(matches!(
        array.encode_json(),
        Err(StatusError::Unsupported(_))
    ));
}

/// Single-line entries render inline.
#[test]
fn test_human_single_line() {
    let mut array = KeyedArray::new();
    array.add_entry("count", Text::from("42"));
    assert_eq!(array.render_human("").unwrap(), "count: 42");
}

/// Multi-line entries render as an indented block.
#[test]
fn test_human_nested_block() {
    let mut nested = KeyedArray::new();
    nested.add_entry("a", Number::from(1));
    nested.add_entry("b", Number::from(2));

    let mut array = KeyedArray::new();
    array.add_entry("count", nested);
    array.add_entry("after", Number::from(3));

    assert_eq!(
        array.render_human("").unwrap(),
        "count:\n  a: 1\n  b: 2\nafter: 3"
    );
}

/// Indentation accumulates per nesting level.
#[test]
fn test_human_two_levels() {
    let mut inner = KeyedArray::new();
    inner.add_entry("x", Number::from(1));
    inner.add_entry("y", Number::from(2));

    let mut middle = KeyedArray::new();
    middle.add_entry("inner", inner);
    middle.add_entry("z", Number::from(3));

    let mut outer = KeyedArray::new();
    outer.add_entry("middle", middle);

    assert_eq!(
        outer.render_human("").unwrap(),
        "middle:\n  inner:\n    x: 1\n    y: 2\n  z: 3"
    );
}

/// Never-used arrays render nothing; rendered documents end with a newline.
#[test]
fn test_human_document() {
    assert_eq!(KeyedArray::new().render_human("").unwrap(), "");

    let mut array = KeyedArray::new();
    array.add_entry("count", Number::from(42));
    assert_eq!(render(&array, Format::Human).unwrap(), "count: 42\n");
}

// =============================================================================
// Refresh
// =============================================================================

/// The failing entry's error is returned and later entries are not refreshed.
#[test]
fn test_update_stops_at_first_failure() {
    let first = Arc::new(AtomicUsize::new(0));
    let second = Arc::new(AtomicUsize::new(0));
    let third = Arc::new(AtomicUsize::new(0));

    let mut array = KeyedArray::new();
    array.add_entry("first", Probe::new(&first, false));
    array.add_entry("second", Probe::new(&second, true));
    array.add_entry("third", Probe::new(&third, false));

    let err = array.update().unwrap_err();
    assert_eq!(err.to_string(), "refresh failed: probe failed");
    assert_eq!(first.load(Ordering::SeqCst), 1);
    assert_eq!(second.load(Ordering::SeqCst), 1);
    assert_eq!(third.load(Ordering::SeqCst), 0);
}

/// Updates cascade through nested containers.
#[test]
fn test_update_reaches_nested_entries() {
    let counter = Arc::new(AtomicUsize::new(0));

    let mut nested = KeyedArray::new();
    nested.add_entry("probe", Probe::new(&counter, false));
    let mut array = KeyedArray::new();
    array.add_entry("nested", Record::new().field("inner", nested));

    array.update().unwrap();
    array.update().unwrap();
    assert_eq!(counter.load(Ordering::SeqCst), 2);
}

/// Aggregate with its own refresh that does not delegate to its children
struct Snapshotted {
    entries: KeyedArray,
    refreshes: usize,
}

impl StatusEntry for Snapshotted {
    fn update(&mut self) -> StatusResult<()> {
        self.refreshes += 1;
        Ok(())
    }

    fn to_json(&self) -> StatusResult<Value> {
        self.entries.to_json()
    }

    fn render_human(&self, indent: &str) -> StatusResult<String> {
        self.entries.render_human(indent)
    }

    fn child(&self, segment: &str) -> StatusResult<Option<&dyn StatusEntry>> {
        self.entries.get(segment)
    }
}

/// An overriding aggregate replaces the default traversal.
#[test]
fn test_overridden_refresh_skips_children() {
    let counter = Arc::new(AtomicUsize::new(0));
    let mut entries = KeyedArray::new();
    entries.add_entry("probe", Probe::new(&counter, true));

    let mut aggregate = Snapshotted {
        entries,
        refreshes: 0,
    };
    aggregate.update().unwrap();

    assert_eq!(aggregate.refreshes, 1);
    assert_eq!(counter.load(Ordering::SeqCst), 0);
}
