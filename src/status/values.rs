//! Leaf status entries

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use serde_json::Value;

use super::entry::{indent_lines, render_value, StatusEntry};
use super::errors::{StatusError, StatusResult};

/// A numeric value
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl From<i32> for Number {
    fn from(value: i32) -> Self {
        Number::Int(i64::from(value))
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Number::Int(value)
    }
}

impl From<u64> for Number {
    fn from(value: u64) -> Self {
        match i64::try_from(value) {
            Ok(value) => Number::Int(value),
            Err(_) => Number::Float(value as f64),
        }
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Float(value)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(value) => write!(f, "{}", value),
            Number::Float(value) => write!(f, "{}", value),
        }
    }
}

impl StatusEntry for Number {
    fn to_json(&self) -> StatusResult<Value> {
        match *self {
            Number::Int(value) => Ok(Value::from(value)),
            Number::Float(value) => serde_json::Number::from_f64(value)
                .map(Value::Number)
                .ok_or_else(|| StatusError::Unsupported(format!("non-finite number {}", value))),
        }
    }

    fn render_human(&self, _indent: &str) -> StatusResult<String> {
        Ok(self.to_string())
    }
}

/// A string value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Text(pub String);

impl From<&str> for Text {
    fn from(value: &str) -> Self {
        Text(value.to_string())
    }
}

impl From<String> for Text {
    fn from(value: String) -> Self {
        Text(value)
    }
}

impl StatusEntry for Text {
    fn to_json(&self) -> StatusResult<Value> {
        Ok(Value::String(self.0.clone()))
    }

    fn render_human(&self, indent: &str) -> StatusResult<String> {
        Ok(indent_lines(&self.0, indent))
    }
}

/// A boolean value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Flag(pub bool);

impl StatusEntry for Flag {
    fn to_json(&self) -> StatusResult<Value> {
        Ok(Value::Bool(self.0))
    }

    fn render_human(&self, _indent: &str) -> StatusResult<String> {
        Ok(self.0.to_string())
    }
}

/// A live counter shared between a producer and the status tree
///
/// Clones share the same count; the entry reads it at render time.
#[derive(Debug, Clone, Default)]
pub struct Counter(Arc<AtomicU64>);

impl Counter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&self) {
        self.add(1);
    }

    pub fn add(&self, amount: u64) {
        self.0.fetch_add(amount, Ordering::Relaxed);
    }

    pub fn get(&self) -> u64 {
        self.0.load(Ordering::Relaxed)
    }
}

impl StatusEntry for Counter {
    fn to_json(&self) -> StatusResult<Value> {
        Ok(Value::from(self.get()))
    }

    fn render_human(&self, _indent: &str) -> StatusResult<String> {
        Ok(self.get().to_string())
    }
}

type RefreshFn = Box<dyn FnMut() -> StatusResult<Value> + Send>;

/// An entry computed by a producer closure on every refresh
///
/// The value is `null` until the first [`update`](StatusEntry::update).
pub struct Callback {
    refresh: RefreshFn,
    value: Value,
}

impl Callback {
    pub fn new<F>(refresh: F) -> Self
    where
        F: FnMut() -> StatusResult<Value> + Send + 'static,
    {
        Self {
            refresh: Box::new(refresh),
            value: Value::Null,
        }
    }

    /// Last value produced by the closure
    pub fn value(&self) -> &Value {
        &self.value
    }
}

impl fmt::Debug for Callback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callback").field("value", &self.value).finish()
    }
}

impl StatusEntry for Callback {
    fn update(&mut self) -> StatusResult<()> {
        self.value = (self.refresh)()?;
        Ok(())
    }

    fn to_json(&self) -> StatusResult<Value> {
        Ok(self.value.clone())
    }

    fn render_human(&self, indent: &str) -> StatusResult<String> {
        Ok(render_value(&self.value, indent))
    }
}
