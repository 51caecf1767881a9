//! # Recent Events
//!
//! Bounded buffer of the latest events, exposed as a status entry so the
//! admin interface can show what a stream produced last.

use std::collections::VecDeque;

use serde_json::Value;

use super::descriptor::EventDescriptor;
use super::errors::EventResult;
use super::event::Event;
use crate::status::{StatusEntry, StatusResult};

/// Default number of events kept
pub const DEFAULT_CAPACITY: usize = 10;

/// FIFO of the last `capacity` events
#[derive(Debug, Clone)]
pub struct RecentEvents {
    capacity: usize,
    events: VecDeque<Event>,
    /// Events ever pushed, including evicted ones
    total: u64,
}

impl Default for RecentEvents {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl RecentEvents {
    /// A capacity of zero is raised to one
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            events: VecDeque::with_capacity(capacity),
            total: 0,
        }
    }

    /// Append an event, evicting the oldest when full
    pub fn push(&mut self, event: Event) {
        self.events.push_back(event);
        while self.events.len() > self.capacity {
            self.events.pop_front();
        }
        self.total += 1;
    }

    /// Append the event carried by `descriptor`
    pub fn push_descriptor(&mut self, descriptor: &EventDescriptor) -> EventResult<()> {
        self.push(descriptor.decode_event()?);
        Ok(())
    }

    /// Oldest first
    pub fn iter(&self) -> impl Iterator<Item = &Event> {
        self.events.iter()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn total(&self) -> u64 {
        self.total
    }
}

impl StatusEntry for RecentEvents {
    fn to_json(&self) -> StatusResult<Value> {
        self.events
            .iter()
            .map(StatusEntry::to_json)
            .collect::<StatusResult<Vec<_>>>()
            .map(Value::Array)
    }

    /// One `position: {json}` line per event
    fn render_human(&self, indent: &str) -> StatusResult<String> {
        let mut lines = Vec::with_capacity(self.events.len());
        for (position, event) in self.events.iter().enumerate() {
            lines.push(format!("{}{}: {}", indent, position, event.render_human(indent)?));
        }
        Ok(lines.join("\n"))
    }

    fn child(&self, segment: &str) -> StatusResult<Option<&dyn StatusEntry>> {
        Ok(segment
            .parse::<usize>()
            .ok()
            .and_then(|position| self.events.get(position))
            .map(|event| event as &dyn StatusEntry))
    }
}
