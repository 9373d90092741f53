// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Fixed-capacity ring buffer of (event, features, output, state) records
//!
//! ```text
//!   slots:  [ e4 | e5 | e2 | e3 ]      capacity 4, count 4
//!                       ^head          next write overwrites e2
//!   get(0) = e2 (oldest) ... get(3) = e5 (newest)
//! ```

use serde::{Deserialize, Serialize};

use crate::action::Output;
use crate::error::{Result, StructureError};
use crate::features::Features;
use crate::input::InputEvent;
use crate::pet_state::PetState;

/// Capacity used by the device
pub const DEFAULT_LOG_CAPACITY: usize = 100;

/// One logged event
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub timestamp_ms: u64,
    pub input_event: InputEvent,
    pub features: Features,
    pub output: Output,
    /// State after the event was processed
    pub state_after: PetState,
}

#[derive(Debug, Clone)]
pub struct EventLog {
    slots: Vec<LogEntry>,
    capacity: usize,
    /// Next write position
    head: usize,
    count: usize,
}

impl EventLog {
    pub fn new() -> Self {
        Self {
            slots: Vec::with_capacity(DEFAULT_LOG_CAPACITY),
            capacity: DEFAULT_LOG_CAPACITY,
            head: 0,
            count: 0,
        }
    }

    pub fn with_capacity(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(StructureError::ZeroCapacity);
        }
        Ok(Self {
            slots: Vec::with_capacity(capacity),
            capacity,
            head: 0,
            count: 0,
        })
    }

    /// Append an entry, overwriting the oldest one when full
    pub fn append(&mut self, entry: LogEntry) {
        if self.slots.len() < self.capacity {
            self.slots.push(entry);
        } else {
            self.slots[self.head] = entry;
        }
        self.head = (self.head + 1) % self.capacity;
        if self.count < self.capacity {
            self.count += 1;
        }
    }

    /// Entry at `index`, where 0 is the oldest retained entry
    pub fn get(&self, index: usize) -> Option<&LogEntry> {
        if index >= self.count {
            return None;
        }
        let start = if self.count == self.capacity { self.head } else { 0 };
        self.slots.get((start + index) % self.capacity)
    }

    /// Iterate oldest-first
    pub fn iter(&self) -> impl Iterator<Item = &LogEntry> + '_ {
        (0..self.count).filter_map(move |i| self.get(i))
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.slots.clear();
        self.head = 0;
        self.count = 0;
    }
}

impl Default for EventLog {
    fn default() -> Self {
        Self::new()
    }
}
