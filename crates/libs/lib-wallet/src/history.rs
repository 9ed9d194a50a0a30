//! # Swap History
//!
//! Bounded, newest-first list of simulated swaps. Inserting past the capacity
//! silently evicts the oldest record. Records are never modified in place.

use std::collections::VecDeque;

use shared::{SwapFormInput, SwapRecord};

use crate::config::HISTORY_CAPACITY;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SwapHistory {
    /// Front is the most recent record
    records: VecDeque<SwapRecord>,
    capacity: usize,
}

impl Default for SwapHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl SwapHistory {
    pub fn new() -> Self {
        Self {
            records: VecDeque::with_capacity(HISTORY_CAPACITY),
            capacity: HISTORY_CAPACITY,
        }
    }

    /// History pre-filled with the two demonstration swaps the widget shows on first load
    pub fn with_demo_records() -> Self {
        let mut history = Self::new();
        history.records.push_back(SwapRecord::from_form(
            "1".to_string(),
            &SwapFormInput::new("0.001", "0.000997", "0xAddress1"),
        ));
        history.records.push_back(SwapRecord::from_form(
            "2".to_string(),
            &SwapFormInput::new("0.005", "0.004985", "0xAddress2"),
        ));
        history
    }

    /// Add a record as the newest entry, evicting the oldest past capacity
    pub fn push(&mut self, record: SwapRecord) {
        self.records.push_front(record);
        self.records.truncate(self.capacity);
    }

    pub fn contains_id(&self, id: &str) -> bool {
        self.records.iter().any(|r| r.id == id)
    }

    /// `base` if unused, otherwise `base-1`, `base-2`, ...
    pub fn unique_id(&self, base: String) -> String {
        if !self.contains_id(&base) {
            return base;
        }
        let mut n = 1;
        loop {
            let candidate = format!("{base}-{n}");
            if !self.contains_id(&candidate) {
                return candidate;
            }
            n += 1;
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &SwapRecord> {
        self.records.iter()
    }

    pub fn latest(&self) -> Option<&SwapRecord> {
        self.records.front()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn to_vec(&self) -> Vec<SwapRecord> {
        self.records.iter().cloned().collect()
    }
}
