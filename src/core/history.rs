//! Key-press history tracking.
//!
//! Every transition the calculator performs is recorded as a [`PressRecord`]
//! in a bounded [`PressHistory`], oldest first.

use super::key::Key;
use super::phase::Phase;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::time::Duration;

/// Record of a single key press.
///
/// # Example
///
/// ```rust
/// use pocketcalc::core::{Key, Phase, PressRecord};
/// use chrono::Utc;
///
/// let record = PressRecord {
///     key: Key::Digit(5),
///     from: Phase::Entry,
///     to: Phase::Entry,
///     display: "5".to_string(),
///     timestamp: Utc::now(),
/// };
/// assert_eq!(record.display, "5");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PressRecord {
    /// The button that was pressed
    pub key: Key,
    /// Phase before the press
    pub from: Phase,
    /// Phase after the press
    pub to: Phase,
    /// Display string emitted to listeners
    pub display: String,
    /// When the press was handled
    pub timestamp: DateTime<Utc>,
}

/// Ordered, bounded history of key presses.
///
/// Once `capacity` records are held, recording a new one drops the oldest.
/// A capacity of zero disables recording.
///
/// # Example
///
/// ```rust
/// use pocketcalc::core::{Key, Phase, PressHistory, PressRecord};
/// use chrono::Utc;
///
/// let mut history = PressHistory::with_capacity(2);
/// for (key, display) in [(Key::Digit(1), "1"), (Key::Digit(2), "12"), (Key::Equals, "12")] {
///     history.record(PressRecord {
///         key,
///         from: Phase::Entry,
///         to: Phase::Entry,
///         display: display.to_string(),
///         timestamp: Utc::now(),
///     });
/// }
///
/// assert_eq!(history.len(), 2);
/// assert_eq!(history.keys(), vec![Key::Digit(2), Key::Equals]);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PressHistory {
    records: VecDeque<PressRecord>,
    capacity: usize,
}

impl Default for PressHistory {
    fn default() -> Self {
        Self::with_capacity(crate::config::DEFAULT_HISTORY_CAPACITY)
    }
}

impl PressHistory {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            records: VecDeque::with_capacity(capacity.min(64)),
            capacity,
        }
    }

    /// Append a record, evicting the oldest one if the history is full.
    pub fn record(&mut self, record: PressRecord) {
        if self.capacity == 0 {
            return;
        }
        while self.records.len() >= self.capacity {
            self.records.pop_front();
        }
        self.records.push_back(record);
    }

    /// Iterate over retained records, oldest first.
    pub fn entries(&self) -> impl Iterator<Item = &PressRecord> {
        self.records.iter()
    }

    /// The keys pressed, oldest first.
    pub fn keys(&self) -> Vec<Key> {
        self.records.iter().map(|r| r.key).collect()
    }

    pub fn last(&self) -> Option<&PressRecord> {
        self.records.back()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Time between the first and last retained press.
    ///
    /// Returns `None` if the history is empty.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.records.front()?, self.records.back()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }
}
