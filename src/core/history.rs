//! Linear undo log of visited states.
//!
//! The log always holds at least one entry (the initial state) and a cursor
//! pointing at the active entry. Writes branch at the cursor: anything after
//! it is discarded before the new entry is appended. Undo and redo only move
//! the cursor.

use super::id::StateId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// A state recorded in the history, with the time it was recorded.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// The state that became active
    pub state: StateId,
    /// When the entry was appended
    pub recorded_at: DateTime<Utc>,
}

impl HistoryEntry {
    fn now(state: StateId) -> Self {
        Self {
            state,
            recorded_at: Utc::now(),
        }
    }
}

/// Ordered history of visited states with an undo/redo cursor.
///
/// # Example
///
/// ```rust
/// use waypoint::core::History;
///
/// let mut history = History::new("idle".into());
/// history.push("running".into());
/// history.push("stopped".into());
///
/// assert_eq!(history.undo().map(|s| s.as_str()), Some("running"));
/// history.push("idle".into());
///
/// // the "stopped" branch is gone
/// assert!(history.redo().is_none());
/// assert_eq!(history.len(), 3);
/// ```
#[derive(Clone, Debug, Serialize)]
pub struct History {
    entries: Vec<HistoryEntry>,
    cursor: usize,
}

impl History {
    /// Start a history holding only `initial`.
    pub fn new(initial: StateId) -> Self {
        Self {
            entries: vec![HistoryEntry::now(initial)],
            cursor: 0,
        }
    }

    /// The active entry.
    pub fn current(&self) -> &HistoryEntry {
        &self.entries[self.cursor]
    }

    /// Record `state` after the cursor, discarding any redoable entries.
    pub fn push(&mut self, state: StateId) {
        self.cursor += 1;
        self.entries.truncate(self.cursor);
        self.entries.push(HistoryEntry::now(state));
    }

    /// Step the cursor back, returning the newly active state.
    pub fn undo(&mut self) -> Option<&StateId> {
        if !self.can_undo() {
            return None;
        }
        self.cursor -= 1;
        Some(&self.entries[self.cursor].state)
    }

    /// Step the cursor forward, returning the newly active state.
    pub fn redo(&mut self) -> Option<&StateId> {
        if !self.can_redo() {
            return None;
        }
        self.cursor += 1;
        Some(&self.entries[self.cursor].state)
    }

    /// Whether an earlier entry exists.
    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    /// Whether a redoable entry exists after the cursor.
    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    /// Collapse the log to its first entry.
    pub fn clear(&mut self) {
        self.entries.truncate(1);
        self.cursor = 0;
    }

    /// Index of the active entry.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of recorded entries, including redoable ones.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false`: the initial entry is never removed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// States in recording order.
    pub fn path(&self) -> Vec<&StateId> {
        self.entries.iter().map(|entry| &entry.state).collect()
    }

    /// All recorded entries with their timestamps.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Time between the first and the last recorded entry.
    ///
    /// Returns `None` if the clock went backwards between the two.
    pub fn duration(&self) -> Option<Duration> {
        let first = self.entries.first()?;
        let last = self.entries.last()?;
        last.recorded_at
            .signed_duration_since(first.recorded_at)
            .to_std()
            .ok()
    }
}
