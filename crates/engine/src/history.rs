//! Bounded undo/redo buffer with linear-history branch discard.

use std::collections::VecDeque;

pub const DEFAULT_CAPACITY: usize = 20;

/// A capacity-bounded sequence of snapshots plus a cursor.
///
/// Recording after an undo discards the undone branch. When the buffer
/// exceeds its capacity the oldest snapshot is evicted; the cursor keeps
/// addressing the same logical snapshot. `cursor == None` only when the
/// buffer is empty.
#[derive(Debug, Clone)]
pub struct History<T> {
    entries: VecDeque<T>,
    cursor: Option<usize>,
    capacity: usize,
}

impl<T> History<T> {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            cursor: None,
            capacity,
        }
    }

    /// Drops everything and seeds the buffer with a single snapshot.
    pub fn reset(&mut self, seed: T) {
        self.entries.clear();
        self.entries.push_back(seed);
        self.cursor = Some(0);
    }

    /// Appends a snapshot at the cursor, discarding any redo branch and
    /// evicting the oldest entry when over capacity.
    pub fn record(&mut self, snapshot: T) {
        if let Some(cursor) = self.cursor {
            self.entries.truncate(cursor + 1);
        } else {
            self.entries.clear();
        }
        self.entries.push_back(snapshot);
        if self.entries.len() > self.capacity {
            self.entries.pop_front();
        }
        self.cursor = self.entries.len().checked_sub(1);
    }

    /// Steps the cursor back and returns the addressed snapshot; `None` at
    /// the oldest entry. Never modifies the buffer.
    pub fn undo(&mut self) -> Option<&T> {
        let cursor = self.cursor?;
        if cursor == 0 {
            return None;
        }
        self.cursor = Some(cursor - 1);
        self.entries.get(cursor - 1)
    }

    /// Steps the cursor forward and returns the addressed snapshot; `None`
    /// at the newest entry.
    pub fn redo(&mut self) -> Option<&T> {
        let cursor = self.cursor?;
        if cursor + 1 >= self.entries.len() {
            return None;
        }
        self.cursor = Some(cursor + 1);
        self.entries.get(cursor + 1)
    }

    pub fn can_undo(&self) -> bool {
        matches!(self.cursor, Some(c) if c > 0)
    }

    pub fn can_redo(&self) -> bool {
        matches!(self.cursor, Some(c) if c + 1 < self.entries.len())
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T> Default for History<T> {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}
