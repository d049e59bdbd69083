//! Bounded command history with cursor recall.
//!
//! The cursor counts back from the newest entry: `Some(0)` is the most
//! recent command, `None` means nothing is selected (blank input).

use std::collections::VecDeque;

/// How many commands are kept when no limit is configured.
pub const DEFAULT_HISTORY_LIMIT: usize = 50;

/// Direction for [`CommandHistory::recall`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecallDirection {
    /// Toward older entries.
    Up,
    /// Toward newer entries, ending at blank input.
    Down,
}

#[derive(Debug, Clone)]
pub struct CommandHistory {
    entries: VecDeque<String>,
    limit: usize,
    cursor: Option<usize>,
}

impl Default for CommandHistory {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_LIMIT)
    }
}

impl CommandHistory {
    /// A history holding at most `limit` entries (at least one).
    pub fn new(limit: usize) -> Self {
        let limit = limit.max(1);
        Self {
            entries: VecDeque::with_capacity(limit),
            limit,
            cursor: None,
        }
    }

    /// Record a submitted line, evicting the oldest beyond the cap.
    ///
    /// Always clears the recall cursor.
    pub fn push(&mut self, line: impl Into<String>) {
        if self.entries.len() == self.limit {
            self.entries.pop_front();
        }
        self.entries.push_back(line.into());
        self.cursor = None;
    }

    /// Move the cursor and return the selected entry.
    ///
    /// `Up` stops at the oldest entry and keeps returning it. `Down` past the
    /// newest entry clears the selection and returns `None`.
    pub fn recall(&mut self, direction: RecallDirection) -> Option<&str> {
        if self.entries.is_empty() {
            return None;
        }
        let oldest = self.entries.len() - 1;
        self.cursor = match (direction, self.cursor) {
            (RecallDirection::Up, None) => Some(0),
            (RecallDirection::Up, Some(at)) => Some((at + 1).min(oldest)),
            (RecallDirection::Down, None | Some(0)) => None,
            (RecallDirection::Down, Some(at)) => Some(at - 1),
        };
        self.selected()
    }

    /// The entry under the cursor, if any.
    pub fn selected(&self) -> Option<&str> {
        let back = self.cursor?;
        self.entries
            .get(self.entries.len() - 1 - back)
            .map(String::as_str)
    }

    pub fn reset_cursor(&mut self) {
        self.cursor = None;
    }

    /// Entries from oldest to newest.
    pub fn entries(&self) -> impl DoubleEndedIterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
