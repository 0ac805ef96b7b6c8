//! Append-only message log.

use super::ChatEntry;

/// Ordered sequence of [`ChatEntry`], insertion order = chronological order.
///
/// Grows for the lifetime of the process: there is no removal, compaction or size bound.
#[derive(Debug, Clone, Default)]
pub struct MessageLog {
    entries: Vec<ChatEntry>,
}

impl MessageLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry. Never fails and never rejects input.
    pub fn append(&mut self, entry: ChatEntry) {
        self.entries.push(entry);
    }

    /// Every entry ever appended, in append order
    pub fn snapshot(&self) -> &[ChatEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
