use log::trace;

use crate::editing::{Document, Snapshot};

/// Number of snapshots each history stack keeps unless configured otherwise
pub const DEFAULT_HISTORY_CAPACITY: usize = 3;

/// Bounded LIFO store of document snapshots
///
/// An editor keeps two of these, one for undo and one for redo.
///
/// ## Eviction
///
/// When a push arrives while the stack is full, the entry on top (the most
/// recently pushed one) is dropped to make room, not the oldest one at the
/// bottom. Repeated pushes at capacity therefore keep replacing the freshest
/// entry while the older entries stay put:
///
/// ```rust
/// # use linepad_engine::editing::{Document, HistoryStack};
/// let mut stack = HistoryStack::new(2);
/// for text in ["a", "b", "c"] {
///     stack.push_state(&Document::from_blob(text));
/// }
/// assert_eq!(stack.pop_state().map(|s| s.flatten()), Some("c".to_string()));
/// assert_eq!(stack.pop_state().map(|s| s.flatten()), Some("a".to_string()));
/// ```
///
/// A capacity of zero disables the stack: pushes are discarded.
#[derive(Debug, Clone)]
pub struct HistoryStack {
    entries: Vec<Snapshot>,
    capacity: usize,
}

impl HistoryStack {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Snapshot `document` and push it, evicting the current top when full
    pub fn push_state(&mut self, document: &Document) {
        if self.capacity == 0 {
            return;
        }
        if self.entries.len() >= self.capacity {
            self.entries.pop();
            trace!("history full at {}, dropped top entry", self.capacity);
        }
        self.entries.push(Snapshot::capture(document));
    }

    /// Move the top snapshot out of the stack
    pub fn pop_state(&mut self) -> Option<Snapshot> {
        self.entries.pop()
    }

    pub fn top(&self) -> Option<&Snapshot> {
        self.entries.last()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Drop every entry
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl Default for HistoryStack {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn drain(stack: &mut HistoryStack) -> Vec<String> {
        std::iter::from_fn(|| stack.pop_state())
            .map(|snapshot| snapshot.flatten())
            .collect()
    }

    #[test]
    fn test_new_stack_is_empty() {
        let mut stack = HistoryStack::default();

        assert!(stack.is_empty());
        assert_eq!(stack.capacity(), DEFAULT_HISTORY_CAPACITY);
        assert!(stack.pop_state().is_none());
    }

    #[test]
    fn test_pop_returns_most_recent_first() {
        let mut stack = HistoryStack::new(3);
        stack.push_state(&Document::from_blob("one"));
        stack.push_state(&Document::from_blob("two"));

        assert_eq!(drain(&mut stack), vec!["two", "one"]);
    }

    #[test]
    fn test_push_at_capacity_discards_previous_top() {
        let mut stack = HistoryStack::new(3);
        for text in ["first", "second", "third", "fourth"] {
            stack.push_state(&Document::from_blob(text));
        }

        assert_eq!(stack.len(), 3);
        // "third" was on top when "fourth" arrived, so it is the one dropped
        assert_eq!(drain(&mut stack), vec!["fourth", "second", "first"]);
    }

    #[test]
    fn test_repeated_pushes_at_capacity_keep_bottom_entries() {
        let mut stack = HistoryStack::new(3);
        for n in 0..10 {
            stack.push_state(&Document::from_blob(&n.to_string()));
        }

        assert_eq!(stack.len(), 3);
        assert_eq!(drain(&mut stack), vec!["9", "1", "0"]);
    }

    #[test]
    fn test_pushed_snapshot_does_not_follow_later_edits() {
        let mut stack = HistoryStack::new(3);
        let mut doc = Document::from_blob("before");
        stack.push_state(&doc);

        doc.rebuild("after");

        assert_eq!(stack.top().map(Snapshot::flatten), Some("before".to_string()));
    }

    #[test]
    fn test_clear_drops_everything() {
        let mut stack = HistoryStack::new(3);
        stack.push_state(&Document::new());
        stack.push_state(&Document::new());
        stack.clear();

        assert!(stack.is_empty());
        assert_eq!(stack.len(), 0);
    }

    #[test]
    fn test_zero_capacity_discards_pushes() {
        let mut stack = HistoryStack::new(0);
        stack.push_state(&Document::from_blob("ignored"));

        assert!(stack.is_empty());
    }
}
