//! Bounded undo history.
//!
//! A linear buffer of [`Surface`] snapshots plus a cursor marking the entry
//! currently displayed. Committing an operation pushes a snapshot; undo and
//! redo only move the cursor, so they never allocate. The buffer is capped:
//! once full, the oldest snapshot is evicted first-in-first-out.
//!
//! Invariants:
//! - the cursor is always inside the buffer when the buffer is non-empty
//! - a push prunes every entry beyond the cursor, so redo is only reachable
//!   after an undo and never after a fresh commit
//! - the length never exceeds the cap
//!
//! [`Surface`]: crate::decode::Surface

use crate::decode::Surface;

/// Default number of snapshots retained.
pub const DEFAULT_CAP: usize = 20;

/// Bounded linear undo buffer of surface snapshots.
#[derive(Debug, Clone)]
pub struct History {
    entries: Vec<Surface>,
    /// Index of the current entry; `None` while the buffer is empty.
    cursor: Option<usize>,
    cap: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

impl History {
    /// Create an empty history with the default cap.
    pub fn new() -> Self {
        Self::with_cap(DEFAULT_CAP)
    }

    /// Create an empty history retaining at most `cap` snapshots.
    ///
    /// A zero cap would make `push` impossible to satisfy, so it is
    /// rejected up front.
    pub fn with_cap(cap: usize) -> Self {
        assert!(cap > 0, "history cap must be at least 1");
        Self {
            entries: Vec::new(),
            cursor: None,
            cap,
        }
    }

    /// Commit a snapshot as the new current entry.
    ///
    /// Entries beyond the cursor (redo states left over from undos) are
    /// discarded first. If the buffer then overflows the cap, the oldest
    /// entry is evicted. Either way the cursor ends on the new entry.
    pub fn push(&mut self, surface: Surface) {
        if let Some(cursor) = self.cursor {
            self.entries.truncate(cursor + 1);
        }

        self.entries.push(surface);
        if self.entries.len() > self.cap {
            self.entries.remove(0);
        }
        self.cursor = Some(self.entries.len() - 1);
    }

    /// Step the cursor back one entry.
    ///
    /// Returns the newly current surface, or `None` if there is nothing to
    /// undo (cursor at the start, or empty history).
    pub fn undo(&mut self) -> Option<&Surface> {
        let cursor = self.cursor?;
        if cursor == 0 {
            return None;
        }
        self.cursor = Some(cursor - 1);
        self.entries.get(cursor - 1)
    }

    /// Step the cursor forward one entry.
    ///
    /// Returns the newly current surface, or `None` if there is nothing to
    /// redo.
    pub fn redo(&mut self) -> Option<&Surface> {
        let cursor = self.cursor?;
        if cursor + 1 >= self.entries.len() {
            return None;
        }
        self.cursor = Some(cursor + 1);
        self.entries.get(cursor + 1)
    }

    /// Drop every entry and return to the empty state.
    ///
    /// Used when a new original image is loaded.
    pub fn reset(&mut self) {
        self.entries.clear();
        self.cursor = None;
    }

    /// The surface at the cursor, or `None` while empty.
    pub fn current(&self) -> Option<&Surface> {
        self.entries.get(self.cursor?)
    }

    /// True if an undo would change the current entry.
    pub fn can_undo(&self) -> bool {
        matches!(self.cursor, Some(c) if c > 0)
    }

    /// True if a redo would change the current entry.
    pub fn can_redo(&self) -> bool {
        matches!(self.cursor, Some(c) if c + 1 < self.entries.len())
    }

    /// Number of retained snapshots.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if no snapshot has been pushed since creation or reset.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The cursor position, or `None` while empty.
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// The configured snapshot cap.
    pub fn cap(&self) -> usize {
        self.cap
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A tiny 1x1 surface whose red channel tags the snapshot.
    fn snapshot(tag: u8) -> Surface {
        Surface::new(1, 1, vec![tag, 0, 0])
    }

    fn tag_of(surface: &Surface) -> u8 {
        surface.pixels[0]
    }

    #[test]
    fn test_empty_history() {
        let history = History::new();
        assert!(history.is_empty());
        assert_eq!(history.cursor(), None);
        assert!(history.current().is_none());
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn test_push_sets_cursor() {
        let mut history = History::new();
        history.push(snapshot(1));

        assert_eq!(history.len(), 1);
        assert_eq!(history.cursor(), Some(0));
        assert_eq!(tag_of(history.current().unwrap()), 1);
        assert!(!history.can_undo(), "first snapshot is not undoable");
    }

    #[test]
    fn test_undo_walks_back() {
        let mut history = History::new();
        history.push(snapshot(1));
        history.push(snapshot(2));
        history.push(snapshot(3));

        assert_eq!(tag_of(history.undo().unwrap()), 2);
        assert_eq!(tag_of(history.undo().unwrap()), 1);
        assert!(history.undo().is_none(), "cursor at 0 is a no-op");
        assert_eq!(tag_of(history.current().unwrap()), 1);
    }

    #[test]
    fn test_redo_walks_forward() {
        let mut history = History::new();
        history.push(snapshot(1));
        history.push(snapshot(2));

        history.undo();
        assert_eq!(tag_of(history.redo().unwrap()), 2);
        assert!(history.redo().is_none(), "cursor at end is a no-op");
    }

    #[test]
    fn test_push_prunes_redo() {
        let mut history = History::new();
        history.push(snapshot(1));
        history.push(snapshot(2));
        history.push(snapshot(3));

        history.undo();
        history.undo();
        assert!(history.can_redo());

        history.push(snapshot(4));
        assert!(!history.can_redo(), "push discards redo states");
        // undo twice left the cursor at entry 1; push after that leaves
        // length = cursor + 1 with no reachable redo
        assert_eq!(history.len(), 2);
        assert_eq!(history.cursor(), Some(1));
        assert_eq!(tag_of(history.current().unwrap()), 4);

        // The pruned snapshots are unreachable
        history.undo();
        assert_eq!(tag_of(history.current().unwrap()), 1);
    }

    #[test]
    fn test_cap_evicts_oldest() {
        let mut history = History::with_cap(3);
        for tag in 1..=5 {
            history.push(snapshot(tag));
        }

        assert_eq!(history.len(), 3);
        assert_eq!(history.cursor(), Some(2));
        assert_eq!(tag_of(history.current().unwrap()), 5);

        // Walking all the way back lands on the oldest retained entry
        history.undo();
        history.undo();
        assert_eq!(tag_of(history.current().unwrap()), 3);
        assert!(history.undo().is_none(), "1 and 2 were evicted");
    }

    #[test]
    fn test_twenty_five_pushes_default_cap() {
        let mut history = History::new();
        for tag in 0..25 {
            history.push(snapshot(tag));
        }

        assert_eq!(history.len(), 20);
        assert_eq!(history.cursor(), Some(19));

        // Oldest five are gone: the deepest undo chain stops at tag 5
        let mut undos = 0;
        while history.undo().is_some() {
            undos += 1;
        }
        assert_eq!(undos, 19);
        assert_eq!(tag_of(history.current().unwrap()), 5);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut history = History::new();
        history.push(snapshot(1));
        history.push(snapshot(2));

        history.reset();
        assert!(history.is_empty());
        assert_eq!(history.cursor(), None);
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn test_undo_then_redo_round_trip() {
        let mut history = History::new();
        history.push(snapshot(1));
        history.push(snapshot(2));
        history.push(snapshot(3));

        history.undo();
        history.undo();
        history.redo();
        history.redo();

        assert_eq!(tag_of(history.current().unwrap()), 3);
        assert!(!history.can_redo());
    }

    #[test]
    #[should_panic(expected = "history cap must be at least 1")]
    fn test_zero_cap_rejected() {
        let _ = History::with_cap(0);
    }
}
