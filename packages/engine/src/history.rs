//! Bounded snapshot history for view documents.
//!
//! Every committed mutation deep-clones the whole document onto the
//! stack. A cursor index tracks the current position; undo/redo move
//! the cursor and hand back a fresh clone, so a later edit of the live
//! tree can never corrupt a stored snapshot. A new commit after undo
//! truncates the redone-away future first.

use viewforge_model::ViewDocument;

pub const DEFAULT_HISTORY_CAP: usize = 50;

#[derive(Debug)]
pub struct History {
    entries: Vec<ViewDocument>,
    /// Always points at a member of `entries` once any entry exists
    index: usize,
    max_levels: usize,
}

impl History {
    pub fn new() -> Self {
        Self::with_max_levels(DEFAULT_HISTORY_CAP)
    }

    pub fn with_max_levels(max_levels: usize) -> Self {
        Self {
            entries: Vec::new(),
            index: 0,
            max_levels: max_levels.max(1),
        }
    }

    /// Drop everything and store `doc` as the single entry
    pub fn reset(&mut self, doc: &ViewDocument) {
        self.entries.clear();
        self.entries.push(doc.clone());
        self.index = 0;
    }

    /// Record a committed mutation: truncate the future, push a deep
    /// clone, drop the oldest entry past the cap.
    pub fn commit(&mut self, doc: &ViewDocument) {
        if !self.entries.is_empty() {
            self.entries.truncate(self.index + 1);
        }
        self.entries.push(doc.clone());

        if self.entries.len() > self.max_levels {
            self.entries.remove(0);
        }
        self.index = self.entries.len() - 1;
    }

    /// Step back one slot. Returns a clone of the entry at the new
    /// position, or None at the boundary.
    pub fn undo(&mut self) -> Option<ViewDocument> {
        if self.index == 0 || self.entries.is_empty() {
            return None;
        }
        self.index -= 1;
        Some(self.entries[self.index].clone())
    }

    /// Step forward one slot, mirror of `undo`
    pub fn redo(&mut self) -> Option<ViewDocument> {
        if self.entries.is_empty() || self.index + 1 >= self.entries.len() {
            return None;
        }
        self.index += 1;
        Some(self.entries[self.index].clone())
    }

    pub fn can_undo(&self) -> bool {
        self.index > 0
    }

    pub fn can_redo(&self) -> bool {
        !self.entries.is_empty() && self.index + 1 < self.entries.len()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.index = 0;
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(name: &str) -> ViewDocument {
        ViewDocument::new(name, "")
    }

    #[test]
    fn test_commit_and_undo_redo() {
        let mut history = History::new();
        history.reset(&doc("v0"));
        history.commit(&doc("v1"));
        history.commit(&doc("v2"));

        assert!(history.can_undo());
        assert_eq!(history.undo().unwrap().name, "v1");
        assert_eq!(history.undo().unwrap().name, "v0");
        assert!(history.undo().is_none());

        assert_eq!(history.redo().unwrap().name, "v1");
        assert_eq!(history.redo().unwrap().name, "v2");
        assert!(history.redo().is_none());
    }

    #[test]
    fn test_commit_after_undo_truncates_future() {
        let mut history = History::new();
        history.reset(&doc("v0"));
        history.commit(&doc("v1"));
        history.commit(&doc("v2"));

        history.undo();
        history.undo();
        history.commit(&doc("v1b"));

        assert!(!history.can_redo());
        assert_eq!(history.len(), 2);
        assert_eq!(history.undo().unwrap().name, "v0");
    }

    #[test]
    fn test_cap_drops_oldest_entry() {
        let mut history = History::with_max_levels(3);
        history.reset(&doc("v0"));
        for i in 1..=5 {
            history.commit(&doc(&format!("v{}", i)));
        }

        assert_eq!(history.len(), 3);
        // Only the newest entries survive
        assert_eq!(history.undo().unwrap().name, "v4");
        assert_eq!(history.undo().unwrap().name, "v3");
        assert!(history.undo().is_none());
    }

    #[test]
    fn test_snapshots_are_independent() {
        let mut history = History::new();
        let mut live = doc("v0");
        history.reset(&live);

        live.name = "mutated".to_string();
        history.commit(&live);

        assert_eq!(history.undo().unwrap().name, "v0");
    }
}
