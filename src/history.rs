//! Bounded undo/redo over full item snapshots.
//!
//! Each entry is an independent copy of the whole item list, captured just
//! before a mutating gesture begins. Simple and memory-heavy by design; the
//! 30-entry cap keeps it bounded, and snapshots sharing resource handles by
//! reference keeps the copies cheap where it matters.

use crate::constants::MAX_HISTORY_STATES;
use crate::types::CanvasItem;

#[derive(Default)]
pub struct HistoryManager {
    undo_stack: Vec<Vec<CanvasItem>>,
    redo_stack: Vec<Vec<CanvasItem>>,
}

impl HistoryManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Capture the current item list onto the undo stack, dropping the
    /// oldest entry past the cap. Any new mutation invalidates redo.
    pub fn snapshot(&mut self, items: &[CanvasItem]) {
        if self.undo_stack.len() >= MAX_HISTORY_STATES {
            self.undo_stack.remove(0);
        }
        self.undo_stack.push(items.to_vec());
        self.redo_stack.clear();
    }

    /// Pop the most recent snapshot, pushing `current` onto the redo stack.
    /// Returns the state to restore, or `None` when there is nothing to
    /// undo.
    pub fn undo(&mut self, current: &[CanvasItem]) -> Option<Vec<CanvasItem>> {
        let previous = self.undo_stack.pop()?;
        self.redo_stack.push(current.to_vec());
        Some(previous)
    }

    /// Symmetric to [`undo`](Self::undo): pop redo, push `current` to undo.
    pub fn redo(&mut self, current: &[CanvasItem]) -> Option<Vec<CanvasItem>> {
        let next = self.redo_stack.pop()?;
        if self.undo_stack.len() >= MAX_HISTORY_STATES {
            self.undo_stack.remove(0);
        }
        self.undo_stack.push(current.to_vec());
        Some(next)
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_len(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_len(&self) -> usize {
        self.redo_stack.len()
    }
}
