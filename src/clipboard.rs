//! Clipboard of copied items.
//!
//! Stores independent item copies. After each paste the stored copies are
//! shifted to the pasted positions, so consecutive pastes cascade from the
//! most recent paste rather than restacking on the original.

use crate::types::CanvasItem;

#[derive(Default)]
pub struct Clipboard {
    items: Vec<CanvasItem>,
}

impl Clipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store copies of the given items. Copying nothing is a no-op that
    /// keeps the previous contents.
    pub fn copy(&mut self, items: Vec<CanvasItem>) {
        if items.is_empty() {
            return;
        }
        self.items = items;
    }

    pub fn items(&self) -> &[CanvasItem] {
        &self.items
    }

    /// Replace the contents with the freshly pasted clones.
    pub fn shift_to(&mut self, pasted: Vec<CanvasItem>) {
        self.items = pasted;
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}
