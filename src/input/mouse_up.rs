//! Pointer-up handling: finalize the active gesture.

use crate::editor::Editor;
use crate::input::state::Gesture;

impl Editor {
    /// End the active gesture. A pan that never crossed the travel
    /// threshold was really a click on empty canvas, which clears the
    /// selection. Everything else just frees the gesture slot; the item
    /// state mutated during the drag is already in place and the snapshot
    /// for undo was taken at the press.
    pub fn handle_pointer_up(&mut self) {
        if let Gesture::Panning { moved: false, .. } = std::mem::take(&mut self.gesture) {
            self.selection.clear();
        }
    }
}
