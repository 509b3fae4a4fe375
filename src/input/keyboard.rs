//! Keyboard shortcuts.

use crate::editor::Editor;
use crate::input::state::{Key, KeyEvent};

impl Editor {
    /// Handle a key press while the canvas has focus.
    ///
    /// Control chords: Z undo, Y redo, C copy, V paste. Plain Delete
    /// removes the selection.
    pub fn handle_key_down(&mut self, event: KeyEvent) {
        if event.modifiers.control {
            match event.key {
                Key::Z => self.undo(),
                Key::Y => self.redo(),
                Key::C => self.copy_selection(),
                Key::V => self.paste_clipboard(),
                Key::Delete => {}
            }
            return;
        }
        if event.key == Key::Delete && !self.selection.is_empty() {
            self.delete_selection();
        }
    }
}
