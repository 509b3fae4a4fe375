//! The editor: a single object owning all canvas state.
//!
//! Everything is explicit state passed by reference to the input handlers;
//! there is no ambient global mutable state anywhere in the crate. The
//! editor's contents are ephemeral by design: nothing is persisted, and
//! dropping the editor releases every imported resource.
//!
//! Mutation happens synchronously in response to discrete input events.
//! Input handlers live in the [`crate::input`] submodules; this module has
//! the non-gesture operations: import, background, icon placement,
//! clipboard, history, and layering.

use crate::board::Board;
use crate::clipboard::Clipboard;
use crate::constants::{
    DEFAULT_ICON_POSITION, DEFAULT_ICON_SIZE, DEFAULT_IMAGE_SIZE, IMPORT_BASE_POSITION,
    IMPORT_STAGGER, PASTE_OFFSET,
};
use crate::error::EditorError;
use crate::history::HistoryManager;
use crate::input::Gesture;
use crate::resources::{ImportFile, ResourcePool};
use crate::selection::SelectionManager;
use crate::types::{Background, CanvasItem, IconAsset, ItemId, ItemKind, ResourceRef};
use crate::viewport::Viewport;
use std::collections::HashSet;

pub struct Editor {
    pub board: Board,
    pub selection: SelectionManager,
    pub history: HistoryManager,
    pub clipboard: Clipboard,
    pub viewport: Viewport,
    pub resources: ResourcePool,
    pub gesture: Gesture,
    /// Single visible message slot; each new error replaces the last
    last_error: Option<EditorError>,
}

impl Editor {
    pub fn new(view_size: (f32, f32)) -> Self {
        Self {
            board: Board::new(),
            selection: SelectionManager::new(),
            history: HistoryManager::new(),
            clipboard: Clipboard::new(),
            viewport: Viewport::new(view_size),
            resources: ResourcePool::new(),
            gesture: Gesture::Idle,
            last_error: None,
        }
    }

    // ========================================================================
    // Error slot
    // ========================================================================

    pub fn last_error(&self) -> Option<&EditorError> {
        self.last_error.as_ref()
    }

    pub fn error_message(&self) -> Option<String> {
        self.last_error.as_ref().map(|e| e.to_string())
    }

    pub(crate) fn set_error(&mut self, error: EditorError) {
        self.last_error = Some(error);
    }

    pub(crate) fn clear_error(&mut self) {
        self.last_error = None;
    }

    // ========================================================================
    // Import & placement
    // ========================================================================

    /// Import image files as new items.
    ///
    /// Invalid files are skipped (reporting the last failure through the
    /// error slot); valid ones land staggered so they don't stack. One
    /// history snapshot covers the whole batch.
    pub fn import_images(&mut self, files: &[ImportFile]) -> Vec<ItemId> {
        let mut staged = Vec::new();
        for file in files {
            match self.resources.allocate(file) {
                Ok(handle) => staged.push((file.name.clone(), handle)),
                Err(error) => self.set_error(error),
            }
        }
        if staged.is_empty() {
            return Vec::new();
        }

        self.clear_error();
        self.history.snapshot(&self.board.items);

        let base_count = self.board.len();
        let mut ids = Vec::with_capacity(staged.len());
        for (offset, (name, handle)) in staged.into_iter().enumerate() {
            let step = (base_count + offset) as f32;
            let id = self.board.alloc_id();
            let layer = self.board.next_layer();
            self.board.insert(CanvasItem {
                id,
                name,
                kind: ItemKind::Image,
                resource: ResourceRef::Imported { handle },
                position: (
                    IMPORT_BASE_POSITION.0 + step * IMPORT_STAGGER.0,
                    IMPORT_BASE_POSITION.1 + step * IMPORT_STAGGER.1,
                ),
                size: DEFAULT_IMAGE_SIZE,
                rotation: 0.0,
                layer,
                locked: false,
            });
            ids.push(id);
        }
        tracing::debug!(count = ids.len(), "imported images");
        ids
    }

    /// Place a built-in icon with an optional caption, at the default spot.
    pub fn place_icon(&mut self, asset: Option<IconAsset>, label: &str) -> Option<ItemId> {
        let Some(asset) = asset else {
            self.set_error(EditorError::NoIconChosen);
            return None;
        };

        self.history.snapshot(&self.board.items);
        let label = match label.trim() {
            "" => asset.template_name().to_string(),
            trimmed => trimmed.to_string(),
        };
        let id = self.board.alloc_id();
        let layer = self.board.next_layer();
        self.board.insert(CanvasItem {
            id,
            name: label.clone(),
            kind: ItemKind::Icon { label },
            resource: ResourceRef::Builtin { asset },
            position: DEFAULT_ICON_POSITION,
            size: DEFAULT_ICON_SIZE,
            rotation: 0.0,
            layer,
            locked: false,
        });
        self.selection.select_only(id);
        self.clear_error();
        Some(id)
    }

    // ========================================================================
    // Background
    // ========================================================================

    /// Replace the background with an imported image, releasing the
    /// previous custom background's resource.
    pub fn set_background(&mut self, file: &ImportFile) -> bool {
        let handle = match self.resources.allocate(file) {
            Ok(handle) => handle,
            Err(error) => {
                self.set_error(error);
                return false;
            }
        };
        if let Some(old) = self.board.background.handle() {
            let old = old.clone();
            self.resources.release(&old);
        }
        self.board.background = Background::Custom {
            name: file.name.clone(),
            handle,
        };
        self.clear_error();
        true
    }

    /// Switch to "no background", releasing a custom background's resource.
    pub fn remove_background(&mut self) {
        if let Some(handle) = self.board.background.handle() {
            let handle = handle.clone();
            self.resources.release(&handle);
        }
        self.board.background = Background::None;
    }

    // ========================================================================
    // Removal
    // ========================================================================

    /// Remove the given items (locked ones stay), releasing the resources
    /// of everything that actually went away. History and clipboard clones
    /// keep released bytes alive until they age out.
    pub fn remove_items(&mut self, ids: &HashSet<ItemId>) {
        let removable = ids.iter().any(|id| {
            self.board
                .get_item(*id)
                .is_some_and(|item| !item.locked)
        });
        if !removable {
            return;
        }

        self.history.snapshot(&self.board.items);
        let removed = self.board.remove_items(ids);
        for item in &removed {
            if let ResourceRef::Imported { handle } = &item.resource {
                self.resources.release(handle);
            }
        }
        self.selection.prune(|id| !ids.contains(&id));
        tracing::debug!(count = removed.len(), "removed items");
    }

    pub fn delete_selection(&mut self) {
        let ids = self.selection.ids().clone();
        if ids.is_empty() {
            return;
        }
        self.remove_items(&ids);
    }

    // ========================================================================
    // Layering & locking
    // ========================================================================

    pub fn bring_to_front(&mut self, id: ItemId) {
        if self.is_mutable(id) {
            self.history.snapshot(&self.board.items);
            self.board.bring_to_front(id);
        }
    }

    pub fn send_to_back(&mut self, id: ItemId) {
        if self.is_mutable(id) {
            self.history.snapshot(&self.board.items);
            self.board.send_to_back(id);
        }
    }

    pub fn toggle_lock(&mut self, id: ItemId) {
        if self.board.get_item(id).is_some() {
            self.history.snapshot(&self.board.items);
            self.board.toggle_lock(id);
        }
    }

    fn is_mutable(&self, id: ItemId) -> bool {
        self.board.get_item(id).is_some_and(|item| !item.locked)
    }

    // ========================================================================
    // History
    // ========================================================================

    pub fn undo(&mut self) {
        if let Some(previous) = self.history.undo(&self.board.items) {
            self.board.replace_items(previous);
            self.selection.clear();
            tracing::debug!("undo");
        }
    }

    pub fn redo(&mut self) {
        if let Some(next) = self.history.redo(&self.board.items) {
            self.board.replace_items(next);
            self.selection.clear();
            tracing::debug!("redo");
        }
    }

    // ========================================================================
    // Clipboard
    // ========================================================================

    /// Copy the selected items to the clipboard. No-op on an empty
    /// selection.
    pub fn copy_selection(&mut self) {
        let copies: Vec<CanvasItem> = self
            .board
            .items
            .iter()
            .filter(|item| self.selection.contains(item.id))
            .cloned()
            .collect();
        self.clipboard.copy(copies);
    }

    /// Paste the clipboard contents as new items, offset from wherever the
    /// clipboard currently points, and shift the clipboard to the pasted
    /// positions so the next paste cascades further. No-op when empty.
    pub fn paste_clipboard(&mut self) {
        if self.clipboard.is_empty() {
            return;
        }

        let mut clones = Vec::with_capacity(self.clipboard.len());
        for source in self.clipboard.items().to_vec() {
            let mut clone = source;
            clone.id = self.board.alloc_id();
            clone.position = (clone.position.0 + PASTE_OFFSET, clone.position.1 + PASTE_OFFSET);
            clone.layer = self.board.next_layer();
            clones.push(clone);
        }

        self.history.snapshot(&self.board.items);
        self.selection.set(clones.iter().map(|item| item.id));
        for clone in &clones {
            self.board.insert(clone.clone());
        }
        self.clipboard.shift_to(clones);
    }
}

impl Drop for Editor {
    fn drop(&mut self) {
        // Editor teardown: reload discards all edits, and every handle the
        // pool ever allocated must end up released.
        self.resources.release_all();
    }
}
