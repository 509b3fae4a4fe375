//! Pointer-down handling: selection rules and gesture starts.

use crate::editor::Editor;
use crate::input::state::{
    DeltaLimits, Gesture, MoveAnchor, PointerEvent, ResizeHandle, ResizeOrigin,
};
use crate::types::ItemId;
use tracing::debug;

impl Editor {
    /// Route a pointer press: a press on an item starts a move (after the
    /// selection rules run), a press on empty canvas clears the selection
    /// or starts a pan depending on zoom.
    ///
    /// Resize and rotate starts come in through [`Editor::start_resize`]
    /// and [`Editor::start_rotate`] because handle hit testing is the
    /// renderer's business, not the model's.
    pub fn handle_pointer_down(&mut self, event: PointerEvent) {
        if !self.gesture.is_idle() {
            return;
        }
        let canvas_pos = self.viewport.to_canvas(event.position);
        match self.board.item_at(canvas_pos.0, canvas_pos.1) {
            Some(id) => self.start_move(event, id),
            None => self.press_empty_canvas(event),
        }
    }

    /// Apply the selection rules for a press on `id`, then arm a move
    /// gesture for the resulting selection.
    ///
    /// Control toggles membership and shift adds; neither starts a drag.
    /// A plain press on an unselected item replaces the selection; on an
    /// already-selected item it keeps the group so the whole group drags.
    /// Locked items are selectable but never draggable.
    pub fn start_move(&mut self, event: PointerEvent, id: ItemId) {
        if !self.gesture.is_idle() {
            return;
        }
        let Some(target) = self.board.get_item(id) else {
            return;
        };
        let locked = target.locked;

        if event.modifiers.control {
            self.selection.toggle(id);
            return;
        }
        if event.modifiers.shift {
            self.selection.add(id);
            return;
        }
        if !self.selection.contains(id) {
            self.selection.select_only(id);
        }
        if locked {
            return;
        }

        let anchors: Vec<MoveAnchor> = self
            .board
            .items
            .iter()
            .filter(|item| self.selection.contains(item.id) && !item.locked)
            .map(|item| MoveAnchor {
                id: item.id,
                start: item.position,
                size: item.size,
            })
            .collect();
        if anchors.is_empty() {
            return;
        }

        self.history.snapshot(&self.board.items);
        let limits = DeltaLimits::for_group(&anchors, self.viewport.canvas_size());
        debug!(item = id, group = anchors.len(), "move gesture armed");
        self.gesture = Gesture::Moving {
            start: event.position,
            zoom: self.viewport.zoom,
            moved: false,
            anchors,
            limits,
        };
    }

    /// Arm a resize gesture from one of the eight handles. Holding shift at
    /// the press locks the aspect ratio for the whole gesture.
    pub fn start_resize(&mut self, event: PointerEvent, id: ItemId, handle: ResizeHandle) {
        if !self.gesture.is_idle() {
            return;
        }
        let Some(item) = self.board.get_item(id) else {
            return;
        };
        if item.locked {
            return;
        }
        let origin = ResizeOrigin {
            position: item.position,
            size: item.size,
            aspect_ratio: item.aspect_ratio(),
        };

        self.history.snapshot(&self.board.items);
        self.selection.select_only(id);
        debug!(item = id, ?handle, "resize gesture armed");
        self.gesture = Gesture::Resizing {
            item: id,
            handle,
            start: event.position,
            origin,
            keep_ratio: event.modifiers.shift,
            zoom: self.viewport.zoom,
        };
    }

    /// Arm a rotate gesture around the item's center.
    pub fn start_rotate(&mut self, event: PointerEvent, id: ItemId) {
        if !self.gesture.is_idle() {
            return;
        }
        let Some(item) = self.board.get_item(id) else {
            return;
        };
        if item.locked {
            return;
        }
        // Angles are measured in viewport space; zoom scales both legs of
        // the triangle equally so the angle is unaffected.
        let center_canvas = item.center();
        let center = (
            center_canvas.0 * self.viewport.zoom,
            center_canvas.1 * self.viewport.zoom,
        );
        let start_angle =
            (event.position.1 - center.1).atan2(event.position.0 - center.0);
        let start_rotation = item.rotation;

        self.history.snapshot(&self.board.items);
        self.selection.select_only(id);
        debug!(item = id, "rotate gesture armed");
        self.gesture = Gesture::Rotating {
            item: id,
            center,
            start_angle,
            start_rotation,
        };
    }

    /// A press on empty canvas. At default zoom there is nowhere to pan,
    /// so the press clears the selection immediately; otherwise it arms a
    /// pan and the click-vs-pan decision is deferred to release.
    fn press_empty_canvas(&mut self, event: PointerEvent) {
        if self.viewport.zoom == 1.0 {
            self.selection.clear();
            return;
        }
        self.gesture = Gesture::Panning {
            start: event.position,
            origin_scroll: self.viewport.scroll,
            moved: false,
        };
    }
}
