//! Pointer-move handling: drive the active gesture.

use crate::constants::{DRAG_THRESHOLD, MAX_SIZE, MIN_SIZE, PAN_CLICK_THRESHOLD};
use crate::editor::Editor;
use crate::input::state::{Gesture, PointerEvent, ResizeHandle, ResizeOrigin};

impl Editor {
    /// Advance the active gesture to the new pointer position. Idle means
    /// plain hover and does nothing.
    pub fn handle_pointer_move(&mut self, event: PointerEvent) {
        match &self.gesture {
            Gesture::Idle => {}
            Gesture::Moving {
                start,
                zoom,
                moved,
                limits,
                ..
            } => {
                let (start, zoom, was_moved, limits) = (*start, *zoom, *moved, *limits);
                let raw = (
                    (event.position.0 - start.0) / zoom,
                    (event.position.1 - start.1) / zoom,
                );
                // Small travel is a click, not a drag; once past the
                // threshold the gesture commits to dragging.
                if !was_moved && raw.0.abs() + raw.1.abs() < DRAG_THRESHOLD {
                    return;
                }
                let anchors = match &mut self.gesture {
                    Gesture::Moving { moved, anchors, .. } => {
                        *moved = true;
                        anchors.clone()
                    }
                    _ => unreachable!(),
                };
                let (dx, dy) = limits.clamp(raw);
                for anchor in &anchors {
                    self.board.update(anchor.id, |item| {
                        item.position = (anchor.start.0 + dx, anchor.start.1 + dy);
                    });
                }
            }
            Gesture::Resizing {
                item,
                handle,
                start,
                origin,
                keep_ratio,
                zoom,
            } => {
                let (item, handle, start, origin, keep_ratio, zoom) =
                    (*item, *handle, *start, *origin, *keep_ratio, *zoom);
                let delta = (
                    (event.position.0 - start.0) / zoom,
                    (event.position.1 - start.1) / zoom,
                );
                let apply_ratio = keep_ratio || event.modifiers.shift;
                let (position, size) = resize_geometry(
                    handle,
                    origin,
                    delta,
                    apply_ratio,
                    self.viewport.canvas_size(),
                );
                self.board.update(item, |it| {
                    it.position = position;
                    it.size = size;
                });
            }
            Gesture::Rotating {
                item,
                center,
                start_angle,
                start_rotation,
            } => {
                let (item, center, start_angle, start_rotation) =
                    (*item, *center, *start_angle, *start_rotation);
                let angle =
                    (event.position.1 - center.1).atan2(event.position.0 - center.0);
                let rotation = start_rotation + (angle - start_angle).to_degrees();
                self.board.update(item, |it| {
                    it.rotation = rotation;
                });
            }
            Gesture::Panning {
                start,
                origin_scroll,
                ..
            } => {
                let (start, origin_scroll) = (*start, *origin_scroll);
                let delta = (event.position.0 - start.0, event.position.1 - start.1);
                if delta.0.abs() + delta.1.abs() > PAN_CLICK_THRESHOLD {
                    if let Gesture::Panning { moved, .. } = &mut self.gesture {
                        *moved = true;
                    }
                }
                // Content follows the pointer, so scroll moves against it.
                self.viewport
                    .scroll_to((origin_scroll.0 - delta.0, origin_scroll.1 - delta.1));
            }
        }
    }
}

/// Compute the resized geometry for a handle drag, in canvas space.
///
/// Edge handles move one edge; corner handles move two. North and west
/// handles shift the position along with the size so the opposite edge
/// stays put. With the ratio lock, edge handles derive the other dimension
/// (re-centering the free axis on the north and west handles) and corner
/// handles derive height from width. Size clamps to the allowed range
/// first, then position clamps the item inside the canvas.
fn resize_geometry(
    handle: ResizeHandle,
    origin: ResizeOrigin,
    delta: (f32, f32),
    apply_ratio: bool,
    canvas_size: (f32, f32),
) -> ((f32, f32), (f32, f32)) {
    let (ox, oy) = origin.position;
    let (ow, oh) = origin.size;
    let (dx, dy) = delta;
    let ratio = origin.aspect_ratio;

    let (mut w, mut h, mut x, mut y) = (ow, oh, ox, oy);
    match handle {
        ResizeHandle::E => w = ow + dx,
        ResizeHandle::W => {
            w = ow - dx;
            x = ox + dx;
        }
        ResizeHandle::S => h = oh + dy,
        ResizeHandle::N => {
            h = oh - dy;
            y = oy + dy;
        }
        ResizeHandle::Se => {
            w = ow + dx;
            h = oh + dy;
        }
        ResizeHandle::Ne => {
            w = ow + dx;
            h = oh - dy;
            y = oy + dy;
        }
        ResizeHandle::Sw => {
            w = ow - dx;
            h = oh + dy;
            x = ox + dx;
        }
        ResizeHandle::Nw => {
            w = ow - dx;
            h = oh - dy;
            x = ox + dx;
            y = oy + dy;
        }
    }

    if apply_ratio {
        match handle {
            ResizeHandle::N | ResizeHandle::S => {
                w = h * ratio;
                if handle == ResizeHandle::N {
                    x = ox - (w - ow) / 2.0;
                }
            }
            ResizeHandle::E | ResizeHandle::W => {
                h = w / ratio;
                if handle == ResizeHandle::W {
                    y = oy - (h - oh) / 2.0;
                }
            }
            _ => h = w / ratio,
        }
    }

    w = w.clamp(MIN_SIZE, MAX_SIZE);
    h = h.clamp(MIN_SIZE, MAX_SIZE);
    x = x.clamp(0.0, (canvas_size.0 - w).max(0.0));
    y = y.clamp(0.0, (canvas_size.1 - h).max(0.0));

    ((x, y), (w, h))
}
