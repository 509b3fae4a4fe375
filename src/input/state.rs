//! Gesture state machine - the single shared active-gesture slot.
//!
//! At most one pointer-driven gesture (move, resize, rotate, or pan) is
//! active at a time. Gestures only start from [`Gesture::Idle`] and every
//! pointer-up resets the slot, which rules out overlapping gestures by
//! construction instead of by flag bookkeeping.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Moving    (pointer down on an unlocked item, no modifiers)
//! Idle -> Resizing  (pointer down on a resize handle)
//! Idle -> Rotating  (pointer down on the rotate handle)
//! Idle -> Panning   (pointer down on empty canvas while zoomed)
//!
//! Any -> Idle       (pointer up - finalizes the gesture)
//! ```

use crate::types::ItemId;

/// Modifier keys held during a pointer or key event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
    /// Toggle-modifier for selection, chord key for shortcuts
    pub control: bool,
    /// Additive-modifier for selection, ratio lock for resize
    pub shift: bool,
}

/// A pointer event in viewport coordinates relative to the canvas origin.
#[derive(Clone, Copy, Debug)]
pub struct PointerEvent {
    pub position: (f32, f32),
    pub modifiers: Modifiers,
}

impl PointerEvent {
    pub fn at(x: f32, y: f32) -> Self {
        Self {
            position: (x, y),
            modifiers: Modifiers::default(),
        }
    }

    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }
}

/// Keys the editor reacts to while focused.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Z,
    Y,
    C,
    V,
    Delete,
}

/// A key-down event with its modifier chord.
#[derive(Clone, Copy, Debug)]
pub struct KeyEvent {
    pub key: Key,
    pub modifiers: Modifiers,
}

/// The eight resize handles, named by compass direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResizeHandle {
    N,
    S,
    E,
    W,
    Ne,
    Nw,
    Se,
    Sw,
}

impl ResizeHandle {
    pub const ALL: [ResizeHandle; 8] = [
        ResizeHandle::N,
        ResizeHandle::S,
        ResizeHandle::E,
        ResizeHandle::W,
        ResizeHandle::Ne,
        ResizeHandle::Nw,
        ResizeHandle::Se,
        ResizeHandle::Sw,
    ];

    /// Corner handles adjust both dimensions; edge handles one.
    pub fn is_corner(self) -> bool {
        matches!(
            self,
            ResizeHandle::Ne | ResizeHandle::Nw | ResizeHandle::Se | ResizeHandle::Sw
        )
    }
}

/// Starting position and size of one item participating in a group move.
#[derive(Clone, Copy, Debug)]
pub struct MoveAnchor {
    pub id: ItemId,
    pub start: (f32, f32),
    pub size: (f32, f32),
}

/// Shared delta range for a group move: the intersection of every moving
/// item's individual bounds, so the formation never deforms and nobody
/// leaves the canvas.
#[derive(Clone, Copy, Debug)]
pub struct DeltaLimits {
    pub min_dx: f32,
    pub max_dx: f32,
    pub min_dy: f32,
    pub max_dy: f32,
}

impl DeltaLimits {
    pub fn for_group(anchors: &[MoveAnchor], canvas_size: (f32, f32)) -> Self {
        let mut limits = Self {
            min_dx: f32::NEG_INFINITY,
            max_dx: f32::INFINITY,
            min_dy: f32::NEG_INFINITY,
            max_dy: f32::INFINITY,
        };
        for anchor in anchors {
            limits.min_dx = limits.min_dx.max(-anchor.start.0);
            limits.max_dx = limits
                .max_dx
                .min(canvas_size.0 - (anchor.start.0 + anchor.size.0));
            limits.min_dy = limits.min_dy.max(-anchor.start.1);
            limits.max_dy = limits
                .max_dy
                .min(canvas_size.1 - (anchor.start.1 + anchor.size.1));
        }
        limits
    }

    /// Clamp a raw pointer delta into the allowed range.
    ///
    /// Order-safe: an item larger than the canvas inverts its range on
    /// that axis (the lower bound exceeds the upper), in which case the
    /// lower bound wins and the axis stays put.
    pub fn clamp(&self, delta: (f32, f32)) -> (f32, f32) {
        (
            delta.0.min(self.max_dx).max(self.min_dx),
            delta.1.min(self.max_dy).max(self.min_dy),
        )
    }
}

/// Geometry of the item at resize start.
#[derive(Clone, Copy, Debug)]
pub struct ResizeOrigin {
    pub position: (f32, f32),
    pub size: (f32, f32),
    pub aspect_ratio: f32,
}

/// The active gesture, if any.
#[derive(Clone, Debug, Default)]
pub enum Gesture {
    #[default]
    Idle,

    /// Dragging the selected items as a group
    Moving {
        /// Pointer position at gesture start, viewport space
        start: (f32, f32),
        /// Zoom captured at gesture start
        zoom: f32,
        /// Whether travel has crossed the click/drag threshold
        moved: bool,
        anchors: Vec<MoveAnchor>,
        limits: DeltaLimits,
    },

    /// Resizing a single item from one of the eight handles
    Resizing {
        item: ItemId,
        handle: ResizeHandle,
        start: (f32, f32),
        origin: ResizeOrigin,
        /// Ratio lock requested at gesture start
        keep_ratio: bool,
        zoom: f32,
    },

    /// Rotating a single item around its center
    Rotating {
        item: ItemId,
        /// Item center in viewport space
        center: (f32, f32),
        /// Pointer angle at gesture start, radians
        start_angle: f32,
        /// Item rotation at gesture start, degrees
        start_rotation: f32,
    },

    /// Panning the viewport from a press on empty canvas
    Panning {
        start: (f32, f32),
        origin_scroll: (f32, f32),
        moved: bool,
    },
}

impl Gesture {
    pub fn is_idle(&self) -> bool {
        matches!(self, Gesture::Idle)
    }

    pub fn is_moving(&self) -> bool {
        matches!(self, Gesture::Moving { .. })
    }

    pub fn is_resizing(&self) -> bool {
        matches!(self, Gesture::Resizing { .. })
    }

    pub fn is_rotating(&self) -> bool {
        matches!(self, Gesture::Rotating { .. })
    }

    pub fn is_panning(&self) -> bool {
        matches!(self, Gesture::Panning { .. })
    }

    pub fn reset(&mut self) {
        *self = Gesture::Idle;
    }
}
