//! Pointer and keyboard input handling.
//!
//! Each submodule carries one `impl Editor` block for one phase of the
//! event stream: press, drag, release, keys. The shared gesture slot in
//! [`state`] ties them together.

pub mod drag;
pub mod keyboard;
pub mod mouse_down;
pub mod mouse_up;
pub mod state;

pub use state::{
    DeltaLimits, Gesture, Key, KeyEvent, Modifiers, MoveAnchor, PointerEvent, ResizeHandle,
    ResizeOrigin,
};
