//! worldcanvas - an ephemeral in-memory visual placement editor.
//!
//! A canvas of placed items (imported images and built-in captioned icons)
//! with multi-selection, bounded undo/redo, a cascading clipboard, a
//! pointer gesture state machine for move/resize/rotate/pan, a zoomable
//! viewport, and explicit lifecycle management for imported image bytes.
//! Nothing persists: the editor starts empty and dropping it releases
//! every imported resource.
//!
//! Structure:
//! - `editor`: the owning struct and non-gesture operations
//! - `board`: item storage, layering, spatial hit testing
//! - `input`: pointer and keyboard handlers around the gesture slot
//! - `resources`: validated import and handle lifecycle
//! - `history`, `clipboard`, `selection`, `viewport`: the supporting state

pub mod board;
pub mod clipboard;
pub mod constants;
pub mod editor;
pub mod error;
pub mod history;
pub mod input;
pub mod resources;
pub mod selection;
pub mod spatial_index;
pub mod types;
pub mod viewport;

pub use editor::Editor;
pub use error::{EditorError, EditorResult};
