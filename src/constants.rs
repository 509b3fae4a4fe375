//! Editor-wide constants.
//!
//! Centralizes magic numbers and interaction tuning values to make the
//! codebase more maintainable and self-documenting.

// ============================================================================
// Item Geometry
// ============================================================================

/// Minimum item width/height in canvas units
pub const MIN_SIZE: f32 = 48.0;

/// Maximum item width/height in canvas units
pub const MAX_SIZE: f32 = 2400.0;

/// Default size for a newly imported image item
pub const DEFAULT_IMAGE_SIZE: (f32, f32) = (260.0, 180.0);

/// Default size for a newly placed icon item
pub const DEFAULT_ICON_SIZE: (f32, f32) = (96.0, 120.0);

/// Default position for a newly placed icon item
pub const DEFAULT_ICON_POSITION: (f32, f32) = (120.0, 120.0);

/// Base position for imported image items
pub const IMPORT_BASE_POSITION: (f32, f32) = (80.0, 80.0);

/// Per-item stagger applied to consecutive imports so they don't stack
pub const IMPORT_STAGGER: (f32, f32) = (18.0, 12.0);

// ============================================================================
// History & Clipboard
// ============================================================================

/// Maximum undo history states to keep
pub const MAX_HISTORY_STATES: usize = 30;

/// Offset applied to pasted items, in canvas units
pub const PASTE_OFFSET: f32 = 32.0;

// ============================================================================
// Zoom & Pan
// ============================================================================

/// Minimum zoom level
pub const MIN_ZOOM: f32 = 0.5;

/// Maximum zoom level
pub const MAX_ZOOM: f32 = 2.0;

/// Default zoom level
pub const DEFAULT_ZOOM: f32 = 1.0;

/// Zoom step for the zoom controls
pub const ZOOM_STEP: f32 = 0.1;

// ============================================================================
// Input Handling
// ============================================================================

/// Manhattan pointer travel (canvas units) below which a press is a click,
/// not a drag
pub const DRAG_THRESHOLD: f32 = 3.0;

/// Manhattan pointer travel (viewport units) below which a pan is treated as
/// a click on empty canvas
pub const PAN_CLICK_THRESHOLD: f32 = 2.0;

// ============================================================================
// File Import
// ============================================================================

/// Maximum accepted import size in bytes (8 MB)
pub const MAX_IMPORT_BYTES: u64 = 8 * 1024 * 1024;
