//! The viewport: zoom and pan transform between viewport and canvas space.
//!
//! Pointer events arrive in viewport coordinates relative to the canvas
//! origin; everything the editor stores is in unscaled canvas coordinates.
//! Conversion is a division by the zoom factor.

use crate::constants::{DEFAULT_ZOOM, MAX_ZOOM, MIN_ZOOM, ZOOM_STEP};

pub struct Viewport {
    /// Current zoom factor, clamped to `[MIN_ZOOM, MAX_ZOOM]`
    pub zoom: f32,
    /// Scroll offset of the view window over the rendered canvas
    pub scroll: (f32, f32),
    /// Size of the visible view window, in viewport units
    pub view_size: (f32, f32),
}

impl Viewport {
    pub fn new(view_size: (f32, f32)) -> Self {
        Self {
            zoom: DEFAULT_ZOOM,
            scroll: (0.0, 0.0),
            view_size,
        }
    }

    /// Step the zoom by `delta`, rounding to two decimals and clamping.
    pub fn adjust_zoom(&mut self, delta: f32) {
        let stepped = ((self.zoom + delta) * 100.0).round() / 100.0;
        self.zoom = stepped.clamp(MIN_ZOOM, MAX_ZOOM);
    }

    pub fn zoom_in(&mut self) {
        self.adjust_zoom(ZOOM_STEP);
    }

    pub fn zoom_out(&mut self) {
        self.adjust_zoom(-ZOOM_STEP);
    }

    pub fn reset_zoom(&mut self) {
        self.zoom = DEFAULT_ZOOM;
    }

    /// How much larger than the view window the canvas is, logically.
    ///
    /// Zoomed out, the canvas grows by `1/zoom` so the scaled-down render
    /// still covers the view; zoomed in it grows by `zoom` so there is
    /// somewhere to pan.
    pub fn extent_factor(&self) -> f32 {
        if self.zoom >= 1.0 {
            self.zoom
        } else {
            1.0 / self.zoom
        }
    }

    /// Logical canvas size in canvas units. Items are clamped to stay
    /// within this rectangle.
    pub fn canvas_size(&self) -> (f32, f32) {
        let factor = self.extent_factor();
        (self.view_size.0 * factor, self.view_size.1 * factor)
    }

    /// Convert a viewport-space position to canvas space.
    pub fn to_canvas(&self, pos: (f32, f32)) -> (f32, f32) {
        (pos.0 / self.zoom, pos.1 / self.zoom)
    }

    /// Convert a viewport-space delta to canvas space.
    pub fn delta_to_canvas(&self, delta: (f32, f32)) -> (f32, f32) {
        (delta.0 / self.zoom, delta.1 / self.zoom)
    }

    /// Set the scroll offset, clamped to the scrollable range of the
    /// rendered canvas.
    pub fn scroll_to(&mut self, scroll: (f32, f32)) {
        let (canvas_w, canvas_h) = self.canvas_size();
        let max_x = (canvas_w * self.zoom - self.view_size.0).max(0.0);
        let max_y = (canvas_h * self.zoom - self.view_size.1).max(0.0);
        self.scroll = (scroll.0.clamp(0.0, max_x), scroll.1.clamp(0.0, max_y));
    }
}
