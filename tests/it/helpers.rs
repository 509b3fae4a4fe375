//! Test helpers and builders for reducing boilerplate in tests.
//!
//! This module provides:
//! - `TestEditorBuilder` - Builder pattern for creating editors with items
//! - Image fixture generators (`png_file()`, `jpeg_file()`, `padded_png()`)
//! - Common assertion helpers and pointer-event shorthands

use std::io::Cursor;
use std::sync::Once;
use worldcanvas::editor::Editor;
use worldcanvas::input::{Key, KeyEvent, Modifiers, PointerEvent};
use worldcanvas::resources::ImportFile;
use worldcanvas::types::{IconAsset, ItemId};

static TRACING: Once = Once::new();

/// Install the test log subscriber once. Quiet by default; set RUST_LOG to
/// see editor tracing while debugging a failure.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

// ============================================================================
// Image fixtures
// ============================================================================

/// A small valid PNG, 4x3 so the aspect ratio is distinguishable from 1:1.
pub fn png_bytes() -> Vec<u8> {
    let pixels = image::ImageBuffer::from_pixel(4, 3, image::Rgba([200u8, 40, 40, 255]));
    let mut out = Vec::new();
    image::DynamicImage::ImageRgba8(pixels)
        .write_to(&mut Cursor::new(&mut out), image::ImageFormat::Png)
        .unwrap();
    out
}

pub fn png_file(name: &str) -> ImportFile {
    ImportFile::new(name, png_bytes())
}

pub fn jpeg_file(name: &str) -> ImportFile {
    let pixels = image::ImageBuffer::from_pixel(4, 3, image::Rgb([40u8, 40, 200]));
    let mut out = Vec::new();
    image::DynamicImage::ImageRgb8(pixels)
        .write_to(&mut Cursor::new(&mut out), image::ImageFormat::Jpeg)
        .unwrap();
    ImportFile::new(name, out)
}

/// A valid PNG header padded with zeros up to `total` bytes, for exercising
/// the size ceiling without a real multi-megabyte image.
pub fn padded_png(name: &str, total: usize) -> ImportFile {
    let mut bytes = png_bytes();
    if bytes.len() < total {
        bytes.resize(total, 0);
    }
    ImportFile::new(name, bytes)
}

/// Bytes that no image decoder recognizes.
pub fn text_file(name: &str) -> ImportFile {
    ImportFile::new(name, b"definitely not an image".to_vec())
}

// ============================================================================
// TestEditorBuilder - Builder pattern for creating editors
// ============================================================================

/// Builder for creating editors pre-populated with items.
///
/// # Example
/// ```ignore
/// let editor = TestEditorBuilder::new()
///     .with_images(3)
///     .with_icon(IconAsset::Sword, "Garrison")
///     .with_zoom(1.5)
///     .build();
/// ```
pub struct TestEditorBuilder {
    view_size: (f32, f32),
    images: usize,
    icons: Vec<(IconAsset, String)>,
    zoom: Option<f32>,
}

impl Default for TestEditorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestEditorBuilder {
    pub fn new() -> Self {
        init_tracing();
        Self {
            view_size: (1000.0, 800.0),
            images: 0,
            icons: Vec::new(),
            zoom: None,
        }
    }

    pub fn with_view(mut self, width: f32, height: f32) -> Self {
        self.view_size = (width, height);
        self
    }

    /// Import `count` small PNG items named img0.png, img1.png, ...
    pub fn with_images(mut self, count: usize) -> Self {
        self.images = count;
        self
    }

    pub fn with_icon(mut self, asset: IconAsset, label: impl Into<String>) -> Self {
        self.icons.push((asset, label.into()));
        self
    }

    /// Set the zoom directly, bypassing the stepped controls.
    pub fn with_zoom(mut self, zoom: f32) -> Self {
        self.zoom = Some(zoom);
        self
    }

    pub fn build(self) -> Editor {
        let mut editor = Editor::new(self.view_size);
        if self.images > 0 {
            let files: Vec<ImportFile> = (0..self.images)
                .map(|i| png_file(&format!("img{i}.png")))
                .collect();
            editor.import_images(&files);
        }
        for (asset, label) in self.icons {
            editor.place_icon(Some(asset), &label);
        }
        if let Some(zoom) = self.zoom {
            editor.viewport.zoom = zoom;
        }
        editor.selection.clear();
        editor
    }
}

/// Editor with `count` imported images and nothing selected.
pub fn editor_with_images(count: usize) -> Editor {
    TestEditorBuilder::new().with_images(count).build()
}

// ============================================================================
// Event shorthands
// ============================================================================

pub fn pointer(x: f32, y: f32) -> PointerEvent {
    PointerEvent::at(x, y)
}

pub fn ctrl_pointer(x: f32, y: f32) -> PointerEvent {
    PointerEvent::at(x, y).with_modifiers(Modifiers {
        control: true,
        shift: false,
    })
}

pub fn shift_pointer(x: f32, y: f32) -> PointerEvent {
    PointerEvent::at(x, y).with_modifiers(Modifiers {
        control: false,
        shift: true,
    })
}

pub fn ctrl_key(key: Key) -> KeyEvent {
    KeyEvent {
        key,
        modifiers: Modifiers {
            control: true,
            shift: false,
        },
    }
}

pub fn plain_key(key: Key) -> KeyEvent {
    KeyEvent {
        key,
        modifiers: Modifiers::default(),
    }
}

/// Full press-drag-release at default modifiers.
pub fn drag(editor: &mut Editor, from: (f32, f32), to: (f32, f32)) {
    editor.handle_pointer_down(pointer(from.0, from.1));
    editor.handle_pointer_move(pointer(to.0, to.1));
    editor.handle_pointer_up();
}

// ============================================================================
// Assertions
// ============================================================================

pub fn assert_item_count(editor: &Editor, expected: usize) {
    assert_eq!(
        editor.board.len(),
        expected,
        "expected {expected} items, found {}",
        editor.board.len()
    );
}

pub fn item_position(editor: &Editor, id: ItemId) -> (f32, f32) {
    editor
        .board
        .get_item(id)
        .unwrap_or_else(|| panic!("item {id} missing"))
        .position
}

pub fn first_item_id(editor: &Editor) -> ItemId {
    editor.board.items[0].id
}
