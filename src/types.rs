//! Core types for the worldcanvas placement editor.
//!
//! This module defines the fundamental data structures used throughout the
//! crate: placed canvas items, the two item kinds, resource references, and
//! the canvas background.

use crate::resources::ResourceHandle;
use once_cell::sync::Lazy;
use serde::Serialize;

/// Unique identifier for a placed item, stable for the item's lifetime.
pub type ItemId = u64;

/// Built-in icon assets shipped with the editor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum IconAsset {
    Arrow,
    Mace,
    Sword,
}

/// An entry in the fixed icon chooser.
pub struct IconTemplate {
    pub asset: IconAsset,
    pub name: &'static str,
}

/// The fixed set of icon templates offered by the icon dialog.
pub static ICON_TEMPLATES: Lazy<Vec<IconTemplate>> = Lazy::new(|| {
    vec![
        IconTemplate {
            asset: IconAsset::Arrow,
            name: "Arrow",
        },
        IconTemplate {
            asset: IconAsset::Mace,
            name: "Mace",
        },
        IconTemplate {
            asset: IconAsset::Sword,
            name: "Sword",
        },
    ]
});

impl IconAsset {
    /// Display name of the template backing this asset.
    pub fn template_name(self) -> &'static str {
        ICON_TEMPLATES
            .iter()
            .find(|t| t.asset == self)
            .map(|t| t.name)
            .unwrap_or("Icon")
    }
}

/// What an item's image actually is.
///
/// Imported handles are shared, never owned exclusively: history and
/// clipboard snapshots clone the reference, and the bytes outlive the pool's
/// registry entry for as long as any snapshot still points at them.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum ResourceRef {
    /// A permanent built-in asset; never released
    Builtin { asset: IconAsset },
    /// A user-imported image
    Imported { handle: ResourceHandle },
}

/// The two kinds of placed item, sharing all geometry fields.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ItemKind {
    /// An imported image layer
    Image,
    /// A built-in icon with a free-text caption
    Icon { label: String },
}

/// An item placed on the canvas.
///
/// Position and size are in unscaled canvas coordinates; zoom never touches
/// them. Rotation is unbounded degrees. The layer key only orders drawing:
/// it grows monotonically on create/front/paste and may go negative after
/// send-to-back.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CanvasItem {
    pub id: ItemId,
    /// Display name (file name for imports, label for icons)
    pub name: String,
    pub kind: ItemKind,
    pub resource: ResourceRef,
    /// Position on the canvas in canvas coordinates (x, y)
    pub position: (f32, f32),
    /// Size of the item in canvas units (width, height)
    pub size: (f32, f32),
    /// Rotation in degrees, unnormalized
    pub rotation: f32,
    /// Draw-order key
    pub layer: i32,
    /// When set, the item ignores move/resize/rotate/remove until unlocked
    pub locked: bool,
}

impl CanvasItem {
    /// Aspect ratio at the current size, defaulting to 1 for degenerate
    /// heights.
    pub fn aspect_ratio(&self) -> f32 {
        let ratio = self.size.0 / self.size.1;
        if ratio.is_finite() && ratio != 0.0 {
            ratio
        } else {
            1.0
        }
    }

    /// Center of the item in canvas coordinates.
    pub fn center(&self) -> (f32, f32) {
        (
            self.position.0 + self.size.0 / 2.0,
            self.position.1 + self.size.1 / 2.0,
        )
    }
}

/// The canvas background. Exactly one value is active at a time, and
/// replacing a custom background must release its resource.
#[derive(Clone, Debug, PartialEq)]
pub enum Background {
    /// The built-in default backdrop
    Default,
    /// No background at all
    None,
    /// A user-imported image
    Custom {
        name: String,
        handle: ResourceHandle,
    },
}

impl Background {
    pub fn is_default(&self) -> bool {
        matches!(self, Background::Default)
    }

    /// The imported handle backing this background, if any.
    pub fn handle(&self) -> Option<&ResourceHandle> {
        match self {
            Background::Custom { handle, .. } => Some(handle),
            _ => None,
        }
    }
}
