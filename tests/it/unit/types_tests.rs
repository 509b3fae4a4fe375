//! Type-level unit tests: geometry helpers and serialization.

use crate::helpers::png_file;
use worldcanvas::resources::ResourcePool;
use worldcanvas::types::{
    Background, CanvasItem, IconAsset, ItemKind, ResourceRef, ICON_TEMPLATES,
};

fn icon(position: (f32, f32), size: (f32, f32)) -> CanvasItem {
    CanvasItem {
        id: 7,
        name: "Watchtower".to_string(),
        kind: ItemKind::Icon {
            label: "Watchtower".to_string(),
        },
        resource: ResourceRef::Builtin {
            asset: IconAsset::Sword,
        },
        position,
        size,
        rotation: 0.0,
        layer: 1,
        locked: false,
    }
}

#[test]
fn test_aspect_ratio() {
    assert_eq!(icon((0.0, 0.0), (200.0, 100.0)).aspect_ratio(), 2.0);
    // Degenerate height falls back to square.
    assert_eq!(icon((0.0, 0.0), (200.0, 0.0)).aspect_ratio(), 1.0);
}

#[test]
fn test_center() {
    assert_eq!(icon((100.0, 50.0), (200.0, 100.0)).center(), (200.0, 100.0));
}

#[test]
fn test_icon_templates() {
    assert_eq!(ICON_TEMPLATES.len(), 3);
    assert_eq!(IconAsset::Arrow.template_name(), "Arrow");
    assert_eq!(IconAsset::Mace.template_name(), "Mace");
    assert_eq!(IconAsset::Sword.template_name(), "Sword");
}

#[test]
fn test_background_handle_accessor() {
    assert!(Background::Default.is_default());
    assert!(Background::Default.handle().is_none());
    assert!(Background::None.handle().is_none());

    let mut pool = ResourcePool::new();
    let handle = pool.allocate(&png_file("bg.png")).unwrap();
    let background = Background::Custom {
        name: "bg.png".to_string(),
        handle: handle.clone(),
    };
    assert_eq!(background.handle(), Some(&handle));
}

#[test]
fn test_item_serializes_without_bytes() {
    let mut pool = ResourcePool::new();
    let handle = pool.allocate(&png_file("photo.png")).unwrap();
    let item = CanvasItem {
        id: 3,
        name: "photo.png".to_string(),
        kind: ItemKind::Image,
        resource: ResourceRef::Imported { handle },
        position: (80.0, 80.0),
        size: (260.0, 180.0),
        rotation: 0.0,
        layer: 1,
        locked: false,
    };

    let value = serde_json::to_value(&item).unwrap();
    assert_eq!(value["kind"]["kind"], "image");
    assert_eq!(value["resource"]["source"], "imported");
    assert_eq!(value["resource"]["handle"]["name"], "photo.png");
    // Raw image bytes never appear in the serialized form.
    assert!(value["resource"]["handle"].get("bytes").is_none());
}
