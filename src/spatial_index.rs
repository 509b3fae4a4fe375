//! R-tree spatial index for canvas hit testing.
//!
//! Pointer-down has to resolve "which item is under the cursor" before any
//! gesture can start. The index answers point queries in O(log n); the board
//! breaks ties among overlapping candidates by layer order.

use crate::types::ItemId;
use rstar::{AABB, RTree, RTreeObject};
use std::collections::HashMap;

/// Axis-aligned bounding box of one placed item.
#[derive(Debug, Clone, Copy)]
pub struct SpatialEntry {
    pub item_id: ItemId,
    pub min_x: f32,
    pub min_y: f32,
    pub max_x: f32,
    pub max_y: f32,
}

impl SpatialEntry {
    pub fn new(item_id: ItemId, position: (f32, f32), size: (f32, f32)) -> Self {
        Self {
            item_id,
            min_x: position.0,
            min_y: position.1,
            max_x: position.0 + size.0,
            max_y: position.1 + size.1,
        }
    }

    #[inline]
    pub fn contains_point(&self, x: f32, y: f32) -> bool {
        x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
    }
}

impl RTreeObject for SpatialEntry {
    type Envelope = AABB<[f32; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners([self.min_x, self.min_y], [self.max_x, self.max_y])
    }
}

impl PartialEq for SpatialEntry {
    fn eq(&self, other: &Self) -> bool {
        self.item_id == other.item_id
    }
}

/// Spatial index over item bounding boxes.
///
/// Kept in sync incrementally as items are added, moved, resized, and
/// removed; rebuilt wholesale after history restores.
#[derive(Default)]
pub struct SpatialIndex {
    tree: RTree<SpatialEntry>,
    entries: HashMap<ItemId, SpatialEntry>,
}

impl SpatialIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or update an item's bounds.
    pub fn upsert(&mut self, item_id: ItemId, position: (f32, f32), size: (f32, f32)) {
        if let Some(old) = self.entries.remove(&item_id) {
            self.tree.remove(&old);
        }
        let entry = SpatialEntry::new(item_id, position, size);
        self.tree.insert(entry);
        self.entries.insert(item_id, entry);
    }

    pub fn remove(&mut self, item_id: ItemId) -> bool {
        if let Some(entry) = self.entries.remove(&item_id) {
            self.tree.remove(&entry);
            true
        } else {
            false
        }
    }

    /// All items whose bounds contain the given canvas-space point.
    pub fn query_point(&self, x: f32, y: f32) -> Vec<ItemId> {
        let point = AABB::from_point([x, y]);
        self.tree
            .locate_in_envelope_intersecting(&point)
            .filter(|entry| entry.contains_point(x, y))
            .map(|entry| entry.item_id)
            .collect()
    }

    /// Replace the whole index, used after undo/redo restores the item list.
    pub fn rebuild<I>(&mut self, items: I)
    where
        I: Iterator<Item = (ItemId, (f32, f32), (f32, f32))>,
    {
        let entries: Vec<SpatialEntry> = items
            .map(|(id, pos, size)| SpatialEntry::new(id, pos, size))
            .collect();
        self.entries = entries.iter().map(|e| (e.item_id, *e)).collect();
        self.tree = RTree::bulk_load(entries);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
