//! The board: authoritative ordered collection of placed items.
//!
//! Owns the item list, the current background, the monotonic layer counter,
//! and the spatial index used for hit testing. All mutating operations on a
//! locked item are rejected silently, except [`Board::toggle_lock`] itself.

use crate::spatial_index::SpatialIndex;
use crate::types::{Background, CanvasItem, ItemId};
use std::collections::HashSet;

pub struct Board {
    pub items: Vec<CanvasItem>,
    pub background: Background,
    index: SpatialIndex,
    next_item_id: ItemId,
    layer_counter: i32,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            background: Background::Default,
            index: SpatialIndex::new(),
            next_item_id: 0,
            layer_counter: 1,
        }
    }

    /// Allocate a fresh item id.
    pub fn alloc_id(&mut self) -> ItemId {
        let id = self.next_item_id;
        self.next_item_id += 1;
        id
    }

    /// Claim the next draw-order key. Monotonic and independent of the
    /// layers currently in use.
    pub fn next_layer(&mut self) -> i32 {
        let layer = self.layer_counter;
        self.layer_counter += 1;
        layer
    }

    pub fn insert(&mut self, item: CanvasItem) {
        self.index.upsert(item.id, item.position, item.size);
        self.items.push(item);
    }

    pub fn get_item(&self, id: ItemId) -> Option<&CanvasItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn get_item_mut(&mut self, id: ItemId) -> Option<&mut CanvasItem> {
        self.items.iter_mut().find(|item| item.id == id)
    }

    /// Apply a mutation to an unlocked item and resync its index bounds.
    /// Returns false (and does nothing) if the item is locked or missing.
    pub fn update<F>(&mut self, id: ItemId, f: F) -> bool
    where
        F: FnOnce(&mut CanvasItem),
    {
        let Some(item) = self.items.iter_mut().find(|item| item.id == id) else {
            return false;
        };
        if item.locked {
            return false;
        }
        f(item);
        let (position, size) = (item.position, item.size);
        self.index.upsert(id, position, size);
        true
    }

    /// Remove every unlocked item in `ids`, returning the removed items so
    /// the caller can settle their resources. Locked items stay put.
    pub fn remove_items(&mut self, ids: &HashSet<ItemId>) -> Vec<CanvasItem> {
        let mut removed = Vec::new();
        self.items.retain(|item| {
            if ids.contains(&item.id) && !item.locked {
                removed.push(item.clone());
                false
            } else {
                true
            }
        });
        for item in &removed {
            self.index.remove(item.id);
        }
        removed
    }

    /// Raise an item above everything else. The layer counter resumes above
    /// the new top so later items keep stacking upward.
    pub fn bring_to_front(&mut self, id: ItemId) -> bool {
        let top = self
            .items
            .iter()
            .map(|item| item.layer)
            .max()
            .unwrap_or(1)
            .max(1);
        let changed = self.update(id, |item| item.layer = top + 1);
        if changed {
            self.layer_counter = top + 2;
        }
        changed
    }

    /// Sink an item below everything else. May produce layers below the
    /// current minimum, including negative values.
    pub fn send_to_back(&mut self, id: ItemId) -> bool {
        let lowest = self
            .items
            .iter()
            .map(|item| item.layer)
            .min()
            .unwrap_or(1)
            .min(1);
        self.update(id, |item| item.layer = lowest - 1)
    }

    /// Flip an item's lock. The only mutation allowed on a locked item.
    pub fn toggle_lock(&mut self, id: ItemId) -> bool {
        let Some(item) = self.items.iter_mut().find(|item| item.id == id) else {
            return false;
        };
        item.locked = !item.locked;
        true
    }

    /// Topmost item whose bounds contain the given canvas-space point.
    ///
    /// Candidates come from the spatial index; ties are broken by layer,
    /// then insertion order, matching draw order.
    ///
    /// Bounds are the unrotated axis-aligned rectangle. For a rotated item
    /// the press target is its upright footprint, not the drawn outline;
    /// an approximation accepted to keep the index geometry simple.
    pub fn item_at(&self, x: f32, y: f32) -> Option<ItemId> {
        let candidates: HashSet<ItemId> = self.index.query_point(x, y).into_iter().collect();
        self.items
            .iter()
            .enumerate()
            .filter(|(_, item)| candidates.contains(&item.id))
            .max_by_key(|(position, item)| (item.layer, *position))
            .map(|(_, item)| item.id)
    }

    /// Replace the item list wholesale (history restore) and rebuild the
    /// spatial index. The background and counters are untouched: history
    /// tracks items only.
    pub fn replace_items(&mut self, items: Vec<CanvasItem>) {
        self.items = items;
        self.index
            .rebuild(self.items.iter().map(|i| (i.id, i.position, i.size)));
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}
