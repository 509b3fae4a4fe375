//! Selection tracking.
//!
//! A selection is an unordered set of item ids, always a subset of the items
//! currently on the board; [`SelectionManager::prune`] enforces that after
//! removals and restores.

use crate::types::ItemId;
use std::collections::HashSet;

#[derive(Default)]
pub struct SelectionManager {
    ids: HashSet<ItemId>,
}

impl SelectionManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole selection with a single item.
    pub fn select_only(&mut self, id: ItemId) {
        self.ids.clear();
        self.ids.insert(id);
    }

    /// Flip membership of an item (toggle-modifier click).
    pub fn toggle(&mut self, id: ItemId) {
        if !self.ids.remove(&id) {
            self.ids.insert(id);
        }
    }

    /// Add an item if absent; leave the selection unchanged otherwise
    /// (additive-modifier click).
    pub fn add(&mut self, id: ItemId) {
        self.ids.insert(id);
    }

    pub fn set(&mut self, ids: impl IntoIterator<Item = ItemId>) {
        self.ids = ids.into_iter().collect();
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.ids.contains(&id)
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn ids(&self) -> &HashSet<ItemId> {
        &self.ids
    }

    /// Drop ids that no longer exist on the board.
    pub fn prune(&mut self, alive: impl Fn(ItemId) -> bool) {
        self.ids.retain(|id| alive(*id));
    }
}
