//! The authoritative item collection.

use tolman_model::{Item, ItemId, Tolerance};
use tracing::error;

/// Ordered, authoritative collection of items and their committed values.
///
/// The store owns its items exclusively. Items exist from construction on
/// and are never added or removed; the only mutation the store permits is
/// whole-array replacement of one item's tolerances.
#[derive(Debug, Clone, Default)]
pub struct ItemStore {
    items: Vec<Item>,
}

impl ItemStore {
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    /// Read-only view of all items, in seed order.
    #[inline]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn get(&self, id: &ItemId) -> Option<&Item> {
        self.items.iter().find(|item| &item.id == id)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Replace an item's tolerance array wholesale.
    ///
    /// An unknown id is a caller bug, not a recoverable condition: the store
    /// stays untouched, the failure is logged, and `false` comes back.
    pub fn replace_tolerances(&mut self, id: &ItemId, tolerances: Vec<Tolerance>) -> bool {
        match self.items.iter_mut().find(|item| &item.id == id) {
            Some(item) => {
                item.tolerances = tolerances;
                true
            }
            None => {
                error!(item_id = %id, "replace_tolerances called with unknown item id");
                false
            }
        }
    }

    /// Hand the items over to the persistence collaborator.
    pub fn into_items(self) -> Vec<Item> {
        self.items
    }
}
