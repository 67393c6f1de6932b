//! Fixed-capacity player inventory.

use arrayvec::ArrayVec;

use crate::config::GameConfig;
use crate::state::types::ItemId;

pub type Slots = ArrayVec<Option<ItemId>, { GameConfig::MAX_INVENTORY_SLOTS }>;

/// Ordered inventory slots. The length is fixed at creation; an empty slot is
/// an explicit `None` hole so slot indices stay stable for the presentation
/// layer.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InventoryState {
    pub items: Slots,
}

impl InventoryState {
    /// Creates an inventory with `capacity` empty slots (clamped to the storage limit).
    pub fn with_capacity(capacity: usize) -> Self {
        let mut items = ArrayVec::new();
        for _ in 0..capacity.min(GameConfig::MAX_INVENTORY_SLOTS) {
            items.push(None);
        }
        Self { items }
    }

    pub fn capacity(&self) -> usize {
        self.items.len()
    }

    pub fn slot(&self, index: usize) -> Option<&ItemId> {
        self.items.get(index).and_then(Option::as_ref)
    }

    pub fn first_empty(&self) -> Option<usize> {
        self.items.iter().position(Option::is_none)
    }

    pub fn position_of(&self, item: &ItemId) -> Option<usize> {
        self.items
            .iter()
            .position(|slot| slot.as_ref() == Some(item))
    }

    pub fn contains(&self, item: &ItemId) -> bool {
        self.position_of(item).is_some()
    }

    /// Iterates over occupied slots as `(index, item)`.
    pub fn occupied(&self) -> impl Iterator<Item = (usize, &ItemId)> {
        self.items
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| slot.as_ref().map(|item| (index, item)))
    }

    /// Replaces the content of `index`, returning what was there.
    pub fn replace(&mut self, index: usize, item: Option<ItemId>) -> Option<ItemId> {
        core::mem::replace(&mut self.items[index], item)
    }

    /// Empties the slot holding `item`, returning its index.
    pub fn remove(&mut self, item: &ItemId) -> Option<usize> {
        let index = self.position_of(item)?;
        self.items[index] = None;
        Some(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capacity_is_fixed_with_explicit_holes() {
        let mut inventory = InventoryState::with_capacity(4);
        assert_eq!(inventory.capacity(), 4);
        assert_eq!(inventory.first_empty(), Some(0));

        inventory.replace(0, Some(ItemId::from("torch")));
        inventory.replace(2, Some(ItemId::from("rope")));
        assert_eq!(inventory.first_empty(), Some(1));

        assert_eq!(inventory.remove(&ItemId::from("torch")), Some(0));
        assert_eq!(inventory.capacity(), 4);
        assert_eq!(inventory.occupied().count(), 1);
    }

    #[test]
    fn capacity_is_clamped_to_storage() {
        let inventory = InventoryState::with_capacity(64);
        assert_eq!(inventory.capacity(), GameConfig::MAX_INVENTORY_SLOTS);
    }
}
