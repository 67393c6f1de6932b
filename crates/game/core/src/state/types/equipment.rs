//! Equipment slots.
//!
//! Equipment stores item ids only; stat bonuses come from the catalog via
//! [`crate::stats::compute_stats`].

use crate::state::types::ItemId;

/// The two equipment slots.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum EquipSlot {
    Weapon,
    Armor,
}

/// Currently equipped items.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EquippedItems {
    pub weapon: Option<ItemId>,
    pub armor: Option<ItemId>,
}

impl EquippedItems {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn get(&self, slot: EquipSlot) -> Option<&ItemId> {
        match slot {
            EquipSlot::Weapon => self.weapon.as_ref(),
            EquipSlot::Armor => self.armor.as_ref(),
        }
    }

    fn slot_mut(&mut self, slot: EquipSlot) -> &mut Option<ItemId> {
        match slot {
            EquipSlot::Weapon => &mut self.weapon,
            EquipSlot::Armor => &mut self.armor,
        }
    }

    /// Puts `item` into `slot`, returning the previous occupant.
    pub fn equip(&mut self, slot: EquipSlot, item: ItemId) -> Option<ItemId> {
        self.slot_mut(slot).replace(item)
    }

    /// Empties `slot`, returning its occupant.
    pub fn unequip(&mut self, slot: EquipSlot) -> Option<ItemId> {
        self.slot_mut(slot).take()
    }

    /// Returns which slot holds `item`, if any.
    pub fn slot_of(&self, item: &ItemId) -> Option<EquipSlot> {
        if self.weapon.as_ref() == Some(item) {
            Some(EquipSlot::Weapon)
        } else if self.armor.as_ref() == Some(item) {
            Some(EquipSlot::Armor)
        } else {
            None
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &ItemId> {
        self.weapon.iter().chain(self.armor.iter())
    }
}
