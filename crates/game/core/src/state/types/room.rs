//! Rooms, locks and the enemies embedded in them.

use std::collections::BTreeMap;

use super::{Direction, ItemId, RoomId};

/// One node of the world graph.
///
/// Rooms are copied from world data at init and then mutated in place by the
/// engine (floor items, locks, enemy HP). The catalog itself is never touched.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Room {
    pub id: RoomId,
    pub name: String,
    pub description: String,
    /// Longer text shown the first time the player enters.
    pub narrative: String,
    /// Display image key for the presentation layer.
    pub image: Option<String>,
    pub exits: BTreeMap<Direction, RoomId>,
    /// Items lying on the floor, in drop order.
    pub items: Vec<ItemId>,
    pub locked_exits: BTreeMap<Direction, LockDescriptor>,
    pub enemy: Option<Enemy>,
}

impl Room {
    pub fn new(id: impl Into<RoomId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_exit(mut self, direction: Direction, target: impl Into<RoomId>) -> Self {
        self.exits.insert(direction, target.into());
        self
    }

    pub fn with_item(mut self, item: impl Into<ItemId>) -> Self {
        self.items.push(item.into());
        self
    }

    pub fn with_lock(mut self, direction: Direction, lock: LockDescriptor) -> Self {
        self.locked_exits.insert(direction, lock);
        self
    }

    pub fn with_enemy(mut self, enemy: Enemy) -> Self {
        self.enemy = Some(enemy);
        self
    }

    /// Returns the enemy only while it still stands.
    pub fn living_enemy(&self) -> Option<&Enemy> {
        self.enemy.as_ref().filter(|enemy| enemy.hp > 0)
    }

    /// Removes the first floor occurrence of `item`, returning whether it was present.
    pub fn take_floor_item(&mut self, item: &ItemId) -> bool {
        match self.items.iter().position(|candidate| candidate == item) {
            Some(index) => {
                self.items.remove(index);
                true
            }
            None => false,
        }
    }
}

/// Lock guarding one exit of a room.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LockDescriptor {
    /// Key item that opens this lock.
    pub key_id: ItemId,
    /// Shown when the player walks into the locked exit.
    pub locked_message: String,
    /// Replaces the room image once unlocked.
    #[cfg_attr(feature = "serde", serde(default))]
    pub unlocked_image: Option<String>,
}

impl LockDescriptor {
    pub fn new(key_id: impl Into<ItemId>, locked_message: impl Into<String>) -> Self {
        Self {
            key_id: key_id.into(),
            locked_message: locked_message.into(),
            unlocked_image: None,
        }
    }

    pub fn with_unlocked_image(mut self, image: impl Into<String>) -> Self {
        self.unlocked_image = Some(image.into());
        self
    }
}

/// Enemy stationed in a room.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Enemy {
    pub id: String,
    pub name: String,
    pub hp: u32,
    pub max_hp: u32,
    pub attack: u32,
    pub defense: u32,
    pub defeat_message: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub drop: Option<ItemId>,
}

impl Enemy {
    pub fn new(id: impl Into<String>, name: impl Into<String>, max_hp: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            hp: max_hp,
            max_hp,
            ..Self::default()
        }
    }

    pub fn with_attack(mut self, attack: u32) -> Self {
        self.attack = attack;
        self
    }

    pub fn with_defense(mut self, defense: u32) -> Self {
        self.defense = defense;
        self
    }

    pub fn with_drop(mut self, item: impl Into<ItemId>) -> Self {
        self.drop = Some(item.into());
        self
    }

    pub fn with_defeat_message(mut self, message: impl Into<String>) -> Self {
        self.defeat_message = message.into();
        self
    }

    pub fn is_defeated(&self) -> bool {
        self.hp == 0
    }
}
