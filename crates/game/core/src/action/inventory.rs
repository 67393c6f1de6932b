//! Inventory & equipment manager.
//!
//! Items are moved between the room floor, inventory slots and equipment
//! slots; they are never copied or destroyed here. Every command that touches
//! equipment refreshes the derived stats before returning.

use crate::env::{GameEnv, ItemDefinition};
use crate::state::{EquipSlot, GameState, ItemId, LogKind};
use crate::stats::refresh_stats;

use super::{ActionResult, ActionTransition, EquipRef, InventoryError, ItemRef, Placement};

pub(crate) fn definition<'e>(
    env: &GameEnv<'e>,
    item: &ItemId,
) -> Result<&'e ItemDefinition, InventoryError> {
    let definition = env.items().definition(item);
    debug_assert!(definition.is_some(), "item {item} missing from catalog");
    definition.ok_or_else(|| InventoryError::UnknownItem { item: item.clone() })
}

fn check_slot(state: &GameState, index: usize) -> Result<(), InventoryError> {
    let capacity = state.inventory.capacity();
    if index >= capacity {
        return Err(InventoryError::SlotOutOfRange { index, capacity });
    }
    Ok(())
}

fn refresh(state: &mut GameState, env: &GameEnv<'_>) {
    refresh_stats(state, env.items(), env.config());
}

// ============================================================================
// Take
// ============================================================================

/// Picks an item up from the current room's floor.
///
/// Weapons and armor go straight into an empty matching equipment slot;
/// everything else (and gear whose slot is taken) goes into the first empty
/// inventory slot.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TakeItemAction {
    pub item: ItemId,
}

impl TakeItemAction {
    pub fn new(item: impl Into<ItemId>) -> Self {
        Self { item: item.into() }
    }

    fn placement(&self, state: &GameState, env: &GameEnv<'_>) -> Result<Placement, InventoryError> {
        let on_floor = state
            .current_room()
            .is_some_and(|room| room.items.contains(&self.item));
        if !on_floor {
            return Err(InventoryError::NotOnFloor {
                item: self.item.clone(),
            });
        }

        let definition = definition(env, &self.item)?;
        if let Some(slot) = definition.equip_slot()
            && state.equipped.get(slot).is_none()
        {
            return Ok(Placement::Equipped(slot));
        }

        state
            .inventory
            .first_empty()
            .map(Placement::Inventory)
            .ok_or(InventoryError::InventoryFull)
    }
}

impl ActionTransition for TakeItemAction {
    type Error = InventoryError;
    type Result = ActionResult;

    fn pre_validate(&self, state: &GameState, env: &GameEnv<'_>) -> Result<(), Self::Error> {
        self.placement(state, env).map(|_| ())
    }

    fn apply(&self, state: &mut GameState, env: &GameEnv<'_>) -> Result<ActionResult, Self::Error> {
        let placement = self.placement(state, env)?;
        let name = definition(env, &self.item)?.name.clone();

        if let Some(room) = state.current_room_mut() {
            room.take_floor_item(&self.item);
        }

        match placement {
            Placement::Equipped(slot) => {
                state.equipped.equip(slot, self.item.clone());
                refresh(state, env);
                state.add_log(format!("Picked up and equipped the {name}."), LogKind::Success);
            }
            Placement::Inventory(index) => {
                state.inventory.replace(index, Some(self.item.clone()));
                state.add_log(format!("Picked up the {name}."), LogKind::Success);
            }
        }

        Ok(ActionResult::ItemTaken {
            item: self.item.clone(),
            placement,
        })
    }

    fn post_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        debug_assert!(state.carries(&self.item));
        Ok(())
    }
}

// ============================================================================
// Drop
// ============================================================================

/// Puts a carried or equipped item on the current room's floor.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DropItemAction {
    pub item: ItemId,
}

impl DropItemAction {
    pub fn new(item: impl Into<ItemId>) -> Self {
        Self { item: item.into() }
    }
}

impl ActionTransition for DropItemAction {
    type Error = InventoryError;
    type Result = ActionResult;

    fn pre_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        if !state.carries(&self.item) {
            return Err(InventoryError::NotCarried {
                item: self.item.clone(),
            });
        }
        Ok(())
    }

    fn apply(&self, state: &mut GameState, env: &GameEnv<'_>) -> Result<ActionResult, Self::Error> {
        let name = definition(env, &self.item)?.name.clone();

        if state.inventory.remove(&self.item).is_none() {
            let slot = state
                .equipped
                .slot_of(&self.item)
                .ok_or_else(|| InventoryError::NotCarried {
                    item: self.item.clone(),
                })?;
            state.equipped.unequip(slot);
            refresh(state, env);
        }

        if let Some(room) = state.current_room_mut() {
            room.items.push(self.item.clone());
        }
        state.add_log(format!("Dropped the {name}."), LogKind::Info);

        Ok(ActionResult::ItemDropped {
            item: self.item.clone(),
        })
    }
}

// ============================================================================
// Equip
// ============================================================================

/// Moves an inventory item into its equipment slot, swapping the previous
/// occupant into the vacated inventory slot.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EquipItemAction {
    pub source: ItemRef,
    /// Slot the caller targeted (drag-and-drop); must match the item type.
    pub slot: Option<EquipSlot>,
}

struct EquipPlan {
    index: usize,
    item: ItemId,
    slot: EquipSlot,
}

impl EquipItemAction {
    pub fn new(source: ItemRef) -> Self {
        Self { source, slot: None }
    }

    pub fn into_slot(mut self, slot: EquipSlot) -> Self {
        self.slot = Some(slot);
        self
    }

    fn plan(&self, state: &GameState, env: &GameEnv<'_>) -> Result<EquipPlan, InventoryError> {
        let index = match &self.source {
            ItemRef::Id(item) => state
                .inventory
                .position_of(item)
                .ok_or_else(|| InventoryError::NotCarried { item: item.clone() })?,
            ItemRef::Slot(index) => {
                check_slot(state, *index)?;
                *index
            }
        };
        let item = state
            .inventory
            .slot(index)
            .cloned()
            .ok_or(InventoryError::EmptySlot { index })?;

        let slot = definition(env, &item)?
            .equip_slot()
            .ok_or_else(|| InventoryError::NotEquippable { item: item.clone() })?;
        if let Some(requested) = self.slot
            && requested != slot
        {
            return Err(InventoryError::SlotMismatch {
                item,
                slot: requested,
            });
        }

        Ok(EquipPlan { index, item, slot })
    }
}

impl ActionTransition for EquipItemAction {
    type Error = InventoryError;
    type Result = ActionResult;

    fn pre_validate(&self, state: &GameState, env: &GameEnv<'_>) -> Result<(), Self::Error> {
        self.plan(state, env).map(|_| ())
    }

    fn apply(&self, state: &mut GameState, env: &GameEnv<'_>) -> Result<ActionResult, Self::Error> {
        let EquipPlan { index, item, slot } = self.plan(state, env)?;
        let name = definition(env, &item)?.name.clone();

        state.inventory.replace(index, None);
        let replaced = state.equipped.equip(slot, item.clone());
        state.inventory.replace(index, replaced.clone());
        refresh(state, env);
        state.add_log(format!("Equipped the {name}."), LogKind::Info);

        Ok(ActionResult::ItemEquipped {
            item,
            slot,
            replaced,
        })
    }
}

// ============================================================================
// Unequip
// ============================================================================

/// Moves an equipped item back into the inventory.
///
/// With an explicit target slot holding gear of the same type, the two swap
/// (the target item is promoted into the equipment slot).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnequipItemAction {
    pub source: EquipRef,
    pub target: Option<usize>,
}

struct UnequipPlan {
    slot: EquipSlot,
    target: usize,
    promoted: Option<ItemId>,
}

impl UnequipItemAction {
    pub fn new(source: EquipRef) -> Self {
        Self {
            source,
            target: None,
        }
    }

    pub fn to_slot(mut self, target: usize) -> Self {
        self.target = Some(target);
        self
    }

    fn plan(&self, state: &GameState, env: &GameEnv<'_>) -> Result<UnequipPlan, InventoryError> {
        let slot = match &self.source {
            EquipRef::Id(item) => state
                .equipped
                .slot_of(item)
                .ok_or_else(|| InventoryError::NotCarried { item: item.clone() })?,
            EquipRef::Slot(slot) => {
                if state.equipped.get(*slot).is_none() {
                    return Err(InventoryError::NothingEquipped { slot: *slot });
                }
                *slot
            }
        };

        let Some(target) = self.target else {
            let target = state
                .inventory
                .first_empty()
                .ok_or(InventoryError::InventoryFull)?;
            return Ok(UnequipPlan {
                slot,
                target,
                promoted: None,
            });
        };

        check_slot(state, target)?;
        let promoted = match state.inventory.slot(target) {
            None => None,
            Some(occupant) => {
                if definition(env, occupant)?.equip_slot() != Some(slot) {
                    return Err(InventoryError::SlotOccupied { index: target });
                }
                Some(occupant.clone())
            }
        };
        Ok(UnequipPlan {
            slot,
            target,
            promoted,
        })
    }
}

impl ActionTransition for UnequipItemAction {
    type Error = InventoryError;
    type Result = ActionResult;

    fn pre_validate(&self, state: &GameState, env: &GameEnv<'_>) -> Result<(), Self::Error> {
        self.plan(state, env).map(|_| ())
    }

    fn apply(&self, state: &mut GameState, env: &GameEnv<'_>) -> Result<ActionResult, Self::Error> {
        let UnequipPlan {
            slot,
            target,
            promoted,
        } = self.plan(state, env)?;

        let item = state
            .equipped
            .unequip(slot)
            .ok_or(InventoryError::NothingEquipped { slot })?;
        if let Some(promoted) = &promoted {
            state.equipped.equip(slot, promoted.clone());
        }
        state.inventory.replace(target, Some(item.clone()));
        refresh(state, env);

        let name = definition(env, &item)?.name.clone();
        state.add_log(format!("Unequipped the {name}."), LogKind::Info);
        if let Some(promoted) = &promoted {
            let name = definition(env, promoted)?.name.clone();
            state.add_log(format!("Equipped the {name}."), LogKind::Info);
        }

        Ok(ActionResult::ItemUnequipped {
            item,
            slot,
            promoted,
        })
    }
}

// ============================================================================
// Reorder
// ============================================================================

/// Swaps two inventory slots.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReorderInventoryAction {
    pub from: usize,
    pub to: usize,
}

impl ReorderInventoryAction {
    pub fn new(from: usize, to: usize) -> Self {
        Self { from, to }
    }
}

impl ActionTransition for ReorderInventoryAction {
    type Error = InventoryError;
    type Result = ActionResult;

    fn pre_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        check_slot(state, self.from)?;
        check_slot(state, self.to)
    }

    fn apply(&self, state: &mut GameState, _env: &GameEnv<'_>) -> Result<ActionResult, Self::Error> {
        state.inventory.items.swap(self.from, self.to);
        Ok(ActionResult::InventoryReordered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::env::{ItemCatalog, ItemKind, ItemStats, PcgRng, WorldMap};
    use crate::state::Room;

    struct Fixture {
        catalog: ItemCatalog,
        world: WorldMap,
        config: GameConfig,
    }

    impl Fixture {
        fn new() -> Self {
            let catalog = ItemCatalog::new([
                ItemDefinition::new("dagger", "Dagger", ItemKind::Weapon)
                    .with_stats(ItemStats::attack(2)),
                ItemDefinition::new("sword", "Sword", ItemKind::Weapon)
                    .with_stats(ItemStats::attack(10)),
                ItemDefinition::new("torch", "Torch", ItemKind::Item),
                ItemDefinition::new("potion", "Potion", ItemKind::Consumable),
            ]);
            let room = Room::new("hall", "Hall")
                .with_item("sword")
                .with_item("dagger")
                .with_item("torch");
            let world = WorldMap::new("hall", [room]);
            Self {
                catalog,
                world,
                config: GameConfig::default(),
            }
        }

        fn env<'a>(&'a self, rng: &'a PcgRng) -> GameEnv<'a> {
            GameEnv::new(&self.catalog, &self.world, rng, &self.config)
        }
    }

    #[test]
    fn take_weapon_auto_equips_into_empty_slot() {
        let fixture = Fixture::new();
        let rng = PcgRng;
        let env = fixture.env(&rng);
        let mut state = GameState::new(&env, 1);

        let result = TakeItemAction::new("dagger").apply(&mut state, &env).unwrap();

        assert_eq!(
            result,
            ActionResult::ItemTaken {
                item: ItemId::from("dagger"),
                placement: Placement::Equipped(EquipSlot::Weapon),
            }
        );
        assert_eq!(state.attack, 7);
        assert!(!state.current_room().unwrap().items.contains(&ItemId::from("dagger")));
    }

    #[test]
    fn second_weapon_goes_to_inventory() {
        let fixture = Fixture::new();
        let rng = PcgRng;
        let env = fixture.env(&rng);
        let mut state = GameState::new(&env, 1);

        TakeItemAction::new("dagger").apply(&mut state, &env).unwrap();
        TakeItemAction::new("sword").apply(&mut state, &env).unwrap();

        assert_eq!(state.inventory.slot(0), Some(&ItemId::from("sword")));
        assert_eq!(state.attack, 7);
    }

    #[test]
    fn unequip_onto_same_type_promotes() {
        let fixture = Fixture::new();
        let rng = PcgRng;
        let env = fixture.env(&rng);
        let mut state = GameState::new(&env, 1);
        TakeItemAction::new("dagger").apply(&mut state, &env).unwrap();
        TakeItemAction::new("sword").apply(&mut state, &env).unwrap();

        let action = UnequipItemAction::new(EquipRef::Slot(EquipSlot::Weapon)).to_slot(0);
        action.pre_validate(&state, &env).unwrap();
        action.apply(&mut state, &env).unwrap();

        assert_eq!(state.equipped.weapon, Some(ItemId::from("sword")));
        assert_eq!(state.inventory.slot(0), Some(&ItemId::from("dagger")));
        assert_eq!(state.attack, 15);
    }

    #[test]
    fn unequip_onto_other_item_is_rejected() {
        let fixture = Fixture::new();
        let rng = PcgRng;
        let env = fixture.env(&rng);
        let mut state = GameState::new(&env, 1);
        TakeItemAction::new("dagger").apply(&mut state, &env).unwrap();
        TakeItemAction::new("torch").apply(&mut state, &env).unwrap();

        let action = UnequipItemAction::new(EquipRef::Slot(EquipSlot::Weapon)).to_slot(0);
        assert_eq!(
            action.pre_validate(&state, &env),
            Err(InventoryError::SlotOccupied { index: 0 })
        );
    }

    #[test]
    fn reorder_rejects_out_of_range() {
        let fixture = Fixture::new();
        let rng = PcgRng;
        let env = fixture.env(&rng);
        let state = GameState::new(&env, 1);

        let error = ReorderInventoryAction::new(0, 9)
            .pre_validate(&state, &env)
            .unwrap_err();
        assert_eq!(
            error,
            InventoryError::SlotOutOfRange {
                index: 9,
                capacity: 4
            }
        );
    }
}
