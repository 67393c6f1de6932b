//! Authoritative game state representation.
//!
//! This module owns the data structures that describe rooms, the player's
//! inventory and equipment, the combat session and the quest log. Runtime
//! layers clone or query this state but mutate it exclusively through the
//! engine.
mod log;
pub mod types;

use std::collections::{BTreeMap, BTreeSet};

pub use log::derive_feedback;
pub use types::{
    CombatResult, CombatResultKind, CombatState, Direction, Enemy, EnemyAction, EquipSlot,
    EquippedItems, Feedback, InventoryState, ItemId, LockDescriptor, LogEntry, LogId, LogKind,
    PlayerAction, Room, RoomId, Slots, UiFlags,
};

use crate::env::GameEnv;
use crate::stats::compute_stats;

/// Canonical snapshot of the game.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    /// RNG seed for deterministic random generation.
    ///
    /// Set once at game initialization and never modified.
    /// Combined with `nonce` to generate unique seeds for each random event.
    pub game_seed: u64,

    /// Number of commands applied so far.
    pub nonce: u64,

    pub current_room_id: RoomId,
    /// Room the presentation layer is currently showing; lags behind
    /// `current_room_id` while a room transition plays.
    pub perceived_room_id: RoomId,
    pub rooms: BTreeMap<RoomId, Room>,

    pub inventory: InventoryState,
    pub equipped: EquippedItems,

    pub health: u32,
    pub max_health: u32,
    pub attack: u32,
    pub defense: u32,

    pub visited_rooms: BTreeSet<RoomId>,
    pub quest_log: Vec<LogEntry>,
    next_log_id: u64,
    pub feedback: Option<Feedback>,
    pub combat: Option<CombatState>,

    pub ui: UiFlags,
    /// Exit unlocked by the last unlock command, for a highlight effect.
    pub unlock_highlight: Option<Direction>,
    pub story_flags: BTreeSet<String>,
}

impl GameState {
    /// Builds a fresh state from world data.
    pub fn new(env: &GameEnv<'_>, game_seed: u64) -> Self {
        let config = env.config();
        let world = env.world();
        let start = world.start_room().clone();
        debug_assert!(
            world.room(&start).is_some(),
            "start room {start} missing from world data"
        );

        let equipped = EquippedItems::empty();
        let stats = compute_stats(&equipped, env.items(), config);

        let mut state = Self {
            game_seed,
            nonce: 0,
            current_room_id: start.clone(),
            perceived_room_id: start.clone(),
            rooms: world.rooms().clone(),
            inventory: InventoryState::with_capacity(config.effective_capacity()),
            equipped,
            health: config.starting_max_health,
            max_health: config.starting_max_health,
            attack: stats.attack,
            defense: stats.defense,
            visited_rooms: BTreeSet::from([start]),
            quest_log: Vec::new(),
            next_log_id: 1,
            feedback: None,
            combat: None,
            ui: UiFlags::empty(),
            unlock_highlight: None,
            story_flags: BTreeSet::new(),
        };
        state.log_arrival(true);
        state
    }

    pub fn current_room(&self) -> Option<&Room> {
        self.rooms.get(&self.current_room_id)
    }

    pub fn current_room_mut(&mut self) -> Option<&mut Room> {
        self.rooms.get_mut(&self.current_room_id)
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    pub fn in_combat(&self) -> bool {
        self.combat.is_some()
    }

    /// True when `item` is in the inventory or equipped.
    pub fn carries(&self, item: &ItemId) -> bool {
        self.inventory.contains(item) || self.equipped.slot_of(item).is_some()
    }

    /// Every item instance currently in the world, across floors, inventory
    /// and equipment. Used to check conservation.
    pub fn item_instances(&self) -> Vec<ItemId> {
        let mut items: Vec<ItemId> = self
            .rooms
            .values()
            .flat_map(|room| room.items.iter().cloned())
            .chain(self.inventory.occupied().map(|(_, item)| item.clone()))
            .chain(self.equipped.iter().cloned())
            .collect();
        items.sort();
        items
    }
}
