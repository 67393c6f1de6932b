//! Commands and their state transitions.
//!
//! Every inbound command is a small struct implementing [`ActionTransition`].
//! [`Command`] wraps them so the engine can route a single value through the
//! pre_validate → apply → post_validate pipeline.
//!
//! # Module Structure
//!
//! - `inventory`: take, drop, equip, unequip, reorder
//! - `consumable`: use-consumable and the effect interpreter
//! - `navigation`: move, reveal-room, unlock-door
//! - `combat`: start, submit action, end round
//! - `log`: add-log-entry, clear-feedback, UI flags
//! - `cue`: named presentation cues derived from results

pub mod combat;
pub mod consumable;
pub mod cue;
pub mod error;
pub mod inventory;
pub mod log;
pub mod navigation;

pub use combat::{EndCombatRoundAction, StartCombatAction, SubmitCombatAction};
pub use consumable::{UseConsumableAction, apply_effect};
pub use cue::{Cue, cues_for};
pub use error::{CombatError, InventoryError, LogError, NavigationError};
pub use inventory::{
    DropItemAction, EquipItemAction, ReorderInventoryAction, TakeItemAction, UnequipItemAction,
};
pub use log::{AddLogEntryAction, ClearFeedbackAction, SetUiFlagsAction};
pub use navigation::{MoveAction, RevealRoomAction, UnlockDoorAction, enter_room};

use crate::combat::{EnemyIntent, ExchangeOutcome};
use crate::env::{ConsumableEffect, GameEnv};
use crate::state::{
    Direction, EquipSlot, GameState, ItemId, LogId, LogKind, PlayerAction, RoomId, UiFlags,
};

/// Defines how a concrete command mutates game state.
///
/// Hooks receive read-only access to world data and configuration via
/// [`GameEnv`]. Validation hooks must stay side-effect free.
pub trait ActionTransition {
    type Error;
    type Result;

    /// Validates pre-conditions using the state **before** mutation.
    fn pre_validate(&self, _state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Applies the command by mutating the game state directly. Implementations
    /// may assume that `pre_validate` has already run successfully.
    fn apply(&self, state: &mut GameState, env: &GameEnv<'_>) -> Result<Self::Result, Self::Error>;

    /// Validates post-conditions using the state **after** mutation.
    fn post_validate(&self, _state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Identifies an inventory item either by id or by slot index.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemRef {
    Id(ItemId),
    Slot(usize),
}

/// Identifies an equipped item either by id or by equipment slot.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EquipRef {
    Id(ItemId),
    Slot(EquipSlot),
}

/// Every inbound command the engine accepts.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Command {
    Move(MoveAction),
    RevealRoom(RevealRoomAction),
    TakeItem(TakeItemAction),
    DropItem(DropItemAction),
    EquipItem(EquipItemAction),
    UnequipItem(UnequipItemAction),
    ReorderInventory(ReorderInventoryAction),
    UseConsumable(UseConsumableAction),
    UnlockDoor(UnlockDoorAction),
    StartCombat(StartCombatAction),
    SubmitCombatAction(SubmitCombatAction),
    EndCombatRound(EndCombatRoundAction),
    AddLogEntry(AddLogEntryAction),
    ClearFeedback(ClearFeedbackAction),
    SetUiFlags(SetUiFlagsAction),
    /// Rebuild the state wholesale from world data.
    Restart,
}

impl Command {
    pub fn move_to(direction: Direction) -> Self {
        Self::Move(MoveAction::new(direction))
    }

    pub fn take(item: impl Into<ItemId>) -> Self {
        Self::TakeItem(TakeItemAction::new(item))
    }

    pub fn drop_item(item: impl Into<ItemId>) -> Self {
        Self::DropItem(DropItemAction::new(item))
    }

    pub fn equip(item: impl Into<ItemId>) -> Self {
        Self::EquipItem(EquipItemAction::new(ItemRef::Id(item.into())))
    }

    pub fn unequip(slot: EquipSlot) -> Self {
        Self::UnequipItem(UnequipItemAction::new(EquipRef::Slot(slot)))
    }

    pub fn reorder(from: usize, to: usize) -> Self {
        Self::ReorderInventory(ReorderInventoryAction::new(from, to))
    }

    pub fn use_item(item: impl Into<ItemId>) -> Self {
        Self::UseConsumable(UseConsumableAction::new(item))
    }

    pub fn unlock(direction: Direction, key: impl Into<ItemId>) -> Self {
        Self::UnlockDoor(UnlockDoorAction::new(direction, key))
    }

    pub fn start_combat() -> Self {
        Self::StartCombat(StartCombatAction)
    }

    pub fn combat(action: PlayerAction) -> Self {
        Self::SubmitCombatAction(SubmitCombatAction::new(action))
    }

    pub fn end_round() -> Self {
        Self::EndCombatRound(EndCombatRoundAction)
    }

    pub fn log(text: impl Into<String>, kind: LogKind) -> Self {
        Self::AddLogEntry(AddLogEntryAction::new(text, kind))
    }

    pub fn clear_feedback() -> Self {
        Self::ClearFeedback(ClearFeedbackAction)
    }

    pub fn reveal_room() -> Self {
        Self::RevealRoom(RevealRoomAction)
    }

    /// Stable name used in traces and rejection events.
    pub fn name(&self) -> &'static str {
        match self {
            Command::Move(_) => "move",
            Command::RevealRoom(_) => "reveal-room",
            Command::TakeItem(_) => "take-item",
            Command::DropItem(_) => "drop-item",
            Command::EquipItem(_) => "equip-item",
            Command::UnequipItem(_) => "unequip-item",
            Command::ReorderInventory(_) => "reorder-inventory",
            Command::UseConsumable(_) => "use-consumable",
            Command::UnlockDoor(_) => "unlock-door",
            Command::StartCombat(_) => "start-combat",
            Command::SubmitCombatAction(_) => "submit-combat-action",
            Command::EndCombatRound(_) => "end-combat-round",
            Command::AddLogEntry(_) => "add-log-entry",
            Command::ClearFeedback(_) => "clear-feedback",
            Command::SetUiFlags(_) => "set-ui-flags",
            Command::Restart => "restart",
        }
    }
}

/// Where a taken item ended up.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Placement {
    Equipped(EquipSlot),
    Inventory(usize),
}

/// Everything the controller learned while resolving one combat round.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoundReport {
    pub round: u32,
    pub player_action: PlayerAction,
    pub enemy_intent: EnemyIntent,
    pub outcome: ExchangeOutcome,
    pub enemy_defeated: bool,
    pub player_fallen: bool,
}

/// Command-specific result of a successful execution.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ActionResult {
    Moved {
        from: RoomId,
        to: RoomId,
        first_visit: bool,
        /// A combat session was abandoned by leaving the room.
        fled: bool,
    },
    RoomRevealed,
    ItemTaken {
        item: ItemId,
        placement: Placement,
    },
    ItemDropped {
        item: ItemId,
    },
    ItemEquipped {
        item: ItemId,
        slot: EquipSlot,
        replaced: Option<ItemId>,
    },
    ItemUnequipped {
        item: ItemId,
        slot: EquipSlot,
        /// Item dragged up from the target slot into the freed equip slot.
        promoted: Option<ItemId>,
    },
    InventoryReordered,
    ConsumableUsed {
        item: ItemId,
        effect: Option<ConsumableEffect>,
    },
    DoorUnlocked {
        direction: Direction,
    },
    /// The lock was already gone; nothing changed.
    AlreadyUnlocked {
        direction: Direction,
    },
    CombatStarted,
    CombatRound(RoundReport),
    RoundEnded {
        round: u32,
    },
    LogAppended(LogId),
    FeedbackCleared,
    UiFlagsChanged(UiFlags),
    Restarted,
}

impl ActionResult {
    /// Returns false for results that left the state untouched.
    pub fn mutated(&self) -> bool {
        !matches!(self, ActionResult::AlreadyUnlocked { .. })
    }
}
