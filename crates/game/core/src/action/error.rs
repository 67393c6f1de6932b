//! Command rejection errors.
//!
//! One enum per concern. Every variant reports a [`GameError`] severity; the
//! engine turns recoverable ones into a warning log line.

use crate::error::{ErrorSeverity, GameError};
use crate::state::{Direction, EquipSlot, ItemId, RoomId};

// ============================================================================
// Inventory & Equipment
// ============================================================================

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InventoryError {
    #[error("item {item} is not in the current room")]
    NotOnFloor { item: ItemId },

    #[error("item {item} is not carried")]
    NotCarried { item: ItemId },

    #[error("inventory is full")]
    InventoryFull,

    #[error("inventory slot {index} is out of range (capacity {capacity})")]
    SlotOutOfRange { index: usize, capacity: usize },

    #[error("inventory slot {index} is empty")]
    EmptySlot { index: usize },

    #[error("inventory slot {index} is occupied")]
    SlotOccupied { index: usize },

    #[error("item {item} cannot be equipped in the {slot} slot")]
    SlotMismatch { item: ItemId, slot: EquipSlot },

    #[error("item {item} is not equippable")]
    NotEquippable { item: ItemId },

    #[error("nothing equipped in the {slot} slot")]
    NothingEquipped { slot: EquipSlot },

    #[error("item {item} is not a consumable")]
    NotConsumable { item: ItemId },

    #[error("item {item} is missing from the catalog")]
    UnknownItem { item: ItemId },
}

impl GameError for InventoryError {
    fn severity(&self) -> ErrorSeverity {
        use InventoryError::*;
        match self {
            InventoryFull | SlotOccupied { .. } => ErrorSeverity::Recoverable,
            NotOnFloor { .. } | NotCarried { .. } => ErrorSeverity::Validation,
            SlotOutOfRange { .. } | EmptySlot { .. } => ErrorSeverity::Validation,
            SlotMismatch { .. } | NotEquippable { .. } | NothingEquipped { .. } => {
                ErrorSeverity::Validation
            }
            NotConsumable { .. } => ErrorSeverity::Validation,
            UnknownItem { .. } => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        use InventoryError::*;
        match self {
            NotOnFloor { .. } => "INVENTORY_NOT_ON_FLOOR",
            NotCarried { .. } => "INVENTORY_NOT_CARRIED",
            InventoryFull => "INVENTORY_FULL",
            SlotOutOfRange { .. } => "INVENTORY_SLOT_OUT_OF_RANGE",
            EmptySlot { .. } => "INVENTORY_EMPTY_SLOT",
            SlotOccupied { .. } => "INVENTORY_SLOT_OCCUPIED",
            SlotMismatch { .. } => "INVENTORY_SLOT_MISMATCH",
            NotEquippable { .. } => "INVENTORY_NOT_EQUIPPABLE",
            NothingEquipped { .. } => "INVENTORY_NOTHING_EQUIPPED",
            NotConsumable { .. } => "INVENTORY_NOT_CONSUMABLE",
            UnknownItem { .. } => "INVENTORY_UNKNOWN_ITEM",
        }
    }

    fn user_message(&self) -> Option<String> {
        match self {
            InventoryError::InventoryFull => Some("Your inventory is full.".to_owned()),
            InventoryError::SlotOccupied { .. } => {
                Some("There's no room for that there.".to_owned())
            }
            _ => None,
        }
    }
}

// ============================================================================
// Navigation & Locks
// ============================================================================

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NavigationError {
    #[error("no exit {direction}")]
    NoExit { direction: Direction },

    #[error("exit {direction} is locked")]
    Locked {
        direction: Direction,
        message: String,
    },

    #[error("key {key} is not in the inventory")]
    KeyNotCarried { key: ItemId },

    #[error("key {key} does not fit the {direction} lock")]
    WrongKey { direction: Direction, key: ItemId },

    #[error("the player has fallen")]
    PlayerFallen,

    #[error("room {room} is missing from the world")]
    UnknownRoom { room: RoomId },
}

impl GameError for NavigationError {
    fn severity(&self) -> ErrorSeverity {
        use NavigationError::*;
        match self {
            NoExit { .. } | Locked { .. } | KeyNotCarried { .. } | WrongKey { .. } => {
                ErrorSeverity::Recoverable
            }
            PlayerFallen => ErrorSeverity::Validation,
            UnknownRoom { .. } => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        use NavigationError::*;
        match self {
            NoExit { .. } => "NAVIGATION_NO_EXIT",
            Locked { .. } => "NAVIGATION_LOCKED",
            KeyNotCarried { .. } => "NAVIGATION_KEY_NOT_CARRIED",
            WrongKey { .. } => "NAVIGATION_WRONG_KEY",
            PlayerFallen => "NAVIGATION_PLAYER_FALLEN",
            UnknownRoom { .. } => "NAVIGATION_UNKNOWN_ROOM",
        }
    }

    fn user_message(&self) -> Option<String> {
        match self {
            NavigationError::NoExit { .. } => Some("You can't go that way.".to_owned()),
            NavigationError::Locked { message, .. } => Some(message.clone()),
            NavigationError::KeyNotCarried { .. } => Some("You don't have that key.".to_owned()),
            NavigationError::WrongKey { .. } => Some("That key doesn't fit.".to_owned()),
            _ => None,
        }
    }
}

// ============================================================================
// Combat
// ============================================================================

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CombatError {
    #[error("nothing to fight here")]
    NoEnemy,

    #[error("a combat session is already active")]
    AlreadyInCombat,

    #[error("no combat session is active")]
    NotInCombat,

    #[error("the current round is still being resolved")]
    RoundInProgress,

    #[error("no round is being resolved")]
    RoundNotInProgress,

    #[error("riposte is only available after a successful parry")]
    RiposteUnavailable,

    #[error("the player has fallen")]
    PlayerFallen,

    #[error("combat session has no enemy in room {room}")]
    EnemyMissing { room: RoomId },
}

impl GameError for CombatError {
    fn severity(&self) -> ErrorSeverity {
        use CombatError::*;
        match self {
            NoEnemy => ErrorSeverity::Recoverable,
            AlreadyInCombat | NotInCombat | RoundInProgress | RoundNotInProgress => {
                ErrorSeverity::Validation
            }
            RiposteUnavailable | PlayerFallen => ErrorSeverity::Validation,
            EnemyMissing { .. } => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        use CombatError::*;
        match self {
            NoEnemy => "COMBAT_NO_ENEMY",
            AlreadyInCombat => "COMBAT_ALREADY_ACTIVE",
            NotInCombat => "COMBAT_NOT_ACTIVE",
            RoundInProgress => "COMBAT_ROUND_IN_PROGRESS",
            RoundNotInProgress => "COMBAT_ROUND_NOT_IN_PROGRESS",
            RiposteUnavailable => "COMBAT_RIPOSTE_UNAVAILABLE",
            PlayerFallen => "COMBAT_PLAYER_FALLEN",
            EnemyMissing { .. } => "COMBAT_ENEMY_MISSING",
        }
    }

    fn user_message(&self) -> Option<String> {
        match self {
            CombatError::NoEnemy => Some("There is nothing here to fight.".to_owned()),
            _ => None,
        }
    }
}

// ============================================================================
// Log & presentation flags
// ============================================================================

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LogError {
    #[error("log entry text is empty")]
    EmptyText,
}

impl GameError for LogError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            LogError::EmptyText => "LOG_EMPTY_TEXT",
        }
    }
}
