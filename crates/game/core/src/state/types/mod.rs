//! Plain data types composing [`crate::state::GameState`].

mod combat;
mod common;
mod equipment;
mod inventory;
mod log;
mod room;

pub use combat::{CombatResult, CombatResultKind, CombatState, EnemyAction, PlayerAction};
pub use common::{Direction, ItemId, RoomId, UiFlags};
pub use equipment::{EquipSlot, EquippedItems};
pub use inventory::{InventoryState, Slots};
pub use log::{Feedback, LogEntry, LogId, LogKind};
pub use room::{Enemy, LockDescriptor, Room};
