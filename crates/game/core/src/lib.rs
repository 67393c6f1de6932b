//! Deterministic room-crawl rules and data types shared across clients.
//!
//! `crawl-core` defines the canonical rules (commands, engine, combat, stats,
//! world state) and exposes pure APIs that the runtime and tests drive
//! directly. All state mutation flows through [`engine::GameEngine`], and
//! supporting crates depend on the types re-exported here.
pub mod action;
pub mod combat;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod state;
pub mod stats;

pub use action::{
    ActionResult, ActionTransition, CombatError, Command, Cue, EquipRef, InventoryError, ItemRef,
    LogError, NavigationError, Placement, RoundReport,
};
pub use combat::{ExchangeOutcome, OracleRolls, RollContext, RollSource};
pub use config::GameConfig;
pub use engine::{ExecuteError, ExecutionOutcome, GameEngine, TransitionPhase, TransitionPhaseError};
pub use env::{
    ConsumableEffect, GameEnv, ItemCatalog, ItemDefinition, ItemKind, ItemOracle, ItemStats,
    PcgRng, RngOracle, ScriptedRng, WorldMap, WorldOracle, compute_seed,
};
pub use error::{ErrorSeverity, GameError};
pub use state::{
    CombatResult, CombatResultKind, CombatState, Direction, Enemy, EnemyAction, EquipSlot,
    EquippedItems, Feedback, GameState, InventoryState, ItemId, LockDescriptor, LogEntry, LogId,
    LogKind, PlayerAction, Room, RoomId, UiFlags,
};
pub use stats::{CombatStats, compute_stats, refresh_stats};
