//! Combat resolver.
//!
//! Pure functions: given the player's action, the enemy's committed move and
//! both sides' stats, decide the exchange outcome. Randomness is consumed
//! through [`RollSource`] so tests can script every roll.
//!
//! - [`select_enemy_move`]: forced moves, then a weighted draw
//! - [`resolve_exchange`]: damage table for one round
//! - [`calculate_damage`]/[`apply_damage`]: exact half-unit arithmetic, clamped

pub mod damage;
pub mod enemy;
pub mod result;
pub mod rolls;

pub use damage::{Halves, apply_damage, calculate_damage, restore_hp};
pub use enemy::{ENEMY_MOVE_POOL, EnemyIntent, select_enemy_move};
pub use result::{ExchangeOutcome, resolve_exchange};
pub use rolls::{OracleRolls, RollContext, RollSource};
