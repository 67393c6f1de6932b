//! Random draws consumed by combat.

use crate::env::{RngOracle, compute_seed};

/// Identifies an independent draw within one combat round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RollContext {
    EnemyMove = 0,
    Parry = 1,
    Crit = 2,
}

/// Source of the random draws combat needs.
///
/// Draws are only requested when a rule actually consults them, so a scripted
/// source sees exactly the rolls that matter.
pub trait RollSource {
    /// Uniform index in `0..len`.
    fn pick(&mut self, context: RollContext, len: usize) -> usize;

    /// Percentile roll in `0..100`.
    fn percent(&mut self, context: RollContext) -> u32;

    /// True with `chance` percent probability.
    fn chance(&mut self, context: RollContext, chance: u32) -> bool {
        self.percent(context) < chance
    }
}

/// [`RollSource`] backed by an [`RngOracle`] seeded from game state.
pub struct OracleRolls<'a> {
    rng: &'a dyn RngOracle,
    game_seed: u64,
    nonce: u64,
}

impl<'a> OracleRolls<'a> {
    pub fn new(rng: &'a dyn RngOracle, game_seed: u64, nonce: u64) -> Self {
        Self {
            rng,
            game_seed,
            nonce,
        }
    }

    fn seed(&self, context: RollContext) -> u64 {
        compute_seed(self.game_seed, self.nonce, context as u32)
    }
}

impl RollSource for OracleRolls<'_> {
    fn pick(&mut self, context: RollContext, len: usize) -> usize {
        self.rng.pick(self.seed(context), len)
    }

    fn percent(&mut self, context: RollContext) -> u32 {
        self.rng.roll_percent(self.seed(context))
    }
}
