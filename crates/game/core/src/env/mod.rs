//! Traits describing read-only world data.
//!
//! Oracles expose the item catalog, the pristine world graph and the random
//! source. [`GameEnv`] bundles them so transitions can reach everything they
//! need without hard coupling to concrete implementations.
mod items;
mod rng;
mod world;

pub use items::{ConsumableEffect, ItemCatalog, ItemDefinition, ItemKind, ItemOracle, ItemStats};
pub use rng::{PcgRng, RngOracle, ScriptedRng, compute_seed};
pub use world::{WorldMap, WorldOracle};

use crate::config::GameConfig;

/// Aggregates read-only oracles required by the engine.
#[derive(Clone, Copy)]
pub struct GameEnv<'a> {
    items: &'a dyn ItemOracle,
    world: &'a dyn WorldOracle,
    rng: &'a dyn RngOracle,
    config: &'a GameConfig,
}

impl<'a> GameEnv<'a> {
    pub fn new(
        items: &'a dyn ItemOracle,
        world: &'a dyn WorldOracle,
        rng: &'a dyn RngOracle,
        config: &'a GameConfig,
    ) -> Self {
        Self {
            items,
            world,
            rng,
            config,
        }
    }

    pub fn items(&self) -> &'a dyn ItemOracle {
        self.items
    }

    pub fn world(&self) -> &'a dyn WorldOracle {
        self.world
    }

    pub fn rng(&self) -> &'a dyn RngOracle {
        self.rng
    }

    pub fn config(&self) -> &'a GameConfig {
        self.config
    }
}

impl core::fmt::Debug for GameEnv<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("GameEnv")
            .field("items", &self.items.all_definitions().len())
            .field("rooms", &self.world.rooms().len())
            .field("config", self.config)
            .finish()
    }
}
