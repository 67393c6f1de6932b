use crawl_core::{GameConfig, GameEnv, ItemCatalog, RngOracle, WorldMap};

/// Everything a session needs besides the random source.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WorldContent {
    pub items: ItemCatalog,
    pub world: WorldMap,
    pub config: GameConfig,
}

impl WorldContent {
    pub fn new(items: ItemCatalog, world: WorldMap, config: GameConfig) -> Self {
        Self {
            items,
            world,
            config,
        }
    }

    /// Borrows the content as an engine environment drawing from `rng`.
    pub fn env<'a>(&'a self, rng: &'a dyn RngOracle) -> GameEnv<'a> {
        GameEnv::new(&self.items, &self.world, rng, &self.config)
    }
}
