//! Shared test world.
#![allow(dead_code)]

use crawl_core::{
    Command, ConsumableEffect, Direction, Enemy, ExecuteError, ExecutionOutcome, GameConfig,
    GameEngine, GameEnv, GameState, ItemCatalog, ItemDefinition, ItemKind, ItemStats,
    LockDescriptor, RngOracle, Room, RoomId, WorldMap,
};

pub const FLOOR_ITEMS: [&str; 7] = ["dagger", "sword", "mail", "potion", "torch", "rope", "coin"];

pub struct Fixture {
    pub catalog: ItemCatalog,
    pub world: WorldMap,
    pub config: GameConfig,
}

impl Fixture {
    pub fn new() -> Self {
        let catalog = ItemCatalog::new([
            ItemDefinition::new("dagger", "Dagger", ItemKind::Weapon)
                .with_stats(ItemStats::attack(2)),
            ItemDefinition::new("sword", "Sword", ItemKind::Weapon)
                .with_stats(ItemStats::attack(15).with_parry_bonus(5)),
            ItemDefinition::new("mail", "Chain Mail", ItemKind::Armor)
                .with_stats(ItemStats::defense(3)),
            ItemDefinition::new("potion", "Healing Potion", ItemKind::Consumable)
                .with_effect(ConsumableEffect::Heal { amount: 30 }),
            ItemDefinition::new("torch", "Torch", ItemKind::Item),
            ItemDefinition::new("rope", "Rope", ItemKind::Item),
            ItemDefinition::new("coin", "Old Coin", ItemKind::Item),
            ItemDefinition::new("amulet", "Amulet", ItemKind::Item),
            ItemDefinition::new("iron-key", "Iron Key", ItemKind::Key),
        ]);

        let mut gate = Room::new("gate", "Castle Gate")
            .with_description("Rain lashes the broken portcullis.")
            .with_exit(Direction::North, "hall")
            .with_exit(Direction::East, "armory")
            .with_lock(
                Direction::North,
                LockDescriptor::new("iron-key", "The great doors are barred.")
                    .with_unlocked_image("gate-open.png"),
            );
        gate.narrative = "You arrive at the castle as night falls.".to_owned();
        for item in FLOOR_ITEMS {
            gate = gate.with_item(item);
        }

        let world = WorldMap::new(
            "gate",
            [
                gate,
                Room::new("armory", "Armory")
                    .with_item("iron-key")
                    .with_exit(Direction::West, "gate"),
                Room::new("hall", "Great Hall")
                    .with_exit(Direction::South, "gate")
                    .with_enemy(
                        Enemy::new("goblin", "Goblin", 100)
                            .with_attack(10)
                            .with_defense(2)
                            .with_drop("amulet")
                            .with_defeat_message("The goblin collapses."),
                    ),
            ],
        );

        Self {
            catalog,
            world,
            config: GameConfig::default(),
        }
    }

    pub fn env<'a>(&'a self, rng: &'a dyn RngOracle) -> GameEnv<'a> {
        GameEnv::new(&self.catalog, &self.world, rng, &self.config)
    }
}

/// Fresh state with the player placed in `room` (bypassing locks).
pub fn state_in(env: &GameEnv<'_>, room: &str) -> GameState {
    let mut state = GameState::new(env, 7);
    state.current_room_id = RoomId::from(room);
    state.perceived_room_id = RoomId::from(room);
    state
}

pub fn run(
    state: &mut GameState,
    env: GameEnv<'_>,
    command: Command,
) -> Result<ExecutionOutcome, ExecuteError> {
    GameEngine::new(state).execute(env, &command)
}
