//! Shared world and recording collaborators.
#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use crawl_content::WorldContent;
use crawl_core::{
    Cue, Direction, Enemy, GameConfig, ItemCatalog, ItemDefinition, ItemKind, ItemStats, Room,
    RoomId, WorldMap,
};
use crawl_runtime::{AssetPrefetcher, CueDispatcher};

pub fn content() -> WorldContent {
    let items = ItemCatalog::new([
        ItemDefinition::new("sword", "Sword", ItemKind::Weapon).with_stats(ItemStats::attack(10)),
        ItemDefinition::new("fang", "Wolf Fang", ItemKind::Item),
    ]);
    let world = WorldMap::new(
        "camp",
        [
            Room::new("camp", "Camp")
                .with_item("sword")
                .with_exit(Direction::North, "den")
                .with_exit(Direction::East, "river"),
            Room::new("river", "River").with_exit(Direction::West, "camp"),
            Room::new("den", "Wolf Den")
                .with_exit(Direction::South, "camp")
                .with_enemy(
                    Enemy::new("wolf", "Wolf", 200)
                        .with_attack(4)
                        .with_drop("fang")
                        .with_defeat_message("The wolf whimpers and lies still."),
                ),
        ],
    );
    WorldContent::new(items, world, GameConfig::default())
}

/// Records cues and prefetch requests for assertions.
#[derive(Clone, Default)]
pub struct Recorder {
    cues: Arc<Mutex<Vec<Cue>>>,
    rooms: Arc<Mutex<Vec<RoomId>>>,
}

impl Recorder {
    pub fn cues(&self) -> Vec<Cue> {
        self.cues.lock().unwrap().clone()
    }

    pub fn prefetched(&self) -> Vec<RoomId> {
        self.rooms.lock().unwrap().clone()
    }
}

impl CueDispatcher for Recorder {
    fn dispatch(&self, cue: Cue) {
        self.cues.lock().unwrap().push(cue);
    }
}

impl AssetPrefetcher for Recorder {
    fn prefetch(&self, room: &RoomId) {
        self.rooms.lock().unwrap().push(room.clone());
    }
}
