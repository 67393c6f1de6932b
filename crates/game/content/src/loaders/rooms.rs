//! Room graph loader.
//!
//! Rooms are authored with [`RoomSpec`], which mirrors the core [`Room`] but
//! lets enemies omit their current HP (they start at full health).

use std::collections::BTreeMap;
use std::path::Path;

use crawl_core::{Direction, Enemy, ItemId, LockDescriptor, Room, RoomId, WorldMap};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Top-level structure of a world RON file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorldFile {
    pub start_room: RoomId,
    pub rooms: Vec<RoomSpec>,
}

/// Authored form of a room.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RoomSpec {
    pub id: RoomId,
    pub name: String,
    pub description: String,
    pub narrative: String,
    pub image: Option<String>,
    pub exits: BTreeMap<Direction, RoomId>,
    pub items: Vec<ItemId>,
    pub locked_exits: BTreeMap<Direction, LockDescriptor>,
    pub enemy: Option<EnemySpec>,
}

/// Authored form of an enemy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemySpec {
    pub id: String,
    pub name: String,
    pub max_hp: u32,
    pub attack: u32,
    #[serde(default)]
    pub defense: u32,
    #[serde(default)]
    pub defeat_message: String,
    #[serde(default)]
    pub drop: Option<ItemId>,
}

impl From<EnemySpec> for Enemy {
    fn from(spec: EnemySpec) -> Self {
        let mut enemy = Enemy::new(spec.id, spec.name, spec.max_hp)
            .with_attack(spec.attack)
            .with_defense(spec.defense)
            .with_defeat_message(spec.defeat_message);
        enemy.drop = spec.drop;
        enemy
    }
}

impl From<RoomSpec> for Room {
    fn from(spec: RoomSpec) -> Self {
        Room {
            id: spec.id,
            name: spec.name,
            description: spec.description,
            narrative: spec.narrative,
            image: spec.image,
            exits: spec.exits,
            items: spec.items,
            locked_exits: spec.locked_exits,
            enemy: spec.enemy.map(Enemy::from),
        }
    }
}

/// Loader for room graphs from RON files.
pub struct RoomLoader;

impl RoomLoader {
    /// Load a world from a RON file.
    pub fn load(path: &Path) -> LoadResult<WorldMap> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse a world from RON text. Duplicate room ids are rejected.
    pub fn parse(content: &str) -> LoadResult<WorldMap> {
        let file: WorldFile = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse world RON: {}", e))?;

        let mut seen = std::collections::BTreeSet::new();
        for room in &file.rooms {
            if !seen.insert(room.id.clone()) {
                anyhow::bail!("Duplicate room id '{}'", room.id);
            }
        }

        Ok(WorldMap::new(
            file.start_room,
            file.rooms.into_iter().map(Room::from),
        ))
    }
}
