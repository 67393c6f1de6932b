//! Cross-reference checks between the item catalog and the room graph.

use std::collections::BTreeMap;

use crawl_core::{ItemId, ItemKind, ItemOracle, RoomId, WorldOracle};

use crate::loaders::LoadResult;
use crate::world::WorldContent;

/// Ensures every id the world refers to resolves.
///
/// Checks the start room, exit targets, that every lock guards an existing
/// exit and names a key item, floor items and enemy drops. Each item is
/// placed at most once, on a floor or as a drop. The first problem found is
/// reported.
pub fn validate(content: &WorldContent) -> LoadResult<()> {
    let items = &content.items;
    let world = &content.world;
    let mut placed: BTreeMap<&ItemId, &RoomId> = BTreeMap::new();

    if world.room(world.start_room()).is_none() {
        anyhow::bail!("Start room '{}' does not exist", world.start_room());
    }

    for room in world.rooms().values() {
        for (direction, target) in &room.exits {
            if world.room(target).is_none() {
                anyhow::bail!(
                    "Room '{}' exit {} leads to unknown room '{}'",
                    room.id,
                    direction,
                    target
                );
            }
        }

        for (direction, lock) in &room.locked_exits {
            if !room.exits.contains_key(direction) {
                anyhow::bail!("Room '{}' locks missing exit {}", room.id, direction);
            }
            match items.definition(&lock.key_id) {
                Some(definition) if definition.kind == ItemKind::Key => {}
                Some(_) => anyhow::bail!(
                    "Room '{}' lock {} names '{}', which is not a key",
                    room.id,
                    direction,
                    lock.key_id
                ),
                None => anyhow::bail!(
                    "Room '{}' lock {} names unknown key '{}'",
                    room.id,
                    direction,
                    lock.key_id
                ),
            }
        }

        for item in &room.items {
            if items.definition(item).is_none() {
                anyhow::bail!("Room '{}' holds unknown item '{}'", room.id, item);
            }
            if let Some(first) = placed.insert(item, &room.id) {
                anyhow::bail!(
                    "Item '{}' is placed in room '{}' and again in room '{}'",
                    item,
                    first,
                    room.id
                );
            }
        }

        if let Some(enemy) = &room.enemy {
            if enemy.max_hp == 0 {
                anyhow::bail!("Enemy '{}' in room '{}' has no health", enemy.id, room.id);
            }
            if let Some(drop) = &enemy.drop
                && items.definition(drop).is_none()
            {
                anyhow::bail!("Enemy '{}' drops unknown item '{}'", enemy.id, drop);
            }
            if let Some(drop) = &enemy.drop
                && let Some(first) = placed.insert(drop, &room.id)
            {
                anyhow::bail!(
                    "Enemy '{}' drops '{}', already placed in room '{}'",
                    enemy.id,
                    drop,
                    first
                );
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crawl_core::{
        Direction, Enemy, GameConfig, ItemCatalog, ItemDefinition, LockDescriptor, Room, WorldMap,
    };

    fn content(rooms: Vec<Room>) -> WorldContent {
        WorldContent::new(
            ItemCatalog::new([
                ItemDefinition::new("key", "Key", ItemKind::Key),
                ItemDefinition::new("stone", "Stone", ItemKind::Item),
            ]),
            WorldMap::new("a", rooms),
            GameConfig::default(),
        )
    }

    #[test]
    fn accepts_consistent_world() {
        let world = content(vec![
            Room::new("a", "A")
                .with_exit(Direction::North, "b")
                .with_lock(Direction::North, LockDescriptor::new("key", "Locked."))
                .with_item("stone"),
            Room::new("b", "B")
                .with_exit(Direction::South, "a")
                .with_enemy(Enemy::new("bat", "Bat", 3).with_drop("key")),
        ]);
        validate(&world).unwrap();
    }

    #[test]
    fn reports_dangling_exit() {
        let world = content(vec![Room::new("a", "A").with_exit(Direction::East, "nowhere")]);
        let error = validate(&world).unwrap_err();
        assert!(error.to_string().contains("unknown room 'nowhere'"));
    }

    #[test]
    fn reports_lock_without_key_item() {
        let world = content(vec![
            Room::new("a", "A")
                .with_exit(Direction::North, "a")
                .with_lock(Direction::North, LockDescriptor::new("stone", "Locked.")),
        ]);
        let error = validate(&world).unwrap_err();
        assert!(error.to_string().contains("not a key"));
    }

    #[test]
    fn reports_unknown_drop() {
        let world = content(vec![
            Room::new("a", "A").with_enemy(Enemy::new("bat", "Bat", 3).with_drop("gem")),
        ]);
        let error = validate(&world).unwrap_err();
        assert!(error.to_string().contains("unknown item 'gem'"));
    }

    #[test]
    fn reports_item_placed_twice() {
        let world = content(vec![
            Room::new("a", "A")
                .with_exit(Direction::East, "b")
                .with_item("stone"),
            Room::new("b", "B").with_item("stone"),
        ]);
        let error = validate(&world).unwrap_err();
        assert!(
            error
                .to_string()
                .contains("'stone' is placed in room 'a' and again in room 'b'")
        );
    }

    #[test]
    fn reports_drop_that_duplicates_floor_item() {
        let world = content(vec![
            Room::new("a", "A")
                .with_item("key")
                .with_enemy(Enemy::new("bat", "Bat", 3).with_drop("key")),
        ]);
        let error = validate(&world).unwrap_err();
        assert!(error.to_string().contains("already placed in room 'a'"));
    }

    #[test]
    fn reports_missing_start_room() {
        let world = WorldContent::new(
            ItemCatalog::default(),
            WorldMap::new("void", [Room::new("a", "A")]),
            GameConfig::default(),
        );
        assert!(validate(&world).is_err());
    }
}
