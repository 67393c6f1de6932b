//! The world shipped with the crate, embedded at compile time.

use crate::loaders::{ConfigLoader, ItemLoader, LoadResult, RoomLoader, validate};
use crate::world::WorldContent;

const ITEMS: &str = include_str!("../data/items.ron");
const ROOMS: &str = include_str!("../data/rooms.ron");
const CONFIG: &str = include_str!("../data/config.toml");

/// Parses and validates the embedded world.
pub fn world() -> LoadResult<WorldContent> {
    let content = WorldContent::new(
        ItemLoader::parse(ITEMS)?,
        RoomLoader::parse(ROOMS)?,
        ConfigLoader::parse(CONFIG)?,
    );
    validate(&content)?;
    Ok(content)
}
