//! Content factory for building world content from data files.

use std::path::{Path, PathBuf};

use crawl_core::{GameConfig, ItemCatalog, WorldMap};

use crate::loaders::{ConfigLoader, ItemLoader, LoadResult, RoomLoader, validate};
use crate::world::WorldContent;

/// Content factory that loads all game content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml   (optional)
/// ├── items.ron
/// └── rooms.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load game configuration from `config.toml`, or defaults when absent.
    pub fn load_config(&self) -> LoadResult<GameConfig> {
        let path = self.data_dir.join("config.toml");
        if !path.exists() {
            return Ok(GameConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load item catalog from `items.ron`.
    pub fn load_items(&self) -> LoadResult<ItemCatalog> {
        let path = self.data_dir.join("items.ron");
        ItemLoader::load(&path)
    }

    /// Load the room graph from `rooms.ron`.
    pub fn load_world(&self) -> LoadResult<WorldMap> {
        let path = self.data_dir.join("rooms.ron");
        RoomLoader::load(&path)
    }

    /// Loads and cross-validates everything in the directory.
    pub fn load(&self) -> LoadResult<WorldContent> {
        let content = WorldContent::new(self.load_items()?, self.load_world()?, self.load_config()?);
        validate(&content)
            .map_err(|e| anyhow::anyhow!("Invalid content in {}: {}", self.data_dir.display(), e))?;
        Ok(content)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_paths() {
        let factory = ContentFactory::new("/tmp/data");
        assert_eq!(factory.data_dir(), Path::new("/tmp/data"));
    }
}
