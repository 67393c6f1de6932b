//! Item catalog loader.

use std::path::Path;

use crawl_core::{ItemCatalog, ItemDefinition, ItemOracle};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Item catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemFile {
    pub items: Vec<ItemDefinition>,
}

/// Loader for item catalog from RON files.
pub struct ItemLoader;

impl ItemLoader {
    /// Load item catalog from a RON file.
    pub fn load(path: &Path) -> LoadResult<ItemCatalog> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse an item catalog from RON text. Duplicate ids are rejected.
    pub fn parse(content: &str) -> LoadResult<ItemCatalog> {
        let file: ItemFile = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse item catalog RON: {}", e))?;

        let mut catalog = ItemCatalog::default();
        for definition in file.items {
            if catalog.definition(&definition.id).is_some() {
                anyhow::bail!("Duplicate item id '{}'", definition.id);
            }
            catalog.insert(definition);
        }
        Ok(catalog)
    }
}
