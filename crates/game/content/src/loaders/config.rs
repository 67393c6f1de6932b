//! Game configuration loader.

use std::path::Path;

use crawl_core::GameConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for game configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    pub fn load(path: &Path) -> LoadResult<GameConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse config from TOML text. Missing keys keep their defaults.
    pub fn parse(content: &str) -> LoadResult<GameConfig> {
        let config: GameConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        if config.inventory_capacity == 0
            || config.inventory_capacity > GameConfig::MAX_INVENTORY_SLOTS
        {
            anyhow::bail!(
                "inventory_capacity must be between 1 and {}, got {}",
                GameConfig::MAX_INVENTORY_SLOTS,
                config.inventory_capacity
            );
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let config = ConfigLoader::parse("base_attack = 9").unwrap();
        assert_eq!(config.base_attack, 9);
        assert_eq!(
            config.inventory_capacity,
            GameConfig::DEFAULT_INVENTORY_CAPACITY
        );
    }

    #[test]
    fn rejects_capacity_beyond_storage() {
        assert!(ConfigLoader::parse("inventory_capacity = 9").is_err());
        assert!(ConfigLoader::parse("inventory_capacity = 0").is_err());
    }
}
