//! Content loaders for reading game data from files.
//!
//! Each loader exposes `parse` for in-memory text and `load` for a path, so
//! the built-in world and on-disk data share one code path.

pub mod config;
pub mod factory;
pub mod item;
pub mod rooms;
pub mod validate;

pub use config::ConfigLoader;
pub use factory::ContentFactory;
pub use item::ItemLoader;
pub use rooms::{EnemySpec, RoomLoader, RoomSpec, WorldFile};
pub use validate::validate;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
