//! Line-oriented terminal driver for the room crawl.
//!
//! Stands in for a graphical presentation layer: it reads commands from a
//! line stream, forwards them to the runtime, and prints the quest log.

pub mod app;
pub mod config;
pub mod input;
pub mod render;

pub use app::App;
pub use config::ClientConfig;

use anyhow::{Context, Result};
use crawl_content::{ContentFactory, WorldContent, builtin};

/// Loads content from `data_dir`, or the built-in world when unset.
pub fn load_content(config: &ClientConfig) -> Result<WorldContent> {
    match &config.data_dir {
        Some(dir) => ContentFactory::new(dir)
            .load()
            .with_context(|| format!("loading content from {}", dir.display())),
        None => builtin::world().context("loading built-in world"),
    }
}
