//! Data-driven world content and loaders.
//!
//! This crate houses the static data a crawl is built from:
//! - Item catalogs (data-driven via RON)
//! - Room graphs with locks and enemies (data-driven via RON)
//! - Game configuration (data-driven via TOML)
//!
//! Content is consumed through the read-only oracles in `crawl-core` and is
//! never mutated; the game state takes its own copy of the rooms at init.

pub mod world;

#[cfg(feature = "loaders")]
pub mod builtin;
#[cfg(feature = "loaders")]
pub mod loaders;

pub use world::WorldContent;

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, ContentFactory, ItemLoader, RoomLoader, validate};
