//! Client configuration read from the environment.
use std::env;
use std::path::PathBuf;

/// Terminal client configuration.
#[derive(Clone, Debug, Default)]
pub struct ClientConfig {
    /// Directory holding `items.ron`, `rooms.ron` and `config.toml`.
    /// The built-in world is used when unset.
    pub data_dir: Option<PathBuf>,
    /// Fixed game seed for reproducible runs.
    pub seed: Option<u64>,
}

impl ClientConfig {
    /// Construct configuration from environment variables.
    ///
    /// Environment variables:
    /// - `CRAWL_DATA_DIR` - Content directory (default: built-in world)
    /// - `CRAWL_SEED` - Game seed (default: random)
    pub fn from_env() -> Self {
        Self {
            data_dir: env::var_os("CRAWL_DATA_DIR").map(PathBuf::from),
            seed: read_env::<u64>("CRAWL_SEED"),
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
