//! High-level runtime orchestrator.
//!
//! The runtime owns the session worker, wires up the request channel and the
//! event bus, and exposes a builder-based API for clients.

use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::info;

use crawl_content::WorldContent;
use crawl_core::{GameConfig, PcgRng, RngOracle};

use crate::api::{Result, RuntimeError, RuntimeHandle};
use crate::collaborators::{AssetPrefetcher, CueDispatcher};
use crate::events::EventBus;
use crate::session::{Session, SessionTiming};
use crate::worker::SessionWorker;

/// Runtime configuration shared across the orchestrator and the worker.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Replaces the content's own configuration when set.
    pub game_config: Option<GameConfig>,
    /// Fixed game seed; a random one is drawn when absent.
    pub game_seed: Option<u64>,
    pub event_buffer_size: usize,
    pub command_buffer_size: usize,
    pub timing: SessionTiming,
    /// How often the worker advances the scheduler with wall-clock time.
    /// `None` leaves the clock to explicit [`RuntimeHandle::advance`] calls.
    pub tick_interval: Option<Duration>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            game_config: None,
            game_seed: None,
            event_buffer_size: 100,
            command_buffer_size: 32,
            timing: SessionTiming::default(),
            tick_interval: Some(Duration::from_millis(50)),
        }
    }
}

/// Main runtime that hosts the session worker
///
/// [`RuntimeHandle`] provides a cloneable façade for clients.
pub struct Runtime {
    handle: RuntimeHandle,
    game_seed: u64,
    worker_handle: JoinHandle<()>,
}

impl Runtime {
    /// Create a new runtime builder
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    /// Get a cloneable handle to this runtime
    pub fn handle(&self) -> RuntimeHandle {
        self.handle.clone()
    }

    /// Seed the session was started with.
    pub fn game_seed(&self) -> u64 {
        self.game_seed
    }

    /// Shutdown the runtime gracefully
    ///
    /// The worker stops once this and every cloned handle are dropped.
    pub async fn shutdown(self) -> Result<()> {
        drop(self.handle);
        self.worker_handle.await.map_err(RuntimeError::WorkerJoin)?;
        info!(target: "runtime", "runtime shut down");
        Ok(())
    }
}

/// Builder for [`Runtime`] with flexible configuration.
pub struct RuntimeBuilder {
    config: RuntimeConfig,
    content: Option<WorldContent>,
    rng: Option<Box<dyn RngOracle>>,
    cues: Option<Box<dyn CueDispatcher>>,
    prefetcher: Option<Box<dyn AssetPrefetcher>>,
}

impl RuntimeBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            content: None,
            rng: None,
            cues: None,
            prefetcher: None,
        }
    }

    /// Override runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Set required world content
    pub fn content(mut self, content: WorldContent) -> Self {
        self.content = Some(content);
        self
    }

    /// Fix the game seed
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.game_seed = Some(seed);
        self
    }

    /// Replace the random source (defaults to [`PcgRng`])
    pub fn rng(mut self, rng: impl RngOracle + 'static) -> Self {
        self.rng = Some(Box::new(rng));
        self
    }

    pub fn cues(mut self, cues: impl CueDispatcher + 'static) -> Self {
        self.cues = Some(Box::new(cues));
        self
    }

    pub fn prefetcher(mut self, prefetcher: impl AssetPrefetcher + 'static) -> Self {
        self.prefetcher = Some(Box::new(prefetcher));
        self
    }

    /// Build the runtime and spawn its worker on the current tokio runtime.
    pub fn build(self) -> Result<Runtime> {
        let mut content = self.content.ok_or(RuntimeError::MissingContent)?;
        if let Some(game_config) = self.config.game_config.clone() {
            content.config = game_config;
        }
        let game_seed = self.config.game_seed.unwrap_or_else(rand::random);
        let rng = self.rng.unwrap_or_else(|| Box::new(PcgRng));
        let event_bus = EventBus::with_capacity(self.config.event_buffer_size);

        let mut session = Session::with_rng(content, game_seed, rng)
            .events(event_bus.clone())
            .timing(self.config.timing);
        if let Some(cues) = self.cues {
            session = session.cues(cues);
        }
        if let Some(prefetcher) = self.prefetcher {
            session = session.prefetcher(prefetcher);
        }

        let (request_tx, request_rx) = tokio::sync::mpsc::channel(self.config.command_buffer_size);
        let worker = SessionWorker::new(session, request_rx, self.config.tick_interval);
        let worker_handle = tokio::spawn(worker.run());

        info!(target: "runtime", game_seed, "runtime started");
        Ok(Runtime {
            handle: RuntimeHandle::new(request_tx, event_bus),
            game_seed,
            worker_handle,
        })
    }
}
