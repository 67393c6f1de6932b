//! Cloneable façade for issuing commands to the runtime.
//!
//! [`RuntimeHandle`] hides channel plumbing and offers async helpers for
//! dispatching commands, stepping the clock, or streaming events.
use std::time::Duration;

use tokio::sync::{broadcast, mpsc, oneshot};

use crawl_core::{Command, ExecutionOutcome, GameState};

use super::errors::{Result, RuntimeError};
use crate::events::{EventBus, GameEvent, Topic};
use crate::worker::Request;

/// Client-facing handle to interact with the runtime
#[derive(Clone)]
pub struct RuntimeHandle {
    request_tx: mpsc::Sender<Request>,
    event_bus: EventBus,
}

impl RuntimeHandle {
    pub(crate) fn new(request_tx: mpsc::Sender<Request>, event_bus: EventBus) -> Self {
        Self {
            request_tx,
            event_bus,
        }
    }

    async fn request<T>(&self, build: impl FnOnce(oneshot::Sender<T>) -> Request) -> Result<T> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.request_tx
            .send(build(reply_tx))
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;

        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)
    }

    /// Dispatch a command; commands apply in the order they are received.
    pub async fn dispatch(&self, command: Command) -> Result<ExecutionOutcome> {
        let outcome = self
            .request(|reply| Request::Dispatch { command, reply })
            .await?;
        Ok(outcome?)
    }

    /// Step the session clock and run the scheduled commands that fall due.
    ///
    /// Returns how many scheduled commands were dispatched.
    pub async fn advance(&self, elapsed: Duration) -> Result<usize> {
        self.request(|reply| Request::Advance { elapsed, reply })
            .await
    }

    /// Query the current game state (read-only snapshot)
    pub async fn query_state(&self) -> Result<GameState> {
        self.request(|reply| Request::QueryState { reply }).await
    }

    /// Number of scheduled commands still waiting.
    pub async fn pending_tasks(&self) -> Result<usize> {
        self.request(|reply| Request::PendingTasks { reply }).await
    }

    /// Subscribe to events from a specific topic
    ///
    /// # Topics
    ///
    /// - `Topic::State` - Snapshots after each change, and rejections
    /// - `Topic::Log` - Quest log lines
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<GameEvent> {
        self.event_bus.subscribe(topic)
    }

    /// Get a reference to the event bus for advanced usage
    pub fn event_bus(&self) -> &EventBus {
        &self.event_bus
    }
}
