//! Topic-based event bus implementation.

use crawl_core::{GameState, LogEntry};
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

/// Topics for event routing
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum Topic {
    /// Snapshots and rejections
    State,
    /// Quest log lines as they are appended
    Log,
}

/// Events published by the session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum GameEvent {
    /// The state changed; carries the new snapshot.
    StateChanged { nonce: u64, state: Box<GameState> },

    /// A quest log line was appended.
    LogAppended(LogEntry),

    /// A command was refused.
    CommandRejected {
        command: String,
        code: String,
        /// Player-facing explanation, present only for recoverable rejections.
        message: Option<String>,
    },
}

impl GameEvent {
    pub fn topic(&self) -> Topic {
        match self {
            GameEvent::StateChanged { .. } | GameEvent::CommandRejected { .. } => Topic::State,
            GameEvent::LogAppended(_) => Topic::Log,
        }
    }
}

/// Topic-based event bus
///
/// Cloning shares the underlying channels.
#[derive(Clone)]
pub struct EventBus {
    state: broadcast::Sender<GameEvent>,
    log: broadcast::Sender<GameEvent>,
}

impl EventBus {
    /// Creates a new event bus with default capacity for each topic
    pub fn new() -> Self {
        Self::with_capacity(100)
    }

    /// Creates a new event bus with specified capacity per topic
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            state: broadcast::channel(capacity).0,
            log: broadcast::channel(capacity).0,
        }
    }

    fn sender(&self, topic: Topic) -> &broadcast::Sender<GameEvent> {
        match topic {
            Topic::State => &self.state,
            Topic::Log => &self.log,
        }
    }

    /// Publish an event to its corresponding topic
    pub fn publish(&self, event: GameEvent) {
        let topic = event.topic();
        if self.sender(topic).send(event).is_err() {
            // No subscribers for this topic - this is normal, not an error
            tracing::trace!("No subscribers for topic {:?}", topic);
        }
    }

    /// Subscribe to a specific topic
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<GameEvent> {
        self.sender(topic).subscribe()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crawl_core::{LogId, LogKind};

    fn entry() -> LogEntry {
        LogEntry {
            id: LogId(1),
            kind: LogKind::Info,
            text: "Hello.".into(),
        }
    }

    #[test]
    fn events_only_reach_their_topic() {
        let bus = EventBus::new();
        let mut log_rx = bus.subscribe(Topic::Log);
        let mut state_rx = bus.subscribe(Topic::State);

        bus.publish(GameEvent::LogAppended(entry()));

        assert!(matches!(log_rx.try_recv(), Ok(GameEvent::LogAppended(_))));
        assert!(state_rx.try_recv().is_err());
    }

    #[test]
    fn publishing_without_subscribers_is_fine() {
        EventBus::with_capacity(4).publish(GameEvent::LogAppended(entry()));
    }
}
