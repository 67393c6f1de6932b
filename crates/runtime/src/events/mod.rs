//! Topic-based event bus for runtime events.
//!
//! Observers subscribe to the topics they care about; a log panel only needs
//! [`Topic::Log`], a renderer wants [`Topic::State`].

mod bus;

pub use bus::{EventBus, GameEvent, Topic};
