//! Runtime shell around the deterministic room-crawl engine.
//!
//! The engine in `crawl-core` is a pure reducer. This crate gives it a home:
//! a [`Session`] that owns the one authoritative [`crawl_core::GameState`],
//! a virtual-clock [`Scheduler`] for delayed follow-up commands, a topic
//! [`EventBus`] for observers, and an async worker behind [`RuntimeHandle`].
//!
//! Modules are organized by responsibility:
//! - [`session`] dispatches commands and schedules their follow-ups
//! - [`scheduler`] holds delayed commands on a virtual clock
//! - [`events`] provides the topic-based event bus
//! - [`collaborators`] defines the cue and prefetch seams
//! - [`runtime`] hosts the worker orchestrator and builder
//! - [`api`] exposes the handle and error types downstream clients use
pub mod api;
pub mod collaborators;
pub mod events;
pub mod runtime;
pub mod scheduler;
pub mod session;

mod worker;

pub use api::{Result, RuntimeError, RuntimeHandle};
pub use collaborators::{AssetPrefetcher, CueDispatcher, TracingCues, TracingPrefetcher};
pub use events::{EventBus, GameEvent, Topic};
pub use runtime::{Runtime, RuntimeBuilder, RuntimeConfig};
pub use scheduler::{ScheduledCommand, Scheduler, TaskId};
pub use session::{Session, SessionTiming};
