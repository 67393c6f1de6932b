//! Session that owns the authoritative game state.
//!
//! Every command, whether typed by the player or fired by the scheduler,
//! goes through [`Session::dispatch`]. The session runs the engine, then
//! publishes events, plays cues, and queues follow-up commands:
//! - a successful move schedules `RevealRoom` after the shutter delay,
//!   cancelling any reveal still pending from an earlier move
//! - a resolved combat exchange schedules `EndCombatRound` while the fight
//!   goes on
//!
//! Due commands are dispatched one by one from [`Session::advance`], never
//! from inside another dispatch.

use std::time::Duration;

use crawl_content::WorldContent;
use crawl_core::{
    ActionResult, Command, Cue, ExecuteError, ExecutionOutcome, GameEngine, GameError, GameState,
    LogEntry, PcgRng, RngOracle, RoomId,
};
use tracing::{debug, info, warn};

use crate::collaborators::{AssetPrefetcher, CueDispatcher, TracingCues, TracingPrefetcher};
use crate::events::{EventBus, GameEvent};
use crate::scheduler::{Scheduler, TaskId};

/// Delays for the commands the session schedules on its own.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionTiming {
    /// From a move to the room reveal (the shutter animation).
    pub reveal_delay: Duration,
    /// From a resolved exchange to the end of the round.
    pub round_delay: Duration,
}

impl SessionTiming {
    pub const DEFAULT_REVEAL_DELAY: Duration = Duration::from_millis(600);
    pub const DEFAULT_ROUND_DELAY: Duration = Duration::from_millis(900);
}

impl Default for SessionTiming {
    fn default() -> Self {
        Self {
            reveal_delay: Self::DEFAULT_REVEAL_DELAY,
            round_delay: Self::DEFAULT_ROUND_DELAY,
        }
    }
}

pub struct Session {
    state: GameState,
    content: WorldContent,
    rng: Box<dyn RngOracle>,
    scheduler: Scheduler,
    events: EventBus,
    cues: Box<dyn CueDispatcher>,
    prefetcher: Box<dyn AssetPrefetcher>,
    timing: SessionTiming,
    pending_reveal: Option<TaskId>,
    pending_round_end: Option<TaskId>,
}

impl Session {
    /// Starts a game in the content's start room, drawing from [`PcgRng`].
    pub fn new(content: WorldContent, game_seed: u64) -> Self {
        Self::with_rng(content, game_seed, Box::new(PcgRng))
    }

    pub fn with_rng(content: WorldContent, game_seed: u64, rng: Box<dyn RngOracle>) -> Self {
        let state = GameState::new(&content.env(rng.as_ref()), game_seed);
        info!(
            target: "runtime::session",
            game_seed,
            start = %state.current_room_id,
            rooms = state.rooms.len(),
            "session started"
        );
        Self {
            state,
            content,
            rng,
            scheduler: Scheduler::new(),
            events: EventBus::new(),
            cues: Box::new(TracingCues),
            prefetcher: Box::new(TracingPrefetcher),
            timing: SessionTiming::default(),
            pending_reveal: None,
            pending_round_end: None,
        }
    }

    pub fn events(mut self, events: EventBus) -> Self {
        self.events = events;
        self
    }

    pub fn cues(mut self, cues: impl CueDispatcher + 'static) -> Self {
        self.cues = Box::new(cues);
        self
    }

    pub fn prefetcher(mut self, prefetcher: impl AssetPrefetcher + 'static) -> Self {
        self.prefetcher = Box::new(prefetcher);
        self
    }

    pub fn timing(mut self, timing: SessionTiming) -> Self {
        self.timing = timing;
        self
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn content(&self) -> &WorldContent {
        &self.content
    }

    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    pub fn event_bus(&self) -> &EventBus {
        &self.events
    }

    /// Applies one command and handles its side effects.
    pub fn dispatch(&mut self, command: &Command) -> Result<ExecutionOutcome, ExecuteError> {
        let env = self.content.env(self.rng.as_ref());
        let log_len = self.state.quest_log.len();

        let result = GameEngine::new(&mut self.state).execute(env, command);

        match result {
            Ok(outcome) => {
                debug!(
                    target: "runtime::session",
                    command = command.name(),
                    nonce = self.state.nonce,
                    log = outcome.log.len(),
                    "command applied"
                );
                self.schedule_follow_ups(&outcome.result);
                self.publish_log(&outcome.log);
                for cue in &outcome.cues {
                    self.cues.dispatch(*cue);
                }
                self.publish_state();
                Ok(outcome)
            }
            Err(error) => {
                warn!(
                    target: "runtime::session",
                    command = command.name(),
                    code = error.error_code(),
                    severity = error.severity().as_str(),
                    %error,
                    "command rejected"
                );
                let appended = self.state.log_since(log_len).to_vec();
                if !appended.is_empty() {
                    self.publish_log(&appended);
                    self.cues.dispatch(Cue::Rejected);
                    self.publish_state();
                }
                self.events.publish(GameEvent::CommandRejected {
                    command: command.name().to_owned(),
                    code: error.error_code().to_owned(),
                    message: error.user_message(),
                });
                Err(error)
            }
        }
    }

    /// Advances the virtual clock and dispatches every command that fell due.
    pub fn advance(&mut self, elapsed: Duration) -> Vec<Result<ExecutionOutcome, ExecuteError>> {
        self.scheduler.advance_clock(elapsed);
        let mut results = Vec::new();
        while let Some(task) = self.scheduler.pop_due() {
            if self.pending_reveal == Some(task.id) {
                self.pending_reveal = None;
            }
            if self.pending_round_end == Some(task.id) {
                self.pending_round_end = None;
            }
            debug!(
                target: "runtime::session",
                command = task.command.name(),
                due_ms = task.due.as_millis() as u64,
                "scheduled command due"
            );
            results.push(self.dispatch(&task.command));
        }
        results
    }

    fn schedule_follow_ups(&mut self, result: &ActionResult) {
        match result {
            ActionResult::Moved { to, .. } => {
                if let Some(previous) = self.pending_reveal.take() {
                    self.scheduler.cancel(previous);
                }
                // Fleeing ends the fight; its round end must not fire.
                if let Some(round_end) = self.pending_round_end.take() {
                    self.scheduler.cancel(round_end);
                }
                self.pending_reveal = Some(
                    self.scheduler
                        .schedule(self.timing.reveal_delay, Command::reveal_room()),
                );
                self.prefetch_neighbours(to);
            }
            ActionResult::CombatRound(_) if self.state.in_combat() => {
                self.pending_round_end = Some(
                    self.scheduler
                        .schedule(self.timing.round_delay, Command::end_round()),
                );
            }
            ActionResult::Restarted => {
                self.scheduler.cancel_all();
                self.pending_reveal = None;
                self.pending_round_end = None;
                info!(target: "runtime::session", nonce = self.state.nonce, "session restarted");
            }
            _ => {}
        }
    }

    fn prefetch_neighbours(&self, room: &RoomId) {
        let Some(room) = self.state.rooms.get(room) else {
            return;
        };
        for neighbour in room.exits.values() {
            self.prefetcher.prefetch(neighbour);
        }
    }

    fn publish_log(&self, entries: &[LogEntry]) {
        for entry in entries {
            self.events.publish(GameEvent::LogAppended(entry.clone()));
        }
    }

    fn publish_state(&self) {
        self.events.publish(GameEvent::StateChanged {
            nonce: self.state.nonce,
            state: Box::new(self.state.clone()),
        });
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("room", &self.state.current_room_id)
            .field("nonce", &self.state.nonce)
            .field("pending", &self.scheduler.pending())
            .finish()
    }
}
