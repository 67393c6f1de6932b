//! Worker task that owns the [`Session`].
//!
//! Receives requests from [`crate::RuntimeHandle`] and applies them one at a
//! time. When a tick interval is configured the worker also feeds elapsed
//! wall-clock time into the session scheduler.

use std::time::Duration;

use tokio::sync::{mpsc, oneshot};
use tokio::time::{Instant, Interval, MissedTickBehavior};
use tracing::debug;

use crawl_core::{Command, ExecuteError, ExecutionOutcome, GameState};

use crate::session::Session;

/// Requests that can be sent to the session worker
pub(crate) enum Request {
    Dispatch {
        command: Command,
        reply: oneshot::Sender<Result<ExecutionOutcome, ExecuteError>>,
    },
    Advance {
        elapsed: Duration,
        reply: oneshot::Sender<usize>,
    },
    QueryState {
        reply: oneshot::Sender<GameState>,
    },
    PendingTasks {
        reply: oneshot::Sender<usize>,
    },
}

pub(crate) struct SessionWorker {
    session: Session,
    request_rx: mpsc::Receiver<Request>,
    tick: Option<Duration>,
}

impl SessionWorker {
    pub(crate) fn new(
        session: Session,
        request_rx: mpsc::Receiver<Request>,
        tick: Option<Duration>,
    ) -> Self {
        Self {
            session,
            request_rx,
            tick,
        }
    }

    /// Main worker loop. Exits once every handle is dropped.
    pub(crate) async fn run(mut self) {
        let mut ticker = self.tick.map(|period| {
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            interval
        });
        let mut last_tick = Instant::now();

        loop {
            tokio::select! {
                request = self.request_rx.recv() => match request {
                    Some(request) => self.handle_request(request),
                    None => break,
                },
                now = next_tick(&mut ticker) => {
                    self.session.advance(now - last_tick);
                    last_tick = now;
                }
            }
        }
        debug!(target: "runtime::worker", "session worker stopped");
    }

    fn handle_request(&mut self, request: Request) {
        match request {
            Request::Dispatch { command, reply } => {
                let result = self.session.dispatch(&command);
                if reply.send(result).is_err() {
                    debug!("Dispatch reply channel closed (caller dropped)");
                }
            }
            Request::Advance { elapsed, reply } => {
                let ran = self.session.advance(elapsed).len();
                if reply.send(ran).is_err() {
                    debug!("Advance reply channel closed (caller dropped)");
                }
            }
            Request::QueryState { reply } => {
                if reply.send(self.session.state().clone()).is_err() {
                    debug!("QueryState reply channel closed (caller dropped)");
                }
            }
            Request::PendingTasks { reply } => {
                if reply.send(self.session.scheduler().pending()).is_err() {
                    debug!("PendingTasks reply channel closed (caller dropped)");
                }
            }
        }
    }
}

async fn next_tick(ticker: &mut Option<Interval>) -> Instant {
    match ticker {
        Some(interval) => interval.tick().await,
        None => std::future::pending().await,
    }
}
