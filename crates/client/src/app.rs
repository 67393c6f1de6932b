//! Read-eval-print loop over a [`RuntimeHandle`].
//!
//! The terminal has no animations, so after each command the app advances
//! the session clock far enough for every follow-up (room reveal, round
//! end) to run before the next prompt.

use std::io::Write;
use std::time::Duration;

use anyhow::Result;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::broadcast;
use tracing::{debug, info};

use crawl_content::WorldContent;
use crawl_core::GameError;
use crawl_runtime::{GameEvent, RuntimeError, RuntimeHandle, Topic};

use crate::input::{HELP, Input, parse};
use crate::render;

pub struct App<W> {
    handle: RuntimeHandle,
    content: WorldContent,
    log_rx: broadcast::Receiver<GameEvent>,
    out: W,
    settle: Duration,
}

impl<W: Write> App<W> {
    /// `settle` must cover the longest delay the session schedules.
    pub fn new(handle: RuntimeHandle, content: WorldContent, out: W, settle: Duration) -> Self {
        let log_rx = handle.subscribe(Topic::Log);
        Self {
            handle,
            content,
            log_rx,
            out,
            settle,
        }
    }

    pub fn into_output(self) -> W {
        self.out
    }

    pub async fn run<R: AsyncBufRead + Unpin>(&mut self, input: R) -> Result<()> {
        let state = self.handle.query_state().await?;
        for entry in &state.quest_log {
            writeln!(self.out, "{}", render::log_line(entry))?;
        }
        writeln!(self.out, "Type 'help' for commands.")?;

        let mut lines = input.lines();
        loop {
            write!(self.out, "> ")?;
            self.out.flush()?;
            let Some(line) = lines.next_line().await? else {
                break;
            };
            if !self.handle_line(&line).await? {
                break;
            }
        }
        info!(target: "client", "input closed");
        Ok(())
    }

    /// Returns false once the player quits.
    async fn handle_line(&mut self, line: &str) -> Result<bool> {
        match parse(line) {
            Input::Game(command) => {
                debug!(target: "client", command = command.name(), "dispatch");
                match self.handle.dispatch(command).await {
                    Ok(_) => {}
                    Err(RuntimeError::Rejected(error)) => {
                        // Recoverable rejections arrive as warning log lines.
                        debug!(target: "client", %error, "rejected");
                        if error.user_message().is_none() {
                            writeln!(self.out, "You can't do that right now.")?;
                        }
                    }
                    Err(error) => return Err(error.into()),
                }
                self.handle.advance(self.settle).await?;
                self.flush_log()?;
                let state = self.handle.query_state().await?;
                if state.in_combat() {
                    writeln!(self.out, "{}", render::status(&state))?;
                }
            }
            Input::Look => {
                let state = self.handle.query_state().await?;
                write!(self.out, "{}", render::room(&state, &self.content.items))?;
            }
            Input::Inventory => {
                let state = self.handle.query_state().await?;
                write!(self.out, "{}", render::inventory(&state, &self.content.items))?;
            }
            Input::Dump => {
                let state = self.handle.query_state().await?;
                writeln!(self.out, "{}", serde_json::to_string_pretty(&state)?)?;
            }
            Input::Help => writeln!(self.out, "{HELP}")?,
            Input::Quit => return Ok(false),
            Input::Empty => {}
            Input::Unknown(text) => writeln!(self.out, "I don't understand '{text}'.")?,
        }
        Ok(true)
    }

    fn flush_log(&mut self) -> Result<()> {
        loop {
            match self.log_rx.try_recv() {
                Ok(GameEvent::LogAppended(entry)) => {
                    writeln!(self.out, "{}", render::log_line(&entry))?;
                }
                Ok(_) => {}
                Err(broadcast::error::TryRecvError::Lagged(skipped)) => {
                    debug!(target: "client", skipped, "log subscriber lagged");
                }
                Err(_) => return Ok(()),
            }
        }
    }
}
