//! Virtual-clock queue for delayed commands.
//!
//! Time only moves when [`Scheduler::advance`] is called, so tests step the
//! clock explicitly and the worker feeds it wall-clock deltas. Commands due
//! at the same instant come out in the order they were scheduled.

use std::collections::{BTreeMap, HashMap};
use std::time::Duration;

use crawl_core::Command;

/// Handle for a scheduled command, used to cancel it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TaskId(u64);

/// A command whose delay has elapsed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScheduledCommand {
    pub id: TaskId,
    pub due: Duration,
    pub command: Command,
}

#[derive(Debug, Default)]
pub struct Scheduler {
    now: Duration,
    next_id: u64,
    queue: BTreeMap<(Duration, TaskId), Command>,
    due_at: HashMap<TaskId, Duration>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time.
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Queues `command` to become due `delay` from now.
    pub fn schedule(&mut self, delay: Duration, command: Command) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        let due = self.now + delay;
        self.queue.insert((due, id), command);
        self.due_at.insert(id, due);
        id
    }

    /// Drops a pending command. Returns false if it already ran or was cancelled.
    pub fn cancel(&mut self, id: TaskId) -> bool {
        match self.due_at.remove(&id) {
            Some(due) => self.queue.remove(&(due, id)).is_some(),
            None => false,
        }
    }

    pub fn cancel_all(&mut self) {
        self.queue.clear();
        self.due_at.clear();
    }

    pub fn is_pending(&self, id: TaskId) -> bool {
        self.due_at.contains_key(&id)
    }

    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// When the earliest pending command becomes due.
    pub fn next_due(&self) -> Option<Duration> {
        self.queue.keys().next().map(|(due, _)| *due)
    }

    /// Moves the clock forward without draining anything.
    pub fn advance_clock(&mut self, elapsed: Duration) {
        self.now += elapsed;
    }

    /// Removes the earliest command that is due at the current time.
    pub fn pop_due(&mut self) -> Option<ScheduledCommand> {
        let (due, id) = *self.queue.keys().next()?;
        if due > self.now {
            return None;
        }
        let command = self.queue.remove(&(due, id))?;
        self.due_at.remove(&id);
        Some(ScheduledCommand { id, due, command })
    }

    /// Moves the clock forward and drains every command now due, in due-time
    /// then FIFO order.
    pub fn advance(&mut self, elapsed: Duration) -> Vec<ScheduledCommand> {
        self.advance_clock(elapsed);
        std::iter::from_fn(|| self.pop_due()).collect()
    }
}
