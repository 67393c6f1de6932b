//! Quest log emitter.
//!
//! The log is append-only: entries are never reordered, edited or pruned, and
//! insertion order is narrative order. Feedback is a single slot derived from
//! the most recent feedback-worthy entry.

use super::{Feedback, GameState, LogEntry, LogId, LogKind};

/// Derives the on-screen notification for a log line, if any.
///
/// Room titles, room descriptions and narration are log-only.
pub fn derive_feedback(id: LogId, text: &str, kind: LogKind) -> Option<Feedback> {
    kind.raises_feedback().then(|| Feedback {
        id,
        kind,
        message: text.to_owned(),
    })
}

impl GameState {
    /// Appends a log entry and raises feedback for it when applicable.
    ///
    /// A new feedback notification replaces the previous one whether or not
    /// it was ever shown.
    pub fn add_log(&mut self, text: impl Into<String>, kind: LogKind) -> LogId {
        let text = text.into();
        let id = LogId(self.next_log_id);
        self.next_log_id += 1;

        if let Some(feedback) = derive_feedback(id, &text, kind) {
            self.feedback = Some(feedback);
        }
        self.quest_log.push(LogEntry { id, kind, text });
        id
    }

    /// Entries appended after the first `len` ones.
    pub fn log_since(&self, len: usize) -> &[LogEntry] {
        self.quest_log.get(len..).unwrap_or(&[])
    }

    pub fn clear_feedback(&mut self) {
        self.feedback = None;
    }

    /// Logs the title, description and (on a first visit) narrative of the
    /// current room.
    pub(crate) fn log_arrival(&mut self, first_visit: bool) {
        let Some(room) = self.current_room() else {
            return;
        };
        let name = room.name.clone();
        let description = room.description.clone();
        let narrative = room.narrative.clone();

        self.add_log(name, LogKind::RoomTitle);
        if !description.is_empty() {
            self.add_log(description, LogKind::RoomDescription);
        }
        if first_visit && !narrative.is_empty() {
            self.add_log(narrative, LogKind::Narration);
        }
    }
}
