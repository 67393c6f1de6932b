//! Log and presentation-flag commands.

use crate::env::GameEnv;
use crate::state::{GameState, LogKind, UiFlags};

use super::{ActionResult, ActionTransition, LogError};

/// Appends an arbitrary quest log line (scripted narration, delayed messages).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AddLogEntryAction {
    pub text: String,
    pub kind: LogKind,
}

impl AddLogEntryAction {
    pub fn new(text: impl Into<String>, kind: LogKind) -> Self {
        Self {
            text: text.into(),
            kind,
        }
    }
}

impl ActionTransition for AddLogEntryAction {
    type Error = LogError;
    type Result = ActionResult;

    fn pre_validate(&self, _state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        if self.text.trim().is_empty() {
            return Err(LogError::EmptyText);
        }
        Ok(())
    }

    fn apply(&self, state: &mut GameState, _env: &GameEnv<'_>) -> Result<ActionResult, Self::Error> {
        let id = state.add_log(self.text.clone(), self.kind);
        Ok(ActionResult::LogAppended(id))
    }
}

/// Dismisses the current feedback notification.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClearFeedbackAction;

impl ActionTransition for ClearFeedbackAction {
    type Error = LogError;
    type Result = ActionResult;

    fn apply(&self, state: &mut GameState, _env: &GameEnv<'_>) -> Result<ActionResult, Self::Error> {
        state.clear_feedback();
        Ok(ActionResult::FeedbackCleared)
    }
}

/// Sets or clears presentation flags.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SetUiFlagsAction {
    pub flags: UiFlags,
    pub enabled: bool,
}

impl SetUiFlagsAction {
    pub fn enable(flags: UiFlags) -> Self {
        Self {
            flags,
            enabled: true,
        }
    }

    pub fn disable(flags: UiFlags) -> Self {
        Self {
            flags,
            enabled: false,
        }
    }
}

impl ActionTransition for SetUiFlagsAction {
    type Error = LogError;
    type Result = ActionResult;

    fn apply(&self, state: &mut GameState, _env: &GameEnv<'_>) -> Result<ActionResult, Self::Error> {
        state.ui.set(self.flags, self.enabled);
        Ok(ActionResult::UiFlagsChanged(state.ui))
    }
}
