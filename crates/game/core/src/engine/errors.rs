//! Error types for the command pipeline.

use crate::action::{CombatError, InventoryError, LogError, NavigationError};
use crate::error::{ErrorSeverity, GameError};

/// Identifies which stage of the transition pipeline produced an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TransitionPhase {
    PreValidate,
    Apply,
    PostValidate,
}

impl TransitionPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransitionPhase::PreValidate => "pre_validate",
            TransitionPhase::Apply => "apply",
            TransitionPhase::PostValidate => "post_validate",
        }
    }
}

/// Associates a transition phase with the underlying error.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransitionPhaseError<E> {
    pub phase: TransitionPhase,
    pub error: E,
}

impl<E> TransitionPhaseError<E> {
    pub fn new(phase: TransitionPhase, error: E) -> Self {
        Self { phase, error }
    }
}

impl<E: std::fmt::Display> std::fmt::Display for TransitionPhaseError<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} failed: {}", self.phase.as_str(), self.error)
    }
}

impl<E: std::fmt::Display + std::fmt::Debug> std::error::Error for TransitionPhaseError<E> {}

/// Errors surfaced while executing a command through the game engine.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExecuteError {
    #[error("inventory command failed: {0}")]
    Inventory(TransitionPhaseError<InventoryError>),

    #[error("navigation command failed: {0}")]
    Navigation(TransitionPhaseError<NavigationError>),

    #[error("combat command failed: {0}")]
    Combat(TransitionPhaseError<CombatError>),

    #[error("log command failed: {0}")]
    Log(TransitionPhaseError<LogError>),
}

impl ExecuteError {
    pub fn phase(&self) -> TransitionPhase {
        match self {
            ExecuteError::Inventory(error) => error.phase,
            ExecuteError::Navigation(error) => error.phase,
            ExecuteError::Combat(error) => error.phase,
            ExecuteError::Log(error) => error.phase,
        }
    }

    fn inner(&self) -> &dyn GameError {
        match self {
            ExecuteError::Inventory(error) => &error.error,
            ExecuteError::Navigation(error) => &error.error,
            ExecuteError::Combat(error) => &error.error,
            ExecuteError::Log(error) => &error.error,
        }
    }
}

impl GameError for ExecuteError {
    fn severity(&self) -> ErrorSeverity {
        self.inner().severity()
    }

    fn error_code(&self) -> &'static str {
        self.inner().error_code()
    }

    fn user_message(&self) -> Option<String> {
        self.inner().user_message()
    }
}
