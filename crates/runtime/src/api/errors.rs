//! Unified error types surfaced by the runtime API.
//!
//! Wraps worker coordination failures and engine rejections so clients can
//! bubble them up with consistent context.
use thiserror::Error;
use tokio::sync::oneshot;

use crawl_core::{ExecuteError, GameError};

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("session worker command channel closed")]
    CommandChannelClosed,

    #[error("session worker reply channel closed")]
    ReplyChannelClosed(#[source] oneshot::error::RecvError),

    #[error("session worker join failed")]
    WorkerJoin(#[source] tokio::task::JoinError),

    #[error("runtime requires world content to be configured before building")]
    MissingContent,

    #[error(transparent)]
    Rejected(#[from] ExecuteError),
}

impl RuntimeError {
    /// Player-facing message when the engine refused a command for a reason
    /// the player should hear about.
    pub fn user_message(&self) -> Option<String> {
        match self {
            RuntimeError::Rejected(error) => error.user_message(),
            _ => None,
        }
    }
}
