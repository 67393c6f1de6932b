//! Common error infrastructure for crawl-core.
//!
//! Domain-specific errors (e.g. `InventoryError`, `CombatError`) live next to
//! the transitions that raise them. This module only defines the shared
//! classification they all report through.
//!
//! # Severity and the command contract
//!
//! - **Recoverable**: a rejected command the player caused (full inventory,
//!   wrong key). The engine leaves the state untouched except for a warning
//!   log entry and feedback built from [`GameError::user_message`].
//! - **Validation**: a caller bug (riposte without a parry, action while a
//!   round is still processing). Silently rejected, no log entry.
//! - **Internal**: world data references something that does not exist.

/// Severity level of an error, used for categorization and recovery strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Rejected command with a player-facing explanation.
    Recoverable,

    /// Invalid input from the presentation layer, rejected without comment.
    Validation,

    /// Malformed world data or a broken state invariant.
    Internal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
        }
    }

    /// Returns true if this error is reported to the player.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates a bug or bad data.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal)
    }
}

/// Common trait for all crawl-core errors.
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }

    /// Message shown to the player when the command is rejected.
    ///
    /// Only meaningful for [`ErrorSeverity::Recoverable`] errors; the default
    /// returns `None` so silent rejections stay silent.
    fn user_message(&self) -> Option<String> {
        None
    }
}
