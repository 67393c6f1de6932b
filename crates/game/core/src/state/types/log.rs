//! Quest log entries and transient feedback.

use std::fmt;

/// Monotonic identifier of a quest log entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct LogId(pub u64);

impl fmt::Display for LogId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Category of a log entry; drives styling and whether feedback is raised.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum LogKind {
    RoomTitle,
    RoomDescription,
    Narration,
    Info,
    Warning,
    Danger,
    Success,
    Combat,
    System,
    Damage,
}

impl LogKind {
    /// Log-only kinds never surface as on-screen feedback.
    pub const fn raises_feedback(self) -> bool {
        !matches!(
            self,
            LogKind::RoomTitle | LogKind::RoomDescription | LogKind::Narration
        )
    }
}

/// Immutable quest log line.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LogEntry {
    pub id: LogId,
    pub kind: LogKind,
    pub text: String,
}

/// Single-slot on-screen notification.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Feedback {
    /// Log entry that produced this notification.
    pub id: LogId,
    pub kind: LogKind,
    pub message: String,
}
