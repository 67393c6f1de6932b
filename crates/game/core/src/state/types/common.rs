use std::borrow::Borrow;
use std::fmt;

use bitflags::bitflags;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(transparent))]
        pub struct $name(pub String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_owned())
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }
    };
}

string_id!(
    /// Identifier of a room in the world graph.
    RoomId
);

string_id!(
    /// Identifier of an item definition in the catalog.
    ///
    /// World data places each id at most once (on a floor or as an enemy
    /// drop, checked when content is loaded), so an `ItemId` also names the
    /// single instance moving between floor, inventory and equipment.
    ItemId
);

/// Cardinal exit direction.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Direction {
    #[strum(serialize = "north", serialize = "n")]
    North,
    #[strum(serialize = "south", serialize = "s")]
    South,
    #[strum(serialize = "east", serialize = "e")]
    East,
    #[strum(serialize = "west", serialize = "w")]
    West,
}

bitflags! {
    /// Presentation-owned flags carried alongside the engine state.
    ///
    /// The engine only touches `ENEMY_REVEALED` and `DROP_ANIMATION`; the rest
    /// are written through `Command::SetUiFlags` and passed through untouched.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct UiFlags: u8 {
        const WALKING = 1 << 0;
        const SHUTTER_ACTIVE = 1 << 1;
        const QUEST_LOG_OPEN = 1 << 2;
        const DEBUG = 1 << 3;
        const ENEMY_REVEALED = 1 << 4;
        const DROP_ANIMATION = 1 << 5;
    }
}

impl UiFlags {
    /// Flags tied to the room the player is standing in.
    pub const ROOM_TRANSIENT: Self = Self::ENEMY_REVEALED.union(Self::DROP_ANIMATION);
}
