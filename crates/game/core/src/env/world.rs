use std::collections::BTreeMap;

use crate::state::{Room, RoomId};

/// Read-only world graph the game state is built from.
pub trait WorldOracle: Send + Sync {
    /// Room the player starts in.
    fn start_room(&self) -> &RoomId;

    /// Pristine room templates; the state takes its own copy at init.
    fn rooms(&self) -> &BTreeMap<RoomId, Room>;

    fn room(&self, id: &RoomId) -> Option<&Room> {
        self.rooms().get(id)
    }
}

/// In-memory [`WorldOracle`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WorldMap {
    start_room: RoomId,
    rooms: BTreeMap<RoomId, Room>,
}

impl WorldMap {
    pub fn new(start_room: impl Into<RoomId>, rooms: impl IntoIterator<Item = Room>) -> Self {
        Self {
            start_room: start_room.into(),
            rooms: rooms
                .into_iter()
                .map(|room| (room.id.clone(), room))
                .collect(),
        }
    }
}

impl WorldOracle for WorldMap {
    fn start_room(&self) -> &RoomId {
        &self.start_room
    }

    fn rooms(&self) -> &BTreeMap<RoomId, Room> {
        &self.rooms
    }
}
