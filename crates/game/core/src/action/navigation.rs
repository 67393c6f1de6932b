//! Navigation & lock manager.

use crate::env::GameEnv;
use crate::state::{Direction, GameState, ItemId, LogKind, RoomId, UiFlags};

use super::{ActionResult, ActionTransition, NavigationError};

/// Puts the player in `room` and resets everything tied to the previous one.
///
/// Any active combat session is discarded. Returns whether this is the first
/// visit.
pub fn enter_room(state: &mut GameState, room: RoomId) -> bool {
    let first_visit = state.visited_rooms.insert(room.clone());
    state.current_room_id = room;
    state.ui.remove(UiFlags::ROOM_TRANSIENT);
    state.unlock_highlight = None;
    state.combat = None;
    state.clear_feedback();
    state.log_arrival(first_visit);
    first_visit
}

// ============================================================================
// Move
// ============================================================================

/// Walks through an exit of the current room.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveAction {
    pub direction: Direction,
}

impl MoveAction {
    pub fn new(direction: Direction) -> Self {
        Self { direction }
    }

    fn destination(&self, state: &GameState) -> Result<RoomId, NavigationError> {
        if !state.is_alive() {
            return Err(NavigationError::PlayerFallen);
        }
        let room = state
            .current_room()
            .ok_or_else(|| NavigationError::UnknownRoom {
                room: state.current_room_id.clone(),
            })?;
        let target = room
            .exits
            .get(&self.direction)
            .ok_or(NavigationError::NoExit {
                direction: self.direction,
            })?;
        if let Some(lock) = room.locked_exits.get(&self.direction) {
            return Err(NavigationError::Locked {
                direction: self.direction,
                message: lock.locked_message.clone(),
            });
        }
        debug_assert!(
            state.rooms.contains_key(target),
            "exit {} of {} leads to unknown room {target}",
            self.direction,
            room.id
        );
        if !state.rooms.contains_key(target) {
            return Err(NavigationError::UnknownRoom {
                room: target.clone(),
            });
        }
        Ok(target.clone())
    }
}

impl ActionTransition for MoveAction {
    type Error = NavigationError;
    type Result = ActionResult;

    fn pre_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        self.destination(state).map(|_| ())
    }

    fn apply(&self, state: &mut GameState, _env: &GameEnv<'_>) -> Result<ActionResult, Self::Error> {
        let to = self.destination(state)?;
        let from = state.current_room_id.clone();

        let fled = state.combat.is_some();
        if fled {
            let name = state
                .current_room()
                .and_then(|room| room.enemy.as_ref())
                .map(|enemy| enemy.name.clone())
                .unwrap_or_default();
            state.add_log(format!("You flee from the {name}."), LogKind::Warning);
        }

        let first_visit = enter_room(state, to.clone());
        Ok(ActionResult::Moved {
            from,
            to,
            first_visit,
            fled,
        })
    }
}

// ============================================================================
// Reveal
// ============================================================================

/// Catches the perceived room up with the real one once the transition
/// effect has played.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RevealRoomAction;

impl ActionTransition for RevealRoomAction {
    type Error = NavigationError;
    type Result = ActionResult;

    fn apply(&self, state: &mut GameState, _env: &GameEnv<'_>) -> Result<ActionResult, Self::Error> {
        state.perceived_room_id = state.current_room_id.clone();
        Ok(ActionResult::RoomRevealed)
    }
}

// ============================================================================
// Unlock
// ============================================================================

/// Opens a locked exit with a key from the inventory.
///
/// Unlocking an exit that has no lock is a no-op, so repeating the command
/// is harmless.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnlockDoorAction {
    pub direction: Direction,
    pub key: ItemId,
}

impl UnlockDoorAction {
    pub fn new(direction: Direction, key: impl Into<ItemId>) -> Self {
        Self {
            direction,
            key: key.into(),
        }
    }

    fn is_locked(&self, state: &GameState) -> bool {
        state
            .current_room()
            .is_some_and(|room| room.locked_exits.contains_key(&self.direction))
    }
}

impl ActionTransition for UnlockDoorAction {
    type Error = NavigationError;
    type Result = ActionResult;

    fn pre_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        let Some(lock) = state
            .current_room()
            .and_then(|room| room.locked_exits.get(&self.direction))
        else {
            return Ok(());
        };
        if !state.inventory.contains(&self.key) {
            return Err(NavigationError::KeyNotCarried {
                key: self.key.clone(),
            });
        }
        if lock.key_id != self.key {
            return Err(NavigationError::WrongKey {
                direction: self.direction,
                key: self.key.clone(),
            });
        }
        Ok(())
    }

    fn apply(&self, state: &mut GameState, env: &GameEnv<'_>) -> Result<ActionResult, Self::Error> {
        if !self.is_locked(state) {
            return Ok(ActionResult::AlreadyUnlocked {
                direction: self.direction,
            });
        }

        state.inventory.remove(&self.key);
        if let Some(room) = state.current_room_mut()
            && let Some(lock) = room.locked_exits.remove(&self.direction)
            && let Some(image) = lock.unlocked_image
        {
            room.image = Some(image);
        }
        state.unlock_highlight = Some(self.direction);

        let key_name = env
            .items()
            .definition(&self.key)
            .map_or(self.key.as_str(), |definition| definition.name.as_str());
        state.add_log(
            format!("The {key_name} turns in the lock. The way {} is open.", self.direction),
            LogKind::Success,
        );

        Ok(ActionResult::DoorUnlocked {
            direction: self.direction,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::env::{ItemCatalog, ItemDefinition, ItemKind, PcgRng, WorldMap};
    use crate::state::{LockDescriptor, Room};

    fn world() -> WorldMap {
        WorldMap::new(
            "cell",
            [
                Room::new("cell", "Cell")
                    .with_exit(Direction::North, "hall")
                    .with_lock(
                        Direction::North,
                        LockDescriptor::new("iron-key", "The cell door is locked.")
                            .with_unlocked_image("cell-open.png"),
                    ),
                Room::new("hall", "Hall")
                    .with_description("A long hall.")
                    .with_exit(Direction::South, "cell"),
            ],
        )
    }

    fn catalog() -> ItemCatalog {
        ItemCatalog::new([
            ItemDefinition::new("iron-key", "Iron Key", ItemKind::Key),
            ItemDefinition::new("bone-key", "Bone Key", ItemKind::Key),
        ])
    }

    #[test]
    fn locked_exit_rejects_with_lock_message() {
        let (catalog, world, config, rng) = (catalog(), world(), GameConfig::default(), PcgRng);
        let env = GameEnv::new(&catalog, &world, &rng, &config);
        let state = GameState::new(&env, 0);

        let error = MoveAction::new(Direction::North)
            .pre_validate(&state, &env)
            .unwrap_err();
        assert_eq!(
            error,
            NavigationError::Locked {
                direction: Direction::North,
                message: "The cell door is locked.".to_owned()
            }
        );
        assert_eq!(
            MoveAction::new(Direction::West).pre_validate(&state, &env),
            Err(NavigationError::NoExit {
                direction: Direction::West
            })
        );
    }

    #[test]
    fn unlock_consumes_key_and_swaps_image() {
        let (catalog, world, config, rng) = (catalog(), world(), GameConfig::default(), PcgRng);
        let env = GameEnv::new(&catalog, &world, &rng, &config);
        let mut state = GameState::new(&env, 0);
        state.inventory.replace(0, Some(ItemId::from("iron-key")));

        let action = UnlockDoorAction::new(Direction::North, "iron-key");
        action.pre_validate(&state, &env).unwrap();
        action.apply(&mut state, &env).unwrap();

        let room = state.current_room().unwrap();
        assert!(room.locked_exits.is_empty());
        assert_eq!(room.image.as_deref(), Some("cell-open.png"));
        assert_eq!(state.unlock_highlight, Some(Direction::North));
        assert!(!state.inventory.contains(&ItemId::from("iron-key")));

        let again = action.apply(&mut state, &env).unwrap();
        assert_eq!(
            again,
            ActionResult::AlreadyUnlocked {
                direction: Direction::North
            }
        );
    }

    #[test]
    fn wrong_key_is_rejected() {
        let (catalog, world, config, rng) = (catalog(), world(), GameConfig::default(), PcgRng);
        let env = GameEnv::new(&catalog, &world, &rng, &config);
        let mut state = GameState::new(&env, 0);
        state.inventory.replace(0, Some(ItemId::from("bone-key")));

        let error = UnlockDoorAction::new(Direction::North, "bone-key")
            .pre_validate(&state, &env)
            .unwrap_err();
        assert_eq!(error.to_string(), "key bone-key does not fit the north lock");
    }

    #[test]
    fn entering_a_room_logs_arrival_and_clears_transients() {
        let (catalog, world, config, rng) = (catalog(), world(), GameConfig::default(), PcgRng);
        let env = GameEnv::new(&catalog, &world, &rng, &config);
        let mut state = GameState::new(&env, 0);
        state.ui.insert(UiFlags::DROP_ANIMATION | UiFlags::DEBUG);
        state.unlock_highlight = Some(Direction::North);

        let first = enter_room(&mut state, RoomId::from("hall"));

        assert!(first);
        assert_eq!(state.ui, UiFlags::DEBUG);
        assert_eq!(state.unlock_highlight, None);
        assert_eq!(state.perceived_room_id, RoomId::from("cell"));
        let last = state.quest_log.last().unwrap();
        assert_eq!(last.kind, LogKind::RoomDescription);
        assert_eq!(last.text, "A long hall.");
    }
}
