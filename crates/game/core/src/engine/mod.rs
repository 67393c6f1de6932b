//! Command execution pipeline.
//!
//! The [`GameEngine`] is the authoritative reducer for [`GameState`]. Every
//! command runs pre_validate → apply → post_validate; a command either fully
//! applies or leaves the state as it found it.

mod errors;
mod transition;

pub use errors::{ExecuteError, TransitionPhase, TransitionPhaseError};

use crate::action::{ActionResult, Command, Cue, cues_for};
use crate::env::GameEnv;
use crate::error::GameError;
use crate::state::{GameState, LogEntry, LogKind};

/// Complete outcome of a successful command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExecutionOutcome {
    /// Command-specific result.
    pub result: ActionResult,

    /// Log entries appended by the command, in order.
    pub log: Vec<LogEntry>,

    /// Presentation cues to dispatch, in order.
    pub cues: Vec<Cue>,
}

/// Game engine that applies commands to a borrowed state.
pub struct GameEngine<'a> {
    state: &'a mut GameState,
}

impl<'a> GameEngine<'a> {
    /// Creates a new game engine with the given state.
    pub fn new(state: &'a mut GameState) -> Self {
        Self { state }
    }

    /// Executes a command through its transition pipeline.
    ///
    /// The nonce advances only when the command changed the state.
    /// On error the state is restored to its pre-command value. A recoverable
    /// rejection then appends a warning log entry (which also raises
    /// feedback); every other rejection leaves the state untouched.
    pub fn execute(
        &mut self,
        env: GameEnv<'_>,
        command: &Command,
    ) -> Result<ExecutionOutcome, ExecuteError> {
        let before = self.state.clone();
        let log_len = self.state.quest_log.len();

        match transition::execute_transition(command, self.state, &env) {
            Ok(result) => {
                if result.mutated() {
                    self.state.nonce += 1;
                }
                let cues = cues_for(&result);
                Ok(ExecutionOutcome {
                    result,
                    log: self.state.log_since(log_len).to_vec(),
                    cues,
                })
            }
            Err(error) => {
                *self.state = before;
                if error.severity().is_recoverable()
                    && let Some(message) = error.user_message()
                {
                    self.state.add_log(message, LogKind::Warning);
                }
                debug_assert!(
                    !error.severity().is_internal(),
                    "malformed world data: {error}"
                );
                Err(error)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::env::{ItemCatalog, ItemDefinition, ItemKind, PcgRng, WorldMap};
    use crate::state::{Direction, ItemId, Room};

    fn fixture() -> (ItemCatalog, WorldMap, GameConfig) {
        let catalog = ItemCatalog::new([ItemDefinition::new("rock", "Rock", ItemKind::Item)]);
        let world = WorldMap::new(
            "yard",
            [
                Room::new("yard", "Yard")
                    .with_item("rock")
                    .with_exit(Direction::East, "shed"),
                Room::new("shed", "Shed"),
            ],
        );
        (catalog, world, GameConfig::default().with_inventory_capacity(1))
    }

    #[test]
    fn success_increments_nonce_and_reports_new_log() {
        let (catalog, world, config) = fixture();
        let rng = PcgRng;
        let env = GameEnv::new(&catalog, &world, &rng, &config);
        let mut state = GameState::new(&env, 3);

        let outcome = GameEngine::new(&mut state)
            .execute(env, &Command::take("rock"))
            .unwrap();

        assert_eq!(state.nonce, 1);
        assert_eq!(outcome.log.len(), 1);
        assert_eq!(outcome.cues, vec![Cue::ItemPickup]);
        assert_eq!(state.inventory.slot(0), Some(&ItemId::from("rock")));
    }

    #[test]
    fn recoverable_rejection_only_logs() {
        let (catalog, world, config) = fixture();
        let rng = PcgRng;
        let env = GameEnv::new(&catalog, &world, &rng, &config);
        let mut state = GameState::new(&env, 3);
        let before = state.clone();

        let error = GameEngine::new(&mut state)
            .execute(env, &Command::move_to(Direction::North))
            .unwrap_err();

        assert_eq!(error.phase(), TransitionPhase::PreValidate);
        assert_eq!(state.nonce, before.nonce);
        assert_eq!(state.quest_log.len(), before.quest_log.len() + 1);
        let feedback = state.feedback.as_ref().unwrap();
        assert_eq!(feedback.kind, LogKind::Warning);
        assert_eq!(feedback.message, "You can't go that way.");
    }

    #[test]
    fn validation_rejection_leaves_state_untouched() {
        let (catalog, world, config) = fixture();
        let rng = PcgRng;
        let env = GameEnv::new(&catalog, &world, &rng, &config);
        let mut state = GameState::new(&env, 3);
        let before = state.clone();

        GameEngine::new(&mut state)
            .execute(env, &Command::end_round())
            .unwrap_err();

        assert_eq!(state, before);
    }

    #[test]
    fn restart_rebuilds_from_world_data() {
        let (catalog, world, config) = fixture();
        let rng = PcgRng;
        let env = GameEnv::new(&catalog, &world, &rng, &config);
        let mut state = GameState::new(&env, 3);
        let mut engine = GameEngine::new(&mut state);
        engine.execute(env, &Command::take("rock")).unwrap();
        engine.execute(env, &Command::move_to(Direction::East)).unwrap();
        engine.execute(env, &Command::Restart).unwrap();

        assert_eq!(state.current_room_id.as_str(), "yard");
        assert!(state.inventory.slot(0).is_none());
        assert_eq!(state.current_room().unwrap().items, vec![ItemId::from("rock")]);
        assert_eq!(state.nonce, 3);
    }
}
