//! Command dispatch and the three-phase pipeline.

use crate::action::{ActionResult, ActionTransition, Command};
use crate::env::GameEnv;
use crate::state::GameState;

use super::errors::{ExecuteError, TransitionPhase, TransitionPhaseError};

/// Executes a transition through the three-phase pipeline and returns the result.
///
/// Phases:
/// 1. `pre_validate` - Check preconditions before mutation
/// 2. `apply` - Mutate the game state and return result
/// 3. `post_validate` - Verify postconditions after mutation
#[inline]
fn drive_transition<T>(
    transition: &T,
    state: &mut GameState,
    env: &GameEnv<'_>,
) -> Result<T::Result, TransitionPhaseError<T::Error>>
where
    T: ActionTransition,
{
    transition
        .pre_validate(state, env)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::PreValidate, error))?;

    let result = transition
        .apply(state, env)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::Apply, error))?;

    transition
        .post_validate(state, env)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::PostValidate, error))?;

    Ok(result)
}

/// Rebuilds the state from world data, keeping the seed and nonce so the
/// next game does not replay the same rolls.
fn restart(state: &mut GameState, env: &GameEnv<'_>) -> ActionResult {
    let nonce = state.nonce;
    *state = GameState::new(env, state.game_seed);
    state.nonce = nonce;
    ActionResult::Restarted
}

/// Routes a command to its transition.
pub(super) fn execute_transition(
    command: &Command,
    state: &mut GameState,
    env: &GameEnv<'_>,
) -> Result<ActionResult, ExecuteError> {
    match command {
        Command::Move(transition) => {
            drive_transition(transition, state, env).map_err(ExecuteError::Navigation)
        }
        Command::RevealRoom(transition) => {
            drive_transition(transition, state, env).map_err(ExecuteError::Navigation)
        }
        Command::UnlockDoor(transition) => {
            drive_transition(transition, state, env).map_err(ExecuteError::Navigation)
        }
        Command::TakeItem(transition) => {
            drive_transition(transition, state, env).map_err(ExecuteError::Inventory)
        }
        Command::DropItem(transition) => {
            drive_transition(transition, state, env).map_err(ExecuteError::Inventory)
        }
        Command::EquipItem(transition) => {
            drive_transition(transition, state, env).map_err(ExecuteError::Inventory)
        }
        Command::UnequipItem(transition) => {
            drive_transition(transition, state, env).map_err(ExecuteError::Inventory)
        }
        Command::ReorderInventory(transition) => {
            drive_transition(transition, state, env).map_err(ExecuteError::Inventory)
        }
        Command::UseConsumable(transition) => {
            drive_transition(transition, state, env).map_err(ExecuteError::Inventory)
        }
        Command::StartCombat(transition) => {
            drive_transition(transition, state, env).map_err(ExecuteError::Combat)
        }
        Command::SubmitCombatAction(transition) => {
            drive_transition(transition, state, env).map_err(ExecuteError::Combat)
        }
        Command::EndCombatRound(transition) => {
            drive_transition(transition, state, env).map_err(ExecuteError::Combat)
        }
        Command::AddLogEntry(transition) => {
            drive_transition(transition, state, env).map_err(ExecuteError::Log)
        }
        Command::ClearFeedback(transition) => {
            drive_transition(transition, state, env).map_err(ExecuteError::Log)
        }
        Command::SetUiFlags(transition) => {
            drive_transition(transition, state, env).map_err(ExecuteError::Log)
        }
        Command::Restart => Ok(restart(state, env)),
    }
}
