//! Combat session controller.
//!
//! ```text
//! INACTIVE ──start──▶ ACTIVE(round 1) ──submit──▶ PROCESSING ──end round──▶ ACTIVE(round n+1)
//!                          │                          │
//!                          └──── move (flee) ─────────┴── enemy defeated ──▶ INACTIVE
//! ```
//!
//! Resolution itself is delegated to the pure functions in [`crate::combat`];
//! this module only validates the session and writes the outcome back.

use crate::combat::{OracleRolls, apply_damage, resolve_exchange, select_enemy_move};
use crate::env::GameEnv;
use crate::state::{
    CombatResult, CombatState, Enemy, EnemyAction, GameState, LogKind, PlayerAction, UiFlags,
};
use crate::stats::compute_stats;

use super::{ActionResult, ActionTransition, CombatError, RoundReport};

fn session(state: &GameState) -> Result<&CombatState, CombatError> {
    state.combat.as_ref().ok_or(CombatError::NotInCombat)
}

fn opponent(state: &GameState) -> Result<&Enemy, CombatError> {
    let enemy = state.current_room().and_then(|room| room.living_enemy());
    enemy.ok_or_else(|| CombatError::EnemyMissing {
        room: state.current_room_id.clone(),
    })
}

// ============================================================================
// Start
// ============================================================================

/// Opens a combat session against the current room's enemy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StartCombatAction;

impl ActionTransition for StartCombatAction {
    type Error = CombatError;
    type Result = ActionResult;

    fn pre_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        if !state.is_alive() {
            return Err(CombatError::PlayerFallen);
        }
        if state.combat.is_some() {
            return Err(CombatError::AlreadyInCombat);
        }
        if state
            .current_room()
            .and_then(|room| room.living_enemy())
            .is_none()
        {
            return Err(CombatError::NoEnemy);
        }
        Ok(())
    }

    fn apply(&self, state: &mut GameState, _env: &GameEnv<'_>) -> Result<ActionResult, Self::Error> {
        let name = opponent(state)?.name.clone();
        state.combat = Some(CombatState::new());
        state.ui.insert(UiFlags::ENEMY_REVEALED);
        state.add_log(format!("The {name} blocks your path!"), LogKind::Combat);
        Ok(ActionResult::CombatStarted)
    }
}

// ============================================================================
// Submit
// ============================================================================

/// Resolves one round with the player's chosen action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SubmitCombatAction {
    pub action: PlayerAction,
}

impl SubmitCombatAction {
    pub fn new(action: PlayerAction) -> Self {
        Self { action }
    }
}

impl ActionTransition for SubmitCombatAction {
    type Error = CombatError;
    type Result = ActionResult;

    fn pre_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        let combat = session(state)?;
        if !state.is_alive() {
            return Err(CombatError::PlayerFallen);
        }
        if combat.is_processing {
            return Err(CombatError::RoundInProgress);
        }
        if !combat.accepts(self.action) {
            return Err(CombatError::RiposteUnavailable);
        }
        opponent(state).map(|_| ())
    }

    fn apply(&self, state: &mut GameState, env: &GameEnv<'_>) -> Result<ActionResult, Self::Error> {
        let stats = compute_stats(&state.equipped, env.items(), env.config());
        let enemy = opponent(state)?.clone();
        let mut rolls = OracleRolls::new(env.rng(), state.game_seed, state.nonce);

        let intent = select_enemy_move(self.action, session(state)?, &mut rolls);
        let outcome = resolve_exchange(self.action, intent.action, &stats, &enemy, &mut rolls);

        state.health = apply_damage(state.health, outcome.damage_to_player);
        let enemy_hp = apply_damage(enemy.hp, outcome.damage_to_enemy);
        if let Some(target) = state.current_room_mut().and_then(|room| room.enemy.as_mut()) {
            target.hp = enemy_hp;
        }

        let combat = state.combat.as_mut().ok_or(CombatError::NotInCombat)?;
        let round = combat.round;
        combat.is_processing = true;
        combat.player_action = Some(self.action);
        combat.enemy_action = outcome.enemy_animation;
        combat.previous_enemy_move = Some(intent.action);
        combat.stagger_pending = outcome.parried;
        combat.can_riposte = outcome.parried;
        combat.last_result = Some(CombatResult {
            kind: outcome.kind,
            message: outcome.message.clone(),
        });

        let kind = if outcome.damage_to_player > 0 {
            LogKind::Damage
        } else {
            LogKind::Combat
        };
        state.add_log(outcome.message.clone(), kind);

        let enemy_defeated = enemy_hp == 0;
        if enemy_defeated {
            if let Some(room) = state.current_room_mut() {
                room.enemy = None;
                if let Some(drop) = enemy.drop.clone() {
                    room.items.push(drop);
                }
            }
            if enemy.drop.is_some() {
                state.ui.insert(UiFlags::DROP_ANIMATION);
            }
            state.combat = None;
            state.add_log(enemy.defeat_message.clone(), LogKind::Success);
        }

        let player_fallen = !state.is_alive();
        if player_fallen {
            state.add_log("You have fallen.", LogKind::Danger);
        }

        Ok(ActionResult::CombatRound(RoundReport {
            round,
            player_action: self.action,
            enemy_intent: intent,
            outcome,
            enemy_defeated,
            player_fallen,
        }))
    }

    fn post_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        debug_assert!(state.health <= state.max_health);
        if let Some(enemy) = state.current_room().and_then(|room| room.enemy.as_ref()) {
            debug_assert!(enemy.hp <= enemy.max_hp);
        }
        Ok(())
    }
}

// ============================================================================
// End round
// ============================================================================

/// Closes the round that is being processed and readies the next one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EndCombatRoundAction;

impl ActionTransition for EndCombatRoundAction {
    type Error = CombatError;
    type Result = ActionResult;

    fn pre_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        if !session(state)?.is_processing {
            return Err(CombatError::RoundNotInProgress);
        }
        Ok(())
    }

    fn apply(&self, state: &mut GameState, _env: &GameEnv<'_>) -> Result<ActionResult, Self::Error> {
        let combat = state.combat.as_mut().ok_or(CombatError::NotInCombat)?;
        combat.round += 1;
        combat.is_processing = false;
        combat.player_action = None;
        // An enemy recovering from a stagger winds up a telegraphed attack.
        combat.enemy_action =
            if combat.previous_enemy_move == Some(EnemyAction::Stagger) && !combat.stagger_pending {
                EnemyAction::Telegraph
            } else {
                EnemyAction::Idle
            };
        combat.last_result = None;
        // A parry this round keeps the riposte open for exactly the next one.
        combat.can_riposte = combat.stagger_pending;

        Ok(ActionResult::RoundEnded {
            round: combat.round,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::env::{ItemCatalog, ScriptedRng, WorldMap};
    use crate::state::Room;

    fn world() -> WorldMap {
        WorldMap::new(
            "lair",
            [Room::new("lair", "Lair").with_enemy(
                Enemy::new("rat", "Giant Rat", 12)
                    .with_attack(6)
                    .with_drop("rat-tail")
                    .with_defeat_message("The rat squeals and goes still."),
            )],
        )
    }

    fn started(env: &GameEnv<'_>) -> GameState {
        let mut state = GameState::new(env, 0);
        StartCombatAction.pre_validate(&state, env).unwrap();
        StartCombatAction.apply(&mut state, env).unwrap();
        state
    }

    #[test]
    fn start_requires_living_enemy() {
        let (catalog, config) = (ItemCatalog::default(), GameConfig::default());
        let world = WorldMap::new("empty", [Room::new("empty", "Empty")]);
        let rng = ScriptedRng::constant(0);
        let env = GameEnv::new(&catalog, &world, &rng, &config);
        let state = GameState::new(&env, 0);

        assert_eq!(
            StartCombatAction.pre_validate(&state, &env),
            Err(CombatError::NoEnemy)
        );
    }

    #[test]
    fn submit_locks_until_round_ends() {
        let (catalog, world, config) = (ItemCatalog::default(), world(), GameConfig::default());
        // pool index 4: IDLE
        let rng = ScriptedRng::constant(4);
        let env = GameEnv::new(&catalog, &world, &rng, &config);
        let mut state = started(&env);

        let submit = SubmitCombatAction::new(PlayerAction::Attack);
        submit.apply(&mut state, &env).unwrap();
        assert_eq!(
            submit.pre_validate(&state, &env),
            Err(CombatError::RoundInProgress)
        );

        EndCombatRoundAction.apply(&mut state, &env).unwrap();
        let combat = state.combat.as_ref().unwrap();
        assert_eq!(combat.round, 2);
        assert!(!combat.is_processing);
        assert_eq!(combat.enemy_action, EnemyAction::Idle);
        assert!(submit.pre_validate(&state, &env).is_ok());
    }

    #[test]
    fn riposte_requires_parry() {
        let (catalog, world, config) = (ItemCatalog::default(), world(), GameConfig::default());
        let rng = ScriptedRng::constant(0);
        let env = GameEnv::new(&catalog, &world, &rng, &config);
        let state = started(&env);

        assert_eq!(
            SubmitCombatAction::new(PlayerAction::Riposte).pre_validate(&state, &env),
            Err(CombatError::RiposteUnavailable)
        );
    }

    #[test]
    fn defeat_clears_session_and_drops_loot() {
        let (catalog, world, config) = (ItemCatalog::default(), world(), GameConfig::default());
        let rng = ScriptedRng::constant(4);
        let env = GameEnv::new(&catalog, &world, &rng, &config);
        let mut state = started(&env);

        for _ in 0..2 {
            SubmitCombatAction::new(PlayerAction::Attack)
                .apply(&mut state, &env)
                .unwrap();
            if state.combat.is_some() {
                EndCombatRoundAction.apply(&mut state, &env).unwrap();
            }
        }

        // 12 hp, 5 per idle hit: still standing after two rounds.
        assert!(state.combat.is_some());
        let result = SubmitCombatAction::new(PlayerAction::Attack)
            .apply(&mut state, &env)
            .unwrap();

        let ActionResult::CombatRound(report) = result else {
            panic!("expected a combat round");
        };
        assert!(report.enemy_defeated);
        assert!(state.combat.is_none());
        let room = state.current_room().unwrap();
        assert!(room.enemy.is_none());
        assert_eq!(room.items, vec!["rat-tail".into()]);
        assert!(state.ui.contains(UiFlags::DROP_ANIMATION));
        assert_eq!(
            state.quest_log.last().unwrap().text,
            "The rat squeals and goes still."
        );
    }
}
