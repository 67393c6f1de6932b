//! Enemy move selection.

use crate::state::{CombatState, EnemyAction, PlayerAction};

use super::rolls::{RollContext, RollSource};

/// Weighted move pool: 60% attack, 20% block, 20% idle.
pub const ENEMY_MOVE_POOL: [EnemyAction; 5] = [
    EnemyAction::Attack,
    EnemyAction::Attack,
    EnemyAction::Attack,
    EnemyAction::Block,
    EnemyAction::Idle,
];

/// The move an enemy commits to for one round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EnemyIntent {
    pub action: EnemyAction,
    /// The attack is announced with a TELEGRAPH beat first (recovery from a stagger).
    pub telegraphed: bool,
    /// The move was forced by the session rather than drawn.
    pub forced: bool,
}

impl EnemyIntent {
    const fn forced(action: EnemyAction, telegraphed: bool) -> Self {
        Self {
            action,
            telegraphed,
            forced: true,
        }
    }
}

/// Picks the enemy's move for the round being resolved.
///
/// Precedence:
/// 1. A riposte always lands on a staggered enemy.
/// 2. A parry last round leaves the enemy staggered this round.
/// 3. An enemy recovering from a stagger telegraphs an attack; it cannot defend.
/// 4. Otherwise a uniform draw from [`ENEMY_MOVE_POOL`].
pub fn select_enemy_move(
    player_action: PlayerAction,
    combat: &CombatState,
    rolls: &mut dyn RollSource,
) -> EnemyIntent {
    if player_action == PlayerAction::Riposte || combat.stagger_pending {
        return EnemyIntent::forced(EnemyAction::Stagger, false);
    }
    if combat.previous_enemy_move == Some(EnemyAction::Stagger) {
        return EnemyIntent::forced(EnemyAction::Attack, true);
    }

    let index = rolls.pick(RollContext::EnemyMove, ENEMY_MOVE_POOL.len());
    EnemyIntent {
        action: ENEMY_MOVE_POOL[index],
        telegraphed: false,
        forced: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(usize);

    impl RollSource for Fixed {
        fn pick(&mut self, _context: RollContext, len: usize) -> usize {
            self.0 % len
        }

        fn percent(&mut self, _context: RollContext) -> u32 {
            0
        }
    }

    #[test]
    fn draws_from_weighted_pool() {
        let combat = CombatState::new();
        let picks: Vec<_> = (0..5)
            .map(|i| select_enemy_move(PlayerAction::Attack, &combat, &mut Fixed(i)).action)
            .collect();
        assert_eq!(picks, ENEMY_MOVE_POOL);
    }

    #[test]
    fn riposte_forces_stagger() {
        let combat = CombatState::new();
        let intent = select_enemy_move(PlayerAction::Riposte, &combat, &mut Fixed(3));
        assert_eq!(intent.action, EnemyAction::Stagger);
        assert!(intent.forced);
    }

    #[test]
    fn pending_stagger_overrides_draw() {
        let combat = CombatState {
            stagger_pending: true,
            ..CombatState::new()
        };
        let intent = select_enemy_move(PlayerAction::Block, &combat, &mut Fixed(3));
        assert_eq!(intent.action, EnemyAction::Stagger);
    }

    #[test]
    fn recovering_enemy_telegraphs_attack() {
        let combat = CombatState {
            previous_enemy_move: Some(EnemyAction::Stagger),
            ..CombatState::new()
        };
        let intent = select_enemy_move(PlayerAction::Attack, &combat, &mut Fixed(3));
        assert_eq!(intent.action, EnemyAction::Attack);
        assert!(intent.telegraphed);
    }
}
