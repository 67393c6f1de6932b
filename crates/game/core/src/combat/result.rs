//! Exchange resolution.

use crate::state::{CombatResultKind, Enemy, EnemyAction, PlayerAction};
use crate::stats::CombatStats;

use super::damage::{Halves, calculate_damage};
use super::rolls::{RollContext, RollSource};

/// Outcome of one resolved exchange. Pure data; the session controller
/// applies it to state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExchangeOutcome {
    pub kind: CombatResultKind,
    pub damage_to_player: u32,
    pub damage_to_enemy: u32,
    /// A parry landed: the enemy staggers next round and a riposte opens.
    pub parried: bool,
    /// The riposte roll came up critical.
    pub critical: bool,
    /// Animation state for the enemy after the exchange.
    pub enemy_animation: EnemyAction,
    pub message: String,
}

impl ExchangeOutcome {
    fn new(kind: CombatResultKind, enemy_animation: EnemyAction, message: String) -> Self {
        Self {
            kind,
            damage_to_player: 0,
            damage_to_enemy: 0,
            parried: false,
            critical: false,
            enemy_animation,
            message,
        }
    }

    fn to_player(mut self, damage: u32) -> Self {
        self.damage_to_player = damage;
        self
    }

    fn to_enemy(mut self, damage: u32) -> Self {
        self.damage_to_enemy = damage;
        self
    }
}

/// Resolves one player action against the enemy's committed move.
///
/// Rolls are drawn only when a rule needs them: parry attempts against an
/// attack roll [`RollContext::Parry`], ripostes roll [`RollContext::Crit`].
pub fn resolve_exchange(
    player_action: PlayerAction,
    enemy_move: EnemyAction,
    player: &CombatStats,
    enemy: &Enemy,
    rolls: &mut dyn RollSource,
) -> ExchangeOutcome {
    use CombatResultKind as Kind;
    use EnemyAction as Move;

    let name = enemy.name.as_str();

    match (player_action, enemy_move) {
        (PlayerAction::Riposte, _) => {
            let critical = rolls.chance(RollContext::Crit, player.crit_chance);
            let damage = if critical {
                Halves::double(player.attack).floor()
            } else {
                Halves::one_and_half(player.attack).floor()
            };
            let message = if critical {
                format!("Critical riposte! You run the {name} through for {damage} damage.")
            } else {
                format!("Riposte! You punish the {name} for {damage} damage.")
            };
            let mut outcome =
                ExchangeOutcome::new(Kind::Riposte, Move::StaggerHit, message).to_enemy(damage);
            outcome.critical = critical;
            outcome
        }
        (_, Move::Stagger) => {
            let damage = calculate_damage(
                Halves::one_and_half(player.attack),
                Halves::half(enemy.defense),
            );
            ExchangeOutcome::new(
                Kind::Stagger,
                Move::StaggerHit,
                format!("The {name} is staggered! You hit it for {damage} damage."),
            )
            .to_enemy(damage)
        }
        (PlayerAction::Attack, Move::Attack) => {
            let to_player = Halves::half(enemy.attack).floor();
            let to_enemy = Halves::half(player.attack).floor();
            ExchangeOutcome::new(
                Kind::Clash,
                Move::Damage,
                format!("Clash! You trade blows with the {name}: {to_enemy} dealt, {to_player} taken."),
            )
            .to_player(to_player)
            .to_enemy(to_enemy)
        }
        (PlayerAction::Attack, Move::Block) => {
            let damage = calculate_damage(
                Halves::whole(player.attack),
                Halves::whole(enemy.defense),
            );
            let animation = if damage > 0 { Move::Damage } else { Move::Block };
            ExchangeOutcome::new(
                Kind::Block,
                animation,
                format!("The {name} raises its guard. Your strike deals {damage} damage."),
            )
            .to_enemy(damage)
        }
        (PlayerAction::Attack, _) => {
            let damage = player.attack;
            ExchangeOutcome::new(
                Kind::Crit,
                Move::Damage,
                format!("You catch the {name} off guard for {damage} damage!"),
            )
            .to_enemy(damage)
        }
        (PlayerAction::Block, Move::Attack) => {
            let damage = calculate_damage(
                Halves::half(enemy.attack),
                Halves::whole(player.defense),
            );
            if damage == 0 {
                ExchangeOutcome::new(
                    Kind::PerfectBlock,
                    Move::Attack,
                    format!("Perfect block! The {name}'s blow glances off your guard."),
                )
            } else {
                ExchangeOutcome::new(
                    Kind::Blocked,
                    Move::Attack,
                    format!("You block the {name}, but still take {damage} damage."),
                )
                .to_player(damage)
            }
        }
        (PlayerAction::Block, other) => ExchangeOutcome::new(
            Kind::Hesitate,
            other,
            format!("You and the {name} circle each other warily."),
        ),
        (PlayerAction::Parry, Move::Attack) => {
            if rolls.chance(RollContext::Parry, player.parry_chance) {
                let mut outcome = ExchangeOutcome::new(
                    Kind::Parry,
                    Move::Stagger,
                    format!("Parried! The {name} reels off balance. Riposte!"),
                );
                outcome.parried = true;
                outcome
            } else {
                let damage = calculate_damage(
                    Halves::whole(enemy.attack),
                    Halves::half(player.defense),
                );
                ExchangeOutcome::new(
                    Kind::HeavyHit,
                    Move::Attack,
                    format!("Your parry fails! The {name} hits you hard for {damage} damage."),
                )
                .to_player(damage)
            }
        }
        (PlayerAction::Parry, other) => ExchangeOutcome::new(
            Kind::Whiff,
            other,
            "You parry at nothing. There was no attack to turn aside.".to_owned(),
        ),
    }
}
