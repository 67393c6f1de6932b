//! Combat session state.

/// What the enemy is doing this round, doubling as its animation state.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::IntoStaticStr,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum EnemyAction {
    #[default]
    Idle,
    Attack,
    Block,
    /// Wind-up shown between rounds before the attack that follows a stagger.
    Telegraph,
    Stagger,
    StaggerHit,
    Damage,
    /// Never stored: a defeat clears the session, so presentation learns of
    /// it from the round report and `Cue::EnemyDefeat`.
    Defeat,
}

/// Player input for one combat round.
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
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum PlayerAction {
    Attack,
    Block,
    Parry,
    Riposte,
}

/// Classification of a resolved exchange.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::IntoStaticStr,
)]
#[strum(serialize_all = "kebab-case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum CombatResultKind {
    /// Full damage into an idle enemy.
    Crit,
    /// Attack into a raised guard.
    Block,
    /// Both sides attacked.
    Clash,
    /// Player blocked and took nothing.
    PerfectBlock,
    /// Player blocked and took reduced damage.
    Blocked,
    /// Nobody committed to anything.
    Hesitate,
    /// Successful parry; enemy staggers next round.
    Parry,
    /// Failed parry against an attack.
    HeavyHit,
    /// Parry against an enemy that did not attack.
    Whiff,
    /// Bonus hit on a staggered enemy.
    Stagger,
    /// Riposte following a successful parry.
    Riposte,
}

/// Summary of the last resolved exchange, kept for the presentation layer.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatResult {
    pub kind: CombatResultKind,
    pub message: String,
}

/// Active combat session against the enemy of the current room.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatState {
    pub in_combat: bool,
    /// 1-based round counter.
    pub round: u32,
    /// True between a submitted action and the matching end of round.
    pub is_processing: bool,
    pub enemy_action: EnemyAction,
    pub player_action: Option<PlayerAction>,
    pub can_riposte: bool,
    pub last_result: Option<CombatResult>,
    /// A parry landed this round; the enemy is staggered in the next one.
    pub stagger_pending: bool,
    /// The move the enemy committed to in the most recently resolved round.
    pub previous_enemy_move: Option<EnemyAction>,
}

impl CombatState {
    pub fn new() -> Self {
        Self {
            in_combat: true,
            round: 1,
            is_processing: false,
            enemy_action: EnemyAction::Idle,
            player_action: None,
            can_riposte: false,
            last_result: None,
            stagger_pending: false,
            previous_enemy_move: None,
        }
    }

    /// Whether the controller accepts `action` right now.
    pub fn accepts(&self, action: PlayerAction) -> bool {
        !self.is_processing && (action != PlayerAction::Riposte || self.can_riposte)
    }
}

impl Default for CombatState {
    fn default() -> Self {
        Self::new()
    }
}
