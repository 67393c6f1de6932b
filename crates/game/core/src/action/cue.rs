//! Named presentation cues.
//!
//! Cues are a side channel for sound and animation. The engine derives them
//! from a command's result; nothing in the engine waits for them.

use crate::state::{CombatResultKind, PlayerAction};

use super::{ActionResult, Placement};

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
#[strum(serialize_all = "kebab-case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Cue {
    Footsteps,
    RoomShutter,
    DoorUnlock,
    ItemPickup,
    ItemEquip,
    ItemDrop,
    ItemUse,
    CombatStart,
    CombatAttack,
    CombatBlock,
    CombatParry,
    CombatRiposte,
    CombatClash,
    EnemyTelegraph,
    EnemyHit,
    PlayerHit,
    EnemyDefeat,
    PlayerDefeat,
    /// A command was rejected with a message for the player.
    Rejected,
}

impl Cue {
    pub fn name(self) -> &'static str {
        self.into()
    }
}

/// Cues to dispatch for a successful command, in playback order.
pub fn cues_for(result: &ActionResult) -> Vec<Cue> {
    match result {
        ActionResult::Moved { .. } => vec![Cue::Footsteps, Cue::RoomShutter],
        ActionResult::ItemTaken { placement, .. } => match placement {
            Placement::Equipped(_) => vec![Cue::ItemPickup, Cue::ItemEquip],
            Placement::Inventory(_) => vec![Cue::ItemPickup],
        },
        ActionResult::ItemDropped { .. } => vec![Cue::ItemDrop],
        ActionResult::ItemEquipped { .. } | ActionResult::ItemUnequipped { .. } => {
            vec![Cue::ItemEquip]
        }
        ActionResult::ConsumableUsed { .. } => vec![Cue::ItemUse],
        ActionResult::DoorUnlocked { .. } => vec![Cue::DoorUnlock],
        ActionResult::CombatStarted => vec![Cue::CombatStart],
        ActionResult::CombatRound(report) => {
            let mut cues = Vec::with_capacity(4);
            if report.enemy_intent.telegraphed {
                cues.push(Cue::EnemyTelegraph);
            }
            cues.push(match report.outcome.kind {
                CombatResultKind::Clash => Cue::CombatClash,
                CombatResultKind::Parry => Cue::CombatParry,
                CombatResultKind::Riposte => Cue::CombatRiposte,
                _ => match report.player_action {
                    PlayerAction::Block | PlayerAction::Parry => Cue::CombatBlock,
                    PlayerAction::Attack | PlayerAction::Riposte => Cue::CombatAttack,
                },
            });
            if report.outcome.damage_to_enemy > 0 {
                cues.push(Cue::EnemyHit);
            }
            if report.outcome.damage_to_player > 0 {
                cues.push(Cue::PlayerHit);
            }
            if report.enemy_defeated {
                cues.push(Cue::EnemyDefeat);
            }
            if report.player_fallen {
                cues.push(Cue::PlayerDefeat);
            }
            cues
        }
        ActionResult::RoomRevealed
        | ActionResult::InventoryReordered
        | ActionResult::AlreadyUnlocked { .. }
        | ActionResult::RoundEnded { .. }
        | ActionResult::LogAppended(_)
        | ActionResult::FeedbackCleared
        | ActionResult::UiFlagsChanged(_)
        | ActionResult::Restarted => Vec::new(),
    }
}
