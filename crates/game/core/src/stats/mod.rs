//! Stat calculator.
//!
//! Aggregate combat stats are derived purely from what is equipped:
//!
//! ```text
//! attack       = base_attack  + weapon.attack
//! defense      = base_defense + armor.defense
//! parry_chance = base_parry_chance + weapon.parry_bonus + armor.parry_bonus   (≤ 100)
//! crit_chance  = weapon.crit_chance                                           (≤ 100)
//! ```
//!
//! Any command that changes equipment calls [`refresh_stats`] before it
//! returns, so `GameState::attack`/`defense` are never stale.

use crate::config::GameConfig;
use crate::env::{ItemOracle, ItemStats};
use crate::state::{EquippedItems, GameState, ItemId};

/// Player stats used by combat resolution.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatStats {
    pub attack: u32,
    pub defense: u32,
    /// Percent chance that a parry against an attack lands.
    pub parry_chance: u32,
    /// Percent chance that a riposte lands as a critical.
    pub crit_chance: u32,
}

fn bonus_of(item: Option<&ItemId>, items: &dyn ItemOracle) -> ItemStats {
    let Some(id) = item else {
        return ItemStats::default();
    };
    match items.definition(id) {
        Some(definition) => definition.stats,
        None => {
            debug_assert!(false, "equipped item {id} missing from catalog");
            ItemStats::default()
        }
    }
}

/// Derives aggregate stats from equipped items.
pub fn compute_stats(
    equipped: &EquippedItems,
    items: &dyn ItemOracle,
    config: &GameConfig,
) -> CombatStats {
    let weapon = bonus_of(equipped.weapon.as_ref(), items);
    let armor = bonus_of(equipped.armor.as_ref(), items);

    CombatStats {
        attack: config.base_attack + weapon.attack,
        defense: config.base_defense + armor.defense,
        parry_chance: (config.base_parry_chance + weapon.parry_bonus + armor.parry_bonus)
            .min(100),
        crit_chance: weapon.crit_chance.min(100),
    }
}

/// Recomputes `attack`/`defense` on the state from its equipment.
pub fn refresh_stats(state: &mut GameState, items: &dyn ItemOracle, config: &GameConfig) {
    let stats = compute_stats(&state.equipped, items, config);
    state.attack = stats.attack;
    state.defense = stats.defense;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{ItemCatalog, ItemDefinition, ItemKind};

    fn catalog() -> ItemCatalog {
        ItemCatalog::new([
            ItemDefinition::new("sword", "Sword", ItemKind::Weapon)
                .with_stats(ItemStats::attack(10).with_parry_bonus(5).with_crit_chance(25)),
            ItemDefinition::new("mail", "Chain Mail", ItemKind::Armor)
                .with_stats(ItemStats::defense(4).with_parry_bonus(10)),
        ])
    }

    #[test]
    fn unequipped_uses_base_stats() {
        let stats = compute_stats(&EquippedItems::empty(), &catalog(), &GameConfig::default());
        assert_eq!(stats.attack, 5);
        assert_eq!(stats.defense, 0);
        assert_eq!(stats.parry_chance, 20);
        assert_eq!(stats.crit_chance, 0);
    }

    #[test]
    fn equipment_adds_bonuses() {
        let equipped = EquippedItems {
            weapon: Some(ItemId::from("sword")),
            armor: Some(ItemId::from("mail")),
        };
        let stats = compute_stats(&equipped, &catalog(), &GameConfig::default());
        assert_eq!(stats.attack, 15);
        assert_eq!(stats.defense, 4);
        assert_eq!(stats.parry_chance, 35);
        assert_eq!(stats.crit_chance, 25);
    }
}
