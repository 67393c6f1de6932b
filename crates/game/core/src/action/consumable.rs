//! Consumable items and the effect interpreter.

use crate::combat::restore_hp;
use crate::env::{ConsumableEffect, GameEnv, ItemKind};
use crate::state::{GameState, ItemId, LogKind};

use super::inventory::definition;
use super::{ActionResult, ActionTransition, InventoryError};

/// Applies a consumable effect to the state, returning the log line for it.
pub fn apply_effect(state: &mut GameState, effect: &ConsumableEffect) -> String {
    match effect {
        ConsumableEffect::Heal { amount } => {
            let before = state.health;
            state.health = restore_hp(state.health, *amount, state.max_health);
            format!("You recover {} health.", state.health - before)
        }
        ConsumableEffect::GrantFlag { flag } => {
            state.story_flags.insert(flag.clone());
            "Something has changed.".to_owned()
        }
        ConsumableEffect::StatBoost { max_health } => {
            state.max_health = state.max_health.saturating_add(*max_health);
            state.health = restore_hp(state.health, *max_health, state.max_health);
            format!("Your maximum health rises by {max_health}.")
        }
    }
}

/// Consumes an inventory item and applies its effect.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UseConsumableAction {
    pub item: ItemId,
}

impl UseConsumableAction {
    pub fn new(item: impl Into<ItemId>) -> Self {
        Self { item: item.into() }
    }
}

impl ActionTransition for UseConsumableAction {
    type Error = InventoryError;
    type Result = ActionResult;

    fn pre_validate(&self, state: &GameState, env: &GameEnv<'_>) -> Result<(), Self::Error> {
        if !state.inventory.contains(&self.item) {
            return Err(InventoryError::NotCarried {
                item: self.item.clone(),
            });
        }
        if definition(env, &self.item)?.kind != ItemKind::Consumable {
            return Err(InventoryError::NotConsumable {
                item: self.item.clone(),
            });
        }
        Ok(())
    }

    fn apply(&self, state: &mut GameState, env: &GameEnv<'_>) -> Result<ActionResult, Self::Error> {
        let definition = definition(env, &self.item)?;
        state.inventory.remove(&self.item);

        state.add_log(format!("You use the {}.", definition.name), LogKind::Info);
        if let Some(effect) = &definition.effect {
            let message = apply_effect(state, effect);
            state.add_log(message, LogKind::Success);
        }

        Ok(ActionResult::ConsumableUsed {
            item: self.item.clone(),
            effect: definition.effect.clone(),
        })
    }

    fn post_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        debug_assert!(state.health <= state.max_health);
        Ok(())
    }
}
