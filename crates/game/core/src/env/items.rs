use std::collections::BTreeMap;

use crate::state::{EquipSlot, ItemId};

/// Read-only item catalog.
pub trait ItemOracle: Send + Sync {
    fn definition(&self, id: &ItemId) -> Option<&ItemDefinition>;

    /// Returns all item definitions available in this oracle.
    fn all_definitions(&self) -> Vec<&ItemDefinition>;
}

/// Catalog entry for an item.
///
/// # Design: Base + Kind Pattern
///
/// - `kind` decides which rules apply (equip slot, consumption, unlocking)
/// - `stats` carries the bonuses equipment contributes
/// - `effect` is interpreted by [`crate::action::consumable::apply_effect`]
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemDefinition {
    pub id: ItemId,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
    pub kind: ItemKind,
    #[cfg_attr(feature = "serde", serde(default))]
    pub stats: ItemStats,
    #[cfg_attr(feature = "serde", serde(default))]
    pub effect: Option<ConsumableEffect>,
}

impl ItemDefinition {
    pub fn new(id: impl Into<ItemId>, name: impl Into<String>, kind: ItemKind) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            kind,
            stats: ItemStats::default(),
            effect: None,
        }
    }

    pub fn with_stats(mut self, stats: ItemStats) -> Self {
        self.stats = stats;
        self
    }

    pub fn with_effect(mut self, effect: ConsumableEffect) -> Self {
        self.effect = Some(effect);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Equipment slot this item occupies, if it is equippable.
    pub fn equip_slot(&self) -> Option<EquipSlot> {
        self.kind.equip_slot()
    }
}

/// Item category.
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
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ItemKind {
    Item,
    Weapon,
    Armor,
    Consumable,
    Key,
}

impl ItemKind {
    pub const fn equip_slot(self) -> Option<EquipSlot> {
        match self {
            ItemKind::Weapon => Some(EquipSlot::Weapon),
            ItemKind::Armor => Some(EquipSlot::Armor),
            _ => None,
        }
    }
}

/// Bonuses an equipped item contributes. Chances are whole percents.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ItemStats {
    pub attack: u32,
    pub defense: u32,
    pub parry_bonus: u32,
    pub crit_chance: u32,
}

impl ItemStats {
    pub fn attack(attack: u32) -> Self {
        Self {
            attack,
            ..Self::default()
        }
    }

    pub fn defense(defense: u32) -> Self {
        Self {
            defense,
            ..Self::default()
        }
    }

    pub fn with_parry_bonus(mut self, parry_bonus: u32) -> Self {
        self.parry_bonus = parry_bonus;
        self
    }

    pub fn with_crit_chance(mut self, crit_chance: u32) -> Self {
        self.crit_chance = crit_chance;
        self
    }
}

/// Closed set of consumable effects.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConsumableEffect {
    /// Restore health, clamped to max health.
    Heal { amount: u32 },

    /// Set a story flag.
    GrantFlag { flag: String },

    /// Raise max health and heal by the same amount.
    StatBoost { max_health: u32 },
}

/// In-memory [`ItemOracle`] keyed by item id.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ItemCatalog {
    items: BTreeMap<ItemId, ItemDefinition>,
}

impl ItemCatalog {
    pub fn new(definitions: impl IntoIterator<Item = ItemDefinition>) -> Self {
        Self {
            items: definitions
                .into_iter()
                .map(|definition| (definition.id.clone(), definition))
                .collect(),
        }
    }

    pub fn insert(&mut self, definition: ItemDefinition) {
        self.items.insert(definition.id.clone(), definition);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl ItemOracle for ItemCatalog {
    fn definition(&self, id: &ItemId) -> Option<&ItemDefinition> {
        self.items.get(id)
    }

    fn all_definitions(&self) -> Vec<&ItemDefinition> {
        self.items.values().collect()
    }
}
