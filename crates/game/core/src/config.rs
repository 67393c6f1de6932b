/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Number of inventory slots the player carries. Must not exceed
    /// [`GameConfig::MAX_INVENTORY_SLOTS`].
    pub inventory_capacity: usize,

    /// Attack value with no weapon equipped.
    pub base_attack: u32,

    /// Defense value with no armor equipped.
    pub base_defense: u32,

    /// Maximum health at game start.
    pub starting_max_health: u32,

    /// Parry success chance (percent) before equipment bonuses.
    pub base_parry_chance: u32,
}

impl GameConfig {
    // ===== compile-time constants used as type parameters =====
    pub const MAX_INVENTORY_SLOTS: usize = 8;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_INVENTORY_CAPACITY: usize = 4;
    pub const DEFAULT_BASE_ATTACK: u32 = 5;
    pub const DEFAULT_BASE_DEFENSE: u32 = 0;
    pub const DEFAULT_MAX_HEALTH: u32 = 100;
    pub const DEFAULT_PARRY_CHANCE: u32 = 20;

    pub fn new() -> Self {
        Self {
            inventory_capacity: Self::DEFAULT_INVENTORY_CAPACITY,
            base_attack: Self::DEFAULT_BASE_ATTACK,
            base_defense: Self::DEFAULT_BASE_DEFENSE,
            starting_max_health: Self::DEFAULT_MAX_HEALTH,
            base_parry_chance: Self::DEFAULT_PARRY_CHANCE,
        }
    }

    pub fn with_inventory_capacity(mut self, capacity: usize) -> Self {
        self.inventory_capacity = capacity;
        self
    }

    /// Capacity clamped to what the inventory storage can hold.
    pub fn effective_capacity(&self) -> usize {
        self.inventory_capacity.min(Self::MAX_INVENTORY_SLOTS)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
