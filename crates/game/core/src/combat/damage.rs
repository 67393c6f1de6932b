//! Damage calculation and application.

/// Combat value measured in half points.
///
/// Exchange rules scale attack and defense by 0.5, 1.5 and 2. Keeping values
/// in half units makes every one of those exact, so `floor(a - d)` is a single
/// integer division at the end.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Halves(pub u32);

impl Halves {
    pub const ZERO: Self = Self(0);

    /// `value × 1`
    pub const fn whole(value: u32) -> Self {
        Self(value.saturating_mul(2))
    }

    /// `value × 0.5`
    pub const fn half(value: u32) -> Self {
        Self(value)
    }

    /// `value × 1.5`
    pub const fn one_and_half(value: u32) -> Self {
        Self(value.saturating_mul(3))
    }

    /// `value × 2`
    pub const fn double(value: u32) -> Self {
        Self(value.saturating_mul(4))
    }

    /// Rounds down to whole points.
    pub const fn floor(self) -> u32 {
        self.0 / 2
    }
}

/// `max(0, floor(attack - defense))`.
pub fn calculate_damage(attack: Halves, defense: Halves) -> u32 {
    attack.0.saturating_sub(defense.0) / 2
}

/// Apply damage to current HP, clamped at 0.
pub fn apply_damage(current_hp: u32, damage: u32) -> u32 {
    current_hp.saturating_sub(damage)
}

/// Restore HP, clamped at `max_hp`.
pub fn restore_hp(current_hp: u32, amount: u32, max_hp: u32) -> u32 {
    current_hp.saturating_add(amount).min(max_hp)
}
