//! RNG oracle for deterministic random number generation.
//!
//! Every random draw in the engine (enemy move, parry, riposte crit) goes
//! through [`RngOracle`] with a seed derived from the game seed, the command
//! nonce and a per-draw context. Given the same seed, a game replays exactly.

use std::collections::VecDeque;
use std::sync::Mutex;

/// RNG oracle for deterministic random number generation.
///
/// Implementations must be deterministic and produce the same values
/// given the same seed.
pub trait RngOracle: Send + Sync {
    /// Generate a random u32 value from a seed.
    fn next_u32(&self, seed: u64) -> u32;

    /// Roll a percentile in `0..100`.
    ///
    /// A chance of `c` percent succeeds when the roll is below `c`.
    fn roll_percent(&self, seed: u64) -> u32 {
        self.next_u32(seed) % 100
    }

    /// Pick an index in `0..len` (returns 0 when `len` is 0).
    fn pick(&self, seed: u64, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        self.next_u32(seed) as usize % len
    }
}

/// PCG random number generator (Permuted Congruential Generator).
///
/// PCG-XSH-RR variant: 32-bit output from 64-bit state, one multiply plus a
/// xorshift and a rotate per draw.
#[derive(Clone, Copy, Debug, Default)]
pub struct PcgRng;

impl PcgRng {
    /// PCG multiplier constant.
    const MULTIPLIER: u64 = 6364136223846793005;

    /// PCG increment constant.
    const INCREMENT: u64 = 1442695040888963407;

    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    #[inline]
    fn pcg_output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl RngOracle for PcgRng {
    fn next_u32(&self, seed: u64) -> u32 {
        let state = Self::pcg_step(seed);
        Self::pcg_output(state)
    }
}

/// Replays a fixed sequence of raw values, ignoring seeds.
///
/// Used by tests and debug tooling to force specific outcomes (a parry that
/// lands, an enemy that always blocks). Once the script runs out the
/// fallback value is returned.
#[derive(Debug, Default)]
pub struct ScriptedRng {
    values: Mutex<VecDeque<u32>>,
    fallback: u32,
}

impl ScriptedRng {
    pub fn new(values: impl IntoIterator<Item = u32>) -> Self {
        Self {
            values: Mutex::new(values.into_iter().collect()),
            fallback: 0,
        }
    }

    /// Always returns `value`.
    pub fn constant(value: u32) -> Self {
        Self {
            values: Mutex::new(VecDeque::new()),
            fallback: value,
        }
    }

    pub fn with_fallback(mut self, fallback: u32) -> Self {
        self.fallback = fallback;
        self
    }

    /// Appends more values to the script.
    pub fn push(&self, value: u32) {
        if let Ok(mut values) = self.values.lock() {
            values.push_back(value);
        }
    }

    /// Number of scripted values not yet consumed.
    pub fn remaining(&self) -> usize {
        self.values.lock().map(|values| values.len()).unwrap_or(0)
    }
}

impl RngOracle for ScriptedRng {
    fn next_u32(&self, _seed: u64) -> u32 {
        self.values
            .lock()
            .ok()
            .and_then(|mut values| values.pop_front())
            .unwrap_or(self.fallback)
    }
}

/// Compute deterministic seed from game state components.
///
/// # Arguments
///
/// * `game_seed` - Base seed set at game start (for replay/determinism)
/// * `nonce` - Command sequence number (increments each applied command)
/// * `context` - Distinguishes independent draws within the same command
pub fn compute_seed(game_seed: u64, nonce: u64, context: u32) -> u64 {
    // SplitMix64 / FxHash style mixing
    let mut hash = game_seed;
    hash ^= nonce.wrapping_mul(0x9e3779b97f4a7c15);
    hash ^= (context as u64).wrapping_mul(0x85ebca6b);

    // Final avalanche step
    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;

    hash
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pcg_is_deterministic() {
        let rng = PcgRng;
        let seed = compute_seed(42, 7, 1);
        assert_eq!(rng.next_u32(seed), rng.next_u32(seed));
        assert!(rng.roll_percent(seed) < 100);
    }

    #[test]
    fn contexts_produce_distinct_seeds() {
        assert_ne!(compute_seed(42, 7, 0), compute_seed(42, 7, 1));
        assert_ne!(compute_seed(42, 7, 0), compute_seed(42, 8, 0));
    }

    #[test]
    fn scripted_rng_replays_then_falls_back() {
        let rng = ScriptedRng::new([3, 99]).with_fallback(50);
        assert_eq!(rng.next_u32(0), 3);
        assert_eq!(rng.roll_percent(0), 99);
        assert_eq!(rng.remaining(), 0);
        assert_eq!(rng.next_u32(0), 50);
    }

    #[test]
    fn pick_handles_empty_pools() {
        assert_eq!(PcgRng.pick(1, 0), 0);
        assert_eq!(ScriptedRng::constant(7).pick(1, 5), 2);
    }
}
