use crate::core::constants::{MAX_ROTATIONS, MAX_WEDGES, MIN_ROTATIONS, SPIN_DURATION_MS};
use std::ops::RangeInclusive;
use std::time::Duration;

/// Roulette policy values
#[derive(Clone, Debug, PartialEq)]
pub struct RouletteConfig {
    /// Wheels show at most this many drinks
    pub max_wedges: usize,
    /// Length of one spin animation
    pub spin_duration: Duration,
    /// Full turns per spin, drawn uniformly
    pub rotations: RangeInclusive<u32>,
}

impl Default for RouletteConfig {
    fn default() -> Self {
        Self {
            max_wedges: MAX_WEDGES,
            spin_duration: Duration::from_millis(SPIN_DURATION_MS),
            rotations: MIN_ROTATIONS..=MAX_ROTATIONS,
        }
    }
}

impl RouletteConfig {
    /// Set the wedge limit; zero is treated as one
    pub fn max_wedges(mut self, max_wedges: usize) -> Self {
        self.max_wedges = max_wedges.max(1);
        self
    }

    /// Set the spin duration
    pub fn spin_duration(mut self, duration: Duration) -> Self {
        self.spin_duration = duration;
        self
    }

    /// Set the full-turn range; bounds are reordered and kept at one turn or more
    pub fn rotations(mut self, min: u32, max: u32) -> Self {
        self.rotations = normalize_rotations(min, max);
        self
    }

    /// Full-turn range with the setter's rules applied to the public field
    pub fn rotation_range(&self) -> RangeInclusive<u32> {
        normalize_rotations(*self.rotations.start(), *self.rotations.end())
    }
}

fn normalize_rotations(min: u32, max: u32) -> RangeInclusive<u32> {
    let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
    lo.max(1)..=hi.max(1)
}
