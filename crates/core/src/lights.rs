//! Grid lights-out cycle
//!
//! The locked grid starts lit for 40-50s, then alternates dark (30-40s) and
//! lit (8s). Only presentation reads this; game rules ignore it.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const FIRST_LIT_MS: std::ops::RangeInclusive<u32> = 40_000..=50_000;
const DARK_MS: std::ops::RangeInclusive<u32> = 30_000..=40_000;
const LIT_MS: u32 = 8_000;

#[derive(Debug, Clone)]
pub struct GridLights {
    enabled: bool,
    visible: bool,
    remaining_ms: u32,
    rng: StdRng,
}

impl GridLights {
    pub fn new(enabled: bool, seed: Option<u64>) -> Self {
        let rng = match seed {
            // Keep the light schedule independent of the piece sequence
            Some(seed) => StdRng::seed_from_u64(seed ^ 0x9e37_79b9_7f4a_7c15),
            None => StdRng::from_entropy(),
        };
        let mut lights = Self {
            enabled,
            visible: true,
            remaining_ms: 0,
            rng,
        };
        lights.reset();
        lights
    }

    /// Back to the lit opening stretch
    pub fn reset(&mut self) {
        self.visible = true;
        self.remaining_ms = self.rng.gen_range(FIRST_LIT_MS);
    }

    /// Advance the cycle. Returns the new visibility when it flips.
    pub fn tick(&mut self, elapsed_ms: u32) -> Option<bool> {
        if !self.enabled {
            return None;
        }
        if elapsed_ms < self.remaining_ms {
            self.remaining_ms -= elapsed_ms;
            return None;
        }
        self.visible = !self.visible;
        self.remaining_ms = if self.visible {
            LIT_MS
        } else {
            self.rng.gen_range(DARK_MS)
        };
        Some(self.visible)
    }

    /// Whether the locked grid should be drawn
    pub fn visible(&self) -> bool {
        !self.enabled || self.visible
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn remaining_ms(&self) -> u32 {
        self.remaining_ms
    }
}
