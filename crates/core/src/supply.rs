//! Supply module - upcoming-piece queue and the hold slot
//!
//! The default randomizer draws every kind independently and uniformly, so
//! short runs of the same kind can happen. A shuffled 7-bag is available as
//! an alternative.

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::active::ActivePiece;
use crate::error::ConfigError;
use crate::types::PieceKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Randomizer {
    /// Independent uniform draw over the 7 kinds
    #[default]
    Uniform,
    /// Every kind once per shuffled bag of 7
    Bag7,
}

impl Randomizer {
    pub fn parse(s: &str) -> Result<Self, ConfigError> {
        match s.to_lowercase().as_str() {
            "uniform" => Ok(Randomizer::Uniform),
            "bag7" | "7bag" | "bag" => Ok(Randomizer::Bag7),
            _ => Err(ConfigError::Randomizer(s.to_string())),
        }
    }
}

/// Random source for piece kinds
#[derive(Debug, Clone)]
struct PieceSource {
    randomizer: Randomizer,
    rng: StdRng,
    bag: [PieceKind; 7],
    bag_idx: usize,
}

impl PieceSource {
    fn new(randomizer: Randomizer, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            randomizer,
            rng,
            bag: PieceKind::ALL,
            bag_idx: PieceKind::ALL.len(),
        }
    }

    fn draw(&mut self) -> PieceKind {
        match self.randomizer {
            Randomizer::Uniform => PieceKind::ALL[self.rng.gen_range(0..PieceKind::ALL.len())],
            Randomizer::Bag7 => {
                if self.bag_idx >= self.bag.len() {
                    self.bag = PieceKind::ALL;
                    self.bag.shuffle(&mut self.rng);
                    self.bag_idx = 0;
                }
                let kind = self.bag[self.bag_idx];
                self.bag_idx += 1;
                kind
            }
        }
    }

    /// Drop a partially used bag so a fresh run starts on a full one
    fn restart(&mut self) {
        self.bag_idx = self.bag.len();
    }
}

/// Upcoming queue plus the hold slot
#[derive(Debug, Clone)]
pub struct Supply {
    queue: VecDeque<PieceKind>,
    preview_len: usize,
    held: Option<PieceKind>,
    can_hold: bool,
    source: PieceSource,
}

impl Supply {
    /// Create a supply with a filled preview
    pub fn new(preview_len: usize, randomizer: Randomizer, seed: Option<u64>) -> Self {
        let mut supply = Self {
            queue: VecDeque::with_capacity(preview_len),
            preview_len: preview_len.max(1),
            held: None,
            can_hold: true,
            source: PieceSource::new(randomizer, seed),
        };
        supply.refill();
        supply
    }

    fn refill(&mut self) {
        while self.queue.len() < self.preview_len {
            let kind = self.source.draw();
            self.queue.push_back(kind);
        }
    }

    /// Empty the queue and hold slot, then refill the preview with fresh draws
    pub fn reset(&mut self) {
        self.queue.clear();
        self.held = None;
        self.can_hold = true;
        self.source.restart();
        self.refill();
    }

    /// Take the head of the queue as the new active piece.
    ///
    /// One fresh kind is appended to the back and hold is re-armed.
    pub fn spawn(&mut self, fall_interval_ms: u32) -> ActivePiece {
        let kind = match self.queue.pop_front() {
            Some(kind) => kind,
            None => self.source.draw(),
        };
        self.refill();
        self.can_hold = true;
        ActivePiece::spawn(kind, fall_interval_ms)
    }

    /// Park the active piece in the hold slot.
    ///
    /// With an empty slot the replacement comes from the queue; otherwise the
    /// held kind comes back at the spawn origin. Either way hold is disabled
    /// until the next [`Supply::spawn`]. Returns false (and changes nothing)
    /// when hold is spent or there is no active piece.
    pub fn hold(&mut self, active: &mut Option<ActivePiece>, fall_interval_ms: u32) -> bool {
        if !self.can_hold {
            return false;
        }
        let Some(current) = active.take() else {
            return false;
        };

        let replacement = match self.held.replace(current.kind) {
            Some(kind) => ActivePiece::spawn(kind, fall_interval_ms),
            None => self.spawn(fall_interval_ms),
        };
        *active = Some(replacement);
        self.can_hold = false;
        true
    }

    pub fn held(&self) -> Option<PieceKind> {
        self.held
    }

    pub fn can_hold(&self) -> bool {
        self.can_hold
    }

    /// Upcoming kinds, next first
    pub fn preview(&self) -> impl Iterator<Item = PieceKind> + '_ {
        self.queue.iter().copied()
    }

    pub fn peek(&self) -> Option<PieceKind> {
        self.queue.front().copied()
    }

    pub fn preview_len(&self) -> usize {
        self.preview_len
    }
}
