//! Adaptive bowler AI
//!
//! Tracks how the batter fares against each delivery kind and targets the
//! weakest one - a plain epsilon-greedy policy: exploit the lowest hit
//! rate most of the time, throw a random kind the rest to keep gathering
//! data. Difficulty ratchets up on a fixed cadence and never comes down.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::state::{DELIVERY_KINDS, DeliveryKind, Outcome};
use crate::consts::*;

/// Batter performance against one delivery kind
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryStats {
    pub faces: u32,
    pub hits: u32,
}

impl DeliveryStats {
    /// Hit rate, once enough deliveries have been faced to mean anything
    pub fn hit_rate(&self) -> Option<f32> {
        (self.faces > MIN_SAMPLE_FACES).then(|| self.hits as f32 / self.faces as f32)
    }
}

/// Parameters for the next delivery
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Delivery {
    pub kind: DeliveryKind,
    pub speed: f32,
    pub target_x: f32,
}

/// The opponent model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BowlerBrain {
    /// Per-kind stats, indexed in DELIVERY_KINDS order
    stats: [DeliveryStats; DELIVERY_KINDS.len()],
    /// Scalar difficulty; monotonically non-decreasing
    difficulty: f32,
    /// Chronological (kind, outcome) log, append-only within a session
    history: Vec<(DeliveryKind, Outcome)>,
}

impl BowlerBrain {
    pub fn new() -> Self {
        Self {
            stats: Default::default(),
            difficulty: 1.0,
            history: Vec::new(),
        }
    }

    /// Record how a round ended. Every DIFFICULTY_CADENCE-th logged
    /// outcome bumps the difficulty by a fixed step.
    pub fn record_outcome(&mut self, kind: DeliveryKind, outcome: Outcome) {
        let stats = &mut self.stats[kind.index()];
        stats.faces += 1;
        if outcome == Outcome::Hit {
            stats.hits += 1;
        }

        self.history.push((kind, outcome));
        if self.history.len() % DIFFICULTY_CADENCE == 0 {
            self.difficulty += DIFFICULTY_STEP;
            log::info!("Bowler difficulty up to {:.1}", self.difficulty);
        }
    }

    /// The kind the batter handles worst, if any kind has enough samples.
    /// Pure over the current stats snapshot.
    pub fn weakness(&self) -> Option<DeliveryKind> {
        let mut weakest = None;
        let mut min_rate = 1.0;
        for kind in DELIVERY_KINDS {
            if let Some(rate) = self.stats[kind.index()].hit_rate()
                && rate < min_rate
            {
                min_rate = rate;
                weakest = Some(kind);
            }
        }
        weakest
    }

    /// Pick the next delivery. Reads the stats but never mutates them;
    /// all randomness comes from the injected source.
    pub fn decide_delivery(&self, rng: &mut impl Rng) -> Delivery {
        let weakness = self.weakness().unwrap_or_default();

        let kind = if rng.random::<f32>() < EXPLORATION_CHANCE {
            DELIVERY_KINDS[rng.random_range(0..DELIVERY_KINDS.len())]
        } else {
            weakness
        };

        let base_speed = BASE_SPEED + self.difficulty * SPEED_PER_DIFFICULTY;
        let speed = base_speed + rng.random_range(0.0..SPEED_JITTER);

        // Swing deliveries aim wide of the stumps; everything else at them
        let target_x = if kind == DeliveryKind::Swing {
            rng.random_range(-WIDE_AIM_SPREAD..WIDE_AIM_SPREAD)
        } else {
            0.0
        };

        log::info!(
            "Bowler: weakness is {}, bowling {}",
            weakness.as_str(),
            kind.as_str()
        );

        Delivery {
            kind,
            speed,
            target_x,
        }
    }

    pub fn stats(&self, kind: DeliveryKind) -> DeliveryStats {
        self.stats[kind.index()]
    }

    pub fn difficulty(&self) -> f32 {
        self.difficulty
    }

    pub fn history(&self) -> &[(DeliveryKind, Outcome)] {
        &self.history
    }
}

impl Default for BowlerBrain {
    fn default() -> Self {
        Self::new()
    }
}
