//! Swing commitment timer
//!
//! One swing at a time: once the batter commits to a direction the bat is
//! busy for a fixed number of ticks and further inputs are rejected. The
//! direction is only readable while the swing is live, so a stale choice
//! can never leak into a later judgment.

use serde::{Deserialize, Serialize};

use super::state::SwingDirection;
use crate::consts::SWING_DURATION_TICKS;

/// The batter's committed swing, if any
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Swing {
    direction: Option<SwingDirection>,
    ticks_remaining: u32,
}

impl Swing {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commit to a swing. Returns false (and changes nothing) if a swing
    /// is already in progress.
    pub fn trigger(&mut self, direction: SwingDirection) -> bool {
        if self.direction.is_some() {
            return false;
        }
        self.direction = Some(direction);
        self.ticks_remaining = SWING_DURATION_TICKS;
        log::debug!("Swinging {:?}", direction);
        true
    }

    /// Count down the commitment; clears the direction on expiry
    pub fn advance(&mut self) {
        if self.direction.is_none() {
            return;
        }
        self.ticks_remaining -= 1;
        if self.ticks_remaining == 0 {
            self.direction = None;
        }
    }

    /// Direction of the live swing, None once it has expired
    pub fn direction(&self) -> Option<SwingDirection> {
        self.direction
    }

    pub fn in_progress(&self) -> bool {
        self.direction.is_some()
    }

    /// Clear any committed swing (match teardown)
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
