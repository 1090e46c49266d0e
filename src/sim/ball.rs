//! Ball flight physics
//!
//! A single delivery in a simplified 3D space: x is lateral offset, y is
//! height above the pitch, z is depth remaining to the bat (counts down to
//! zero). Integration is explicit Euler with one tick per call, in per-tick
//! velocity units. Not a rigid-body simulation; just enough for timing play.

use glam::Vec3;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::state::DeliveryKind;
use crate::consts::*;

/// What advancing the flight by one tick produced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlightStatus {
    /// No ball in the air
    Inactive,
    /// Still approaching
    InFlight,
    /// Crossed the bat plane without being hit; flight is over.
    /// Reported exactly once per delivery.
    Passed,
}

/// The in-flight ball
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BallFlight {
    pub pos: Vec3,
    pub vel: Vec3,
    pub radius: f32,
    pub kind: DeliveryKind,
    pub active: bool,
}

impl BallFlight {
    pub fn new() -> Self {
        Self {
            pos: Vec3::new(0.0, 0.0, PITCH_DEPTH),
            vel: Vec3::ZERO,
            radius: BALL_RADIUS,
            kind: DeliveryKind::Normal,
            active: false,
        }
    }

    /// Release a delivery toward the batter.
    ///
    /// Depth velocity is the given speed (approaching, so negative). The
    /// lateral component is whatever reaches `target_x` under a linear
    /// time-to-arrival estimate; vertical gets a fixed loft from the
    /// release height.
    pub fn bowl(&mut self, kind: DeliveryKind, speed: f32, target_x: f32) {
        *self = Self::new();
        self.kind = kind;
        self.active = true;

        self.vel.z = -speed;

        let time_to_reach = PITCH_DEPTH / speed;
        self.vel.x = (target_x - self.pos.x) / time_to_reach;

        self.pos.y = RELEASE_HEIGHT;
        self.vel.y = LOFT_SPEED;

        log::info!("Bowling: {} at speed {:.1}", kind.as_str(), speed);
    }

    /// Advance the flight by one simulation tick.
    ///
    /// Spin deliveries pick up a bounded random lateral kick on every
    /// ground contact, which is why the random source is threaded in.
    pub fn advance(&mut self, rng: &mut impl Rng) -> FlightStatus {
        if !self.active {
            return FlightStatus::Inactive;
        }

        self.pos += self.vel;
        self.vel.y -= GRAVITY;

        // Ground contact: clamp and reflect, losing energy
        if self.pos.y < 0.0 {
            self.pos.y = 0.0;
            self.vel.y = -self.vel.y * BOUNCE_FACTOR;

            if self.kind == DeliveryKind::Spin {
                self.vel.x += rng.random_range(-SPIN_KICK..SPIN_KICK);
            }
        }

        if self.pos.z <= 0.0 {
            self.active = false;
            return FlightStatus::Passed;
        }

        FlightStatus::InFlight
    }

    /// Deactivate after a successful swing consumed the flight
    pub fn consume(&mut self) {
        self.active = false;
    }

    /// Deactivate without an outcome (match teardown)
    pub fn abandon(&mut self) {
        self.active = false;
    }
}

impl Default for BallFlight {
    fn default() -> Self {
        Self::new()
    }
}
