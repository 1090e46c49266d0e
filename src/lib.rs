//! Quantum Cricket - an arcade batting duel against an adaptive bowler
//!
//! Core modules:
//! - `sim`: Deterministic simulation (ball flight, swing timing, bowler AI,
//!   match state machine)
//!
//! The crate is presentation-agnostic: it consumes tick calls and swing
//! inputs, and emits plain-data events for a renderer/HUD to consume. No
//! drawing, audio or platform code lives here.

pub mod sim;

pub use sim::{
    BallFlight, BowlerBrain, DeliveryKind, InvalidDelivery, MatchEvent, MatchPhase, MatchState,
    Outcome, Scoreboard, SwingDirection,
};

/// Game configuration constants
pub mod consts {
    /// Simulation ticks per second (driven by the display refresh loop)
    pub const TICKS_PER_SECOND: u32 = 60;

    /// Depth of the release point, in world units (z counts down to the bat)
    pub const PITCH_DEPTH: f32 = 1000.0;
    /// Ball radius
    pub const BALL_RADIUS: f32 = 10.0;
    /// Height of the ball at release
    pub const RELEASE_HEIGHT: f32 = 50.0;
    /// Initial upward loft applied at release (units/tick)
    pub const LOFT_SPEED: f32 = 5.0;
    /// Downward acceleration on the ball (units/tick²)
    pub const GRAVITY: f32 = 0.5;
    /// Energy retained by the vertical velocity on each bounce
    pub const BOUNCE_FACTOR: f32 = 0.7;
    /// Maximum lateral kick a spin delivery picks up on a bounce
    pub const SPIN_KICK: f32 = 5.0;

    /// Depth window in which a swing can connect (0 < z < this)
    pub const HIT_WINDOW_DEPTH: f32 = 150.0;
    /// Ticks a swing stays committed before the bat resets
    pub const SWING_DURATION_TICKS: u32 = 20;

    /// Gap between deliveries
    pub const DELIVERY_DELAY_TICKS: u32 = 2 * TICKS_PER_SECOND;
    /// Longer gap while the batter is in flow state
    pub const FLOW_DELIVERY_DELAY_TICKS: u32 = 3 * TICKS_PER_SECOND;
    /// Consecutive hits needed to enter flow state
    pub const FLOW_STREAK_THRESHOLD: u32 = 3;

    /// Bowler speed at difficulty zero
    pub const BASE_SPEED: f32 = 10.0;
    /// Speed gained per difficulty level
    pub const SPEED_PER_DIFFICULTY: f32 = 1.5;
    /// Random speed jitter added on top of the base (upper bound, exclusive)
    pub const SPEED_JITTER: f32 = 4.0;
    /// Faces required before a delivery kind counts for weakness detection
    pub const MIN_SAMPLE_FACES: u32 = 2;
    /// Chance the bowler explores a random kind instead of the weakness
    pub const EXPLORATION_CHANCE: f32 = 0.3;
    /// Difficulty gained on each cadence boundary
    pub const DIFFICULTY_STEP: f32 = 0.5;
    /// Outcomes between difficulty bumps
    pub const DIFFICULTY_CADENCE: usize = 6;
    /// Half-width of the lateral aim spread for swing deliveries
    pub const WIDE_AIM_SPREAD: f32 = 50.0;
}
