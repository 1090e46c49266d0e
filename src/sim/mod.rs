//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One discrete tick per call from the frame driver
//! - Seeded RNG only
//! - No rendering, audio or platform dependencies

pub mod ball;
pub mod bowler;
pub mod judge;
pub mod state;
pub mod swing;
pub mod tick;

pub use ball::{BallFlight, FlightStatus};
pub use bowler::{BowlerBrain, Delivery, DeliveryStats};
pub use judge::judge;
pub use state::{
    DELIVERY_KINDS, DeliveryKind, InvalidDelivery, MatchEvent, MatchPhase, MatchState, Outcome,
    Scoreboard, SwingDirection,
};
pub use swing::Swing;
pub use tick::tick;
