//! Match state and shared simulation types
//!
//! The enums here are the single source of truth for delivery kinds and
//! swing directions; ball flight, judge and bowler all key off them.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::ball::BallFlight;
use super::bowler::BowlerBrain;
use super::judge;
use super::swing::Swing;
use crate::consts::*;

/// The bowler's delivery repertoire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DeliveryKind {
    #[default]
    Normal,
    Fast,
    Spin,
    Swing,
}

/// All delivery kinds, in repertoire order
pub const DELIVERY_KINDS: [DeliveryKind; 4] = [
    DeliveryKind::Normal,
    DeliveryKind::Fast,
    DeliveryKind::Spin,
    DeliveryKind::Swing,
];

impl DeliveryKind {
    /// Position in DELIVERY_KINDS, for stats indexing
    pub(crate) fn index(self) -> usize {
        match self {
            DeliveryKind::Normal => 0,
            DeliveryKind::Fast => 1,
            DeliveryKind::Spin => 2,
            DeliveryKind::Swing => 3,
        }
    }

    /// HUD-facing name (`INCOMING: FAST` etc.)
    pub fn as_str(&self) -> &'static str {
        match self {
            DeliveryKind::Normal => "NORMAL",
            DeliveryKind::Fast => "FAST",
            DeliveryKind::Spin => "SPIN",
            DeliveryKind::Swing => "SWING",
        }
    }
}

/// Unrecognized delivery kind supplied at the crate boundary
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid delivery kind: {0:?}")]
pub struct InvalidDelivery(pub String);

impl std::str::FromStr for DeliveryKind {
    type Err = InvalidDelivery;

    /// Parse a kind name. Unknown names are rejected rather than defaulted
    /// so a bad external value cannot corrupt the bowler's statistics.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "NORMAL" => Ok(DeliveryKind::Normal),
            "FAST" => Ok(DeliveryKind::Fast),
            "SPIN" => Ok(DeliveryKind::Spin),
            "SWING" => Ok(DeliveryKind::Swing),
            _ => Err(InvalidDelivery(s.to_string())),
        }
    }
}

/// Direction the batter commits to for one swing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SwingDirection {
    Left,
    Right,
    Straight,
}

/// Terminal result of a single flight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Hit,
    Miss,
}

/// Current phase of the match loop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchPhase {
    /// No match running
    Idle,
    /// Delivery countdown in progress, ball not yet released
    AwaitingDelivery,
    /// Ball in the air
    InFlight,
    /// Outcome being applied (transient within a single call)
    Resolved,
}

/// Batter-side score, owned exclusively by the match state machine
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    pub score: u32,
    pub balls_faced: u32,
    /// Consecutive hits; reset on any miss
    pub streak: u32,
    /// True while streak >= FLOW_STREAK_THRESHOLD
    pub flow_state: bool,
}

impl Scoreboard {
    /// Balls faced in cricket overs notation: (completed overs, balls)
    pub fn overs(&self) -> (u32, u32) {
        (self.balls_faced / 6, self.balls_faced % 6)
    }
}

/// Notification emitted for the presentation layer (plain data, no response)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MatchEvent {
    DeliveryStarted {
        kind: DeliveryKind,
        speed: f32,
    },
    BallHit {
        kind: DeliveryKind,
        runs: u32,
    },
    BallMissed {
        kind: DeliveryKind,
    },
    ScoreChanged {
        score: u32,
        balls_faced: u32,
        flow_state: bool,
    },
}

/// Complete match state (deterministic per seed)
#[derive(Debug, Clone)]
pub struct MatchState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Current phase
    pub phase: MatchPhase,
    /// Ticks until the pending delivery releases (the one cancellable
    /// scheduled task; None means nothing scheduled)
    pub pending_delivery: Option<u32>,
    /// The in-flight ball
    pub ball: BallFlight,
    /// The batter's committed swing
    pub swing: Swing,
    /// Opponent model
    pub bowler: BowlerBrain,
    /// Score, streak, flow state
    pub scoreboard: Scoreboard,
    /// Events queued for the presentation layer
    events: Vec<MatchEvent>,
    pub(crate) rng: Pcg32,
}

impl MatchState {
    /// Create a fresh match with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            time_ticks: 0,
            phase: MatchPhase::Idle,
            pending_delivery: None,
            ball: BallFlight::new(),
            swing: Swing::new(),
            bowler: BowlerBrain::new(),
            scoreboard: Scoreboard::default(),
            events: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Start the match: schedules the first delivery
    pub fn start(&mut self) {
        if self.phase != MatchPhase::Idle {
            return;
        }
        log::info!("Match started (seed {})", self.seed);
        self.phase = MatchPhase::AwaitingDelivery;
        self.schedule_next_delivery();
    }

    /// Stop the match: cancels the pending delivery and abandons any flight
    pub fn stop(&mut self) {
        self.pending_delivery = None;
        self.ball.abandon();
        self.swing.reset();
        self.phase = MatchPhase::Idle;
        log::info!("Match stopped");
    }

    /// Player input entry point. Silently ignored when there is no flight
    /// in progress or another swing is still committed.
    ///
    /// The collision check runs synchronously here, at the moment of input,
    /// never on tick boundaries: a hit is only possible during an input.
    pub fn submit_swing(&mut self, direction: SwingDirection) {
        if self.phase != MatchPhase::InFlight || !self.ball.active {
            return;
        }
        if !self.swing.trigger(direction) {
            return;
        }

        if let Some(runs) = judge::judge(&self.ball, direction) {
            let kind = self.ball.kind;
            self.ball.consume();
            self.events.push(MatchEvent::BallHit { kind, runs });
            self.resolve_round(kind, Outcome::Hit, runs);
        }
    }

    /// Drain queued events for the presentation layer
    pub fn drain_events(&mut self) -> Vec<MatchEvent> {
        std::mem::take(&mut self.events)
    }

    pub(crate) fn push_event(&mut self, event: MatchEvent) {
        self.events.push(event);
    }

    /// Schedule the next delivery. The state machine guarantees at most one
    /// countdown exists: scheduling only happens from start() and from
    /// resolve_round(), never while a flight is in progress.
    pub(crate) fn schedule_next_delivery(&mut self) {
        debug_assert!(self.pending_delivery.is_none());
        debug_assert!(!self.ball.active);
        let delay = if self.scoreboard.flow_state {
            FLOW_DELIVERY_DELAY_TICKS
        } else {
            DELIVERY_DELAY_TICKS
        };
        self.pending_delivery = Some(delay);
        self.phase = MatchPhase::AwaitingDelivery;
    }

    /// Apply a round's terminal outcome: score, streak, flow state, bowler
    /// stats, then schedule the next ball.
    pub(crate) fn resolve_round(&mut self, kind: DeliveryKind, outcome: Outcome, runs: u32) {
        self.phase = MatchPhase::Resolved;

        self.scoreboard.balls_faced += 1;
        match outcome {
            Outcome::Hit => {
                self.scoreboard.score += runs;
                self.scoreboard.streak += 1;
            }
            Outcome::Miss => {
                self.scoreboard.streak = 0;
            }
        }
        self.scoreboard.flow_state = self.scoreboard.streak >= FLOW_STREAK_THRESHOLD;

        self.bowler.record_outcome(kind, outcome);

        self.events.push(MatchEvent::ScoreChanged {
            score: self.scoreboard.score,
            balls_faced: self.scoreboard.balls_faced,
            flow_state: self.scoreboard.flow_state,
        });

        log::info!(
            "Ball {} resolved: {:?} {:?} for {} ({} total, streak {})",
            self.scoreboard.balls_faced,
            kind,
            outcome,
            runs,
            self.scoreboard.score,
            self.scoreboard.streak,
        );

        self.schedule_next_delivery();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_delivery_kind_parse() {
        assert_eq!(DeliveryKind::from_str("FAST"), Ok(DeliveryKind::Fast));
        assert_eq!(DeliveryKind::from_str("spin"), Ok(DeliveryKind::Spin));
        assert_eq!(
            DeliveryKind::from_str("doosra"),
            Err(InvalidDelivery("doosra".to_string()))
        );
    }

    #[test]
    fn test_overs_notation() {
        let board = Scoreboard {
            balls_faced: 14,
            ..Default::default()
        };
        assert_eq!(board.overs(), (2, 2));
    }

    #[test]
    fn test_start_schedules_one_delivery() {
        let mut state = MatchState::new(7);
        assert_eq!(state.phase, MatchPhase::Idle);
        assert!(state.pending_delivery.is_none());

        state.start();
        assert_eq!(state.phase, MatchPhase::AwaitingDelivery);
        assert_eq!(state.pending_delivery, Some(DELIVERY_DELAY_TICKS));

        // start() again is a no-op, not a second countdown
        state.start();
        assert_eq!(state.pending_delivery, Some(DELIVERY_DELAY_TICKS));
    }

    #[test]
    fn test_stop_cancels_pending_delivery() {
        let mut state = MatchState::new(7);
        state.start();
        state.stop();
        assert_eq!(state.phase, MatchPhase::Idle);
        assert!(state.pending_delivery.is_none());
        assert!(!state.ball.active);
    }

    #[test]
    fn test_swing_ignored_without_flight() {
        let mut state = MatchState::new(7);
        state.start();
        state.submit_swing(SwingDirection::Left);
        assert!(!state.swing.in_progress());
        assert!(state.drain_events().is_empty());
    }

    #[test]
    fn test_event_payload_round_trip() {
        let event = MatchEvent::BallHit {
            kind: DeliveryKind::Spin,
            runs: 6,
        };
        let json = serde_json::to_string(&event).unwrap();
        let back: MatchEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }
}
