//! Match loop tick
//!
//! Called once per frame by the presentation layer. Each call advances the
//! swing timer and the ball exactly once, counts down the pending delivery,
//! and resolves a round when the ball gets past the bat. Hits are resolved
//! elsewhere, synchronously inside `MatchState::submit_swing`.

use super::ball::FlightStatus;
use super::state::{MatchEvent, MatchPhase, MatchState, Outcome};

/// Advance the match by one simulation tick
pub fn tick(state: &mut MatchState) {
    if state.phase == MatchPhase::Idle {
        return;
    }
    state.time_ticks += 1;

    state.swing.advance();

    // Pending delivery countdown: the single scheduled task. It only
    // exists while no ball is in the air, so releasing here can never
    // overlap an existing flight.
    if let Some(remaining) = state.pending_delivery {
        if remaining > 1 {
            state.pending_delivery = Some(remaining - 1);
        } else {
            state.pending_delivery = None;
            let delivery = state.bowler.decide_delivery(&mut state.rng);
            state.ball.bowl(delivery.kind, delivery.speed, delivery.target_x);
            state.phase = MatchPhase::InFlight;
            state.push_event(MatchEvent::DeliveryStarted {
                kind: delivery.kind,
                speed: delivery.speed,
            });
            // Flight starts integrating on the next tick
            return;
        }
    }

    if state.ball.advance(&mut state.rng) == FlightStatus::Passed {
        let kind = state.ball.kind;
        state.push_event(MatchEvent::BallMissed { kind });
        state.resolve_round(kind, Outcome::Miss, 0);
    }
}
