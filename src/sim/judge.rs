//! Swing judgment
//!
//! Decides whether a swing connects with the ball and what it scores. Runs
//! synchronously at the moment of input against the ball state as of the
//! most recent tick; there is no continuous per-tick collision check.

use super::ball::BallFlight;
use super::state::{DeliveryKind, SwingDirection};
use crate::consts::HIT_WINDOW_DEPTH;

/// Judge a swing against the current flight.
///
/// Connects only while the ball is close but not yet past the bat
/// (0 < depth < the hit window). Returns the runs scored, or None if the
/// timing was off - in which case the flight simply continues.
pub fn judge(ball: &BallFlight, direction: SwingDirection) -> Option<u32> {
    debug_assert!(ball.active);

    if ball.pos.z >= HIT_WINDOW_DEPTH || ball.pos.z <= 0.0 {
        log::debug!(
            "Swing {:?} missed: ball depth {:.1} outside window",
            direction,
            ball.pos.z
        );
        return None;
    }

    Some(runs_for(ball.kind, direction))
}

/// Shot value for a connecting swing. Timing a fast ball straight or
/// reading spin square are the premium shots; everything else scrapes a
/// single.
fn runs_for(kind: DeliveryKind, direction: SwingDirection) -> u32 {
    match (kind, direction) {
        (DeliveryKind::Fast, SwingDirection::Straight) => 4,
        (DeliveryKind::Spin, SwingDirection::Left | SwingDirection::Right) => 6,
        _ => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    fn ball_at_depth(kind: DeliveryKind, z: f32) -> BallFlight {
        let mut ball = BallFlight::new();
        ball.bowl(kind, 12.0, 0.0);
        ball.pos = Vec3::new(0.0, 0.0, z);
        ball
    }

    #[test]
    fn test_fast_straight_scores_boundary() {
        let ball = ball_at_depth(DeliveryKind::Fast, 100.0);
        assert_eq!(judge(&ball, SwingDirection::Straight), Some(4));
    }

    #[test]
    fn test_spin_cross_bat_scores_six() {
        let ball = ball_at_depth(DeliveryKind::Spin, 100.0);
        assert_eq!(judge(&ball, SwingDirection::Left), Some(6));
        assert_eq!(judge(&ball, SwingDirection::Right), Some(6));
    }

    #[test]
    fn test_plain_contact_scores_single() {
        let ball = ball_at_depth(DeliveryKind::Normal, 100.0);
        assert_eq!(judge(&ball, SwingDirection::Right), Some(1));

        // Wrong shot for the delivery still connects for one
        let ball = ball_at_depth(DeliveryKind::Fast, 100.0);
        assert_eq!(judge(&ball, SwingDirection::Left), Some(1));
        let ball = ball_at_depth(DeliveryKind::Spin, 100.0);
        assert_eq!(judge(&ball, SwingDirection::Straight), Some(1));
    }

    #[test]
    fn test_early_swing_does_not_connect() {
        let ball = ball_at_depth(DeliveryKind::Normal, HIT_WINDOW_DEPTH);
        assert_eq!(judge(&ball, SwingDirection::Straight), None);

        let ball = ball_at_depth(DeliveryKind::Normal, 500.0);
        assert_eq!(judge(&ball, SwingDirection::Straight), None);
    }

    #[test]
    fn test_window_edges() {
        // Just inside the near edge connects
        let ball = ball_at_depth(DeliveryKind::Normal, HIT_WINDOW_DEPTH - 0.1);
        assert_eq!(judge(&ball, SwingDirection::Straight), Some(1));

        // Depth zero is already past the bat
        let ball = ball_at_depth(DeliveryKind::Normal, 0.0);
        assert_eq!(judge(&ball, SwingDirection::Straight), None);
    }
}
