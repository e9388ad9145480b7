//! Collision detection and response for axis-aligned boxes
//!
//! The ball is a square, paddles are rectangles. A paddle hit replaces the
//! ball velocity outright: the bounce angle ("spin") depends only on where
//! the ball struck the paddle, so the speed after any bounce is exact.

use glam::Vec2;

use super::state::{Ball, Paddle};
use crate::consts::MAX_BOUNCE_ANGLE;

/// Half-open overlap test between the ball square and a paddle rectangle
#[inline]
pub fn overlaps(ball: &Ball, paddle: &Paddle) -> bool {
    ball.pos.x < paddle.pos.x + paddle.width
        && ball.pos.x + ball.size > paddle.pos.x
        && ball.pos.y < paddle.pos.y + paddle.height
        && ball.pos.y + ball.size > paddle.pos.y
}

/// Offset of the ball center from the paddle center, normalized by the
/// paddle half-height.
///
/// Nominally in [-1, 1], but deliberately unclamped: a ball overlapping the
/// paddle's corner can land slightly outside that range.
#[inline]
pub fn collide_point(ball: &Ball, paddle: &Paddle) -> f32 {
    let half = paddle.height / 2.0;
    (ball.center_y() - paddle.center_y()) / half
}

/// Outgoing velocity for a hit at `collide_point`
///
/// `direction` is +1 to send the ball right, -1 to send it left.
#[inline]
pub fn spin_velocity(collide_point: f32, speed: f32, direction: f32) -> Vec2 {
    let angle = MAX_BOUNCE_ANGLE * collide_point;
    Vec2::new(direction * speed * angle.cos(), speed * angle.sin())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::MatchConfig;
    use crate::sim::state::Color;
    use proptest::prelude::*;

    fn ball_at(x: f32, y: f32) -> Ball {
        let mut ball = Ball::new(&MatchConfig::default());
        ball.pos = Vec2::new(x, y);
        ball
    }

    fn paddle_at(x: f32, y: f32) -> Paddle {
        let mut paddle = Paddle::new(x, &MatchConfig::default(), Color(0));
        paddle.pos.y = y;
        paddle
    }

    #[test]
    fn test_overlap_inside() {
        let paddle = paddle_at(0.0, 110.0);
        assert!(overlaps(&ball_at(5.0, 120.0), &paddle));
    }

    #[test]
    fn test_overlap_touching_edges_is_miss() {
        let paddle = paddle_at(0.0, 110.0);
        // Ball's left edge exactly at the paddle's right edge
        assert!(!overlaps(&ball_at(12.0, 120.0), &paddle));
        // Ball's bottom edge exactly at the paddle's top edge
        assert!(!overlaps(&ball_at(5.0, 96.0), &paddle));
        // Ball's top edge exactly at the paddle's bottom edge
        assert!(!overlaps(&ball_at(5.0, 190.0), &paddle));
    }

    #[test]
    fn test_overlap_one_unit_in() {
        let paddle = paddle_at(0.0, 110.0);
        assert!(overlaps(&ball_at(11.0, 120.0), &paddle));
        assert!(overlaps(&ball_at(5.0, 97.0), &paddle));
    }

    #[test]
    fn test_collide_point_center_and_edges() {
        let paddle = paddle_at(0.0, 110.0);
        // Ball center at paddle center (150)
        assert!(collide_point(&ball_at(0.0, 143.0), &paddle).abs() < 1e-6);
        // Ball center at paddle bottom (190)
        assert!((collide_point(&ball_at(0.0, 183.0), &paddle) - 1.0).abs() < 1e-6);
        // Ball center above paddle top: unclamped
        assert!(collide_point(&ball_at(0.0, 100.0), &paddle) < -1.0);
    }

    #[test]
    fn test_spin_straight_hit() {
        let vel = spin_velocity(0.0, 6.0, 1.0);
        assert!((vel.x - 6.0).abs() < 1e-6);
        assert!(vel.y.abs() < 1e-6);

        let vel = spin_velocity(0.0, 6.0, -1.0);
        assert!((vel.x + 6.0).abs() < 1e-6);
    }

    #[test]
    fn test_spin_edge_hit_is_45_degrees() {
        let vel = spin_velocity(1.0, 6.0, -1.0);
        assert!((vel.x.abs() - vel.y).abs() < 1e-5);
        assert!(vel.x < 0.0);
        assert!(vel.y > 0.0);
    }

    proptest! {
        #[test]
        fn prop_spin_preserves_speed(cp in -1.0f32..=1.0, left in any::<bool>()) {
            let direction = if left { 1.0 } else { -1.0 };
            let vel = spin_velocity(cp, 6.0, direction);
            prop_assert!((vel.length() - 6.0).abs() < 1e-4);
            prop_assert_eq!(vel.x.signum(), direction);
        }

        #[test]
        fn prop_overlapping_collide_point_is_bounded(
            x in -20.0f32..20.0,
            y in 80.0f32..200.0,
        ) {
            // Overlap bounds the offset by half the paddle plus half the ball
            let ball = ball_at(x, y);
            let paddle = paddle_at(0.0, 110.0);
            if overlaps(&ball, &paddle) {
                let limit = 1.0 + ball.size / paddle.height;
                prop_assert!(collide_point(&ball, &paddle).abs() < limit + 1e-5);
            }
        }
    }
}
