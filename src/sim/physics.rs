//! Ball physics for one frame
//!
//! Fixed per-frame step: velocities are in surface units per frame and are
//! never scaled by elapsed time.

use super::collision::{collide_point, overlaps, spin_velocity};
use super::scoring::{self, StepFlow};
use super::state::{Ball, GameEvent, GameState, Paddle, Side};

/// Advance the ball one frame: integrate, bounce, then check for a point
pub fn step_ball(state: &mut GameState) -> StepFlow {
    state.ball.pos += state.ball.vel;

    // Top/bottom walls. No reposition, the ball may sit on the edge for a frame.
    let ball = &mut state.ball;
    if ball.pos.y <= 0.0 || ball.pos.y + ball.size >= state.config.surface_height {
        ball.vel.y = -ball.vel.y;
        state.events.push(GameEvent::WallBounce);
    }

    // Both paddles are checked every frame, in this order
    for side in [Side::Player, Side::Ai] {
        let paddle = state.paddle(side);
        if overlaps(&state.ball, paddle) {
            let paddle = paddle.clone();
            let collide_point = resolve_paddle_hit(&mut state.ball, &paddle, side);
            state.events.push(GameEvent::PaddleHit {
                side,
                collide_point,
            });
        }
    }

    match out_of_bounds(&state.ball, state.config.surface_width) {
        Some(scorer) => scoring::award_point(state, scorer),
        None => StepFlow::Continue,
    }
}

/// Bounce the ball off `paddle` without checking for overlap
///
/// Moves the ball flush against the paddle's facing edge and replaces its
/// velocity with the spin velocity. Returns the collide point used.
pub fn resolve_paddle_hit(ball: &mut Ball, paddle: &Paddle, side: Side) -> f32 {
    ball.pos.x = match side {
        Side::Player => paddle.pos.x + paddle.width,
        Side::Ai => paddle.pos.x - ball.size,
    };

    let point = collide_point(ball, paddle);
    ball.vel = spin_velocity(point, ball.speed, side.bounce_direction());
    point
}

/// Which side scores if the ball has left the surface horizontally
pub fn out_of_bounds(ball: &Ball, surface_width: f32) -> Option<Side> {
    if ball.pos.x <= 0.0 {
        Some(Side::Ai)
    } else if ball.pos.x + ball.size >= surface_width {
        Some(Side::Player)
    } else {
        None
    }
}
