//! Computer paddle controller
//!
//! Reactive only: no prediction. While the ball approaches, the paddle chases
//! the ball center plus fresh per-frame noise; otherwise it drifts home.

use rand::Rng;

use super::state::GameState;

/// Move the AI paddle one frame toward where it wants to be
pub fn update_ai(state: &mut GameState) {
    let config = &state.config;
    let ai_center = state.ai.center_y();

    let step = if state.ball.vel.x > 0.0 {
        // Ball coming toward the AI. Noise is redrawn every frame.
        let error = if config.ai_error > 0.0 {
            state.rng.random_range(-config.ai_error..config.ai_error)
        } else {
            0.0
        };
        let target = state.ball.center_y() + error;
        approach(ai_center, target, config.ai_dead_zone, config.ai_effective_speed())
    } else {
        // Ball going away, return to center slowly
        let home = config.surface_height / 2.0;
        approach(ai_center, home, config.ai_dead_zone, config.ai_return_speed)
    };

    state.ai.pos.y += step;
    state.ai.clamp_to_surface(&state.config);
}

/// Signed move from `current` toward `target`, zero inside the dead-zone
fn approach(current: f32, target: f32, dead_zone: f32, speed: f32) -> f32 {
    if current < target - dead_zone {
        speed
    } else if current > target + dead_zone {
        -speed
    } else {
        0.0
    }
}
