//! Per-frame simulation tick
//!
//! One tick is physics (including scoring) followed by the AI. Rendering is
//! the host's business and happens after the tick returns.

use super::ai::update_ai;
use super::physics::step_ball;
use super::scoring::StepFlow;
use super::state::{GameState, Side};

/// What a tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Normal frame, match still in progress
    Continue,
    /// The match was decided during this tick
    MatchOver { winner: Side },
    /// The match was already over; nothing moved
    Halted,
}

/// Advance the match by one frame
pub fn tick(state: &mut GameState) -> TickOutcome {
    state.events.clear();

    if state.is_over() {
        return TickOutcome::Halted;
    }

    state.time_ticks += 1;

    // Input may have moved the player paddle between frames
    state.player.clamp_to_surface(&state.config);

    if let StepFlow::MatchOver(winner) = step_ball(state) {
        return TickOutcome::MatchOver { winner };
    }

    update_ai(state);

    TickOutcome::Continue
}
