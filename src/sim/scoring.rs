//! Points and the match lifecycle
//!
//! `InProgress -> MatchOver` is the only transition. There is no way back.

use super::state::{GameEvent, GameState, MatchPhase, Side};

/// Whether the rest of the frame should run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepFlow {
    Continue,
    /// The match was decided this frame; skip AI for the rest of it
    MatchOver(Side),
}

/// Give `scorer` a point, then either end the match or re-serve
pub fn award_point(state: &mut GameState, scorer: Side) -> StepFlow {
    let win_score = state.config.win_score;
    let paddle = state.paddle_mut(scorer);
    paddle.score += 1;
    let score = paddle.score;

    state.events.push(GameEvent::Scored {
        side: scorer,
        score,
    });
    log::debug!(
        "{} scores ({} - {})",
        scorer,
        state.player.score,
        state.ai.score
    );

    if score >= win_score {
        end_match(state, scorer);
        return StepFlow::MatchOver(scorer);
    }

    state.reset_ball();
    state.events.push(GameEvent::BallReset);
    StepFlow::Continue
}

/// Enter the terminal phase. The ball stays where it went out.
fn end_match(state: &mut GameState, winner: Side) {
    state.phase = MatchPhase::MatchOver { winner };
    state.events.push(GameEvent::MatchOver { winner });
    log::info!(
        "Match over: {} wins {} - {}",
        winner,
        state.player.score,
        state.ai.score
    );
}
