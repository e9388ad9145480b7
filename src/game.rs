//! Game context
//!
//! Owns the match state, the frame scheduler and the host collaborators.
//! Host events (pointer moves, button clicks, frame callbacks) call straight
//! into the methods here; nothing else touches the state.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::renderer::Renderer;
use crate::scheduler::{FrameHandle, FrameHost, FrameScheduler};
use crate::settings::MatchConfig;
use crate::sim::{Color, GameState, Side, TickOutcome, tick};

/// Mixed into the match seed for the color buttons' RNG
const COLOR_SEED_SALT: u64 = 0x9E37_79B9_7F4A_7C15;

/// Told once per match who won
pub trait MatchNotifier {
    fn match_over(&mut self, winner: Side);
}

/// Final result of a match
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSummary {
    pub winner: Option<String>,
    pub player_score: u32,
    pub ai_score: u32,
    pub frames: u64,
}

/// A match plus everything that drives and displays it
pub struct Game<H, R, N> {
    state: GameState,
    scheduler: FrameScheduler,
    host: H,
    renderer: R,
    notifier: N,
    /// Cosmetic only; never shares a stream with the simulation
    color_rng: Pcg32,
}

impl<H: FrameHost, R: Renderer, N: MatchNotifier> Game<H, R, N> {
    /// Set up a match and draw it once, paused
    pub fn new(config: MatchConfig, seed: u64, host: H, renderer: R, notifier: N) -> Self {
        let mut game = Self {
            state: GameState::new(config, seed),
            scheduler: FrameScheduler::new(),
            host,
            renderer,
            notifier,
            color_rng: Pcg32::seed_from_u64(seed ^ COLOR_SEED_SALT),
        };
        game.renderer.render(&game.state);
        log::info!("Match ready (seed {})", seed);
        game
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn is_running(&self) -> bool {
        self.scheduler.is_running()
    }

    pub fn pending_frame(&self) -> Option<FrameHandle> {
        self.scheduler.pending()
    }

    /// Pointer input: desired vertical center of the player paddle
    pub fn set_player_y(&mut self, center_y: f32) {
        self.state.set_player_y(center_y);
    }

    /// Start the frame loop. No-op while running or after the match ended.
    pub fn start(&mut self) {
        if self.state.is_over() {
            log::debug!("Match is over, not starting");
            return;
        }
        if self.scheduler.start(&mut self.host) {
            log::info!("Game started");
        }
    }

    /// Cancel the frame loop. No-op when already stopped.
    pub fn stop(&mut self) {
        if self.scheduler.is_running() {
            log::info!("Game paused");
        }
        self.scheduler.stop(&mut self.host);
    }

    /// Start/pause button. Returns whether the game is now running.
    pub fn toggle(&mut self) -> bool {
        if self.scheduler.is_running() {
            self.stop();
        } else {
            self.start();
        }
        self.scheduler.is_running()
    }

    /// Text for the start/pause button
    pub fn toggle_label(&self) -> &'static str {
        if self.scheduler.is_running() {
            "Pause Game"
        } else {
            "Resume Game"
        }
    }

    /// Frame callback from the host: tick, render, reschedule
    pub fn on_frame(&mut self, handle: FrameHandle) {
        if !self.scheduler.begin_frame(handle) {
            return;
        }

        let outcome = tick(&mut self.state);
        if let TickOutcome::MatchOver { winner } = outcome {
            self.scheduler.stop(&mut self.host);
            self.renderer.render(&self.state);
            self.notifier.match_over(winner);
            return;
        }

        self.renderer.render(&self.state);
        self.scheduler.schedule_next(&mut self.host);
    }

    /// Color button: give the player paddle a random color
    pub fn randomize_player_color(&mut self) {
        self.state.player.color = Color::random(&mut self.color_rng);
        self.renderer.render(&self.state);
    }

    /// Color button: give the ball a random color
    pub fn randomize_ball_color(&mut self) {
        self.state.ball.color = Color::random(&mut self.color_rng);
        self.renderer.render(&self.state);
    }

    pub fn summary(&self) -> MatchSummary {
        MatchSummary {
            winner: self.state.winner().map(|w| w.label().to_string()),
            player_score: self.state.player.score,
            ai_score: self.state.ai.score,
            frames: self.state.time_ticks,
        }
    }
}
