//! Game state and core simulation types
//!
//! Everything a match needs lives in one owned `GameState`.

use std::fmt;

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::settings::MatchConfig;

/// A 24-bit RGB color (0xRRGGBB)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color(pub u32);

impl Color {
    /// Random 24-bit color. Pure white is never drawn.
    pub fn random(rng: &mut impl Rng) -> Self {
        Self(rng.random_range(0..0xFF_FFFF))
    }

    /// CSS hex form, e.g. `#f7ca18`
    pub fn to_css(self) -> String {
        format!("#{:06x}", self.0 & 0xFF_FFFF)
    }
}

/// Which paddle a point, hit or win belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    /// Human paddle on the left edge
    Player,
    /// Computer paddle on the right edge
    Ai,
}

impl Side {
    /// Horizontal direction the ball leaves this paddle in
    #[inline]
    pub fn bounce_direction(self) -> f32 {
        match self {
            Side::Player => 1.0,
            Side::Ai => -1.0,
        }
    }

    /// Display label used when announcing the winner
    pub fn label(self) -> &'static str {
        match self {
            Side::Player => "Player",
            Side::Ai => "AI",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Lifecycle of a match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchPhase {
    InProgress,
    /// Terminal: nothing advances after this
    MatchOver { winner: Side },
}

/// Things that happened during a tick, for the host to react to
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    WallBounce,
    PaddleHit { side: Side, collide_point: f32 },
    Scored { side: Side, score: u32 },
    BallReset,
    MatchOver { winner: Side },
}

/// A paddle. `pos` is the top-left corner; x never changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    pub color: Color,
    pub score: u32,
}

impl Paddle {
    pub fn new(x: f32, config: &MatchConfig, color: Color) -> Self {
        Self {
            pos: Vec2::new(x, config.surface_height / 2.0 - config.paddle_height / 2.0),
            width: config.paddle_width,
            height: config.paddle_height,
            color,
            score: 0,
        }
    }

    /// Vertical center
    #[inline]
    pub fn center_y(&self) -> f32 {
        self.pos.y + self.height / 2.0
    }

    /// Keep the paddle fully on the surface
    pub fn clamp_to_surface(&mut self, config: &MatchConfig) {
        self.pos.y = self.pos.y.clamp(0.0, config.max_paddle_y());
    }
}

/// The ball. `pos` is the top-left corner of its bounding square.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
    /// Speed magnitude after any paddle bounce
    pub speed: f32,
    pub color: Color,
}

impl Ball {
    pub fn new(config: &MatchConfig) -> Self {
        Self {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            size: config.ball_size,
            speed: config.ball_speed,
            color: config.ball_color,
        }
    }

    /// Vertical center
    #[inline]
    pub fn center_y(&self) -> f32 {
        self.pos.y + self.size / 2.0
    }

    /// Top-left position that centers the ball on the surface
    pub fn center_pos(&self, surface_width: f32, surface_height: f32) -> Vec2 {
        Vec2::new(
            surface_width / 2.0 - self.size / 2.0,
            surface_height / 2.0 - self.size / 2.0,
        )
    }
}

/// Complete match state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed the RNG was created from
    pub seed: u64,
    pub config: MatchConfig,
    pub player: Paddle,
    pub ai: Paddle,
    pub ball: Ball,
    pub phase: MatchPhase,
    /// Completed simulation ticks
    pub time_ticks: u64,
    /// Events from the most recent tick
    pub events: Vec<GameEvent>,
    pub(crate) rng: Pcg32,
}

impl GameState {
    /// Create a new match with the ball already served
    pub fn new(config: MatchConfig, seed: u64) -> Self {
        let player = Paddle::new(0.0, &config, config.player_color);
        let ai = Paddle::new(
            config.surface_width - config.paddle_width,
            &config,
            config.ai_color,
        );
        let ball = Ball::new(&config);

        let mut state = Self {
            seed,
            config,
            player,
            ai,
            ball,
            phase: MatchPhase::InProgress,
            time_ticks: 0,
            events: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
        };
        state.reset_ball();
        state
    }

    /// Recenter the ball and give it a random diagonal direction
    pub fn reset_ball(&mut self) {
        let (w, h) = (self.config.surface_width, self.config.surface_height);
        self.ball.pos = self.ball.center_pos(w, h);

        let sx = if self.rng.random_bool(0.5) { 1.0 } else { -1.0 };
        let sy = if self.rng.random_bool(0.5) { 1.0 } else { -1.0 };
        self.ball.vel = Vec2::new(sx * self.ball.speed, sy * self.config.ball_reset_vy);
    }

    /// Move the player paddle so its center sits at `center_y`, clamped
    pub fn set_player_y(&mut self, center_y: f32) {
        self.player.pos.y = center_y - self.player.height / 2.0;
        self.player.clamp_to_surface(&self.config);
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        match side {
            Side::Player => &self.player,
            Side::Ai => &self.ai,
        }
    }

    pub fn paddle_mut(&mut self, side: Side) -> &mut Paddle {
        match side {
            Side::Player => &mut self.player,
            Side::Ai => &mut self.ai,
        }
    }

    pub fn is_over(&self) -> bool {
        matches!(self.phase, MatchPhase::MatchOver { .. })
    }

    pub fn winner(&self) -> Option<Side> {
        match self.phase {
            MatchPhase::MatchOver { winner } => Some(winner),
            MatchPhase::InProgress => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_serves_from_center() {
        let state = GameState::new(MatchConfig::default(), 7);
        assert_eq!(state.ball.pos, Vec2::new(393.0, 193.0));
        assert_eq!(state.ball.vel.x.abs(), 6.0);
        assert_eq!(state.ball.vel.y.abs(), 4.0);
        assert_eq!(state.player.pos, Vec2::new(0.0, 160.0));
        assert_eq!(state.ai.pos, Vec2::new(788.0, 160.0));
        assert_eq!(state.phase, MatchPhase::InProgress);
    }

    #[test]
    fn test_reset_directions_vary_with_seed() {
        let mut seen = std::collections::HashSet::new();
        let mut state = GameState::new(MatchConfig::default(), 42);
        for _ in 0..64 {
            state.reset_ball();
            seen.insert((state.ball.vel.x > 0.0, state.ball.vel.y > 0.0));
        }
        assert_eq!(seen.len(), 4);
    }

    #[test]
    fn test_set_player_y_clamps() {
        let mut state = GameState::new(MatchConfig::default(), 1);

        state.set_player_y(200.0);
        assert_eq!(state.player.pos.y, 160.0);

        state.set_player_y(5.0);
        assert_eq!(state.player.pos.y, 0.0);

        state.set_player_y(1000.0);
        assert_eq!(state.player.pos.y, 320.0);
    }

    #[test]
    fn test_color_css() {
        assert_eq!(Color(0xF7CA18).to_css(), "#f7ca18");
        assert_eq!(Color(0x0000ff).to_css(), "#0000ff");
    }

    #[test]
    fn test_random_color_stays_below_white() {
        let mut rng = Pcg32::seed_from_u64(3);
        for _ in 0..1000 {
            let color = Color::random(&mut rng);
            assert!(color.0 < 0xFF_FFFF);
        }
    }

    #[test]
    fn test_clamp_uses_config_bound() {
        let config = MatchConfig::for_surface(800.0, 100.0);
        let mut paddle = Paddle::new(0.0, &config, Color(0));
        paddle.pos.y = 95.0;
        paddle.clamp_to_surface(&config);
        assert_eq!(paddle.pos.y, config.max_paddle_y());
        assert_eq!(paddle.pos.y, 20.0);
    }

    #[test]
    fn test_side_labels() {
        assert_eq!(Side::Ai.to_string(), "AI");
        assert_eq!(Side::Player.label(), "Player");
        assert_eq!(Side::Player.bounce_direction(), 1.0);
        assert_eq!(Side::Ai.bounce_direction(), -1.0);
    }
}
