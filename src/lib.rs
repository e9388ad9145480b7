//! Rally Pong - classic player vs. computer Pong
//!
//! Core modules:
//! - `sim`: Frame-stepped simulation (physics, collisions, AI, scoring)
//! - `scheduler`: Run-gated, cancellable per-frame driver
//! - `game`: Owned game context wiring the simulation to its collaborators
//! - `renderer`: Scene description and canvas backend
//! - `settings`: Match configuration

pub mod game;
pub mod renderer;
pub mod scheduler;
pub mod settings;
pub mod sim;

pub use game::{Game, MatchNotifier, MatchSummary};
pub use renderer::Renderer;
pub use scheduler::{FrameHandle, FrameHost, FrameScheduler, ManualFrameHost};
pub use settings::MatchConfig;

/// Game configuration constants
pub mod consts {
    /// Default drawing surface size
    pub const SURFACE_WIDTH: f32 = 800.0;
    pub const SURFACE_HEIGHT: f32 = 400.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 12.0;
    pub const PADDLE_HEIGHT: f32 = 80.0;

    /// Ball defaults (size is the side of the bounding square)
    pub const BALL_SIZE: f32 = 14.0;
    /// Ball speed per frame, also the post-bounce speed magnitude
    pub const BALL_SPEED: f32 = 6.0;
    /// Vertical speed given to the ball on every reset
    pub const BALL_RESET_VY: f32 = 4.0;

    /// First side to reach this many points wins
    pub const WIN_SCORE: u32 = 5;

    /// Maximum bounce angle off a paddle edge (radians)
    pub const MAX_BOUNCE_ANGLE: f32 = std::f32::consts::FRAC_PI_4;

    /// AI tuning (lower difficulty = dumber)
    pub const AI_DIFFICULTY: f32 = 0.15;
    /// Tracking noise half-range added to the ball center each frame
    pub const AI_ERROR: f32 = 30.0;
    /// No corrective movement within this distance of the target
    pub const AI_DEAD_ZONE: f32 = 10.0;
    /// Base tracking speed, scaled by (1 - difficulty)
    pub const AI_TRACK_SPEED: f32 = 4.0;
    /// Speed of the drift back to center while the ball moves away
    pub const AI_RETURN_SPEED: f32 = 2.0;

    /// Default colors (0xRRGGBB)
    pub const PADDLE_COLOR: u32 = 0xF7CA18;
    pub const BALL_COLOR: u32 = 0x2ECC71;
}
