//! Frame-stepped simulation module
//!
//! All gameplay logic lives here. This module must stay free of rendering and
//! platform code:
//! - One tick per display frame, no delta-time scaling
//! - Seeded RNG only, so a seed replays a match exactly
//! - Physics (including scoring) always runs before the AI

pub mod ai;
pub mod collision;
pub mod physics;
pub mod scoring;
pub mod state;
pub mod tick;

pub use ai::update_ai;
pub use collision::{collide_point, overlaps, spin_velocity};
pub use physics::{out_of_bounds, resolve_paddle_hit, step_ball};
pub use scoring::{StepFlow, award_point};
pub use state::{Ball, Color, GameEvent, GameState, MatchPhase, Paddle, Side};
pub use tick::{TickOutcome, tick};
