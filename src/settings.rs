//! Match configuration
//!
//! Fixed once a match is constructed. Loaded from LocalStorage on the web
//! and from an optional JSON file on native.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::Color;

/// Every tunable constant of a match
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    // === Surface ===
    pub surface_width: f32,
    pub surface_height: f32,

    // === Entities ===
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub ball_size: f32,
    /// Ball speed magnitude after a paddle bounce, |vx| after a reset
    pub ball_speed: f32,
    /// |vy| after a reset
    pub ball_reset_vy: f32,

    // === Rules ===
    pub win_score: u32,

    // === AI ===
    /// 0.0 = full tracking speed, 1.0 = frozen
    pub ai_difficulty: f32,
    pub ai_error: f32,
    pub ai_dead_zone: f32,
    pub ai_track_speed: f32,
    pub ai_return_speed: f32,

    // === Colors ===
    pub player_color: Color,
    pub ai_color: Color,
    pub ball_color: Color,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            surface_width: SURFACE_WIDTH,
            surface_height: SURFACE_HEIGHT,

            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            ball_size: BALL_SIZE,
            ball_speed: BALL_SPEED,
            ball_reset_vy: BALL_RESET_VY,

            win_score: WIN_SCORE,

            ai_difficulty: AI_DIFFICULTY,
            ai_error: AI_ERROR,
            ai_dead_zone: AI_DEAD_ZONE,
            ai_track_speed: AI_TRACK_SPEED,
            ai_return_speed: AI_RETURN_SPEED,

            player_color: Color(PADDLE_COLOR),
            ai_color: Color(PADDLE_COLOR),
            ball_color: Color(BALL_COLOR),
        }
    }
}

impl MatchConfig {
    /// Default config sized to a drawing surface
    pub fn for_surface(width: f32, height: f32) -> Self {
        Self {
            surface_width: width,
            surface_height: height,
            ..Self::default()
        }
    }

    /// Parse a config; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Highest y a paddle's top edge may take
    #[inline]
    pub fn max_paddle_y(&self) -> f32 {
        (self.surface_height - self.paddle_height).max(0.0)
    }

    /// AI tracking speed after the difficulty handicap
    #[inline]
    pub fn ai_effective_speed(&self) -> f32 {
        self.ai_track_speed * (1.0 - self.ai_difficulty)
    }

    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "rally_pong_config";

    /// Load config from LocalStorage (WASM only), keeping the surface size
    #[cfg(target_arch = "wasm32")]
    pub fn load(surface_width: f32, surface_height: f32) -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(config) => {
                        log::info!("Loaded match config from LocalStorage");
                        return Self {
                            surface_width,
                            surface_height,
                            ..config
                        };
                    }
                    Err(e) => log::warn!("Ignoring invalid stored config: {}", e),
                }
            }
        }

        log::info!("Using default match config");
        Self::for_surface(surface_width, surface_height)
    }

    /// Load config from an optional JSON file (native only)
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load(path: Option<&std::path::Path>) -> Self {
        let Some(path) = path else {
            log::info!("Using default match config");
            return Self::default();
        };

        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(config) => {
                    log::info!("Loaded match config from {}", path.display());
                    config
                }
                Err(e) => {
                    log::warn!("Invalid config {}: {}, using defaults", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Cannot read config {}: {}, using defaults", path.display(), e);
                Self::default()
            }
        }
    }
}
