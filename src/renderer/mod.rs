//! Rendering module
//!
//! Rendering is a read-only view of the simulation. The scene is built once
//! per frame as plain shapes; the canvas backend draws them on the web.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod shapes;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasRenderer;
pub use shapes::{Shape, build_scene};

use crate::sim::GameState;

/// Draws the current state. Must not affect the simulation.
pub trait Renderer {
    fn render(&mut self, state: &GameState);
}

/// Keeps the most recent scene instead of drawing it (headless runs, tests)
#[derive(Debug, Default)]
pub struct SceneRecorder {
    pub frames: u64,
    pub last_scene: Vec<Shape>,
}

impl Renderer for SceneRecorder {
    fn render(&mut self, state: &GameState) {
        self.frames += 1;
        self.last_scene = build_scene(state);
    }
}
