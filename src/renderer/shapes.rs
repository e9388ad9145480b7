//! Scene generation for 2D primitives
//!
//! Turns a `GameState` into a flat list of shapes in draw order. Backends
//! only need to know how to fill a rect, fill a circle, stroke a line and
//! print text.

use glam::Vec2;

use crate::sim::{GameState, Paddle};

/// Background fill
pub const BACKGROUND: &str = "#111";
/// Center net stroke (translucent white)
pub const NET_COLOR: &str = "#fff7";
pub const NET_WIDTH: f32 = 4.0;
/// Net dashes: `NET_DASH` long, one every `NET_SPACING`, starting at `NET_START`
pub const NET_START: f32 = 10.0;
pub const NET_DASH: f32 = 16.0;
pub const NET_SPACING: f32 = 32.0;
/// Score text
pub const SCORE_COLOR: &str = "#fff";
pub const SCORE_FONT: &str = "32px Arial";
pub const SCORE_Y: f32 = 40.0;

/// One drawing primitive
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Rect {
        pos: Vec2,
        size: Vec2,
        color: String,
    },
    Circle {
        center: Vec2,
        radius: f32,
        color: String,
    },
    Line {
        from: Vec2,
        to: Vec2,
        width: f32,
        color: String,
    },
    Text {
        pos: Vec2,
        text: String,
        font: &'static str,
        color: String,
    },
}

/// Every shape for one frame, back to front
pub fn build_scene(state: &GameState) -> Vec<Shape> {
    let w = state.config.surface_width;
    let h = state.config.surface_height;

    let mut shapes = Vec::with_capacity(32);

    shapes.push(Shape::Rect {
        pos: Vec2::ZERO,
        size: Vec2::new(w, h),
        color: BACKGROUND.to_string(),
    });

    shapes.extend(net(w, h));

    shapes.push(paddle(&state.player));
    shapes.push(paddle(&state.ai));

    let ball = &state.ball;
    shapes.push(Shape::Circle {
        center: ball.pos + Vec2::splat(ball.size / 2.0),
        radius: ball.size / 2.0,
        color: ball.color.to_css(),
    });

    shapes.push(score(w / 4.0, state.player.score));
    shapes.push(score(3.0 * w / 4.0, state.ai.score));

    shapes
}

/// Dashed vertical divider down the middle
pub fn net(surface_width: f32, surface_height: f32) -> Vec<Shape> {
    let x = surface_width / 2.0;
    let mut dashes = Vec::new();
    let mut y = NET_START;
    while y < surface_height {
        dashes.push(Shape::Line {
            from: Vec2::new(x, y),
            to: Vec2::new(x, y + NET_DASH),
            width: NET_WIDTH,
            color: NET_COLOR.to_string(),
        });
        y += NET_SPACING;
    }
    dashes
}

fn paddle(paddle: &Paddle) -> Shape {
    Shape::Rect {
        pos: paddle.pos,
        size: Vec2::new(paddle.width, paddle.height),
        color: paddle.color.to_css(),
    }
}

fn score(x: f32, score: u32) -> Shape {
    Shape::Text {
        pos: Vec2::new(x, SCORE_Y),
        text: score.to_string(),
        font: SCORE_FONT,
        color: SCORE_COLOR.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::MatchConfig;

    #[test]
    fn test_net_dash_count() {
        // y = 10, 42, ..., 394 on a 400-high surface
        let dashes = net(800.0, 400.0);
        assert_eq!(dashes.len(), 13);
        assert_eq!(
            dashes[0],
            Shape::Line {
                from: Vec2::new(400.0, 10.0),
                to: Vec2::new(400.0, 26.0),
                width: 4.0,
                color: "#fff7".to_string(),
            }
        );
    }

    #[test]
    fn test_scene_order_and_contents() {
        let mut state = GameState::new(MatchConfig::default(), 1);
        state.player.score = 3;
        state.ai.score = 1;

        let scene = build_scene(&state);
        assert_eq!(scene.len(), 1 + 13 + 2 + 1 + 2);

        assert!(matches!(&scene[0], Shape::Rect { color, .. } if color == BACKGROUND));
        assert_eq!(
            scene[14],
            Shape::Rect {
                pos: Vec2::new(0.0, 160.0),
                size: Vec2::new(12.0, 80.0),
                color: "#f7ca18".to_string(),
            }
        );
        assert_eq!(
            scene[16],
            Shape::Circle {
                center: Vec2::new(400.0, 200.0),
                radius: 7.0,
                color: "#2ecc71".to_string(),
            }
        );
        assert!(matches!(&scene[17], Shape::Text { pos, text, .. }
            if *pos == Vec2::new(200.0, 40.0) && text == "3"));
        assert!(matches!(&scene[18], Shape::Text { pos, text, .. }
            if *pos == Vec2::new(600.0, 40.0) && text == "1"));
    }
}
