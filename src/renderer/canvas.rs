//! HTML canvas 2D backend

use std::f64::consts::TAU;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::shapes::{Shape, build_scene};
use super::Renderer;
use crate::sim::GameState;

/// Draws scenes onto a canvas' 2D context
pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
}

impl CanvasRenderer {
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self { ctx })
    }

    fn draw(&self, shape: &Shape) -> Result<(), JsValue> {
        let ctx = &self.ctx;
        match shape {
            Shape::Rect { pos, size, color } => {
                ctx.set_fill_style_str(color);
                ctx.fill_rect(pos.x as f64, pos.y as f64, size.x as f64, size.y as f64);
            }
            Shape::Circle {
                center,
                radius,
                color,
            } => {
                ctx.set_fill_style_str(color);
                ctx.begin_path();
                ctx.arc(center.x as f64, center.y as f64, *radius as f64, 0.0, TAU)?;
                ctx.close_path();
                ctx.fill();
            }
            Shape::Line {
                from,
                to,
                width,
                color,
            } => {
                ctx.set_stroke_style_str(color);
                ctx.set_line_width(*width as f64);
                ctx.begin_path();
                ctx.move_to(from.x as f64, from.y as f64);
                ctx.line_to(to.x as f64, to.y as f64);
                ctx.stroke();
            }
            Shape::Text {
                pos,
                text,
                font,
                color,
            } => {
                ctx.set_font(font);
                ctx.set_fill_style_str(color);
                ctx.fill_text(text, pos.x as f64, pos.y as f64)?;
            }
        }
        Ok(())
    }
}

impl Renderer for CanvasRenderer {
    fn render(&mut self, state: &GameState) {
        for shape in build_scene(state) {
            if let Err(e) = self.draw(&shape) {
                log::warn!("Draw error: {:?}", e);
                return;
            }
        }
    }
}
