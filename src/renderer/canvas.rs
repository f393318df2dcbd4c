//! Canvas 2D backend
//!
//! Paints scene shapes onto an `HtmlCanvasElement`, scaling playfield
//! units to the canvas' backing size.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::scene::{Shape, css_color};

pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
    /// Backing pixels per playfield unit
    scale: f64,
}

impl CanvasRenderer {
    pub fn new(canvas: &HtmlCanvasElement, playfield_width: f32) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        let scale = canvas.width() as f64 / playfield_width.max(1.0) as f64;
        Ok(Self { ctx, scale })
    }

    /// Paint shapes back to front
    pub fn paint(&self, shapes: &[Shape]) {
        let ctx = &self.ctx;
        ctx.save();
        // Replaces any previous transform
        ctx.set_transform(self.scale, 0.0, 0.0, self.scale, 0.0, 0.0).ok();

        for shape in shapes {
            match shape {
                Shape::Rect { min, size, color } => {
                    ctx.set_fill_style_str(&css_color(*color));
                    ctx.fill_rect(min.x as f64, min.y as f64, size.x as f64, size.y as f64);
                }
                Shape::Circle {
                    center,
                    radius,
                    color,
                } => {
                    ctx.set_fill_style_str(&css_color(*color));
                    ctx.begin_path();
                    ctx.arc(
                        center.x as f64,
                        center.y as f64,
                        *radius as f64,
                        0.0,
                        std::f64::consts::TAU,
                    )
                    .ok();
                    ctx.fill();
                }
                Shape::Text {
                    pos,
                    text,
                    size_px,
                    align,
                    color,
                } => {
                    ctx.set_fill_style_str(&css_color(*color));
                    ctx.set_font(&format!("{}px Arial", size_px));
                    ctx.set_text_align(align.as_str());
                    ctx.fill_text(text, pos.x as f64, pos.y as f64).ok();
                }
            }
        }

        ctx.restore();
    }
}
