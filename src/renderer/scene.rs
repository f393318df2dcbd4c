//! Shape generation for a frame
//!
//! Turns a [`Snapshot`] into a flat, back-to-front list of 2D primitives.
//! Painting them is up to the backend (Canvas 2D in the browser).

use glam::Vec2;

use crate::sim::{GamePhase, Snapshot};
use crate::tuning::Tuning;

/// Colors for game elements
pub mod colors {
    pub const SKY: [f32; 4] = [0.44, 0.77, 0.81, 1.0]; // #70c5ce
    pub const GROUND: [f32; 4] = [0.87, 0.85, 0.58, 1.0]; // #ded895
    pub const OBSTACLE: [f32; 4] = [0.0, 0.5, 0.0, 1.0];
    pub const ENTITY: [f32; 4] = [1.0, 1.0, 0.0, 1.0];
    pub const EYE: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
    pub const SCORE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const GAME_OVER: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
}

/// Horizontal anchor for text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
}

impl TextAlign {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
        }
    }
}

/// A 2D primitive in playfield coordinates (y down)
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Rect {
        min: Vec2,
        size: Vec2,
        color: [f32; 4],
    },
    Circle {
        center: Vec2,
        radius: f32,
        color: [f32; 4],
    },
    Text {
        pos: Vec2,
        text: String,
        size_px: f32,
        align: TextAlign,
        color: [f32; 4],
    },
}

/// CSS `rgba(...)` string for a color
pub fn css_color(color: [f32; 4]) -> String {
    let [r, g, b, a] = color;
    format!(
        "rgba({}, {}, {}, {})",
        (r.clamp(0.0, 1.0) * 255.0).round() as u8,
        (g.clamp(0.0, 1.0) * 255.0).round() as u8,
        (b.clamp(0.0, 1.0) * 255.0).round() as u8,
        a.clamp(0.0, 1.0)
    )
}

fn rect(x: f32, y: f32, w: f32, h: f32, color: [f32; 4]) -> Shape {
    Shape::Rect {
        min: Vec2::new(x, y),
        size: Vec2::new(w, h),
        color,
    }
}

fn text(pos: Vec2, text: impl Into<String>, size_px: f32, align: TextAlign, color: [f32; 4]) -> Shape {
    Shape::Text {
        pos,
        text: text.into(),
        size_px,
        align,
        color,
    }
}

/// Build every shape for one frame, back to front
pub fn build_scene(snapshot: &Snapshot, tuning: &Tuning) -> Vec<Shape> {
    let width = tuning.playfield_width;
    let height = tuning.playfield_height;
    let ground = tuning.ground_limit();
    let mut shapes = Vec::with_capacity(8 + snapshot.obstacles.len() * 2);

    shapes.push(rect(0.0, 0.0, width, height, colors::SKY));

    for obstacle in &snapshot.obstacles {
        // Top column
        if obstacle.gap_top > 0.0 {
            shapes.push(rect(
                obstacle.x,
                0.0,
                tuning.obstacle_width,
                obstacle.gap_top,
                colors::OBSTACLE,
            ));
        }
        // Bottom column, down to the ground
        let bottom_top = obstacle.gap_top + tuning.gap_height;
        if ground > bottom_top {
            shapes.push(rect(
                obstacle.x,
                bottom_top,
                tuning.obstacle_width,
                ground - bottom_top,
                colors::OBSTACLE,
            ));
        }
    }

    shapes.push(rect(0.0, ground, width, tuning.ground_height, colors::GROUND));

    let center = Vec2::new(tuning.entity_x, snapshot.entity_y);
    shapes.push(Shape::Circle {
        center,
        radius: tuning.half_size(),
        color: colors::ENTITY,
    });
    shapes.push(Shape::Circle {
        center: center + Vec2::new(5.0, -5.0),
        radius: 2.0,
        color: colors::EYE,
    });

    shapes.push(text(
        Vec2::new(10.0, 30.0),
        format!("Score: {}", snapshot.score),
        24.0,
        TextAlign::Left,
        colors::SCORE,
    ));

    let middle = Vec2::new(width / 2.0, height / 2.0);
    match snapshot.phase {
        GamePhase::NotStarted => {
            shapes.push(text(
                middle + Vec2::new(0.0, -60.0),
                "Press SPACE or tap to fly",
                16.0,
                TextAlign::Center,
                colors::SCORE,
            ));
        }
        GamePhase::Running => {}
        GamePhase::Ended => {
            shapes.push(text(
                middle + Vec2::new(0.0, -20.0),
                "GAME OVER!",
                30.0,
                TextAlign::Center,
                colors::GAME_OVER,
            ));
            shapes.push(text(
                middle + Vec2::new(0.0, 10.0),
                "Press SPACE to Restart",
                16.0,
                TextAlign::Center,
                colors::GAME_OVER,
            ));
        }
    }

    shapes
}
