//! Rendering module
//!
//! `scene` builds backend-agnostic shapes from a snapshot; `canvas` paints
//! them with the browser's Canvas 2D API.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod scene;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasRenderer;
pub use scene::{Shape, TextAlign, build_scene};
