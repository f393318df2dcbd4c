//! Flappy Gap - a single-screen gap-flying arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, obstacle stream, collisions, game state)
//! - `tuning`: Data-driven game balance
//! - `platform`: Frame clock shared by the browser and native drivers
//! - `renderer`: Scene building and Canvas 2D painting
//! - `audio`: Event-driven sound effects

pub mod audio;
pub mod platform;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use tuning::{Tuning, TuningError};

/// Game configuration constants
pub mod consts {
    /// Nominal frame duration the per-tick constants are calibrated against (60 Hz)
    pub const REFERENCE_FRAME_MS: f32 = 1000.0 / 60.0;
    /// Upper bound on a single physics step, avoids blow-ups after a stall
    pub const MAX_FRAME_DELTA_MS: f32 = 50.0;

    /// Playfield dimensions
    pub const PLAYFIELD_WIDTH: f32 = 400.0;
    pub const PLAYFIELD_HEIGHT: f32 = 600.0;
    pub const GROUND_HEIGHT: f32 = 50.0;

    /// Entity defaults - fixed horizontal position, circular collision proxy
    pub const ENTITY_X: f32 = 60.0;
    pub const ENTITY_SIZE: f32 = 25.0;
    /// Collision radius as a fraction of the visual half-size
    pub const COLLISION_FORGIVENESS: f32 = 0.8;

    /// Per-reference-frame acceleration (pixels/frame²)
    pub const GRAVITY: f32 = 0.4;
    /// Velocity set by a jump (negative is up)
    pub const JUMP_IMPULSE: f32 = -7.0;

    /// Obstacle defaults
    pub const OBSTACLE_WIDTH: f32 = 50.0;
    pub const GAP_HEIGHT: f32 = 100.0;
    pub const OBSTACLE_SPACING: f32 = 150.0;
    pub const OBSTACLE_SPEED: f32 = 2.0;
    /// Minimum distance between a gap and the top edge or the ground
    pub const GAP_MARGIN: f32 = 50.0;
}

/// Clamp a raw frame delta (ms) to `[0, max_ms]`, treating NaN/inf as zero
#[inline]
pub fn clamp_delta_ms(delta_ms: f32, max_ms: f32) -> f32 {
    if delta_ms.is_finite() {
        delta_ms.clamp(0.0, max_ms.max(0.0))
    } else {
        0.0
    }
}
