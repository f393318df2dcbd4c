//! Game balance constants
//!
//! Supplied once at construction and never mutated by the simulation.
//! Can be overridden from JSON; missing fields fall back to the defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Errors from loading a tuning override
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("tuning io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("tuning parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid tuning field `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Numeric game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Playfield ===
    pub playfield_width: f32,
    pub playfield_height: f32,
    /// Height of the ground strip at the bottom of the playfield
    pub ground_height: f32,

    // === Entity ===
    /// Fixed horizontal position of the entity centre
    pub entity_x: f32,
    /// Visual diameter of the entity
    pub entity_size: f32,
    /// Collision radius as a fraction of the visual half-size
    pub collision_forgiveness: f32,
    /// Downward acceleration per reference frame
    pub gravity: f32,
    /// Velocity applied by a jump (negative is up)
    pub jump_impulse: f32,

    // === Obstacles ===
    pub obstacle_width: f32,
    /// Vertical size of the passable gap
    pub gap_height: f32,
    /// Horizontal distance the newest obstacle travels before the next spawns
    pub obstacle_spacing: f32,
    /// Horizontal speed per reference frame
    pub obstacle_speed: f32,
    /// Minimum clearance between a gap and the top edge or the ground
    pub gap_margin: f32,

    // === Timing ===
    /// Nominal frame duration the per-frame constants are calibrated for
    pub reference_frame_ms: f32,
    /// Largest delta a single tick will simulate
    pub max_frame_delta_ms: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            playfield_width: PLAYFIELD_WIDTH,
            playfield_height: PLAYFIELD_HEIGHT,
            ground_height: GROUND_HEIGHT,

            entity_x: ENTITY_X,
            entity_size: ENTITY_SIZE,
            collision_forgiveness: COLLISION_FORGIVENESS,
            gravity: GRAVITY,
            jump_impulse: JUMP_IMPULSE,

            obstacle_width: OBSTACLE_WIDTH,
            gap_height: GAP_HEIGHT,
            obstacle_spacing: OBSTACLE_SPACING,
            obstacle_speed: OBSTACLE_SPEED,
            gap_margin: GAP_MARGIN,

            reference_frame_ms: REFERENCE_FRAME_MS,
            max_frame_delta_ms: MAX_FRAME_DELTA_MS,
        }
    }
}

impl Tuning {
    /// Parse a JSON override and validate it
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Self = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Read and parse a JSON override from disk
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, TuningError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Reject values the simulation cannot integrate.
    ///
    /// A gap that does not fit the playfield is NOT rejected: the stream
    /// simply never spawns (see [`Tuning::gap_bounds`]).
    pub fn validate(&self) -> Result<(), TuningError> {
        let all = [
            ("playfield_width", self.playfield_width),
            ("playfield_height", self.playfield_height),
            ("ground_height", self.ground_height),
            ("entity_x", self.entity_x),
            ("entity_size", self.entity_size),
            ("collision_forgiveness", self.collision_forgiveness),
            ("gravity", self.gravity),
            ("jump_impulse", self.jump_impulse),
            ("obstacle_width", self.obstacle_width),
            ("gap_height", self.gap_height),
            ("obstacle_spacing", self.obstacle_spacing),
            ("obstacle_speed", self.obstacle_speed),
            ("gap_margin", self.gap_margin),
            ("reference_frame_ms", self.reference_frame_ms),
            ("max_frame_delta_ms", self.max_frame_delta_ms),
        ];
        for (field, value) in all {
            if !value.is_finite() {
                return Err(TuningError::Invalid {
                    field,
                    reason: "must be finite",
                });
            }
        }

        let positive = [
            ("playfield_width", self.playfield_width),
            ("playfield_height", self.playfield_height),
            ("entity_size", self.entity_size),
            ("obstacle_width", self.obstacle_width),
            ("reference_frame_ms", self.reference_frame_ms),
            ("max_frame_delta_ms", self.max_frame_delta_ms),
        ];
        for (field, value) in positive {
            if value <= 0.0 {
                return Err(TuningError::Invalid {
                    field,
                    reason: "must be positive",
                });
            }
        }

        let non_negative = [
            ("ground_height", self.ground_height),
            ("collision_forgiveness", self.collision_forgiveness),
            ("gap_height", self.gap_height),
            ("obstacle_spacing", self.obstacle_spacing),
            ("obstacle_speed", self.obstacle_speed),
            ("gap_margin", self.gap_margin),
        ];
        for (field, value) in non_negative {
            if value < 0.0 {
                return Err(TuningError::Invalid {
                    field,
                    reason: "must not be negative",
                });
            }
        }

        Ok(())
    }

    /// Visual half-size of the entity
    #[inline]
    pub fn half_size(&self) -> f32 {
        self.entity_size / 2.0
    }

    /// Radius used for obstacle collision (smaller than the sprite)
    #[inline]
    pub fn collision_radius(&self) -> f32 {
        self.half_size() * self.collision_forgiveness
    }

    /// Y coordinate of the ground surface
    #[inline]
    pub fn ground_limit(&self) -> f32 {
        self.playfield_height - self.ground_height
    }

    /// Entity position after a reset
    #[inline]
    pub fn start_y(&self) -> f32 {
        self.playfield_height / 2.0
    }

    /// Inclusive range for a new obstacle's gap top, or `None` if the gap
    /// cannot fit between the top edge and the ground
    pub fn gap_bounds(&self) -> Option<(f32, f32)> {
        let min = self.gap_margin;
        let max = self.ground_limit() - self.gap_height - self.gap_margin;
        // Also rejects NaN
        if min.is_finite() && max.is_finite() && max >= min {
            Some((min, max))
        } else {
            None
        }
    }

    /// Convert a (clamped) frame delta into reference frames
    #[inline]
    pub fn time_factor(&self, delta_ms: f32) -> f32 {
        crate::clamp_delta_ms(delta_ms, self.max_frame_delta_ms) / self.reference_frame_ms
    }
}
