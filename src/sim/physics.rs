//! Vertical point-mass integration for the entity

use super::state::Entity;
use crate::tuning::Tuning;

/// Which playfield boundary the entity touched this step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundaryContact {
    None,
    /// Clamped at the top edge, velocity zeroed (not terminal)
    Ceiling,
    /// Clamped on the ground, velocity zeroed (terminal while Running)
    Ground,
}

/// Advance the entity by `time_factor` reference frames.
///
/// Semi-implicit Euler: velocity first, then position with the new velocity.
pub fn integrate(entity: &mut Entity, time_factor: f32, tuning: &Tuning) -> BoundaryContact {
    entity.velocity += tuning.gravity * time_factor;
    entity.y += entity.velocity * time_factor;

    let half = tuning.half_size();
    let floor = tuning.ground_limit() - half;

    if entity.y > floor {
        entity.y = floor;
        entity.velocity = 0.0;
        return BoundaryContact::Ground;
    }

    if entity.y < half {
        entity.y = half;
        entity.velocity = 0.0;
        return BoundaryContact::Ceiling;
    }

    BoundaryContact::None
}

/// Jump: overrides the current velocity
#[inline]
pub fn apply_impulse(entity: &mut Entity, tuning: &Tuning) {
    entity.velocity = tuning.jump_impulse;
}
