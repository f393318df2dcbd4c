//! Idle/demo mode - a simple controller that plays the game
//!
//! Works purely from the read-only snapshot, so it drives the game through
//! the same `trigger_action` input a player would use.

use super::snapshot::{ObstacleView, Snapshot};
use super::state::GamePhase;
use crate::tuning::Tuning;

/// Extra clearance kept above the gap's bottom edge before flapping
const SAFETY_MARGIN: f32 = 6.0;

/// The first obstacle the entity has not fully cleared yet
pub fn next_obstacle<'a>(snapshot: &'a Snapshot, tuning: &Tuning) -> Option<&'a ObstacleView> {
    let left_edge = tuning.entity_x - tuning.collision_radius();
    snapshot
        .obstacles
        .iter()
        .find(|o| o.x + tuning.obstacle_width > left_edge)
}

/// Lowest y the entity centre should fall to before jumping
pub fn jump_line(snapshot: &Snapshot, tuning: &Tuning) -> f32 {
    match next_obstacle(snapshot, tuning) {
        Some(obstacle) => {
            obstacle.gap_top + tuning.gap_height - tuning.collision_radius() - SAFETY_MARGIN
        }
        // Nothing ahead: hover around the start height
        None => tuning.start_y(),
    }
}

/// Should the autopilot fire an action this frame?
pub fn wants_jump(snapshot: &Snapshot, tuning: &Tuning) -> bool {
    match snapshot.phase {
        GamePhase::NotStarted => true,
        // Leave restarts to the host
        GamePhase::Ended => false,
        GamePhase::Running => {
            let falling = snapshot.entity_velocity >= 0.0;
            let next_y = snapshot.entity_y + snapshot.entity_velocity;
            falling && next_y >= jump_line(snapshot, tuning)
        }
    }
}
