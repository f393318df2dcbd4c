//! Read-only view of the simulation for presentation
//!
//! The renderer and HUD only ever see this copy, never `GameState` itself.

use serde::{Deserialize, Serialize};

use super::state::{GamePhase, GameState};

/// Obstacle as drawn: left edge and gap top
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObstacleView {
    pub x: f32,
    pub gap_top: f32,
}

/// Everything the presentation layer may read
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub phase: GamePhase,
    pub score: u32,
    pub entity_y: f32,
    pub entity_velocity: f32,
    /// Oldest (leftmost) first
    pub obstacles: Vec<ObstacleView>,
}

impl Snapshot {
    pub fn capture(state: &GameState) -> Self {
        Self {
            phase: state.phase,
            score: state.score,
            entity_y: state.entity.y,
            entity_velocity: state.entity.velocity,
            obstacles: state
                .obstacles
                .iter()
                .map(|o| ObstacleView {
                    x: o.x,
                    gap_top: o.gap_top,
                })
                .collect(),
        }
    }
}
