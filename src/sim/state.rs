//! Game state and core simulation types

use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the first input
    #[default]
    NotStarted,
    /// Active gameplay
    Running,
    /// Run ended by a collision
    Ended,
}

/// What ended the run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CrashCause {
    Ground,
    Obstacle,
}

/// Things that happened during a `tick` or `trigger_action`, for audio/HUD
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// First input of a run
    Started,
    Jumped,
    Scored { score: u32 },
    Crashed { cause: CrashCause },
    /// Restart input while Ended
    Reset,
}

/// The player entity; horizontal position is fixed by tuning
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    /// Vertical centre (y grows downward)
    pub y: f32,
    /// Vertical velocity per reference frame
    pub velocity: f32,
}

impl Entity {
    /// Motionless entity at the tuning's start position
    pub fn at_start(tuning: &Tuning) -> Self {
        Self {
            y: tuning.start_y(),
            velocity: 0.0,
        }
    }
}

/// An obstacle pair (top and bottom segment around a gap)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    /// Left edge
    pub x: f32,
    /// Y of the gap's top edge, fixed at creation
    pub gap_top: f32,
    /// Set once the trailing edge crosses the entity
    pub passed: bool,
}

impl Obstacle {
    pub fn new(x: f32, gap_top: f32) -> Self {
        Self {
            x,
            gap_top,
            passed: false,
        }
    }

    /// Right (trailing) edge
    #[inline]
    pub fn trailing_edge(&self, width: f32) -> f32 {
        self.x + width
    }
}

/// Complete simulation state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub phase: GamePhase,
    pub score: u32,
    pub entity: Entity,
    /// Oldest (leftmost) first
    pub obstacles: Vec<Obstacle>,
    /// Obstacles retired this run
    pub retired: u32,
    /// Ticks spent Running this run
    pub time_ticks: u64,
}

impl GameState {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            phase: GamePhase::NotStarted,
            score: 0,
            entity: Entity::at_start(tuning),
            obstacles: Vec::new(),
            retired: 0,
            time_ticks: 0,
        }
    }

    /// Back to NotStarted with a motionless entity and an empty stream
    pub fn reset(&mut self, tuning: &Tuning) {
        *self = Self::new(tuning);
    }
}
