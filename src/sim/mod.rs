//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Frame delta in, clamped before use
//! - Injected, seedable RNG only
//! - Obstacles kept in spawn order
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod game;
pub mod obstacles;
pub mod physics;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use collision::{Evaluation, evaluate, obstacle_hit};
pub use game::Game;
pub use physics::{BoundaryContact, apply_impulse, integrate};
pub use snapshot::{ObstacleView, Snapshot};
pub use state::{CrashCause, Entity, GameEvent, GamePhase, GameState, Obstacle};
pub use tick::{tick, trigger_action};
