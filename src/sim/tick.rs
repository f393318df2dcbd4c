//! Per-frame simulation step and input handling
//!
//! Phase gating lives here: NotStarted ignores time, Ended only lets the
//! entity settle onto the ground, and Running runs physics → advance →
//! collision/scoring → retire → spawn.

use rand::Rng;

use super::collision;
use super::obstacles;
use super::physics::{self, BoundaryContact};
use super::state::{CrashCause, GameEvent, GamePhase, GameState};
use crate::tuning::Tuning;

/// Handle the single semantic input (key, click or tap).
///
/// The first input of a run starts it AND jumps. An input while Ended only
/// resets; the entity stays motionless until the next input.
pub fn trigger_action(state: &mut GameState, tuning: &Tuning, events: &mut Vec<GameEvent>) {
    match state.phase {
        GamePhase::NotStarted => {
            state.phase = GamePhase::Running;
            physics::apply_impulse(&mut state.entity, tuning);
            log::info!("Run started");
            events.push(GameEvent::Started);
            events.push(GameEvent::Jumped);
        }
        GamePhase::Running => {
            physics::apply_impulse(&mut state.entity, tuning);
            events.push(GameEvent::Jumped);
        }
        GamePhase::Ended => {
            state.reset(tuning);
            log::info!("Reset, waiting for input");
            events.push(GameEvent::Reset);
        }
    }
}

/// Advance the simulation by `delta_ms` (clamped to the tuning's maximum)
pub fn tick<R: Rng>(
    state: &mut GameState,
    tuning: &Tuning,
    rng: &mut R,
    delta_ms: f32,
    events: &mut Vec<GameEvent>,
) {
    let time_factor = tuning.time_factor(delta_ms);

    match state.phase {
        GamePhase::NotStarted => {}

        GamePhase::Ended => {
            // Cosmetic fall onto the ground; score and obstacles stay frozen
            physics::integrate(&mut state.entity, time_factor, tuning);
        }

        GamePhase::Running => {
            state.time_ticks += 1;

            if physics::integrate(&mut state.entity, time_factor, tuning)
                == BoundaryContact::Ground
            {
                end_run(state, CrashCause::Ground, events);
                return;
            }

            obstacles::advance(&mut state.obstacles, time_factor, tuning.obstacle_speed);

            // Score before retiring: a fast obstacle can clear the entity and
            // the left edge in the same tick
            let result = collision::evaluate(&state.entity, &mut state.obstacles, tuning);
            for _ in 0..result.passed {
                state.score += 1;
                events.push(GameEvent::Scored { score: state.score });
            }

            if result.hit {
                end_run(state, CrashCause::Obstacle, events);
                return;
            }

            if obstacles::retire_expired(&mut state.obstacles, tuning.obstacle_width).is_some() {
                state.retired += 1;
            }
            obstacles::maybe_spawn(&mut state.obstacles, tuning, rng);
        }
    }
}

fn end_run(state: &mut GameState, cause: CrashCause, events: &mut Vec<GameEvent>) {
    state.phase = GamePhase::Ended;
    log::info!(
        "Run ended ({:?}): score {} after {} ticks",
        cause,
        state.score,
        state.time_ticks
    );
    events.push(GameEvent::Crashed { cause });
}
