//! Collision and scoring against the obstacle stream
//!
//! The entity is a circle of `collision_radius` (smaller than the sprite, so
//! grazes feel fair) at a fixed x. Each obstacle is a pair of solid columns
//! spanning `[x, x + width)` with a passable gap
//! `[gap_top, gap_top + gap_height]`.

use super::state::{Entity, Obstacle};
use crate::tuning::Tuning;

/// Result of evaluating one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Evaluation {
    /// The entity touched an obstacle column (terminal)
    pub hit: bool,
    /// Obstacles newly marked passed this tick
    pub passed: u32,
}

/// Does the circle at (`entity_x`, `entity_y`) overlap the obstacle's solid parts?
pub fn obstacle_hit(
    entity_x: f32,
    entity_y: f32,
    radius: f32,
    obstacle: &Obstacle,
    width: f32,
    gap_height: f32,
) -> bool {
    let overlaps_x = entity_x + radius > obstacle.x && entity_x - radius < obstacle.x + width;
    if !overlaps_x {
        return false;
    }

    let above_gap = entity_y - radius < obstacle.gap_top;
    let below_gap = entity_y + radius > obstacle.gap_top + gap_height;
    above_gap || below_gap
}

/// Mark the obstacle passed once its trailing edge is left of `entity_x`.
///
/// Returns true only on the false→true transition.
pub fn mark_passed(obstacle: &mut Obstacle, entity_x: f32, width: f32) -> bool {
    if !obstacle.passed && obstacle.trailing_edge(width) < entity_x {
        obstacle.passed = true;
        true
    } else {
        false
    }
}

/// Check every obstacle in order, scoring passes and stopping at the first hit
pub fn evaluate(entity: &Entity, obstacles: &mut [Obstacle], tuning: &Tuning) -> Evaluation {
    let radius = tuning.collision_radius();
    let mut result = Evaluation::default();

    for obstacle in obstacles.iter_mut() {
        if obstacle_hit(
            tuning.entity_x,
            entity.y,
            radius,
            obstacle,
            tuning.obstacle_width,
            tuning.gap_height,
        ) {
            result.hit = true;
            return result;
        }

        if mark_passed(obstacle, tuning.entity_x, tuning.obstacle_width) {
            result.passed += 1;
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    const X: f32 = 60.0;
    const R: f32 = 16.0;
    const WIDTH: f32 = 70.0;
    const GAP: f32 = 150.0;

    fn pipe() -> Obstacle {
        Obstacle::new(50.0, 100.0)
    }

    #[test]
    fn test_below_gap_hits() {
        assert!(obstacle_hit(X, 260.0, R, &pipe(), WIDTH, GAP));
    }

    #[test]
    fn test_inside_gap_misses() {
        assert!(!obstacle_hit(X, 175.0, R, &pipe(), WIDTH, GAP));
    }

    #[test]
    fn test_above_gap_hits() {
        assert!(obstacle_hit(X, 110.0, R, &pipe(), WIDTH, GAP));
    }

    #[test]
    fn test_no_horizontal_overlap_misses() {
        // Right of the entity: x - r = 44 .. x + r = 76
        let ahead = Obstacle::new(76.0, 100.0);
        assert!(!obstacle_hit(X, 10.0, R, &ahead, WIDTH, GAP));
        // Trailing edge exactly at the entity's left edge
        let behind = Obstacle::new(44.0 - WIDTH, 100.0);
        assert!(!obstacle_hit(X, 10.0, R, &behind, WIDTH, GAP));
    }

    #[test]
    fn test_forgiveness_margin() {
        // Visual half-size 20 would clip the gap edge, the 16 radius does not
        let obstacle = pipe();
        let y = obstacle.gap_top + 18.0;
        assert!(!obstacle_hit(X, y, R, &obstacle, WIDTH, GAP));
        assert!(obstacle_hit(X, y, 20.0, &obstacle, WIDTH, GAP));
    }

    #[test]
    fn test_mark_passed_once() {
        let mut obstacle = Obstacle::new(-20.0, 100.0);
        assert!(mark_passed(&mut obstacle, X, WIDTH));
        assert!(obstacle.passed);
        assert!(!mark_passed(&mut obstacle, X, WIDTH));
    }

    #[test]
    fn test_not_passed_while_overlapping() {
        let mut obstacle = Obstacle::new(0.0, 100.0);
        // Trailing edge 70 is right of the entity centre
        assert!(!mark_passed(&mut obstacle, X, WIDTH));
        assert!(!obstacle.passed);
    }

    #[test]
    fn test_evaluate_scores_and_stops_at_hit() {
        let tuning = Tuning::default();
        let entity = Entity {
            y: 100.0,
            velocity: 0.0,
        };
        let mut obstacles = vec![
            // Already behind the entity
            Obstacle::new(-30.0, 300.0),
            // Overlapping, gap far below the entity
            Obstacle::new(40.0, 300.0),
            // Behind as well, but never reached
            Obstacle::new(-40.0, 300.0),
        ];
        let result = evaluate(&entity, &mut obstacles, &tuning);
        assert!(result.hit);
        assert_eq!(result.passed, 1);
        assert!(obstacles[0].passed);
        assert!(!obstacles[2].passed);
    }

    #[test]
    fn test_evaluate_is_idempotent() {
        let tuning = Tuning::default();
        let entity = Entity {
            y: 300.0,
            velocity: 0.0,
        };
        let mut obstacles = vec![Obstacle::new(-5.0, 250.0)];
        assert_eq!(evaluate(&entity, &mut obstacles, &tuning).passed, 1);
        assert_eq!(evaluate(&entity, &mut obstacles, &tuning).passed, 0);
    }
}
