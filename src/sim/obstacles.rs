//! Obstacle stream: advance, retire and spawn obstacle pairs
//!
//! Pure state over an ordered `Vec<Obstacle>` (oldest/leftmost first).
//! Randomness comes from the caller's RNG so runs are reproducible.

use rand::Rng;

use super::state::Obstacle;
use crate::tuning::Tuning;

/// Move every obstacle left by `speed * time_factor`
pub fn advance(obstacles: &mut [Obstacle], time_factor: f32, speed: f32) {
    let dx = speed * time_factor;
    for obstacle in obstacles.iter_mut() {
        obstacle.x -= dx;
    }
}

/// Remove the front obstacle once it is more than one width past the left edge.
///
/// Front-only and at most one per call: spacing keeps more than one from
/// expiring in the same tick at sane speeds.
pub fn retire_expired(obstacles: &mut Vec<Obstacle>, width: f32) -> Option<Obstacle> {
    let expired = obstacles.first().is_some_and(|front| front.x < -width);
    if expired {
        let retired = obstacles.remove(0);
        log::debug!("Retired obstacle (gap_top={:.1})", retired.gap_top);
        Some(retired)
    } else {
        None
    }
}

/// Append a new obstacle at the right edge if the stream is empty or the
/// newest obstacle has travelled past the spacing threshold.
///
/// Returns the spawned obstacle. Skips (returns `None`) when the gap cannot
/// fit the playfield.
pub fn maybe_spawn<R: Rng>(
    obstacles: &mut Vec<Obstacle>,
    tuning: &Tuning,
    rng: &mut R,
) -> Option<Obstacle> {
    let due = match obstacles.last() {
        None => true,
        Some(newest) => newest.x < tuning.playfield_width - tuning.obstacle_spacing,
    };
    if !due {
        return None;
    }

    let (min, max) = tuning.gap_bounds()?;

    let gap_top = rng.random_range(min..=max);
    let obstacle = Obstacle::new(tuning.playfield_width, gap_top);
    obstacles.push(obstacle);
    log::debug!("Spawned obstacle (gap_top={:.1})", gap_top);
    Some(obstacle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_advance_ten_frames() {
        let tuning = Tuning::default();
        let mut obstacles = vec![Obstacle::new(tuning.playfield_width, 120.0)];
        for _ in 0..10 {
            advance(&mut obstacles, 1.0, 2.0);
        }
        assert!((obstacles[0].x - (tuning.playfield_width - 20.0)).abs() < 1e-4);
        assert_eq!(obstacles[0].gap_top, 120.0);
    }

    #[test]
    fn test_spawn_on_empty_stream() {
        let tuning = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(7);
        let mut obstacles = Vec::new();

        let spawned = maybe_spawn(&mut obstacles, &tuning, &mut rng).unwrap();
        assert_eq!(obstacles.len(), 1);
        assert_eq!(spawned.x, tuning.playfield_width);
        assert!(!spawned.passed);
        let (min, max) = tuning.gap_bounds().unwrap();
        assert!(spawned.gap_top >= min && spawned.gap_top <= max);
    }

    #[test]
    fn test_spawn_waits_for_spacing() {
        let tuning = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(7);
        let threshold = tuning.playfield_width - tuning.obstacle_spacing;
        let mut obstacles = vec![Obstacle::new(threshold, 100.0)];

        // Exactly at the threshold is not past it
        assert!(maybe_spawn(&mut obstacles, &tuning, &mut rng).is_none());

        obstacles[0].x = threshold - 0.5;
        assert!(maybe_spawn(&mut obstacles, &tuning, &mut rng).is_some());
        assert_eq!(obstacles.len(), 2);
        assert_eq!(obstacles[1].x, tuning.playfield_width);
    }

    #[test]
    fn test_degenerate_gap_skips_spawn() {
        let tuning = Tuning {
            gap_height: 600.0,
            ..Tuning::default()
        };
        let mut rng = Pcg32::seed_from_u64(1);
        let mut obstacles = Vec::new();
        assert!(maybe_spawn(&mut obstacles, &tuning, &mut rng).is_none());
        assert!(obstacles.is_empty());
    }

    #[test]
    fn test_single_point_gap_range() {
        let base = Tuning::default();
        // max == min: ground_limit - gap - margin == margin
        let tuning = Tuning {
            gap_height: base.ground_limit() - 2.0 * base.gap_margin,
            ..base
        };
        let mut rng = Pcg32::seed_from_u64(3);
        let mut obstacles = Vec::new();
        let spawned = maybe_spawn(&mut obstacles, &tuning, &mut rng).unwrap();
        assert_eq!(spawned.gap_top, tuning.gap_margin);
    }

    #[test]
    fn test_retire_front_only() {
        let width = 50.0;
        let mut obstacles = vec![
            Obstacle::new(-50.5, 100.0),
            Obstacle::new(-60.0, 200.0),
            Obstacle::new(120.0, 300.0),
        ];
        let retired = retire_expired(&mut obstacles, width).unwrap();
        assert_eq!(retired.gap_top, 100.0);
        assert_eq!(obstacles.len(), 2);
        assert_eq!(obstacles[0].gap_top, 200.0);
    }

    #[test]
    fn test_retire_keeps_partially_visible() {
        let mut obstacles = vec![Obstacle::new(-50.0, 100.0)];
        assert!(retire_expired(&mut obstacles, 50.0).is_none());
        assert!(retire_expired(&mut Vec::new(), 50.0).is_none());
        assert_eq!(obstacles.len(), 1);
    }

    #[test]
    fn test_same_seed_same_gaps() {
        let tuning = Tuning::default();
        let gaps = |seed| {
            let mut rng = Pcg32::seed_from_u64(seed);
            let mut obstacles = Vec::new();
            for _ in 0..5 {
                maybe_spawn(&mut obstacles, &tuning, &mut rng);
                advance(&mut obstacles, 1.0, tuning.obstacle_spacing + 1.0);
            }
            obstacles.iter().map(|o| o.gap_top).collect::<Vec<_>>()
        };
        assert_eq!(gaps(42), gaps(42));
        assert_eq!(gaps(42).len(), 5);
    }
}
