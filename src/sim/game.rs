//! Game controller: owns state, tuning and RNG behind the driver interface
//!
//! Hosts call `tick` once per animation frame and `trigger_action` on any
//! key/pointer/touch input, then read `snapshot` and `drain_events`.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::snapshot::Snapshot;
use super::state::{GameEvent, GamePhase, GameState};
use super::tick;
use crate::tuning::Tuning;

/// A single game session
#[derive(Debug, Clone)]
pub struct Game<R: Rng = Pcg32> {
    state: GameState,
    tuning: Tuning,
    rng: R,
    events: Vec<GameEvent>,
}

impl Game<Pcg32> {
    /// Create a session with a seeded PCG stream
    pub fn new(tuning: Tuning, seed: u64) -> Self {
        log::info!("New game with seed {}", seed);
        Self::with_rng(tuning, Pcg32::seed_from_u64(seed))
    }
}

impl<R: Rng> Game<R> {
    /// Create a session drawing gap positions from `rng`
    pub fn with_rng(tuning: Tuning, rng: R) -> Self {
        if tuning.gap_bounds().is_none() {
            log::warn!(
                "Gap of {} does not fit a {} playfield with {} ground; no obstacles will spawn",
                tuning.gap_height,
                tuning.playfield_height,
                tuning.ground_height
            );
        }
        Self {
            state: GameState::new(&tuning),
            tuning,
            rng,
            events: Vec::new(),
        }
    }

    /// Advance by the elapsed frame time in milliseconds
    pub fn tick(&mut self, delta_ms: f32) {
        tick::tick(
            &mut self.state,
            &self.tuning,
            &mut self.rng,
            delta_ms,
            &mut self.events,
        );
    }

    /// The single semantic input: start, jump or restart depending on phase
    pub fn trigger_action(&mut self) {
        tick::trigger_action(&mut self.state, &self.tuning, &mut self.events);
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.state)
    }

    /// Take the events produced since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn score(&self) -> u32 {
        self.state.score
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::REFERENCE_FRAME_MS;
    use crate::sim::state::CrashCause;
    use proptest::prelude::*;

    #[test]
    fn test_one_tick_of_gravity_from_mid_height() {
        let mut game = Game::new(Tuning::default(), 1);
        // Start the run, then cancel the first jump to observe pure gravity
        game.trigger_action();
        game.state.entity.velocity = 0.0;
        let start = game.snapshot().entity_y;

        game.tick(16.67);
        let snapshot = game.snapshot();
        assert!((snapshot.entity_velocity - 0.4).abs() < 1e-3);
        assert!((snapshot.entity_y - start - 0.4).abs() < 1e-3);
    }

    #[test]
    fn test_full_cycle_events() {
        let mut game = Game::new(Tuning::default(), 99);
        game.trigger_action();
        while game.phase() == GamePhase::Running {
            game.tick(REFERENCE_FRAME_MS);
        }
        game.trigger_action();

        let events = game.drain_events();
        assert_eq!(events.first(), Some(&GameEvent::Started));
        assert!(events.contains(&GameEvent::Crashed {
            cause: CrashCause::Ground
        }));
        assert_eq!(events.last(), Some(&GameEvent::Reset));
        assert!(game.drain_events().is_empty());
        assert_eq!(game.phase(), GamePhase::NotStarted);
    }

    #[test]
    fn test_same_seed_same_run() {
        let play = |seed| {
            let mut game = Game::new(Tuning::default(), seed);
            game.trigger_action();
            for frame in 0..600 {
                if frame % 24 == 0 {
                    game.trigger_action();
                }
                game.tick(REFERENCE_FRAME_MS);
            }
            game.snapshot()
        };
        assert_eq!(play(7), play(7));
    }

    /// One step of a random input schedule
    #[derive(Debug, Clone)]
    enum Step {
        Tick(f32),
        Action,
    }

    fn step() -> impl Strategy<Value = Step> {
        prop_oneof![
            4 => (0.0f32..80.0).prop_map(Step::Tick),
            1 => Just(Step::Action),
        ]
    }

    /// Stream tunings whose per-tick travel (capped delta, 3 reference
    /// frames) stays under both the obstacle width and the spacing
    fn stream_tuning() -> impl Strategy<Value = Tuning> {
        (0.5f32..16.0, 60.0f32..300.0).prop_map(|(speed, spacing)| Tuning {
            obstacle_speed: speed,
            obstacle_spacing: spacing,
            ..Tuning::default()
        })
    }

    proptest! {
        #[test]
        fn prop_score_matches_passed_obstacles(
            seed in any::<u64>(),
            tuning in stream_tuning(),
            steps in prop::collection::vec(step(), 1..400),
        ) {
            let mut game = Game::new(tuning.clone(), seed);
            let mut last_score = 0;
            let width = tuning.obstacle_width;
            let spawn_zone = tuning.playfield_width - tuning.obstacle_spacing;

            for step in steps {
                let was_running = game.phase() == GamePhase::Running;
                match step {
                    Step::Tick(ms) => game.tick(ms),
                    Step::Action => game.trigger_action(),
                }

                let state = game.state();
                let half = tuning.half_size();
                prop_assert!(state.entity.y >= half);
                prop_assert!(state.entity.y <= tuning.ground_limit() - half);

                // Obstacle sequence: ordered, nothing far off the left edge,
                // at most one obstacle near the spawn edge
                for pair in state.obstacles.windows(2) {
                    prop_assert!(pair[0].x < pair[1].x);
                }
                for obstacle in &state.obstacles {
                    prop_assert!(obstacle.trailing_edge(width) >= -width);
                }
                let near_spawn = state.obstacles.iter().filter(|o| o.x >= spawn_zone).count();
                prop_assert!(near_spawn <= 1);

                if state.phase == GamePhase::NotStarted {
                    prop_assert_eq!(state.score, 0);
                    last_score = 0;
                    continue;
                }

                let passed = state.obstacles.iter().filter(|o| o.passed).count() as u32;
                prop_assert_eq!(state.score, passed + state.retired);
                if was_running {
                    prop_assert!(state.score >= last_score);
                }
                last_score = state.score;
            }
        }

        #[test]
        fn prop_score_frozen_after_crash(
            seed in any::<u64>(),
            ticks in prop::collection::vec(0.0f32..60.0, 1..100),
        ) {
            let mut game = Game::new(Tuning::default(), seed);
            game.trigger_action();
            while game.phase() == GamePhase::Running {
                game.tick(REFERENCE_FRAME_MS);
            }
            let score = game.score();
            let obstacles = game.state().obstacles.clone();

            for ms in ticks {
                game.tick(ms);
            }
            prop_assert_eq!(game.phase(), GamePhase::Ended);
            prop_assert_eq!(game.score(), score);
            prop_assert_eq!(&game.state().obstacles, &obstacles);
        }
    }
}
