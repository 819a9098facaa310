//! Fixed timestep simulation tick
//!
//! Core game loop that advances simulation deterministically. One call to
//! [`update`] is one tick; there is no wall-clock delta anywhere in here.

use super::collision::first_hit;
use super::state::{GamePhase, GameState, Obstacle};
use super::{obstacles, parallax, physics};

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Jump (space/arrow up/click/tap)
    pub jump: bool,
    /// Start a new round with this seed (restart button)
    pub restart: Option<u64>,
}

/// Advance the round by one tick.
///
/// Order: parallax, physics, obstacle advance/cull, collision, spawn,
/// score. Does nothing once the round is over.
pub fn update(state: &mut GameState) {
    if state.phase != GamePhase::Running {
        return;
    }

    state.time_ticks += 1;

    parallax::scroll(&mut state.layers, state.speed, state.tuning.viewport_width);

    physics::integrate(
        &mut state.player,
        state.tuning.gravity,
        state.tuning.ground_line(),
    );

    obstacles::advance_and_cull(state);

    let player_rect = state.player.rect();
    let hit = first_hit(&player_rect, state.obstacles.iter().map(Obstacle::rect));
    if let Some(index) = hit {
        log::debug!("Player hit obstacle {}", state.obstacles[index].id);
        state.game_over();
        return;
    }

    if obstacles::should_spawn(&state.tuning, state.time_ticks, state.score) {
        obstacles::spawn(state);
    }

    update_score(state);
}

/// Score one point every few ticks; ramp speed at each milestone
fn update_score(state: &mut GameState) {
    if state.time_ticks % state.tuning.score_every_ticks != 0 {
        return;
    }

    state.score += 1;
    if state.score % state.tuning.speed_milestone == 0 {
        state.speed += state.tuning.speed_ramp;
        log::info!("Score {}: speed up to {:.1}", state.score, state.speed);
    }
}

/// Apply a jump if the round is running and the player may jump.
/// Returns true if the impulse was applied.
pub fn jump(state: &mut GameState) -> bool {
    if state.phase != GamePhase::Running {
        return false;
    }
    physics::try_jump(&mut state.player, state.tuning.jump_forgiveness_vy)
}

/// Drain one tick of latched input, then advance the simulation
pub fn tick(state: &mut GameState, input: &TickInput) {
    if let Some(seed) = input.restart {
        state.reset(seed);
    }
    if input.jump {
        jump(state);
    }
    update(state);
}

impl GameState {
    /// Advance one tick (no-op when not running)
    pub fn update(&mut self) {
        update(self);
    }

    /// Try to jump (no-op when not running)
    pub fn jump(&mut self) -> bool {
        jump(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::GameEvent;
    use glam::Vec2;
    use proptest::prelude::*;

    /// Run ticks with obstacles removed so the round cannot end
    fn run_clear(state: &mut GameState, ticks: u64) {
        for _ in 0..ticks {
            update(state);
            state.obstacles.clear();
        }
    }

    /// Put an obstacle right on top of the grounded player
    fn place_obstacle_on_player(state: &mut GameState) {
        let id = state.next_entity_id();
        let baseline = state.tuning.obstacle_baseline();
        state.obstacles.push(Obstacle {
            id,
            pos: Vec2::new(state.player.pos.x + 4.0, baseline - 40.0),
            size: Vec2::new(40.0, 40.0),
            speed: state.speed,
        });
    }

    #[test]
    fn test_first_spawn_before_tick_120() {
        let mut state = GameState::new(12345);
        for _ in 0..118 {
            update(&mut state);
        }
        assert!(state.obstacles.is_empty());
        // Score 19 by tick 119 shrinks the interval to 119
        update(&mut state);
        assert_eq!(state.obstacles.len(), 1);
        assert_eq!(state.obstacles[0].pos.x, state.tuning.viewport_width + 60.0);
    }

    #[test]
    fn test_player_rests_on_ground_without_input() {
        let mut state = GameState::new(12345);
        let rest_y = state.tuning.ground_line() - state.player.size.y;
        while state.is_running() && state.time_ticks < 600 {
            update(&mut state);
            assert_eq!(state.player.pos.y, rest_y);
            assert_eq!(state.player.vy, 0.0);
            assert!(state.player.grounded);
        }
    }

    #[test]
    fn test_idle_player_is_eventually_hit() {
        let mut state = GameState::new(12345);
        for _ in 0..600 {
            update(&mut state);
        }
        // First obstacle spawns by tick 120 and reaches x = 128 well before 600
        assert_eq!(state.phase, GamePhase::GameOver);
        assert!(state.time_ticks > 120 && state.time_ticks < 600);
    }

    #[test]
    fn test_score_every_sixth_tick() {
        let mut state = GameState::new(1);
        for tick in 1..=60u64 {
            let before = state.score;
            update(&mut state);
            let expected = if tick % 6 == 0 { before + 1 } else { before };
            assert_eq!(state.score, expected, "tick {}", tick);
        }
        assert_eq!(state.score, 10);
    }

    #[test]
    fn test_score_100_and_speed_ramp_at_tick_600() {
        let mut state = GameState::new(1);
        run_clear(&mut state, 599);
        assert_eq!(state.score, 99);
        assert_eq!(state.speed, 4.0);

        run_clear(&mut state, 1);
        assert_eq!(state.time_ticks, 600);
        assert_eq!(state.score, 100);
        assert!((state.speed - 4.6).abs() < 1e-5);
    }

    #[test]
    fn test_spawn_cadence_tightens_with_score() {
        let mut state = GameState::new(1);
        state.score = 100;
        state.time_ticks = 109;
        update(&mut state);
        // Tick 110 with score 100: interval 110
        assert_eq!(state.obstacles.len(), 1);
    }

    /// Obstacle on the ground whose left edge is `gap` px right of the player
    fn place_obstacle_ahead(state: &mut GameState, gap: f32) {
        let id = state.next_entity_id();
        let baseline = state.tuning.obstacle_baseline();
        let player_right = state.player.pos.x + state.player.size.x;
        state.obstacles.push(Obstacle {
            id,
            pos: Vec2::new(player_right + gap, baseline - 40.0),
            size: Vec2::new(40.0, 40.0),
            speed: state.speed,
        });
    }

    #[test]
    fn test_obstacles_advance_before_collision() {
        let mut state = GameState::new(4);
        let step = obstacles::advance_step(&state.tuning, state.speed, 1);
        place_obstacle_ahead(&mut state, step - 0.5);

        update(&mut state);

        // Clear before the move, overlapping by half a pixel after it
        assert_eq!(state.phase, GamePhase::GameOver);
    }

    #[test]
    fn test_obstacle_short_of_player_after_advance() {
        let mut state = GameState::new(4);
        let step = obstacles::advance_step(&state.tuning, state.speed, 1);
        place_obstacle_ahead(&mut state, step + 0.5);

        update(&mut state);

        assert!(state.is_running());
    }

    #[test]
    fn test_spawn_checked_before_score() {
        let mut state = GameState::new(4);
        // Tick 120 scores the 10th point, which would shrink the interval to 119
        state.score = 9;
        state.time_ticks = 119;

        update(&mut state);

        assert_eq!(state.score, 10);
        assert_eq!(obstacles::spawn_interval(&state.tuning, state.score), 119);
        assert_eq!(state.obstacles.len(), 1);
    }

    #[test]
    fn test_collision_ends_round_and_notifies() {
        let mut state = GameState::new(9);
        state.score = 33;
        place_obstacle_on_player(&mut state);

        update(&mut state);

        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(
            state.drain_events(),
            vec![GameEvent::GameOver { score: 33, ticks: 1 }]
        );
    }

    #[test]
    fn test_collision_skips_spawn_and_score() {
        let mut state = GameState::new(9);
        // Tick 120 would both spawn and score
        state.time_ticks = 119;
        place_obstacle_on_player(&mut state);

        update(&mut state);

        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.obstacles.len(), 1);
        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_update_after_game_over_is_noop() {
        let mut state = GameState::new(9);
        run_clear(&mut state, 200);
        place_obstacle_on_player(&mut state);
        update(&mut state);
        assert_eq!(state.phase, GamePhase::GameOver);
        state.drain_events();

        let frozen = state.clone();
        for _ in 0..50 {
            update(&mut state);
        }
        assert_eq!(state, frozen);
    }

    #[test]
    fn test_jump_ignored_when_game_over() {
        let mut state = GameState::new(9);
        place_obstacle_on_player(&mut state);
        update(&mut state);

        let frozen = state.clone();
        assert!(!state.jump());
        assert_eq!(state, frozen);
    }

    #[test]
    fn test_jump_when_grounded() {
        let mut state = GameState::new(9);
        assert!(state.jump());
        assert_eq!(state.player.vy, state.player.jump_impulse);
        assert!(!state.player.grounded);
    }

    #[test]
    fn test_jump_clears_obstacle() {
        let mut state = GameState::new(9);
        assert!(state.jump());
        // Let the player rise well above the tallest obstacle
        run_clear(&mut state, 12);
        place_obstacle_on_player(&mut state);
        update(&mut state);
        assert!(state.is_running());
    }

    #[test]
    fn test_tick_restart_then_update() {
        let mut state = GameState::new(9);
        place_obstacle_on_player(&mut state);
        update(&mut state);
        assert_eq!(state.phase, GamePhase::GameOver);

        let input = TickInput {
            restart: Some(77),
            ..Default::default()
        };
        tick(&mut state, &input);

        assert!(state.is_running());
        assert_eq!(state.seed, 77);
        assert_eq!(state.time_ticks, 1);
        assert!(state.obstacles.is_empty());
    }

    #[test]
    fn test_tick_applies_jump_before_update() {
        let mut state = GameState::new(9);
        let input = TickInput {
            jump: true,
            ..Default::default()
        };
        tick(&mut state, &input);
        let impulse = state.player.jump_impulse;
        let gravity = state.tuning.gravity;
        assert!((state.player.vy - (impulse + gravity)).abs() < 1e-5);
        assert!(!state.player.grounded);
    }

    #[test]
    fn test_determinism() {
        // Two states with same seed should produce identical results
        let mut state1 = GameState::new(99999);
        let mut state2 = GameState::new(99999);

        for i in 0..2000u64 {
            let input = TickInput {
                jump: i % 37 == 0,
                ..Default::default()
            };
            tick(&mut state1, &input);
            tick(&mut state2, &input);
        }

        assert_eq!(state1, state2);
    }

    proptest! {
        #[test]
        fn prop_speed_and_score_monotonic(
            seed in any::<u64>(),
            jumps in proptest::collection::vec(any::<bool>(), 1..800),
        ) {
            let mut state = GameState::new(seed);
            for jump in jumps {
                let (speed, score) = (state.speed, state.score);
                tick(&mut state, &TickInput { jump, restart: None });
                prop_assert!(state.speed >= speed);
                prop_assert!(state.score >= score);
                prop_assert!(state.score - score <= 1);
                for obstacle in &state.obstacles {
                    prop_assert_eq!(obstacle.size.x, 40.0);
                    prop_assert!((40.0..70.0).contains(&obstacle.size.y));
                }
            }
        }
    }
}
