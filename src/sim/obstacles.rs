//! Obstacle spawning, movement and culling

use glam::Vec2;
use rand::Rng;

use super::state::{GameState, Obstacle};
use crate::tuning::Tuning;

/// Ticks between spawns at a given score.
///
/// Starts at `spawn_base_interval` and tightens by one tick per
/// `spawn_score_divisor` points, never below `spawn_min_interval`.
pub fn spawn_interval(tuning: &Tuning, score: u64) -> u64 {
    tuning
        .spawn_base_interval
        .saturating_sub(score / tuning.spawn_score_divisor)
        .max(tuning.spawn_min_interval)
}

/// True if an obstacle is due on this tick
#[inline]
pub fn should_spawn(tuning: &Tuning, tick: u64, score: u64) -> bool {
    tick % spawn_interval(tuning, score) == 0
}

/// Draw a random obstacle height in `[min, min + range)`
pub fn random_height<R: Rng>(rng: &mut R, tuning: &Tuning) -> f32 {
    let extra = rng.random_range(0..tuning.obstacle_height_range.max(1));
    tuning.obstacle_min_height.saturating_add(extra) as f32
}

/// Spawn an obstacle just past the right edge with its bottom on the baseline
pub fn spawn(state: &mut GameState) {
    let height = random_height(&mut state.rng, &state.tuning);
    let id = state.next_entity_id();
    let tuning = &state.tuning;

    let obstacle = Obstacle {
        id,
        pos: Vec2::new(
            tuning.viewport_width + tuning.obstacle_spawn_margin,
            tuning.obstacle_baseline() - height,
        ),
        size: Vec2::new(tuning.obstacle_width, height),
        speed: state.speed,
    };
    log::debug!(
        "Spawned obstacle {} (h={}) at tick {}",
        obstacle.id,
        height,
        state.time_ticks
    );
    state.obstacles.push(obstacle);
}

/// Distance every obstacle moves left this tick.
///
/// Global speed plus a slow creep that grows with the tick count, on top of
/// the milestone ramp.
#[inline]
pub fn advance_step(tuning: &Tuning, speed: f32, tick: u64) -> f32 {
    speed + tick as f32 / tuning.tick_speedup_divisor
}

/// Move obstacles left and drop the ones far enough off-screen.
///
/// Walks back to front so removing an entry never skips the next one.
pub fn advance_and_cull(state: &mut GameState) {
    let step = advance_step(&state.tuning, state.speed, state.time_ticks);
    let cull_x = -state.tuning.obstacle_cull_margin;

    for i in (0..state.obstacles.len()).rev() {
        state.obstacles[i].pos.x -= step;
        if state.obstacles[i].right() < cull_x {
            let culled = state.obstacles.remove(i);
            log::trace!("Culled obstacle {}", culled.id);
        }
    }
}
