//! Javi Run - a tiny endless runner
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, obstacles, collisions, round state)
//! - `tuning`: Data-driven game balance
//! - `platform`: Input latch and fixed-step frame clock
//! - `renderer`: Scene building and the Canvas 2D backend
//! - `highscores`: Best rounds of the current session

pub mod highscores;
pub mod platform;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use highscores::HighScores;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (one tick per 60 Hz frame)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 4;
    /// Longest frame delta fed to the accumulator (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Default play field, in canvas pixels
    pub const VIEWPORT_WIDTH: f32 = 800.0;
    pub const VIEWPORT_HEIGHT: f32 = 300.0;
    /// Thickness of the ground band at the bottom of the viewport
    pub const GROUND_BAND: f32 = 24.0;

    /// Player defaults
    pub const PLAYER_X: f32 = 80.0;
    pub const PLAYER_SIZE: f32 = 48.0;
    /// Added to vertical velocity every tick (y grows downward)
    pub const GRAVITY: f32 = 0.6;
    /// Vertical velocity set by a jump (negative = up)
    pub const JUMP_IMPULSE: f32 = -12.0;
    /// A jump is allowed while vy is above this, even when airborne
    pub const JUMP_FORGIVENESS_VY: f32 = -2.0;

    /// Global scroll speed at round start
    pub const BASE_SPEED: f32 = 4.0;
    /// Speed added at every score milestone
    pub const SPEED_RAMP: f32 = 0.6;
    pub const SPEED_MILESTONE: u64 = 100;
    /// Score grows by one every this many ticks
    pub const SCORE_EVERY_TICKS: u64 = 6;
    /// Obstacles creep faster by tick / this
    pub const TICK_SPEEDUP_DIVISOR: f32 = 2000.0;

    /// Spawn cadence: max(min, base - score / divisor)
    pub const SPAWN_BASE_INTERVAL: u64 = 120;
    pub const SPAWN_MIN_INTERVAL: u64 = 60;
    pub const SPAWN_SCORE_DIVISOR: u64 = 10;

    /// Obstacle defaults
    pub const OBSTACLE_WIDTH: f32 = 40.0;
    pub const OBSTACLE_MIN_HEIGHT: u32 = 40;
    /// Heights are drawn from [min, min + range)
    pub const OBSTACLE_HEIGHT_RANGE: u32 = 30;
    /// Obstacle bottoms sit this far above the viewport bottom
    pub const OBSTACLE_BASELINE_OFFSET: f32 = 20.0;
    /// Spawn this far past the right edge
    pub const OBSTACLE_SPAWN_MARGIN: f32 = 60.0;
    /// Cull once the right edge is this far past the left edge
    pub const OBSTACLE_CULL_MARGIN: f32 = 50.0;
}
