//! Data-driven game balance
//!
//! Every number the simulation uses lives here. Defaults come from
//! [`crate::consts`]; a JSON document may override any subset of fields.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// A background layer definition (speed multiplier + vertical offset)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayerTuning {
    /// Scroll rate relative to global speed / 4
    pub speed: f32,
    /// Fixed vertical offset when drawn
    pub y: f32,
}

/// Game balance and play field parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Play field ===
    pub viewport_width: f32,
    pub viewport_height: f32,
    pub ground_band: f32,

    // === Player ===
    pub player_x: f32,
    pub player_width: f32,
    pub player_height: f32,
    pub gravity: f32,
    pub jump_impulse: f32,
    pub jump_forgiveness_vy: f32,

    // === Speed & score ===
    pub base_speed: f32,
    pub speed_ramp: f32,
    pub speed_milestone: u64,
    pub score_every_ticks: u64,
    pub tick_speedup_divisor: f32,

    // === Spawning ===
    pub spawn_base_interval: u64,
    pub spawn_min_interval: u64,
    pub spawn_score_divisor: u64,

    // === Obstacles ===
    pub obstacle_width: f32,
    pub obstacle_min_height: u32,
    pub obstacle_height_range: u32,
    pub obstacle_baseline_offset: f32,
    pub obstacle_spawn_margin: f32,
    pub obstacle_cull_margin: f32,

    // === Parallax ===
    pub layers: [LayerTuning; 2],
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            viewport_width: VIEWPORT_WIDTH,
            viewport_height: VIEWPORT_HEIGHT,
            ground_band: GROUND_BAND,

            player_x: PLAYER_X,
            player_width: PLAYER_SIZE,
            player_height: PLAYER_SIZE,
            gravity: GRAVITY,
            jump_impulse: JUMP_IMPULSE,
            jump_forgiveness_vy: JUMP_FORGIVENESS_VY,

            base_speed: BASE_SPEED,
            speed_ramp: SPEED_RAMP,
            speed_milestone: SPEED_MILESTONE,
            score_every_ticks: SCORE_EVERY_TICKS,
            tick_speedup_divisor: TICK_SPEEDUP_DIVISOR,

            spawn_base_interval: SPAWN_BASE_INTERVAL,
            spawn_min_interval: SPAWN_MIN_INTERVAL,
            spawn_score_divisor: SPAWN_SCORE_DIVISOR,

            obstacle_width: OBSTACLE_WIDTH,
            obstacle_min_height: OBSTACLE_MIN_HEIGHT,
            obstacle_height_range: OBSTACLE_HEIGHT_RANGE,
            obstacle_baseline_offset: OBSTACLE_BASELINE_OFFSET,
            obstacle_spawn_margin: OBSTACLE_SPAWN_MARGIN,
            obstacle_cull_margin: OBSTACLE_CULL_MARGIN,

            // Far hills drift slowly, near hills faster
            layers: [
                LayerTuning { speed: 0.2, y: 0.0 },
                LayerTuning { speed: 0.6, y: 10.0 },
            ],
        }
    }
}

impl Tuning {
    /// Parse a (possibly partial) JSON override on top of the defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<Tuning>(json).map(Tuning::sanitized)
    }

    /// Replace values the simulation cannot work with by their defaults
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();

        if self.viewport_width <= 0.0 || self.viewport_height <= self.ground_band {
            log::warn!(
                "Invalid viewport {}x{}, using defaults",
                self.viewport_width,
                self.viewport_height
            );
            self.viewport_width = defaults.viewport_width;
            self.viewport_height = defaults.viewport_height;
            self.ground_band = defaults.ground_band;
        }
        if self.score_every_ticks == 0 {
            log::warn!("score_every_ticks must be positive");
            self.score_every_ticks = defaults.score_every_ticks;
        }
        if self.speed_milestone == 0 {
            log::warn!("speed_milestone must be positive");
            self.speed_milestone = defaults.speed_milestone;
        }
        if self.spawn_score_divisor == 0 {
            log::warn!("spawn_score_divisor must be positive");
            self.spawn_score_divisor = defaults.spawn_score_divisor;
        }
        if self.spawn_min_interval == 0 || self.spawn_min_interval > self.spawn_base_interval {
            log::warn!(
                "Spawn interval range {}..{} is inverted or empty, using defaults",
                self.spawn_min_interval,
                self.spawn_base_interval
            );
            self.spawn_min_interval = defaults.spawn_min_interval;
            self.spawn_base_interval = defaults.spawn_base_interval;
        }
        if self.obstacle_height_range == 0 {
            log::warn!("obstacle_height_range must be positive");
            self.obstacle_height_range = defaults.obstacle_height_range;
        }
        // Tallest obstacle must still fit above the baseline
        let tallest = self
            .obstacle_min_height
            .saturating_add(self.obstacle_height_range);
        if tallest as f32 > self.obstacle_baseline() {
            log::warn!(
                "Obstacle heights {}+{} do not fit the play field, using defaults",
                self.obstacle_min_height,
                self.obstacle_height_range
            );
            self.obstacle_min_height = defaults.obstacle_min_height;
            self.obstacle_height_range = defaults.obstacle_height_range;
        }
        if self.tick_speedup_divisor <= 0.0 {
            log::warn!("tick_speedup_divisor must be positive");
            self.tick_speedup_divisor = defaults.tick_speedup_divisor;
        }
        if self.speed_ramp < 0.0 {
            // Speed must never go down within a round
            log::warn!("speed_ramp {} is negative, clamping to 0", self.speed_ramp);
            self.speed_ramp = 0.0;
        }
        for (layer, default) in self.layers.iter_mut().zip(defaults.layers) {
            // Offsets only wrap while scrolling left
            if layer.speed < 0.0 || layer.speed.is_nan() {
                log::warn!("Layer speed {} is invalid, using {}", layer.speed, default.speed);
                layer.speed = default.speed;
            }
        }

        self
    }

    /// Y coordinate of the ground surface
    #[inline]
    pub fn ground_line(&self) -> f32 {
        self.viewport_height - self.ground_band
    }

    /// Y coordinate obstacle bottoms are aligned to
    #[inline]
    pub fn obstacle_baseline(&self) -> f32 {
        self.viewport_height - self.obstacle_baseline_offset
    }
}
