//! Game state and core simulation types
//!
//! Everything a round needs lives in [`GameState`]; reset, update and jump
//! all operate on it by `&mut`.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use crate::tuning::{LayerTuning, Tuning};

/// Current phase of the round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Running,
    /// Round ended by a collision; waits for reset
    GameOver,
}

/// Notifications for the UI layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Running -> GameOver transition with the final score
    GameOver { score: u64, ticks: u64 },
}

/// The runner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner (x never changes during a round)
    pub pos: Vec2,
    pub size: Vec2,
    /// Vertical velocity (positive = falling)
    pub vy: f32,
    /// Velocity applied by a jump
    pub jump_impulse: f32,
    pub grounded: bool,
}

impl Player {
    /// A player resting on the ground line
    pub fn new(tuning: &Tuning) -> Self {
        let size = Vec2::new(tuning.player_width, tuning.player_height);
        Self {
            pos: Vec2::new(tuning.player_x, tuning.ground_line() - size.y),
            size,
            vy: 0.0,
            jump_impulse: tuning.jump_impulse,
            grounded: true,
        }
    }

    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }
}

/// An obstacle scrolling toward the player
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: u32,
    /// Top-left corner (y fixed at spawn)
    pub pos: Vec2,
    pub size: Vec2,
    /// Global speed when this obstacle spawned
    pub speed: f32,
}

impl Obstacle {
    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }

    /// X coordinate of the right edge
    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }
}

/// A parallax background layer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BackgroundLayer {
    /// Horizontal scroll offset, in (-viewport_width, 0]
    pub offset: f32,
    /// Rate relative to global speed / 4
    pub speed: f32,
    /// Fixed vertical offset when drawn
    pub y: f32,
}

impl From<LayerTuning> for BackgroundLayer {
    fn from(layer: LayerTuning) -> Self {
        Self {
            offset: 0.0,
            speed: layer.speed,
            y: layer.y,
        }
    }
}

/// Complete round state (deterministic, serializable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Seed of the current round
    pub seed: u64,
    /// Obstacle height RNG, reseeded on reset
    pub rng: Pcg32,
    /// Balance parameters
    pub tuning: Tuning,
    /// Score (one point every few ticks)
    pub score: u64,
    /// Global scroll speed (never decreases within a round)
    pub speed: f32,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Current phase
    pub phase: GamePhase,
    pub player: Player,
    /// Live obstacles in spawn order
    pub obstacles: Vec<Obstacle>,
    pub layers: [BackgroundLayer; 2],
    /// Undelivered UI notifications
    #[serde(skip)]
    pub events: Vec<GameEvent>,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Create a fresh round with default tuning
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    /// Create a fresh round with the given tuning (sanitized first)
    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        let tuning = tuning.sanitized();
        let player = Player::new(&tuning);
        let layers = tuning.layers.map(BackgroundLayer::from);
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            score: 0,
            speed: tuning.base_speed,
            time_ticks: 0,
            phase: GamePhase::Running,
            player,
            obstacles: Vec::new(),
            layers,
            events: Vec::new(),
            next_id: 1,
            tuning,
        }
    }

    /// Start a new round: new player, no obstacles, fresh layers and counters
    pub fn reset(&mut self, seed: u64) {
        let tuning = std::mem::take(&mut self.tuning);
        *self = Self::with_tuning(seed, tuning);
        log::info!("Round reset (seed {})", seed);
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// End the round and queue the notification
    pub fn game_over(&mut self) {
        if !self.is_running() {
            return;
        }
        self.phase = GamePhase::GameOver;
        self.events.push(GameEvent::GameOver {
            score: self.score,
            ticks: self.time_ticks,
        });
        log::info!(
            "Game over: score {} after {} ticks (speed {:.1})",
            self.score,
            self.time_ticks,
            self.speed
        );
    }

    /// Take all pending notifications
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
