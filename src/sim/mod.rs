//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only (one `update` call = one tick)
//! - Seeded RNG only
//! - Stable iteration order (obstacles kept in spawn order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod obstacles;
pub mod parallax;
pub mod physics;
pub mod state;
pub mod tick;

pub use collision::{Rect, first_hit};
pub use obstacles::{random_height, spawn_interval};
pub use state::{BackgroundLayer, GameEvent, GamePhase, GameState, Obstacle, Player};
pub use tick::{TickInput, jump, tick, update};
