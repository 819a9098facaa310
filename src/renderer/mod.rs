//! Rendering module
//!
//! `scene` lays out a frame as draw commands; `canvas` (browser only)
//! executes them on a 2D canvas.

pub mod scene;

#[cfg(target_arch = "wasm32")]
pub mod canvas;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasRenderer;
pub use scene::{AssetAvailability, AssetId, DrawCmd};
