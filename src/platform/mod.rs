//! Platform abstraction layer
//!
//! Glue between browser/native event sources and the fixed-step simulation:
//! - Input latch (jump/restart requests between frames)
//! - Frame clock (real frame deltas to whole ticks)

pub mod clock;
pub mod input;

pub use clock::FixedStep;
pub use input::InputLatch;
