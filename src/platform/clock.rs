//! Fixed-step frame clock
//!
//! The simulation is tuned for one tick per 60 Hz frame. The accumulator
//! keeps that cadence on displays that refresh faster or slower, and after
//! a stall it catches up at most [`MAX_SUBSTEPS`] ticks per frame.

use crate::consts::{MAX_FRAME_DT, MAX_SUBSTEPS, SIM_DT};

/// Accumulates frame time and hands out whole ticks
#[derive(Debug, Clone, Default)]
pub struct FixedStep {
    accumulator: f32,
    last_time_ms: Option<f64>,
}

impl FixedStep {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a frame timestamp (ms, as passed to requestAnimationFrame) and
    /// return the number of ticks to run this frame.
    pub fn advance_to(&mut self, time_ms: f64) -> u32 {
        let dt = match self.last_time_ms {
            Some(last) => ((time_ms - last) / 1000.0) as f32,
            // First frame runs exactly one tick
            None => SIM_DT,
        };
        self.last_time_ms = Some(time_ms);
        self.advance(dt)
    }

    /// Feed a frame delta in seconds and return the ticks to run
    pub fn advance(&mut self, dt: f32) -> u32 {
        self.accumulator += dt.clamp(0.0, MAX_FRAME_DT);

        // Half a millisecond of slack so 16.6 vs 16.67 ms frames don't drift
        let threshold = SIM_DT - 0.0005;
        let mut ticks = 0;
        while self.accumulator >= threshold && ticks < MAX_SUBSTEPS {
            self.accumulator -= SIM_DT;
            ticks += 1;
        }
        if ticks == MAX_SUBSTEPS {
            // Drop the backlog rather than spiralling
            self.accumulator = self.accumulator.min(SIM_DT);
        }
        self.accumulator = self.accumulator.max(0.0);
        ticks
    }

    /// Forget timing history so a new round starts with a single tick
    pub fn reset(&mut self) {
        self.accumulator = 0.0;
        self.last_time_ms = None;
    }
}
