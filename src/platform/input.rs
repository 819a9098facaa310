//! Input latch
//!
//! Keyboard, pointer and button handlers fire between frames. They only set
//! flags here; the frame loop drains the latch right before the next tick.

use crate::sim::TickInput;

/// One-shot input requests waiting for the next tick
#[derive(Debug, Clone, Default)]
pub struct InputLatch {
    pending: TickInput,
}

impl InputLatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Space / ArrowUp / click / touch
    pub fn press_jump(&mut self) {
        self.pending.jump = true;
    }

    /// Restart button; the latest seed wins
    pub fn request_restart(&mut self, seed: u64) {
        self.pending.restart = Some(seed);
        // A tap that landed on the old round should not carry over
        self.pending.jump = false;
    }

    /// Take the pending input, leaving the latch empty
    pub fn take(&mut self) -> TickInput {
        std::mem::take(&mut self.pending)
    }
}
