//! Frame timing
//!
//! Hosts call back at whatever rate the display refreshes. [`FrameClock`]
//! turns those timestamps into a whole number of fixed simulation ticks so
//! the game runs at the same speed on 60 Hz and 144 Hz screens.

use crate::consts::{MAX_FRAME_DT, MAX_SUBSTEPS, SIM_DT};

/// Fixed-timestep accumulator
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    accumulator: f32,
    last_time: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a frame timestamp in milliseconds and return how many ticks to run.
    ///
    /// The first frame always runs one tick. Long stalls are clamped so a
    /// backgrounded tab does not fast-forward the game when it returns.
    pub fn advance(&mut self, now_ms: f64) -> u32 {
        let dt = match self.last_time {
            Some(last) => ((now_ms - last) / 1000.0) as f32,
            None => SIM_DT,
        };
        self.last_time = Some(now_ms);

        self.accumulator += dt.clamp(0.0, MAX_FRAME_DT);

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            self.accumulator -= SIM_DT;
            substeps += 1;
        }
        if substeps == MAX_SUBSTEPS {
            // Drop the backlog instead of carrying it into the next frame
            self.accumulator = 0.0;
        }

        substeps
    }

    /// Forget accumulated time (after a restart or a long pause)
    pub fn reset(&mut self) {
        self.accumulator = 0.0;
        self.last_time = None;
    }
}
