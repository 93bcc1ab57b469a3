//! Ponyo Jump - a single-screen platform bouncing arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, platforms, score)
//! - `renderer`: Drawing surfaces (browser canvas, terminal cells)
//! - `platform`: Host glue (key codes, frame timing)
//! - `tuning`: Data-driven game balance

pub mod platform;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (one tick per 60 Hz display refresh)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 4;
    /// Longest frame gap fed into the accumulator (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Board dimensions (logical pixels)
    pub const BOARD_WIDTH: f32 = 500.0;
    pub const BOARD_HEIGHT: f32 = 650.0;

    /// Player sprite size
    pub const PLAYER_WIDTH: f32 = 90.0;
    pub const PLAYER_HEIGHT: f32 = 90.0;

    /// Downward acceleration per tick (y grows downward)
    pub const GRAVITY: f32 = 0.4;
    /// Vertical velocity after a bounce, also the launch impulse
    pub const JUMP_VELOCITY: f32 = -8.0;
    /// Horizontal speed selected by left/right input
    pub const MOVE_SPEED: f32 = 4.0;

    /// Platform sprite size
    pub const PLATFORM_WIDTH: f32 = 60.0;
    pub const PLATFORM_HEIGHT: f32 = 18.0;
    /// Platforms alive at any time
    pub const PLATFORM_COUNT: usize = 7;
    /// Vertical gap between the initial random platforms
    pub const PLATFORM_SPACING: f32 = 75.0;

    /// Score deltas are drawn from `0..SCORE_STEP_MAX`
    pub const SCORE_STEP_MAX: u32 = 50;
}
