//! Platform abstraction layer
//!
//! Handles host differences for:
//! - Input events (browser key codes to logical keys)
//! - Time/ticks (display refresh to fixed simulation steps)

pub mod input;
pub mod time;

pub use input::key_from_code;
pub use time::FrameClock;
