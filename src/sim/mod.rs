//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per call, velocities in units per tick
//! - Seeded RNG only
//! - Stable iteration order (platforms oldest first)
//! - No rendering or platform dependencies

pub mod collision;
pub mod input;
pub mod state;
pub mod tick;

pub use collision::Aabb;
pub use input::{Controls, InputEvent, Key};
pub use state::{Facing, GameEvent, GamePhase, GameState, Platform, Player};
pub use tick::tick;
