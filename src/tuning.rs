//! Data-driven game balance
//!
//! Every number the simulation reads lives in [`Tuning`]. The defaults are the
//! constants in [`crate::consts`]; a host may override any subset from JSON.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Game balance values
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub board_width: f32,
    pub board_height: f32,
    pub player_width: f32,
    pub player_height: f32,
    /// Added to vertical velocity every tick
    pub gravity: f32,
    /// Vertical velocity set by a bounce (negative = upward)
    pub jump_velocity: f32,
    pub move_speed: f32,
    pub platform_width: f32,
    pub platform_height: f32,
    pub platform_count: usize,
    pub platform_spacing: f32,
    pub score_step_max: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            board_width: BOARD_WIDTH,
            board_height: BOARD_HEIGHT,
            player_width: PLAYER_WIDTH,
            player_height: PLAYER_HEIGHT,
            gravity: GRAVITY,
            jump_velocity: JUMP_VELOCITY,
            move_speed: MOVE_SPEED,
            platform_width: PLATFORM_WIDTH,
            platform_height: PLATFORM_HEIGHT,
            platform_count: PLATFORM_COUNT,
            platform_spacing: PLATFORM_SPACING,
            score_step_max: SCORE_STEP_MAX,
        }
    }
}

impl Tuning {
    /// Parse tuning from JSON; absent fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Player spawn point: horizontally centered, resting 1/8 above the bottom
    pub fn spawn_position(&self) -> Vec2 {
        Vec2::new(
            (self.board_width / 2.0 - self.player_width / 2.0).floor(),
            (self.board_height * 7.0 / 8.0 - self.player_height).floor(),
        )
    }

    /// Platforms scroll only while the player is above this line
    pub fn scroll_line(&self) -> f32 {
        self.board_height * 3.0 / 4.0
    }

    /// Exclusive upper bound for random platform x positions
    pub fn platform_x_limit(&self) -> u32 {
        ((self.board_width * 3.0 / 4.0).floor() as u32).max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_spawn() {
        let tuning = Tuning::default();
        assert_eq!(tuning.spawn_position(), Vec2::new(205.0, 478.0));
        assert_eq!(tuning.scroll_line(), 487.5);
        assert_eq!(tuning.platform_x_limit(), 375);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let tuning = Tuning::from_json(r#"{ "gravity": 0.5, "platform_count": 9 }"#).unwrap();
        assert_eq!(tuning.gravity, 0.5);
        assert_eq!(tuning.platform_count, 9);
        assert_eq!(tuning.board_width, BOARD_WIDTH);
        assert_eq!(tuning.jump_velocity, JUMP_VELOCITY);
    }

    #[test]
    fn test_bad_json_is_an_error() {
        assert!(Tuning::from_json("{ gravity: }").is_err());
        assert!(Tuning::from_json(r#"{ "gravity": "heavy" }"#).is_err());
    }
}
