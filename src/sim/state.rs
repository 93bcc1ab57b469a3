//! Game state and core simulation types
//!
//! Everything the tick mutates is owned by [`GameState`]; there are no globals.

use std::collections::VecDeque;

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Physics running
    Active,
    /// Player fell off the bottom; only a restart leaves this phase
    GameOver,
}

/// Which way the player sprite faces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Facing {
    #[default]
    Left,
    Right,
}

impl Facing {
    /// Horizontal direction multiplier
    pub fn sign(self) -> f32 {
        match self {
            Facing::Left => -1.0,
            Facing::Right => 1.0,
        }
    }
}

/// Notable things that happened during a tick or input event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Player landed on a platform and was launched upward
    Bounce,
    /// A platform scrolled off the bottom and was replaced at the top
    PlatformRecycled,
    /// Player fell through the bottom edge
    GameOver,
    /// A new run started from the game-over screen
    Restarted,
}

/// The bouncing character
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    pub facing: Facing,
}

impl Player {
    fn spawn(tuning: &Tuning, facing: Facing) -> Self {
        Self {
            pos: tuning.spawn_position(),
            size: Vec2::new(tuning.player_width, tuning.player_height),
            facing,
        }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.pos, self.size)
    }
}

/// A static ledge the player bounces off
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
}

impl Platform {
    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.pos, self.size)
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Balance values this run was created with
    pub tuning: Tuning,
    /// Source of platform positions and score deltas
    rng: Pcg32,
    /// Simulated ticks while active
    pub time_ticks: u64,
    /// Current phase
    pub phase: GamePhase,
    pub player: Player,
    /// Player velocity in units per tick; x is set by input, y integrates gravity
    pub velocity: Vec2,
    /// Live platforms, oldest (lowest) first
    pub platforms: VecDeque<Platform>,
    /// Displayed score, the peak of `max_score`
    pub score: i64,
    /// Running total that rises while ascending and falls otherwise
    pub max_score: i64,
    /// Events raised since the last drain (not gameplay-affecting)
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new game state with the given seed and default tuning
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    /// Create a new game state with custom tuning
    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        let mut state = Self {
            seed,
            tuning,
            rng: Pcg32::seed_from_u64(seed),
            time_ticks: 0,
            phase: GamePhase::Active,
            player: Player::spawn(&tuning, Facing::Left),
            velocity: Vec2::new(0.0, tuning.jump_velocity),
            platforms: VecDeque::with_capacity(tuning.platform_count),
            score: 0,
            max_score: 0,
            events: Vec::new(),
        };

        state.place_platforms();

        state
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Replace all platforms with the starting layout: one fixed platform under
    /// the spawn point, then evenly spaced random ones going up.
    pub fn place_platforms(&mut self) {
        let t = self.tuning;
        self.platforms.clear();

        self.platforms.push_back(Platform {
            pos: Vec2::new(t.board_width / 2.0, t.board_height - 50.0),
            size: Vec2::new(t.platform_width, t.platform_height),
        });

        for i in 0..t.platform_count.saturating_sub(1) {
            let x = self.random_platform_x();
            self.platforms.push_back(Platform {
                pos: Vec2::new(x, t.board_height - t.platform_spacing * i as f32 - 150.0),
                size: Vec2::new(t.platform_width, t.platform_height),
            });
        }
    }

    /// Append a random platform just above the visible top edge
    pub fn spawn_platform(&mut self) {
        let t = self.tuning;
        let x = self.random_platform_x();
        self.platforms.push_back(Platform {
            pos: Vec2::new(x, -t.platform_height),
            size: Vec2::new(t.platform_width, t.platform_height),
        });
    }

    fn random_platform_x(&mut self) -> f32 {
        let limit = self.tuning.platform_x_limit();
        self.rng.random_range(0..limit) as f32
    }

    /// Draw the score delta for one tick
    pub(crate) fn roll_score_points(&mut self) -> i64 {
        let max = self.tuning.score_step_max.max(1);
        i64::from(self.rng.random_range(0..max))
    }

    /// Select a discrete horizontal velocity and matching sprite
    pub fn steer(&mut self, facing: Facing) {
        self.velocity.x = facing.sign() * self.tuning.move_speed;
        self.player.facing = facing;
    }

    /// Start a fresh run (the RNG keeps advancing, it is not reseeded)
    pub fn restart(&mut self) {
        self.player = Player::spawn(&self.tuning, Facing::Right);
        self.velocity = Vec2::new(0.0, self.tuning.jump_velocity);
        self.score = 0;
        self.max_score = 0;
        self.phase = GamePhase::Active;
        self.place_platforms();
        self.events.push(GameEvent::Restarted);
        log::info!("Game restarted (seed {})", self.seed);
    }

    /// Take all events raised since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_spawn() {
        let state = GameState::new(42);
        assert_eq!(state.phase, GamePhase::Active);
        assert_eq!(state.player.pos, Vec2::new(205.0, 478.0));
        assert_eq!(state.player.size, Vec2::new(90.0, 90.0));
        assert_eq!(state.player.facing, Facing::Left);
        assert_eq!(state.velocity, Vec2::new(0.0, -8.0));
        assert_eq!(state.score, 0);
        assert_eq!(state.max_score, 0);
    }

    #[test]
    fn test_initial_platform_layout() {
        let state = GameState::new(7);
        assert_eq!(state.platforms.len(), 7);

        // Fixed starter platform below the spawn point
        assert_eq!(state.platforms[0].pos, Vec2::new(250.0, 600.0));

        let expected_y = [500.0, 425.0, 350.0, 275.0, 200.0, 125.0];
        for (platform, y) in state.platforms.iter().skip(1).zip(expected_y) {
            assert_eq!(platform.pos.y, y);
            assert!(platform.pos.x >= 0.0 && platform.pos.x < 375.0);
            assert_eq!(platform.pos.x, platform.pos.x.floor());
            assert_eq!(platform.size, Vec2::new(60.0, 18.0));
        }
    }

    #[test]
    fn test_spawn_platform_above_top() {
        let mut state = GameState::new(3);
        state.spawn_platform();
        assert_eq!(state.platforms.len(), 8);
        let newest = state.platforms.back().unwrap();
        assert_eq!(newest.pos.y, -18.0);
        assert!(newest.pos.x >= 0.0 && newest.pos.x < 375.0);
    }

    #[test]
    fn test_steer() {
        let mut state = GameState::new(1);
        state.steer(Facing::Right);
        assert_eq!(state.velocity.x, 4.0);
        assert_eq!(state.player.facing, Facing::Right);
        state.steer(Facing::Left);
        assert_eq!(state.velocity.x, -4.0);
        assert_eq!(state.player.facing, Facing::Left);
    }

    #[test]
    fn test_restart_resets() {
        let mut state = GameState::new(5);
        state.player.pos = Vec2::new(10.0, 700.0);
        state.velocity = Vec2::new(-4.0, 12.0);
        state.score = 900;
        state.max_score = -40;
        state.phase = GamePhase::GameOver;
        state.platforms.pop_front();

        state.restart();

        assert_eq!(state.player.pos, Vec2::new(205.0, 478.0));
        assert_eq!(state.player.facing, Facing::Right);
        assert_eq!(state.velocity, Vec2::new(0.0, -8.0));
        assert_eq!(state.score, 0);
        assert_eq!(state.max_score, 0);
        assert!(!state.is_game_over());
        assert_eq!(state.platforms.len(), 7);
        assert_eq!(state.platforms[0].pos, Vec2::new(250.0, 600.0));
        assert_eq!(state.drain_events(), vec![GameEvent::Restarted]);
        assert!(state.events.is_empty());
    }

    #[test]
    fn test_same_seed_same_layout() {
        let a = GameState::new(2024);
        let b = GameState::new(2024);
        assert_eq!(a.platforms, b.platforms);
    }

    #[test]
    fn test_custom_platform_count() {
        let tuning = Tuning {
            platform_count: 3,
            ..Tuning::default()
        };
        let state = GameState::with_tuning(1, tuning);
        assert_eq!(state.platforms.len(), 3);
    }
}
