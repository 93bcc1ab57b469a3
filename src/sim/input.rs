//! Logical player input
//!
//! Hosts translate their native events into [`InputEvent`]s; [`Controls`]
//! applies them to the game state. Horizontal movement is a step function:
//! an event picks a fixed velocity, nothing accelerates or decays.

use super::state::{Facing, GameState};

/// Platform-independent key identity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Left,
    Right,
    /// Restart from the game-over screen
    Confirm,
}

/// A discrete input event
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    KeyDown(Key),
    /// A touch began; `touches` is the number of points currently down
    TouchStart { touches: usize, x: f32 },
    /// A touch ended; `changed` is the number of points that lifted
    TouchEnd { changed: usize, x: f32 },
}

/// Input bookkeeping that lives between events
#[derive(Debug, Clone, Default)]
pub struct Controls {
    /// Horizontal position of the last single-finger touch start
    touch_start_x: f32,
}

impl Controls {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one input event to the game
    pub fn handle(&mut self, state: &mut GameState, event: InputEvent) {
        match event {
            InputEvent::KeyDown(Key::Right) => state.steer(Facing::Right),
            InputEvent::KeyDown(Key::Left) => state.steer(Facing::Left),
            InputEvent::KeyDown(Key::Confirm) => {
                if state.is_game_over() {
                    state.restart();
                }
            }
            InputEvent::TouchStart { touches: 1, x } => {
                self.touch_start_x = x;
            }
            InputEvent::TouchEnd { changed: 1, x } => {
                let swipe = x - self.touch_start_x;
                if swipe > 0.0 {
                    state.steer(Facing::Right);
                } else if swipe < 0.0 {
                    state.steer(Facing::Left);
                }
            }
            // Multi-touch gestures are ignored
            InputEvent::TouchStart { .. } | InputEvent::TouchEnd { .. } => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{GameEvent, GamePhase};

    #[test]
    fn test_keys_select_velocity() {
        let mut state = GameState::new(1);
        let mut controls = Controls::new();

        controls.handle(&mut state, InputEvent::KeyDown(Key::Right));
        assert_eq!(state.velocity.x, 4.0);
        assert_eq!(state.player.facing, Facing::Right);

        controls.handle(&mut state, InputEvent::KeyDown(Key::Left));
        assert_eq!(state.velocity.x, -4.0);
        assert_eq!(state.player.facing, Facing::Left);

        // Vertical motion is untouched
        assert_eq!(state.velocity.y, -8.0);
    }

    #[test]
    fn test_confirm_ignored_while_active() {
        let mut state = GameState::new(1);
        let mut controls = Controls::new();
        state.score = 120;

        controls.handle(&mut state, InputEvent::KeyDown(Key::Confirm));
        assert_eq!(state.score, 120);
        assert!(state.drain_events().is_empty());
    }

    #[test]
    fn test_confirm_restarts_after_game_over() {
        let mut state = GameState::new(1);
        let mut controls = Controls::new();
        state.phase = GamePhase::GameOver;
        state.score = 120;

        controls.handle(&mut state, InputEvent::KeyDown(Key::Confirm));
        assert_eq!(state.phase, GamePhase::Active);
        assert_eq!(state.score, 0);
        assert_eq!(state.drain_events(), vec![GameEvent::Restarted]);
    }

    #[test]
    fn test_steering_still_works_after_game_over() {
        let mut state = GameState::new(1);
        let mut controls = Controls::new();
        state.phase = GamePhase::GameOver;

        controls.handle(&mut state, InputEvent::KeyDown(Key::Right));
        assert_eq!(state.velocity.x, 4.0);
        assert!(state.is_game_over());
    }

    #[test]
    fn test_swipe_direction() {
        let mut state = GameState::new(1);
        let mut controls = Controls::new();

        controls.handle(&mut state, InputEvent::TouchStart { touches: 1, x: 100.0 });
        controls.handle(&mut state, InputEvent::TouchEnd { changed: 1, x: 160.0 });
        assert_eq!(state.velocity.x, 4.0);
        assert_eq!(state.player.facing, Facing::Right);

        controls.handle(&mut state, InputEvent::TouchStart { touches: 1, x: 300.0 });
        controls.handle(&mut state, InputEvent::TouchEnd { changed: 1, x: 120.0 });
        assert_eq!(state.velocity.x, -4.0);
        assert_eq!(state.player.facing, Facing::Left);
    }

    #[test]
    fn test_tap_without_displacement_keeps_velocity() {
        let mut state = GameState::new(1);
        let mut controls = Controls::new();
        state.steer(Facing::Right);

        controls.handle(&mut state, InputEvent::TouchStart { touches: 1, x: 80.0 });
        controls.handle(&mut state, InputEvent::TouchEnd { changed: 1, x: 80.0 });
        assert_eq!(state.velocity.x, 4.0);
    }

    #[test]
    fn test_multi_touch_ignored() {
        let mut state = GameState::new(1);
        let mut controls = Controls::new();

        controls.handle(&mut state, InputEvent::TouchStart { touches: 1, x: 200.0 });
        // Second finger does not move the anchor
        controls.handle(&mut state, InputEvent::TouchStart { touches: 2, x: 10.0 });
        // Two fingers lifting together is not a swipe
        controls.handle(&mut state, InputEvent::TouchEnd { changed: 2, x: 400.0 });
        assert_eq!(state.velocity.x, 0.0);

        controls.handle(&mut state, InputEvent::TouchEnd { changed: 1, x: 150.0 });
        assert_eq!(state.velocity.x, -4.0);
    }
}
