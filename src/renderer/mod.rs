//! Rendering module
//!
//! The simulation never draws. Each host provides a [`DrawSurface`] and calls
//! [`draw_frame`] once per display frame:
//! - `canvas`: HTML canvas 2D with bitmap sprites (wasm32)
//! - `cells`: character grid for the terminal front-end

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod cells;

#[cfg(target_arch = "wasm32")]
pub use canvas::{CanvasSurface, SpriteImages};
pub use cells::CellBuffer;

use crate::sim::{Aabb, Facing, GameState};

/// The three images the game draws
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sprite {
    PlayerLeft,
    PlayerRight,
    Platform,
}

impl Sprite {
    pub fn player(facing: Facing) -> Self {
        match facing {
            Facing::Left => Sprite::PlayerLeft,
            Facing::Right => Sprite::PlayerRight,
        }
    }
}

/// Something the board can be drawn onto
pub trait DrawSurface {
    /// Erase the whole board
    fn clear(&mut self);

    /// Draw a sprite stretched to `rect`. Surfaces skip sprites they cannot
    /// draw yet (e.g. images still loading).
    fn draw_sprite(&mut self, sprite: Sprite, rect: Aabb);
}

/// Draw one frame of the board.
///
/// After game over nothing is drawn, leaving the last frame on screen under
/// the game-over message. Returns whether anything was drawn.
pub fn draw_frame<S: DrawSurface + ?Sized>(state: &GameState, surface: &mut S) -> bool {
    if state.is_game_over() {
        return false;
    }

    surface.clear();
    surface.draw_sprite(Sprite::player(state.player.facing), state.player.bounds());
    for platform in &state.platforms {
        surface.draw_sprite(Sprite::Platform, platform.bounds());
    }
    true
}

/// Text and overlay state shown next to the board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hud {
    pub score_text: String,
    pub game_over_visible: bool,
}

impl Hud {
    pub fn from_state(state: &GameState) -> Self {
        Self {
            score_text: format!("Score: {}", state.score),
            game_over_visible: state.is_game_over(),
        }
    }
}
