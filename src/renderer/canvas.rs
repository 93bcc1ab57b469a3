//! HTML canvas 2D surface
//!
//! Sprites are plain `<img>` elements created at startup. They load in the
//! background; until an image is complete, draws using it are skipped.

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

use super::{DrawSurface, Sprite};
use crate::sim::Aabb;
use crate::tuning::Tuning;

pub const PLAYER_LEFT_SRC: &str = "./ponyo_left.png";
pub const PLAYER_RIGHT_SRC: &str = "./ponyo_right.png";
pub const PLATFORM_SRC: &str = "./green_platform.png";

/// The bitmap for each sprite
pub struct SpriteImages {
    player_left: HtmlImageElement,
    player_right: HtmlImageElement,
    platform: HtmlImageElement,
}

impl SpriteImages {
    /// Start loading the default sprite images
    pub fn load() -> Result<Self, JsValue> {
        Ok(Self {
            player_left: load_image(PLAYER_LEFT_SRC)?,
            player_right: load_image(PLAYER_RIGHT_SRC)?,
            platform: load_image(PLATFORM_SRC)?,
        })
    }

    fn get(&self, sprite: Sprite) -> &HtmlImageElement {
        match sprite {
            Sprite::PlayerLeft => &self.player_left,
            Sprite::PlayerRight => &self.player_right,
            Sprite::Platform => &self.platform,
        }
    }
}

fn load_image(src: &str) -> Result<HtmlImageElement, JsValue> {
    let image = HtmlImageElement::new()?;
    image.set_src(src);
    Ok(image)
}

/// Draws onto a `<canvas>` sized to the board
pub struct CanvasSurface {
    context: CanvasRenderingContext2d,
    width: f64,
    height: f64,
    images: SpriteImages,
}

impl CanvasSurface {
    pub fn new(
        canvas: &HtmlCanvasElement,
        tuning: &Tuning,
        images: SpriteImages,
    ) -> Result<Self, JsValue> {
        canvas.set_width(tuning.board_width as u32);
        canvas.set_height(tuning.board_height as u32);

        let context = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;

        Ok(Self {
            context,
            width: f64::from(tuning.board_width),
            height: f64::from(tuning.board_height),
            images,
        })
    }
}

impl DrawSurface for CanvasSurface {
    fn clear(&mut self) {
        self.context.clear_rect(0.0, 0.0, self.width, self.height);
    }

    fn draw_sprite(&mut self, sprite: Sprite, rect: Aabb) {
        let image = self.images.get(sprite);
        if !image.complete() {
            return;
        }
        // A broken image throws; the frame just goes without it
        let _ = self.context.draw_image_with_html_image_element_and_dw_and_dh(
            image,
            f64::from(rect.left()),
            f64::from(rect.top()),
            f64::from(rect.size.x),
            f64::from(rect.size.y),
        );
    }
}
