//! Host key code mapping

use crate::sim::Key;

/// Map a layout-independent `KeyboardEvent.code` to a logical key
pub fn key_from_code(code: &str) -> Option<Key> {
    match code {
        "ArrowRight" | "KeyD" => Some(Key::Right),
        "ArrowLeft" | "KeyA" => Some(Key::Left),
        "Space" => Some(Key::Confirm),
        _ => None,
    }
}
