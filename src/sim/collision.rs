//! Axis-aligned bounding boxes
//!
//! Every body in the game is an upright rectangle, so collision is a strict
//! interval overlap on both axes. Touching edges do not count as a hit.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An upright rectangle in board coordinates (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
}

impl Aabb {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// Strict overlap test
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(x: f32, y: f32, w: f32, h: f32) -> Aabb {
        Aabb::new(Vec2::new(x, y), Vec2::new(w, h))
    }

    #[test]
    fn test_overlap_partial() {
        let player = rect(205.0, 520.0, 90.0, 90.0);
        let platform = rect(250.0, 600.0, 60.0, 18.0);
        assert!(player.overlaps(&platform));
        assert!(platform.overlaps(&player));
    }

    #[test]
    fn test_overlap_contained() {
        let outer = rect(0.0, 0.0, 100.0, 100.0);
        let inner = rect(10.0, 10.0, 5.0, 5.0);
        assert!(outer.overlaps(&inner));
        assert!(inner.overlaps(&outer));
    }

    #[test]
    fn test_touching_edges_miss() {
        let a = rect(0.0, 0.0, 10.0, 10.0);
        // Shares the right edge
        assert!(!a.overlaps(&rect(10.0, 0.0, 10.0, 10.0)));
        // Shares the bottom edge
        assert!(!a.overlaps(&rect(0.0, 10.0, 10.0, 10.0)));
    }

    #[test]
    fn test_separated_on_one_axis_misses() {
        let a = rect(0.0, 0.0, 10.0, 10.0);
        // Overlaps horizontally, far below
        assert!(!a.overlaps(&rect(5.0, 50.0, 10.0, 10.0)));
        // Overlaps vertically, far to the left
        assert!(!a.overlaps(&rect(-50.0, 5.0, 10.0, 10.0)));
    }
}
