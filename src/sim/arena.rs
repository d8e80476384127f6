//! World bounds and the toroidal wrap rule
//!
//! The arena is a flat rectangle the craft and asteroids wrap around:
//! exiting one edge reappears at the opposite one. Wrapping happens in a
//! padded range so a sprite fully leaves the screen before it comes back.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::WRAP_MARGIN;

/// Rectangular world a round plays out in. Fixed for the round's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
}

impl Arena {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// The craft spawn and respawn point
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Toroidal wrap: each axis maps independently into
    /// [-margin, size + margin).
    ///
    /// Applies to the craft and asteroids after integration, never to
    /// projectiles - those die at the edge instead.
    pub fn wrap(&self, pos: Vec2) -> Vec2 {
        Vec2::new(wrap_axis(pos.x, self.width), wrap_axis(pos.y, self.height))
    }

    /// Unpadded bounds test used for projectile culling
    pub fn contains(&self, pos: Vec2) -> bool {
        pos.x >= 0.0 && pos.x < self.width && pos.y >= 0.0 && pos.y < self.height
    }
}

#[inline]
fn wrap_axis(v: f32, size: f32) -> f32 {
    let span = size + 2.0 * WRAP_MARGIN;
    (v + WRAP_MARGIN).rem_euclid(span) - WRAP_MARGIN
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_inside_is_identity() {
        let arena = Arena::new(800.0, 600.0);
        let pos = Vec2::new(400.0, 300.0);
        assert_eq!(arena.wrap(pos), pos);
    }

    #[test]
    fn test_wrap_past_right_edge() {
        let arena = Arena::new(800.0, 600.0);
        // Beyond width + margin: reappears near the left edge
        let wrapped = arena.wrap(Vec2::new(817.0, 300.0));
        assert!((wrapped.x - (-15.0)).abs() < 1e-3);
        assert_eq!(wrapped.y, 300.0);
    }

    #[test]
    fn test_wrap_past_top_edge() {
        let arena = Arena::new(800.0, 600.0);
        let wrapped = arena.wrap(Vec2::new(400.0, -17.0));
        assert!((wrapped.y - 615.0).abs() < 1e-3);
    }

    #[test]
    fn test_wrap_stays_in_padded_range() {
        let arena = Arena::new(800.0, 600.0);
        for &(x, y) in &[
            (-500.0, -500.0),
            (5000.0, 5000.0),
            (-16.0, 616.0),
            (816.0, -16.0),
        ] {
            let w = arena.wrap(Vec2::new(x, y));
            assert!(w.x >= -WRAP_MARGIN && w.x < arena.width + WRAP_MARGIN);
            assert!(w.y >= -WRAP_MARGIN && w.y < arena.height + WRAP_MARGIN);
        }
    }

    #[test]
    fn test_contains_is_unpadded() {
        let arena = Arena::new(800.0, 600.0);
        assert!(arena.contains(Vec2::new(0.0, 0.0)));
        assert!(arena.contains(Vec2::new(799.9, 599.9)));
        assert!(!arena.contains(Vec2::new(-0.1, 300.0)));
        assert!(!arena.contains(Vec2::new(800.0, 300.0)));
        assert!(!arena.contains(Vec2::new(400.0, 600.0)));
    }
}
