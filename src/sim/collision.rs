//! Circle collision
//!
//! Discrete end-of-step overlap only. A projectile fast enough to cross the
//! player's whole hit circle within one dt is not detected; `MAX_DT` keeps
//! default speeds well under that limit.

use glam::Vec2;

use crate::distance_squared;

/// True when two circles touch or overlap
#[inline]
pub fn circles_overlap(a: Vec2, radius_a: f32, b: Vec2, radius_b: f32) -> bool {
    let r = radius_a + radius_b;
    distance_squared(a, b) <= r * r
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlap_inside_combined_radius() {
        let player = Vec2::new(500.0, 500.0);
        assert!(circles_overlap(player, 16.0, Vec2::new(500.0, 523.0), 8.0));
        assert!(!circles_overlap(player, 16.0, Vec2::new(500.0, 525.0), 8.0));
    }

    #[test]
    fn test_touching_counts() {
        assert!(circles_overlap(Vec2::ZERO, 16.0, Vec2::new(24.0, 0.0), 8.0));
    }

    #[test]
    fn test_concentric() {
        assert!(circles_overlap(Vec2::ONE, 0.0, Vec2::ONE, 0.0));
    }
}
