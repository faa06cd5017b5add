//! Dodge Arena - a top-down arena survival simulation
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, spawning, collisions, session state)
//! - `input`: Key state collapsed into a movement intent
//! - `clock`: Frame timing for drivers (clamped dt, smoothed FPS)
//! - `settings`: Data-driven tunables

pub mod clock;
pub mod input;
pub mod settings;
pub mod sim;

pub use clock::FrameClock;
pub use input::Keys;
pub use settings::Settings;

use glam::Vec2;
use rand::Rng;

/// Simulation constants (defaults for [`Settings`])
pub mod consts {
    /// Largest dt a single step will integrate (prevents tunneling on frame hitches)
    pub const MAX_DT: f32 = 0.05;

    /// Arena dimensions
    pub const ARENA_WIDTH: f32 = 3000.0;
    pub const ARENA_HEIGHT: f32 = 3000.0;

    /// Player defaults
    pub const PLAYER_RADIUS: f32 = 16.0;
    /// Units per second
    pub const PLAYER_SPEED: f32 = 240.0;
    pub const PLAYER_MAX_HP: u32 = 500;

    /// Projectile defaults
    pub const PROJECTILE_RADIUS: f32 = 8.0;
    pub const PROJECTILE_TTL: f32 = 6.0;
    pub const PROJECTILE_MIN_SPEED: f32 = 220.0;
    pub const PROJECTILE_MAX_SPEED: f32 = 320.0;

    /// Seconds between spawns, redrawn after every spawn
    pub const SPAWN_INTERVAL_MIN: f32 = 0.4;
    pub const SPAWN_INTERVAL_MAX: f32 = 1.2;

    /// Soft cap on live projectiles (oldest evicted first, 0 = unbounded)
    pub const MAX_PROJECTILES: usize = 256;

    /// Feedback timers armed on every hit (seconds)
    pub const HIT_FLASH_DURATION: f32 = 0.15;
    pub const SHAKE_DURATION: f32 = 0.2;
    /// Peak camera shake offset in world units
    pub const SHAKE_MAGNITUDE: f32 = 4.0;
}

/// Unit vector in the direction of `v`, or zero for a zero-length input
#[inline]
pub fn normalize(v: Vec2) -> Vec2 {
    v.normalize_or_zero()
}

/// Squared euclidean distance (no sqrt on the collision hot path)
#[inline]
pub fn distance_squared(a: Vec2, b: Vec2) -> f32 {
    let d = a - b;
    d.x * d.x + d.y * d.y
}

/// Clamp `value` into `[min, max]`.
///
/// Unlike `f32::clamp` this never panics: if `min > max` the result is `max`.
#[inline]
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    value.max(min).min(max)
}

/// Uniform draw in `[min, max)`; returns `min` when the range is empty
#[inline]
pub fn random_in_range<R: Rng + ?Sized>(rng: &mut R, min: f32, max: f32) -> f32 {
    min + rng.random::<f32>() * (max - min)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_normalize_zero_vector() {
        let n = normalize(Vec2::ZERO);
        assert_eq!(n, Vec2::ZERO);
        assert!(!n.x.is_nan() && !n.y.is_nan());
    }

    #[test]
    fn test_normalize_diagonal() {
        let n = normalize(Vec2::new(1.0, 1.0));
        assert!((n.length() - 1.0).abs() < 1e-6);
        assert!((n.x - n.y).abs() < 1e-6);
    }

    #[test]
    fn test_distance_squared() {
        let a = Vec2::new(500.0, 500.0);
        let b = Vec2::new(503.0, 504.0);
        assert_eq!(distance_squared(a, b), 25.0);
        assert_eq!(distance_squared(b, a), 25.0);
    }

    #[test]
    fn test_clamp_inverted_bounds() {
        assert_eq!(clamp(5.0, 0.0, 10.0), 5.0);
        assert_eq!(clamp(-1.0, 0.0, 10.0), 0.0);
        assert_eq!(clamp(11.0, 0.0, 10.0), 10.0);
        // Arena narrower than the player: no panic, settles on max
        assert_eq!(clamp(3.0, 16.0, 4.0), 4.0);
    }

    #[test]
    fn test_random_in_range() {
        let mut rng = Pcg32::seed_from_u64(7);
        for _ in 0..1000 {
            let v = random_in_range(&mut rng, 0.4, 1.2);
            assert!((0.4..=1.2).contains(&v), "{v} out of range");
        }
        assert_eq!(random_in_range(&mut rng, 3.0, 3.0), 3.0);
    }
}
