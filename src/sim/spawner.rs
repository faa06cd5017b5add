//! Projectile spawning
//!
//! Projectiles appear on a random arena edge at a randomized cadence and fly
//! toward where the player stood at the moment of spawning.

use glam::Vec2;
use rand::Rng;

use super::state::Projectile;
use crate::settings::Settings;
use crate::{normalize, random_in_range};

/// Arena edge a projectile enters from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Top,
    Right,
    Bottom,
    Left,
}

impl Edge {
    pub const ALL: [Edge; 4] = [Edge::Top, Edge::Right, Edge::Bottom, Edge::Left];

    /// Pick an edge uniformly
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }

    /// Random point on this edge of an arena spanning `[0, size]`
    pub fn random_point<R: Rng + ?Sized>(self, rng: &mut R, size: Vec2) -> Vec2 {
        match self {
            Edge::Top => Vec2::new(random_in_range(rng, 0.0, size.x), 0.0),
            Edge::Right => Vec2::new(size.x, random_in_range(rng, 0.0, size.y)),
            Edge::Bottom => Vec2::new(random_in_range(rng, 0.0, size.x), size.y),
            Edge::Left => Vec2::new(0.0, random_in_range(rng, 0.0, size.y)),
        }
    }
}

/// Spawn cadence: accumulates time and fires once per drawn interval
#[derive(Debug, Clone)]
pub struct Spawner {
    accumulator: f32,
    next_interval: f32,
    interval_min: f32,
    interval_max: f32,
    spawned: u64,
}

impl Spawner {
    pub fn new<R: Rng + ?Sized>(rng: &mut R, interval_min: f32, interval_max: f32) -> Self {
        Self {
            accumulator: 0.0,
            next_interval: random_in_range(rng, interval_min, interval_max),
            interval_min,
            interval_max,
            spawned: 0,
        }
    }

    /// Seconds accumulated since the last spawn
    pub fn accumulator(&self) -> f32 {
        self.accumulator
    }

    /// Threshold the accumulator must reach for the next spawn
    pub fn next_interval(&self) -> f32 {
        self.next_interval
    }

    /// Total spawns fired so far
    pub fn spawned(&self) -> u64 {
        self.spawned
    }

    /// Advance by `dt`. Returns true when a spawn is due; at most one per call.
    pub fn advance<R: Rng + ?Sized>(&mut self, dt: f32, rng: &mut R) -> bool {
        self.accumulator += dt;
        if self.accumulator < self.next_interval {
            return false;
        }
        self.accumulator = 0.0;
        self.next_interval = random_in_range(rng, self.interval_min, self.interval_max);
        self.spawned += 1;
        true
    }
}

/// Build a projectile on a random edge, aimed at `target`
pub fn spawn_projectile<R: Rng + ?Sized>(rng: &mut R, settings: &Settings, target: Vec2) -> Projectile {
    let edge = Edge::random(rng);
    let pos = edge.random_point(rng, settings.arena_size());
    let dir = normalize(target - pos);
    let speed = random_in_range(
        rng,
        settings.projectile_min_speed,
        settings.projectile_max_speed,
    );
    Projectile::new(
        pos,
        dir,
        speed,
        settings.projectile_radius,
        settings.projectile_ttl,
    )
}
