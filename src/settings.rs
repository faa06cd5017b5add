//! Simulation tunables
//!
//! Defaults match `crate::consts`. A driver may override any subset from a
//! JSON file; missing fields keep their defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Tunable simulation parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Arena ===
    pub arena_width: f32,
    pub arena_height: f32,

    // === Player ===
    pub player_radius: f32,
    /// Units per second
    pub player_speed: f32,
    pub player_max_hp: u32,

    // === Projectiles ===
    pub projectile_radius: f32,
    /// Seconds before a projectile expires on its own
    pub projectile_ttl: f32,
    pub projectile_min_speed: f32,
    pub projectile_max_speed: f32,
    /// Soft cap on live projectiles (0 = unbounded)
    pub max_projectiles: usize,

    // === Spawning ===
    pub spawn_interval_min: f32,
    pub spawn_interval_max: f32,

    // === Timing ===
    /// Largest dt a single step integrates
    pub max_dt: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            arena_width: ARENA_WIDTH,
            arena_height: ARENA_HEIGHT,

            player_radius: PLAYER_RADIUS,
            player_speed: PLAYER_SPEED,
            player_max_hp: PLAYER_MAX_HP,

            projectile_radius: PROJECTILE_RADIUS,
            projectile_ttl: PROJECTILE_TTL,
            projectile_min_speed: PROJECTILE_MIN_SPEED,
            projectile_max_speed: PROJECTILE_MAX_SPEED,
            max_projectiles: MAX_PROJECTILES,

            spawn_interval_min: SPAWN_INTERVAL_MIN,
            spawn_interval_max: SPAWN_INTERVAL_MAX,

            max_dt: MAX_DT,
        }
    }
}

impl Settings {
    /// Parse settings from JSON, then sanitize
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let settings: Self = serde_json::from_str(json)?;
        Ok(settings.sanitized())
    }

    /// Load settings from a JSON file, falling back to defaults
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("Malformed settings in {}: {} - using defaults", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Could not read {}: {} - using defaults", path.display(), e);
                Self::default()
            }
        }
    }

    /// Fix up values the simulation cannot work with.
    ///
    /// Inverted ranges are swapped, negative magnitudes are zeroed, a
    /// non-positive `max_dt` falls back to the default and max hp is at least 1.
    pub fn sanitized(mut self) -> Self {
        if self.spawn_interval_min > self.spawn_interval_max {
            log::warn!(
                "spawn interval range inverted ({} > {}), swapping",
                self.spawn_interval_min,
                self.spawn_interval_max
            );
            std::mem::swap(&mut self.spawn_interval_min, &mut self.spawn_interval_max);
        }
        if self.projectile_min_speed > self.projectile_max_speed {
            log::warn!(
                "projectile speed range inverted ({} > {}), swapping",
                self.projectile_min_speed,
                self.projectile_max_speed
            );
            std::mem::swap(&mut self.projectile_min_speed, &mut self.projectile_max_speed);
        }
        if !(self.max_dt.is_finite() && self.max_dt > 0.0) {
            log::warn!("max_dt {} would stall the session, using {}", self.max_dt, MAX_DT);
            self.max_dt = MAX_DT;
        }
        if self.player_max_hp == 0 {
            log::warn!("player_max_hp 0 starts the session dead, using 1");
            self.player_max_hp = 1;
        }
        self.arena_width = self.arena_width.max(0.0);
        self.arena_height = self.arena_height.max(0.0);
        self.player_radius = self.player_radius.max(0.0);
        self.projectile_radius = self.projectile_radius.max(0.0);
        self
    }

    /// Arena size as a vector
    pub fn arena_size(&self) -> glam::Vec2 {
        glam::Vec2::new(self.arena_width, self.arena_height)
    }
}
