//! Game state and core simulation types
//!
//! Everything a step reads or writes lives in [`GameState`], including the
//! seeded RNG, so two states built from the same seed and fed the same inputs
//! stay identical.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::pool::ProjectilePool;
use super::spawner::Spawner;
use crate::settings::Settings;

/// Session lifecycle. `GameOver` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SessionPhase {
    #[default]
    Running,
    GameOver,
}

/// The player-controlled entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    /// Velocity applied during the last step (overwritten every step)
    pub vel: Vec2,
    pub radius: f32,
    /// Units per second
    pub speed: f32,
    pub hp: u32,
    pub max_hp: u32,
}

impl Player {
    /// Create a player centered in an arena of the given size
    pub fn centered(arena: Vec2, settings: &Settings) -> Self {
        Self {
            pos: arena * 0.5,
            vel: Vec2::ZERO,
            radius: settings.player_radius,
            speed: settings.player_speed,
            hp: settings.player_max_hp,
            max_hp: settings.player_max_hp,
        }
    }

    /// Remaining health as a fraction of max (0 when max_hp is 0)
    pub fn hp_ratio(&self) -> f32 {
        if self.max_hp == 0 {
            0.0
        } else {
            self.hp as f32 / self.max_hp as f32
        }
    }
}

/// A projectile flying in a straight line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Projectile {
    pub pos: Vec2,
    /// Unit direction, fixed at spawn
    pub dir: Vec2,
    pub speed: f32,
    pub radius: f32,
    /// Seconds until expiry
    pub ttl: f32,
    /// Insertion order, assigned by the pool (lower = older)
    pub serial: u64,
}

impl Projectile {
    pub fn new(pos: Vec2, dir: Vec2, speed: f32, radius: f32, ttl: f32) -> Self {
        Self {
            pos,
            dir,
            speed,
            radius,
            ttl,
            serial: 0,
        }
    }

    /// Move along the fixed direction and burn down the ttl.
    /// Returns true once the projectile has expired.
    pub fn advance(&mut self, dt: f32) -> bool {
        self.pos += self.dir * self.speed * dt;
        self.ttl -= dt;
        self.ttl <= 0.0
    }
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Seeded RNG driving every random draw
    pub rng: Pcg32,
    pub settings: Settings,
    pub player: Player,
    pub projectiles: ProjectilePool,
    pub spawner: Spawner,
    pub phase: SessionPhase,
    /// Seconds survived (stops advancing at game over)
    pub survived: f32,
    /// Hit-flash countdown (seconds)
    pub flash_timer: f32,
    /// Camera shake countdown (seconds)
    pub shake_timer: f32,
    /// Steps simulated while running
    pub time_ticks: u64,
}

impl GameState {
    /// Create a new session with default settings
    pub fn new(seed: u64) -> Self {
        Self::with_settings(seed, Settings::default())
    }

    /// Create a new session with the given settings
    pub fn with_settings(seed: u64, settings: Settings) -> Self {
        let settings = settings.sanitized();
        let mut rng = Pcg32::seed_from_u64(seed);
        let spawner = Spawner::new(
            &mut rng,
            settings.spawn_interval_min,
            settings.spawn_interval_max,
        );
        log::info!(
            "Session started (seed {}, arena {}x{}, hp {})",
            seed,
            settings.arena_width,
            settings.arena_height,
            settings.player_max_hp
        );

        Self {
            seed,
            rng,
            player: Player::centered(settings.arena_size(), &settings),
            projectiles: ProjectilePool::with_capacity(settings.max_projectiles),
            spawner,
            phase: SessionPhase::Running,
            survived: 0.0,
            flash_timer: 0.0,
            shake_timer: 0.0,
            time_ticks: 0,
            settings,
        }
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.phase == SessionPhase::GameOver
    }

    /// Arena size as a vector
    #[inline]
    pub fn arena(&self) -> Vec2 {
        self.settings.arena_size()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_centers_player() {
        let state = GameState::new(1);
        assert_eq!(state.player.pos, Vec2::new(1500.0, 1500.0));
        assert_eq!(state.player.hp, state.player.max_hp);
        assert_eq!(state.phase, SessionPhase::Running);
        assert!(state.projectiles.is_empty());
        assert_eq!(state.survived, 0.0);
    }

    #[test]
    fn test_degenerate_settings_still_progress() {
        let mut state = GameState::with_settings(
            1,
            Settings {
                max_dt: 0.0,
                player_max_hp: 0,
                ..Settings::default()
            },
        );
        assert_eq!(state.player.hp, 1);
        assert_eq!(state.phase, SessionPhase::Running);

        // 80 steps of 0.05 s: too early for any edge spawn to reach the center
        for _ in 0..80 {
            crate::sim::tick(&mut state, crate::sim::Intent::NONE, 0.1);
        }
        assert!(state.survived > 3.9);
        assert!(state.spawner.spawned() > 0);
    }

    #[test]
    fn test_projectile_advance() {
        let mut p = Projectile::new(Vec2::ZERO, Vec2::X, 100.0, 8.0, 1.0);
        assert!(!p.advance(0.5));
        assert_eq!(p.pos, Vec2::new(50.0, 0.0));
        assert_eq!(p.ttl, 0.5);
        assert!(p.advance(0.5));
    }

    #[test]
    fn test_hp_ratio() {
        let mut player = Player::centered(Vec2::splat(100.0), &Settings::default());
        assert_eq!(player.hp_ratio(), 1.0);
        player.hp = 250;
        assert_eq!(player.hp_ratio(), 0.5);
        player.max_hp = 0;
        player.hp = 0;
        assert_eq!(player.hp_ratio(), 0.0);
    }
}
