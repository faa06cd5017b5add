//! Read-only view of the simulation for presentation (HUD, drawing, camera)

use glam::Vec2;
use serde::Serialize;

use super::state::GameState;
use crate::consts::{HIT_FLASH_DURATION, SHAKE_DURATION, SHAKE_MAGNITUDE};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerView {
    pub pos: Vec2,
    pub radius: f32,
    pub hp: u32,
    pub max_hp: u32,
    /// hp / max_hp, for the health bar
    pub hp_ratio: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProjectileView {
    pub pos: Vec2,
    pub radius: f32,
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub arena: Vec2,
    pub player: PlayerView,
    pub projectiles: Vec<ProjectileView>,
    pub projectile_count: usize,
    /// Seconds survived
    pub survived: f32,
    /// Red overlay alpha, 1 right after a hit fading to 0
    pub flash_intensity: f32,
    /// Shake strength, 1 right after a hit fading to 0
    pub shake_intensity: f32,
    /// Peak camera offset in world units for this frame
    pub shake_magnitude: f32,
    pub game_over: bool,
}

impl GameState {
    /// Capture the current state for presentation
    pub fn snapshot(&self) -> Snapshot {
        let shake_intensity = self.shake_intensity();
        Snapshot {
            arena: self.arena(),
            player: PlayerView {
                pos: self.player.pos,
                radius: self.player.radius,
                hp: self.player.hp,
                max_hp: self.player.max_hp,
                hp_ratio: self.player.hp_ratio(),
            },
            projectiles: self
                .projectiles
                .values()
                .map(|p| ProjectileView {
                    pos: p.pos,
                    radius: p.radius,
                })
                .collect(),
            projectile_count: self.projectiles.len(),
            survived: self.survived,
            flash_intensity: self.flash_intensity(),
            shake_intensity,
            shake_magnitude: SHAKE_MAGNITUDE * shake_intensity,
            game_over: self.is_game_over(),
        }
    }

    /// Hit-flash timer as a 0..=1 fraction of its full duration
    pub fn flash_intensity(&self) -> f32 {
        (self.flash_timer / HIT_FLASH_DURATION).clamp(0.0, 1.0)
    }

    /// Shake timer as a 0..=1 fraction of its full duration
    pub fn shake_intensity(&self) -> f32 {
        (self.shake_timer / SHAKE_DURATION).clamp(0.0, 1.0)
    }
}
