//! Simulation step
//!
//! Advances the whole session by one variable dt: player movement, spawning,
//! projectile flight/expiry/collision, health, and feedback timers.

use glam::Vec2;

use super::collision::circles_overlap;
use super::pool::ProjectileId;
use super::spawner::spawn_projectile;
use super::state::{GameState, SessionPhase};
use crate::consts::{HIT_FLASH_DURATION, SHAKE_DURATION};
use crate::{clamp, normalize};

/// Movement request for one step: each axis is -1, 0 or 1.
///
/// Screen convention: +x is right, +y is down.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Intent {
    pub x: i8,
    pub y: i8,
}

impl Intent {
    pub const NONE: Intent = Intent { x: 0, y: 0 };

    /// Build from raw axes; anything non-zero collapses to its sign
    pub fn new(x: i8, y: i8) -> Self {
        Self {
            x: x.signum(),
            y: y.signum(),
        }
    }

    /// Unit direction (zero when idle), so diagonals are not faster
    pub fn direction(self) -> Vec2 {
        normalize(Vec2::new(self.x.signum() as f32, self.y.signum() as f32))
    }
}

/// What happened during a single step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickEvents {
    /// A projectile was spawned this step
    pub spawned: bool,
    /// Projectiles evicted from a full pool
    pub evicted: u32,
    /// Projectiles removed by ttl expiry
    pub expired: u32,
    /// Projectiles that hit the player
    pub hits: u32,
    /// This step moved the session into GameOver
    pub game_over: bool,
}

/// Clamp a raw frame delta into `[0, max_dt]`
#[inline]
pub fn clamp_dt(dt: f32, max_dt: f32) -> f32 {
    if dt.is_nan() { 0.0 } else { clamp(dt, 0.0, max_dt) }
}

/// Advance the game state by `dt` seconds.
///
/// `dt` is clamped to `[0, settings.max_dt]` before use, so a caller passing a
/// larger dt advances the session by only `max_dt` (at the default 0.05, a
/// 0.1 s frame integrates as 0.05 s). Once the session is over this is a no-op.
pub fn tick(state: &mut GameState, intent: Intent, dt: f32) -> TickEvents {
    let mut events = TickEvents::default();
    if state.phase == SessionPhase::GameOver {
        return events;
    }
    let dt = clamp_dt(dt, state.settings.max_dt);
    state.time_ticks += 1;

    // Player: velocity is replaced each step, no inertia
    let arena = state.arena();
    let player = &mut state.player;
    player.vel = intent.direction() * player.speed;
    player.pos += player.vel * dt;
    player.pos.x = clamp(player.pos.x, player.radius, arena.x - player.radius);
    player.pos.y = clamp(player.pos.y, player.radius, arena.y - player.radius);

    // Spawning (aimed at the player's position right now)
    if state.spawner.advance(dt, &mut state.rng) {
        let projectile = spawn_projectile(&mut state.rng, &state.settings, state.player.pos);
        let (_, evicted) = state.projectiles.insert(projectile);
        if let Some(old) = evicted {
            log::debug!(
                "Projectile pool full ({}), evicted oldest (serial {}, ttl {:.2})",
                state.projectiles.capacity(),
                old.serial,
                old.ttl
            );
            events.evicted += 1;
        }
        events.spawned = true;
    }

    // Projectiles: move, expire, collide. Removal is deferred so iteration
    // over the pool is never disturbed.
    let player_pos = state.player.pos;
    let player_radius = state.player.radius;
    let mut expired: Vec<ProjectileId> = Vec::new();
    let mut hit: Vec<ProjectileId> = Vec::new();
    for (id, p) in state.projectiles.iter_mut() {
        if p.advance(dt) {
            expired.push(id);
            continue;
        }
        if circles_overlap(player_pos, player_radius, p.pos, p.radius) {
            hit.push(id);
        }
    }
    for id in expired {
        state.projectiles.remove(id);
        events.expired += 1;
    }
    for id in hit {
        state.projectiles.remove(id);
        events.hits += 1;

        state.player.hp = state.player.hp.saturating_sub(1);
        state.flash_timer = HIT_FLASH_DURATION;
        state.shake_timer = SHAKE_DURATION;
        if state.player.hp == 0 && state.phase != SessionPhase::GameOver {
            state.phase = SessionPhase::GameOver;
            events.game_over = true;
        }
    }

    state.survived += dt;
    state.flash_timer = (state.flash_timer - dt).max(0.0);
    state.shake_timer = (state.shake_timer - dt).max(0.0);

    if events.game_over {
        log::info!(
            "Game over after {:.1}s ({} steps, {} projectiles spawned)",
            state.survived,
            state.time_ticks,
            state.spawner.spawned()
        );
    }

    events
}
