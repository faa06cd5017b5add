//! Demo autopilot
//!
//! Plays the game from the current state: sidesteps the most urgent incoming
//! projectile, otherwise drifts back toward the middle of the arena. Only
//! reads state; the caller feeds the returned intent to `tick`.

use glam::Vec2;

use super::state::GameState;
use super::tick::Intent;

/// How far ahead (seconds) an approaching projectile counts as a threat
const THREAT_HORIZON: f32 = 1.2;
/// Extra clearance on top of the combined radii
const DODGE_MARGIN: f32 = 20.0;
/// Distance from a wall where the autopilot starts pushing back inward
const WALL_MARGIN: f32 = 120.0;
/// Close enough to the center to stop homing
const CENTER_DEADZONE: f32 = 200.0;
/// sin(22.5°): splits a direction into 8 compass sectors
const AXIS_THRESHOLD: f32 = 0.382;

/// Choose a movement intent for the current state
pub fn autopilot_intent(state: &GameState) -> Intent {
    let player = &state.player;
    let arena = state.arena();
    let center = arena * 0.5;

    let mut desired = match most_urgent_threat(state) {
        Some((dir, rel)) => {
            // Step sideways off the projectile's line, away from it
            let perp = Vec2::new(-dir.y, dir.x);
            let side = if perp.dot(rel) >= 0.0 { 1.0 } else { -1.0 };
            perp * side
        }
        None => {
            let to_center = center - player.pos;
            if to_center.length_squared() > CENTER_DEADZONE * CENTER_DEADZONE {
                to_center.normalize_or_zero() * 0.5
            } else {
                Vec2::ZERO
            }
        }
    };

    // Walls
    if player.pos.x < player.radius + WALL_MARGIN {
        desired.x += 1.0;
    } else if player.pos.x > arena.x - player.radius - WALL_MARGIN {
        desired.x -= 1.0;
    }
    if player.pos.y < player.radius + WALL_MARGIN {
        desired.y += 1.0;
    } else if player.pos.y > arena.y - player.radius - WALL_MARGIN {
        desired.y -= 1.0;
    }

    quantize(desired)
}

/// Direction and player-relative offset of the projectile that will pass
/// closest soonest, if any will pass within dodging range
fn most_urgent_threat(state: &GameState) -> Option<(Vec2, Vec2)> {
    let player = &state.player;
    state
        .projectiles
        .values()
        .filter_map(|p| {
            let rel = player.pos - p.pos;
            let closing = p.dir.dot(rel);
            if closing <= 0.0 || p.speed <= 0.0 {
                return None;
            }
            let time_to_closest = closing / p.speed;
            if time_to_closest > THREAT_HORIZON || time_to_closest > p.ttl {
                return None;
            }
            let miss_distance = p.dir.perp_dot(rel).abs();
            if miss_distance > player.radius + p.radius + DODGE_MARGIN {
                return None;
            }
            Some((time_to_closest, p.dir, rel))
        })
        .min_by(|a, b| a.0.total_cmp(&b.0))
        .map(|(_, dir, rel)| (dir, rel))
}

/// Snap a free direction onto the 8-way key grid
fn quantize(v: Vec2) -> Intent {
    let n = v.normalize_or_zero();
    let axis = |c: f32| {
        if c > AXIS_THRESHOLD {
            1
        } else if c < -AXIS_THRESHOLD {
            -1
        } else {
            0
        }
    };
    Intent::new(axis(n.x), axis(n.y))
}
