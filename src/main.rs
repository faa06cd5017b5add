//! Dodge Arena headless driver
//!
//! Runs one seeded session with the autopilot at a steady 60 Hz frame rate
//! and prints the final snapshot as JSON.
//!
//! Usage: `dodge-arena [seed] [settings.json]`

use std::path::Path;

use dodge_arena::sim::{GameState, autopilot_intent, tick};
use dodge_arena::{FrameClock, Settings};

/// Host frame period in milliseconds
const FRAME_MS: f64 = 1000.0 / 60.0;
/// Stop the demo after this much survived time
const SESSION_LIMIT_SECS: f32 = 600.0;
/// Progress log cadence
const REPORT_EVERY_SECS: f32 = 30.0;

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seed = match args.next() {
        Some(arg) => arg.parse().unwrap_or_else(|_| {
            log::warn!("Invalid seed {:?}, using clock seed", arg);
            clock_seed()
        }),
        None => clock_seed(),
    };
    let settings = args
        .next()
        .map(|path| Settings::load(Path::new(&path)))
        .unwrap_or_default();

    log::info!("Dodge Arena (headless) starting...");
    let mut state = GameState::with_settings(seed, settings);
    let mut now = 0.0;
    let mut clock = FrameClock::with_max_dt(now, state.settings.max_dt);
    let mut next_report = REPORT_EVERY_SECS;

    while !state.is_game_over() && state.survived < SESSION_LIMIT_SECS {
        now += FRAME_MS;
        let dt = clock.frame(now);
        let intent = autopilot_intent(&state);
        tick(&mut state, intent, dt);

        if state.survived >= next_report {
            log::info!(
                "t={:.0}s hp {}/{} projectiles {} fps {:.0}",
                state.survived,
                state.player.hp,
                state.player.max_hp,
                state.projectiles.len(),
                clock.fps()
            );
            next_report += REPORT_EVERY_SECS;
        }
    }

    if !state.is_game_over() {
        log::info!("Session limit reached ({}s)", SESSION_LIMIT_SECS);
    }

    match serde_json::to_string_pretty(&state.snapshot()) {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("Failed to serialize snapshot: {}", e),
    }
}

/// Seed from wall-clock time when none is given
fn clock_seed() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}
