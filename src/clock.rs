//! Frame timing for drivers
//!
//! Converts host timestamps (milliseconds) into the clamped dt the simulation
//! expects and keeps a smoothed FPS figure for the HUD.

use crate::consts::MAX_DT;
use crate::sim::clamp_dt;

/// FPS is re-sampled this often (seconds)
const FPS_SAMPLE_PERIOD: f32 = 0.5;
/// Weight of the previous smoothed value
const FPS_SMOOTHING: f32 = 0.85;

#[derive(Debug, Clone)]
pub struct FrameClock {
    last_ms: f64,
    max_dt: f32,
    frames: u32,
    sample_timer: f32,
    fps: f32,
    smoothed_fps: f32,
}

impl FrameClock {
    /// Start timing from `now_ms`
    pub fn new(now_ms: f64) -> Self {
        Self::with_max_dt(now_ms, MAX_DT)
    }

    pub fn with_max_dt(now_ms: f64, max_dt: f32) -> Self {
        Self {
            last_ms: now_ms,
            max_dt,
            frames: 0,
            sample_timer: 0.0,
            fps: 0.0,
            smoothed_fps: 0.0,
        }
    }

    /// Register a frame at `now_ms` and return its dt, clamped to `[0, max_dt]`.
    /// Timestamps going backwards yield 0.
    pub fn frame(&mut self, now_ms: f64) -> f32 {
        let raw = ((now_ms - self.last_ms) / 1000.0) as f32;
        self.last_ms = now_ms;
        let dt = clamp_dt(raw, self.max_dt);

        self.frames += 1;
        self.sample_timer += dt;
        if self.sample_timer >= FPS_SAMPLE_PERIOD {
            self.fps = self.frames as f32 / self.sample_timer;
            self.sample_timer = 0.0;
            self.frames = 0;
            self.smoothed_fps = if self.smoothed_fps == 0.0 {
                self.fps
            } else {
                self.smoothed_fps * FPS_SMOOTHING + self.fps * (1.0 - FPS_SMOOTHING)
            };
        }
        dt
    }

    /// Smoothed frames per second (0 until the first sample period elapses)
    pub fn fps(&self) -> f32 {
        if self.smoothed_fps > 0.0 {
            self.smoothed_fps
        } else {
            self.fps
        }
    }
}
