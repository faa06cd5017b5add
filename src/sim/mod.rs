//! Deterministic simulation module
//!
//! All gameplay logic lives here:
//! - Variable dt, clamped to `Settings::max_dt`
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod pool;
pub mod snapshot;
pub mod spawner;
pub mod state;
pub mod tick;

pub use autopilot::autopilot_intent;
pub use collision::circles_overlap;
pub use pool::{ProjectileId, ProjectilePool};
pub use snapshot::{PlayerView, ProjectileView, Snapshot};
pub use spawner::{Edge, Spawner, spawn_projectile};
pub use state::{GameState, Player, Projectile, SessionPhase};
pub use tick::{Intent, TickEvents, clamp_dt, tick};
