//! Space Arena - A side-scrolling arcade shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (spawning, motion, collisions, game state)
//! - `effects`: Particle effect handles and the explosion pool
//! - `audio`: Sound effect routing and volume handling
//! - `platform`: Secondary input device abstraction
//! - `settings`: Runtime configuration

pub mod audio;
pub mod effects;
pub mod platform;
pub mod settings;
pub mod sim;

pub use settings::{InputMode, Settings};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Default visible world size
    pub const WORLD_WIDTH: f32 = 1280.0;
    pub const WORLD_HEIGHT: f32 = 720.0;

    /// Ship movement speed (world units per second)
    pub const SHIP_SPEED: f32 = 500.0;
    /// Ship spawn distance from the left edge
    pub const SHIP_LEFT_OFFSET: f32 = 100.0;
    /// Discrete up/down targets stop this far from the top/bottom edge
    pub const SHIP_EDGE_MARGIN: f32 = 75.0;
    /// Analog stick displacement per tick at full deflection
    pub const SHIP_NUDGE_SPEED: f32 = 10.0;

    /// Shot defaults
    pub const SHOT_RADIUS: f32 = 7.5;
    /// Muzzle position relative to the ship
    pub const SHOT_OFFSET_X: f32 = 60.0;
    pub const SHOT_OFFSET_Y: f32 = -2.5;
    /// Time for a shot to cross to the right edge, regardless of distance
    pub const SHOT_TRAVEL_TIME: f32 = 1.0;
    pub const FIRE_INTERVAL: f32 = 0.1;

    /// Enemy defaults
    pub const ENEMY_RADIUS: f32 = 40.0;
    pub const ENEMY_TRAVEL_TIME: f32 = 3.0;
    pub const ENEMY_SPAWN_INTERVAL: f32 = 0.5;

    /// Star field sits this far right of the world center
    pub const STARS_X_OFFSET: f32 = 400.0;
}

/// Time needed to cover `distance` at a constant `speed`
#[inline]
pub fn travel_time(distance: f32, speed: f32) -> f32 {
    if speed <= 0.0 { 0.0 } else { distance / speed }
}
