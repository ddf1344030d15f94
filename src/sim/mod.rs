//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod easing;
pub mod motion;
pub mod scheduler;
pub mod state;
pub mod tick;

pub use collision::{CollisionResult, Hit, circle_circle_collision, find_hits};
pub use easing::Easing;
pub use motion::{Motion, MotionSet, MotionTag};
pub use scheduler::{RepeatingTimer, Scheduler, TimerKind};
pub use state::{ArenaState, Enemy, GameEvent, Ship, Shot, WorldBounds, enemy_spawn_y};
pub use tick::{TickInput, tick, tick_with_controller};
