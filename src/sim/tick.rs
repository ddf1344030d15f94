//! Fixed timestep simulation tick
//!
//! Core game loop that advances the arena deterministically.

use glam::Vec2;

use super::scheduler::TimerKind;
use super::state::ArenaState;
use crate::platform::{DirectionalState, GameController, poll_or_idle};
use crate::settings::InputMode;

/// Input for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Touches that began this tick, in platform order
    pub touches: Vec<Vec2>,
    /// Held keyboard directions
    pub keys: DirectionalState,
    /// Analog stick reading, each axis in [-1, 1]
    pub right_stick: Vec2,
}

impl TickInput {
    /// Single tap at `pos`
    pub fn touch(pos: Vec2) -> Self {
        Self {
            touches: vec![pos],
            ..Default::default()
        }
    }

    /// Keyboard state only
    pub fn keys(up: bool, down: bool) -> Self {
        Self {
            keys: DirectionalState { up, down },
            ..Default::default()
        }
    }
}

/// Advance the arena by one fixed timestep
pub fn tick(state: &mut ArenaState, input: &TickInput, dt: f32) {
    state.time_ticks += 1;
    state.elapsed += dt;

    // Touch steering is always live
    if let Some(touch) = input.touches.first() {
        state.move_ship_to(touch.y);
    }

    if state.input_mode == InputMode::Discrete {
        let dirs = input.keys;
        if dirs.up {
            state.move_ship_up();
        } else if dirs.down {
            state.move_ship_down();
        } else if state.ship.moving_up || state.ship.moving_down {
            state.halt_ship();
        }

        if input.right_stick != Vec2::ZERO {
            state.nudge_ship(input.right_stick);
        }
    }

    state.advance_motions(dt);
    state.advance_effects(dt);

    for timer in state.scheduler.advance(dt) {
        match timer {
            TimerKind::Fire => {
                state.fire();
            }
            TimerKind::SpawnEnemy => {
                state.spawn_enemy();
            }
            TimerKind::CheckCollisions => {
                state.check_collisions();
            }
        }
    }
}

/// Advance one tick, polling a secondary controller first in discrete mode
///
/// A missing controller counts as no input this tick and is polled again on
/// the next one.
pub fn tick_with_controller(
    state: &mut ArenaState,
    input: &TickInput,
    controller: &mut dyn GameController,
    dt: f32,
) {
    if state.input_mode != InputMode::Discrete {
        tick(state, input, dt);
        return;
    }

    let pad = poll_or_idle(controller);
    let mut input = input.clone();
    input.keys = input.keys.merge(pad.directions);
    input.right_stick += pad.right_stick;
    tick(state, &input, dt);
}
