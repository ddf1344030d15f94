//! Platform abstraction layer
//!
//! Handles host input devices that are not part of the per-tick snapshot:
//! - Game controllers polled once per tick
//! - Keyboard/d-pad directional state

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Held vertical directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DirectionalState {
    pub up: bool,
    pub down: bool,
}

impl DirectionalState {
    pub const NONE: Self = Self {
        up: false,
        down: false,
    };

    /// Combine two sources; a direction is held if either source holds it
    pub fn merge(self, other: Self) -> Self {
        Self {
            up: self.up || other.up,
            down: self.down || other.down,
        }
    }

    pub fn is_idle(&self) -> bool {
        !self.up && !self.down
    }
}

/// Snapshot of a game controller
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ControllerState {
    pub directions: DirectionalState,
    /// Right analog stick, each axis in [-1, 1] (y grows downward)
    pub right_stick: Vec2,
}

/// Controller lookup failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeviceError {
    /// No controller is bound to this player slot
    #[error("no controller connected for player {0}")]
    PlayerNotFound(u8),
    /// The controller disappeared while being read
    #[error("controller device not found")]
    DeviceNotFound,
}

/// A secondary input source polled once per tick
pub trait GameController {
    fn poll(&mut self) -> Result<ControllerState, DeviceError>;
}

/// Poll a controller, treating a missing device as "no input this tick"
pub fn poll_or_idle(controller: &mut dyn GameController) -> ControllerState {
    match controller.poll() {
        Ok(state) => state,
        Err(err) => {
            log::trace!("Controller poll skipped: {}", err);
            ControllerState::default()
        }
    }
}

/// A controller that is never connected
#[derive(Debug, Clone, Copy, Default)]
pub struct Disconnected {
    pub player: u8,
}

impl GameController for Disconnected {
    fn poll(&mut self) -> Result<ControllerState, DeviceError> {
        Err(DeviceError::PlayerNotFound(self.player))
    }
}

/// Plays back a fixed sequence of poll results, then reports disconnection
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub(crate) struct ScriptedController {
    frames: std::collections::VecDeque<Result<ControllerState, DeviceError>>,
}

#[cfg(test)]
impl ScriptedController {
    pub(crate) fn new(frames: impl IntoIterator<Item = Result<ControllerState, DeviceError>>) -> Self {
        Self {
            frames: frames.into_iter().collect(),
        }
    }
}

#[cfg(test)]
impl GameController for ScriptedController {
    fn poll(&mut self) -> Result<ControllerState, DeviceError> {
        self.frames.pop_front().unwrap_or(Err(DeviceError::DeviceNotFound))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_directions() {
        let a = DirectionalState { up: true, down: false };
        let b = DirectionalState { up: false, down: true };
        assert_eq!(a.merge(b), DirectionalState { up: true, down: true });
        assert!(DirectionalState::NONE.merge(DirectionalState::NONE).is_idle());
    }

    #[test]
    fn test_missing_device_is_idle() {
        let mut pad = Disconnected { player: 1 };
        assert_eq!(pad.poll(), Err(DeviceError::PlayerNotFound(1)));
        assert_eq!(poll_or_idle(&mut pad), ControllerState::default());
    }

    #[test]
    fn test_scripted_controller_recovers_after_error() {
        let held = ControllerState {
            directions: DirectionalState { up: true, down: false },
            right_stick: Vec2::ZERO,
        };
        let mut pad = ScriptedController::new([Err(DeviceError::DeviceNotFound), Ok(held)]);
        assert_eq!(poll_or_idle(&mut pad), ControllerState::default());
        assert_eq!(poll_or_idle(&mut pad), held);
        assert_eq!(poll_or_idle(&mut pad), ControllerState::default());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            DeviceError::PlayerNotFound(1).to_string(),
            "no controller connected for player 1"
        );
    }
}
