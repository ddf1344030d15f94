//! Easing curves for position interpolation

use serde::{Deserialize, Serialize};
use std::f32::consts::PI;

/// Velocity profile applied to a motion's normalized time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Easing {
    /// Constant velocity
    #[default]
    Linear,
    /// Sinusoidal: slow start, slow finish
    SineInOut,
}

impl Easing {
    /// Map normalized time `t` in [0, 1] to normalized progress in [0, 1]
    #[inline]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::SineInOut => -0.5 * ((PI * t).cos() - 1.0),
        }
    }
}
