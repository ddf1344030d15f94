//! Time-based position interpolation
//!
//! A `Motion` moves a point from where it started to a target over a fixed
//! duration. Completion is reported by the caller checking `is_finished` after
//! `advance`, so everything stays on the simulation tick.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::easing::Easing;

/// Identifier attached to an in-flight motion for selective cancellation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MotionTag {
    ShipUp,
    ShipDown,
}

impl MotionTag {
    /// Tag of the opposite vertical direction
    pub fn opposite(self) -> Self {
        match self {
            MotionTag::ShipUp => MotionTag::ShipDown,
            MotionTag::ShipDown => MotionTag::ShipUp,
        }
    }
}

/// A "move to" action
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Motion {
    pub from: Vec2,
    pub to: Vec2,
    /// Total duration in seconds
    pub duration: f32,
    /// Seconds elapsed so far (never exceeds `duration`)
    pub elapsed: f32,
    pub easing: Easing,
    pub tag: Option<MotionTag>,
}

impl Motion {
    /// Linear, untagged motion
    pub fn move_to(from: Vec2, to: Vec2, duration: f32) -> Self {
        Self {
            from,
            to,
            duration: duration.max(0.0),
            elapsed: 0.0,
            easing: Easing::Linear,
            tag: None,
        }
    }

    pub fn eased(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn tagged(mut self, tag: MotionTag) -> Self {
        self.tag = Some(tag);
        self
    }

    /// Normalized time in [0, 1]
    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            1.0
        } else {
            (self.elapsed / self.duration).min(1.0)
        }
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Interpolated position at the current elapsed time
    pub fn position(&self) -> Vec2 {
        if self.is_finished() {
            return self.to;
        }
        self.from.lerp(self.to, self.easing.apply(self.progress()))
    }

    /// Step forward by `dt` seconds and return the new position
    pub fn advance(&mut self, dt: f32) -> Vec2 {
        self.elapsed = (self.elapsed + dt).min(self.duration);
        self.position()
    }
}

/// All motions currently running on a single node
///
/// Motions are applied in the order they were started; the last one to write
/// wins the position for that tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MotionSet {
    motions: Vec<Motion>,
}

impl MotionSet {
    /// Start a motion. An untagged motion supersedes any other untagged one.
    pub fn run(&mut self, motion: Motion) {
        if motion.tag.is_none() {
            self.motions.retain(|m| m.tag.is_some());
        }
        self.motions.push(motion);
    }

    /// Cancel every motion carrying `tag`; returns how many were stopped
    pub fn cancel(&mut self, tag: MotionTag) -> usize {
        let before = self.motions.len();
        self.motions.retain(|m| m.tag != Some(tag));
        before - self.motions.len()
    }

    pub fn stop_all(&mut self) {
        self.motions.clear();
    }

    pub fn is_running(&self, tag: MotionTag) -> bool {
        self.motions.iter().any(|m| m.tag == Some(tag))
    }

    pub fn is_empty(&self) -> bool {
        self.motions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.motions.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Motion> {
        self.motions.iter()
    }

    /// Advance all motions, returning the node's new position (or `pos` if idle).
    /// Finished motions are dropped.
    pub fn advance(&mut self, pos: Vec2, dt: f32) -> Vec2 {
        let mut pos = pos;
        for motion in &mut self.motions {
            pos = motion.advance(dt);
        }
        self.motions.retain(|m| !m.is_finished());
        pos
    }
}
