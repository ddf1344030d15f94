//! Particle effect handles
//!
//! The host owns the actual particle simulation and drawing. The arena only
//! tracks where each effect sits, whether it is visible and whether it is
//! emitting, and tells the host when it was restarted.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Explosion burst played on every hit
pub const EXPLOSION_DEFINITION: &str = "implode.plist";
/// Scrolling background stars
pub const STARS_DEFINITION: &str = "stars.plist";
/// Built-in fire emitter used for the ship exhaust
pub const EXHAUST_DEFINITION: &str = "fire";

/// How long one explosion burst emits before it stops on its own
pub const EXPLOSION_DURATION: f32 = 0.75;

/// A particle system instance placed in the world
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParticleEffect {
    /// Opaque asset id passed through to the host
    pub definition: String,
    pub position: Vec2,
    /// Degrees
    pub rotation: f32,
    pub scale: f32,
    pub visible: bool,
    /// Currently emitting
    pub active: bool,
    /// Host should detach the effect once it finishes
    pub auto_remove_on_finish: bool,
    /// Emission time before the effect stops itself (`None` = loops forever)
    pub duration: Option<f32>,
    pub elapsed: f32,
    /// Number of times the simulation was restarted
    pub resets: u32,
    /// Set once an auto-removing effect has finished
    pub removed: bool,
}

impl ParticleEffect {
    /// A looping, visible, emitting effect
    pub fn new(definition: impl Into<String>) -> Self {
        Self {
            definition: definition.into(),
            position: Vec2::ZERO,
            rotation: 0.0,
            scale: 1.0,
            visible: true,
            active: true,
            auto_remove_on_finish: true,
            duration: None,
            elapsed: 0.0,
            resets: 0,
            removed: false,
        }
    }

    pub fn with_duration(mut self, seconds: f32) -> Self {
        self.duration = Some(seconds.max(0.0));
        self
    }

    pub fn at(mut self, position: Vec2) -> Self {
        self.position = position;
        self
    }

    pub fn start(&mut self) {
        self.active = true;
        self.removed = false;
        self.elapsed = 0.0;
    }

    pub fn stop(&mut self) {
        self.active = false;
    }

    /// Restart emission from scratch, interrupting any burst in progress
    pub fn reset(&mut self) {
        self.start();
        self.resets += 1;
    }

    /// Returns true when emission ended during this step
    pub fn advance(&mut self, dt: f32) -> bool {
        if !self.active {
            return false;
        }
        self.elapsed += dt;
        match self.duration {
            Some(d) if self.elapsed >= d => {
                self.active = false;
                if self.auto_remove_on_finish {
                    self.removed = true;
                }
                true
            }
            _ => false,
        }
    }
}

/// Reusable explosion effects, handed out one per play session
#[derive(Debug, Default)]
pub struct ExplosionPool {
    idle: Vec<ParticleEffect>,
    created: u32,
}

impl ExplosionPool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take an explosion for a session: stopped, hidden, never auto-removed
    pub fn acquire(&mut self) -> ParticleEffect {
        match self.idle.pop() {
            Some(effect) => effect,
            None => {
                self.created += 1;
                log::debug!("Created explosion effect #{}", self.created);
                let mut effect = ParticleEffect::new(EXPLOSION_DEFINITION)
                    .with_duration(EXPLOSION_DURATION);
                effect.auto_remove_on_finish = false;
                effect.stop();
                effect.visible = false;
                effect
            }
        }
    }

    /// Return an explosion at the end of a session
    pub fn release(&mut self, mut effect: ParticleEffect) {
        effect.stop();
        effect.visible = false;
        effect.elapsed = 0.0;
        effect.resets = 0;
        effect.removed = false;
        self.idle.push(effect);
    }

    pub fn idle_count(&self) -> usize {
        self.idle.len()
    }

    /// Total effects ever created by this pool
    pub fn created(&self) -> u32 {
        self.created
    }
}
