//! Sound effect routing
//!
//! The simulation only names sounds. A backend supplied by the host does the
//! actual playback; this module applies volume and mute on the way through.

use serde::{Deserialize, Serialize};

use crate::settings::Settings;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SoundEffect {
    /// Ambient laser loop started with the arena
    Laser,
    /// Enemy destroyed by a shot
    Explosion,
}

impl SoundEffect {
    /// Asset id handed to the host unchanged
    pub fn asset(&self) -> &'static str {
        match self {
            SoundEffect::Laser => "sounds/laser",
            SoundEffect::Explosion => "sounds/explosion",
        }
    }
}

/// Host playback, fire-and-forget
pub trait AudioBackend {
    fn play(&mut self, asset: &str, looping: bool, volume: f32);
}

/// Backend that only logs what would be played
#[derive(Debug, Default)]
pub struct LogBackend;

impl AudioBackend for LogBackend {
    fn play(&mut self, asset: &str, looping: bool, volume: f32) {
        log::debug!("play {} (loop: {}, volume: {:.2})", asset, looping, volume);
    }
}

/// Audio manager for the game
pub struct AudioManager<B: AudioBackend> {
    backend: B,
    master_volume: f32,
    sfx_volume: f32,
    muted: bool,
}

impl<B: AudioBackend> AudioManager<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
        }
    }

    /// Build from user settings
    pub fn from_settings(backend: B, settings: &Settings) -> Self {
        let mut audio = Self::new(backend);
        audio.set_master_volume(settings.master_volume);
        audio.set_sfx_volume(settings.sfx_volume);
        audio.set_muted(settings.muted);
        audio
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Set SFX volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.sfx_volume = vol.clamp(0.0, 1.0);
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    /// Get effective volume
    fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    /// Play a sound effect
    pub fn play(&mut self, effect: SoundEffect, looping: bool) {
        let vol = self.effective_volume();
        if vol <= 0.0 {
            return;
        }
        self.backend.play(effect.asset(), looping, vol);
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }
}
