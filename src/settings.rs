//! Game settings and preferences
//!
//! Loaded from a JSON file next to the binary; anything missing falls back to
//! the defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::{WORLD_HEIGHT, WORLD_WIDTH};

/// How the ship is steered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum InputMode {
    /// Touch/pointer only: tap to glide to that height
    #[default]
    Pointer,
    /// Touch plus held up/down directions and an analog stick
    Discrete,
}

impl InputMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputMode::Pointer => "Pointer",
            InputMode::Discrete => "Discrete",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "pointer" | "touch" => Some(InputMode::Pointer),
            "discrete" | "keys" | "gamepad" => Some(InputMode::Discrete),
            _ => None,
        }
    }
}

/// Settings file errors
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to access settings file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid settings JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Game settings/preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Steering scheme
    pub input_mode: InputMode,

    // === World ===
    /// Visible world width in world units
    pub world_width: f32,
    /// Visible world height in world units
    pub world_height: f32,
    /// RNG seed (`None` = pick one at startup)
    pub seed: Option<u64>,

    // === Rules ===
    /// Destroy the shot as well as the enemy it hits
    pub consume_shot_on_hit: bool,

    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    /// Mute everything
    pub muted: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            input_mode: InputMode::Pointer,

            world_width: WORLD_WIDTH,
            world_height: WORLD_HEIGHT,
            seed: None,

            consume_shot_on_hit: false,

            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
        }
    }
}

impl Settings {
    /// Default settings file name
    pub const FILE_NAME: &'static str = "space_arena_settings.json";

    /// Read settings from a JSON file
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }

    /// Read settings, falling back to defaults when the file is absent or bad
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            log::info!("No settings at {}, using defaults", path.display());
            return Self::default();
        }
        match Self::load_from(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(err) => {
                log::warn!("Ignoring settings at {}: {}", path.display(), err);
                Self::default()
            }
        }
    }

    /// Write settings as pretty JSON
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<(), SettingsError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        log::info!("Settings saved");
        Ok(())
    }
}
