//! Game settings and preferences
//!
//! Read once at startup from a JSON file. Missing fields fall back to their
//! defaults; a missing or broken file falls back to defaults entirely.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::tuning::Tuning;

/// Environment variable naming an explicit settings file
pub const SETTINGS_ENV: &str = "MONSTER_BATTLE_SETTINGS";
/// Looked up in the working directory when the variable is unset
pub const DEFAULT_SETTINGS_FILE: &str = "settings.json";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid settings: {0}")]
    Invalid(String),
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Gameplay balance
    pub tuning: Tuning,

    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    /// Music volume (0.0 - 1.0)
    pub music_volume: f32,
    pub muted: bool,

    // === Headless runner ===
    /// Fixed RNG seed; the wall clock is used when absent
    pub seed: Option<u64>,
    /// Frames the autopilot plays before heading back to the menu to quit
    pub autopilot_frames: u64,
    /// Hard frame cap, treated like the window being closed
    pub max_frames: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tuning: Tuning::default(),

            master_volume: 0.8,
            sfx_volume: 1.0,
            music_volume: 0.7,
            muted: false,

            seed: None,
            autopilot_frames: 60 * 60,
            max_frames: 60 * 60 * 5,
        }
    }
}

impl Settings {
    /// Parse and validate settings from a JSON string
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Read settings from a file
    pub fn from_path(path: &Path) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        for (name, vol) in [
            ("master_volume", self.master_volume),
            ("sfx_volume", self.sfx_volume),
            ("music_volume", self.music_volume),
        ] {
            if !(0.0..=1.0).contains(&vol) {
                return Err(SettingsError::Invalid(format!(
                    "{name} must be within 0.0..=1.0, got {vol}"
                )));
            }
        }
        self.tuning.validate()
    }

    /// Where settings are read from: `$MONSTER_BATTLE_SETTINGS` or `./settings.json`
    pub fn default_path() -> PathBuf {
        std::env::var_os(SETTINGS_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SETTINGS_FILE))
    }

    /// Load settings, falling back to defaults (never fails)
    pub fn load() -> Self {
        let path = Self::default_path();
        if !path.exists() {
            log::info!("Using default settings");
            return Self::default();
        }

        match Self::from_path(&path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("{e}; using default settings");
                Self::default()
            }
        }
    }
}
