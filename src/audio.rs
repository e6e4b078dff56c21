//! Audio cues and volume mixing
//!
//! The simulation only names what should be heard; the platform plays it at
//! the volume the mixer hands back.

use crate::settings::Settings;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Player's strike connected with the monster
    Attack,
}

impl SoundEffect {
    pub fn asset_path(&self) -> &'static str {
        match self {
            SoundEffect::Attack => "resources/attack.wav",
        }
    }
}

/// Streamed music tracks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MusicTrack {
    /// Loops for the whole session
    Background,
}

impl MusicTrack {
    pub fn asset_path(&self) -> &'static str {
        match self {
            MusicTrack::Background => "resources/music.mp3",
        }
    }
}

/// Volume settings for effects and music
#[derive(Debug, Clone, PartialEq)]
pub struct AudioMixer {
    master_volume: f32,
    sfx_volume: f32,
    music_volume: f32,
    muted: bool,
}

impl Default for AudioMixer {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}

impl AudioMixer {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            master_volume: settings.master_volume.clamp(0.0, 1.0),
            sfx_volume: settings.sfx_volume.clamp(0.0, 1.0),
            music_volume: settings.music_volume.clamp(0.0, 1.0),
            muted: settings.muted,
        }
    }

    pub fn sfx_gain(&self) -> f32 {
        self.gain(self.sfx_volume)
    }

    pub fn music_gain(&self) -> f32 {
        self.gain(self.music_volume)
    }

    fn gain(&self, channel: f32) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * channel
        }
    }
}
