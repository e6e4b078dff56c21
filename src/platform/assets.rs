//! Asset and audio-device lifetime
//!
//! Every handle is acquired in [`AssetSet::load`] and released by `Drop`,
//! so each is freed exactly once however the run ends. The headless runner
//! has no GPU or sound card; handles only record their release.

use std::cell::Cell;
use std::rc::Rc;

use crate::audio::{MusicTrack, SoundEffect};
use crate::renderer::TextureId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    Texture,
    Sound,
    Music,
}

/// A loaded asset handle, unloaded on drop
#[derive(Debug)]
pub struct LoadedAsset {
    kind: AssetKind,
    path: &'static str,
    releases: Rc<Cell<usize>>,
}

impl LoadedAsset {
    fn load(kind: AssetKind, path: &'static str, releases: &Rc<Cell<usize>>) -> Self {
        log::debug!("Loaded {:?} {}", kind, path);
        Self {
            kind,
            path,
            releases: Rc::clone(releases),
        }
    }

    pub fn path(&self) -> &'static str {
        self.path
    }
}

impl Drop for LoadedAsset {
    fn drop(&mut self) {
        self.releases.set(self.releases.get() + 1);
        log::debug!("Unloaded {:?} {}", self.kind, self.path);
    }
}

/// Open audio device, closed on drop
#[derive(Debug)]
pub struct AudioDevice {
    releases: Rc<Cell<usize>>,
}

impl Drop for AudioDevice {
    fn drop(&mut self) {
        self.releases.set(self.releases.get() + 1);
        log::debug!("Audio device closed");
    }
}

/// Everything acquired at startup
#[derive(Debug)]
pub struct AssetSet {
    textures: Vec<LoadedAsset>,
    sounds: Vec<LoadedAsset>,
    music: LoadedAsset,
    // Dropped last: sounds must go before the device
    _device: AudioDevice,
    releases: Rc<Cell<usize>>,
}

impl AssetSet {
    pub fn load() -> Self {
        let releases = Rc::new(Cell::new(0));
        let device = AudioDevice {
            releases: Rc::clone(&releases),
        };
        log::debug!("Audio device opened");

        let textures: Vec<_> = TextureId::ALL
            .iter()
            .map(|t| LoadedAsset::load(AssetKind::Texture, t.asset_path(), &releases))
            .collect();
        let sounds = vec![LoadedAsset::load(
            AssetKind::Sound,
            SoundEffect::Attack.asset_path(),
            &releases,
        )];
        let music = LoadedAsset::load(
            AssetKind::Music,
            MusicTrack::Background.asset_path(),
            &releases,
        );

        log::info!(
            "Assets ready: {} textures, {} sounds, music {}",
            textures.len(),
            sounds.len(),
            music.path()
        );

        Self {
            textures,
            sounds,
            music,
            _device: device,
            releases,
        }
    }

    /// Paths of every loaded asset
    pub fn paths(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.textures
            .iter()
            .chain(&self.sounds)
            .chain(std::iter::once(&self.music))
            .map(LoadedAsset::path)
    }

    /// Number of handles (assets plus the device) that will be released
    pub fn handle_count(&self) -> usize {
        self.paths().count() + 1
    }

    /// Shared counter of released handles, readable after the set is gone
    pub fn release_counter(&self) -> Rc<Cell<usize>> {
        Rc::clone(&self.releases)
    }
}
