//! Headless native runner
//!
//! Runs the frame loop without a window: the autopilot supplies input, render
//! requests are consumed (sounds routed through the mixer, draw commands
//! counted) and the loop ends on a menu exit or when the frame cap is hit.

use rand_pcg::Pcg32;

use super::assets::AssetSet;
use super::autopilot::Autopilot;
use super::input::KeyState;
use crate::audio::AudioMixer;
use crate::consts::HEADLESS_DT;
use crate::renderer::RenderRequest;
use crate::settings::Settings;
use crate::sim::{FrameInput, Phase, Session, session_rng};

/// Why the loop stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExitReason {
    /// Cancel pressed on the menu
    #[default]
    MenuCancel,
    /// Frame cap reached (stands in for the window closing)
    WindowClosed,
}

/// Stats for a finished run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub seed: u64,
    pub frames: u64,
    /// Frames the autopilot spent in Playing
    pub playing_frames: u64,
    pub final_score: u64,
    pub kills: u64,
    pub games_lost: u32,
    pub sounds_played: u64,
    pub draw_commands: u64,
    pub exit: ExitReason,
}

pub struct HeadlessPlatform {
    assets: AssetSet,
    mixer: AudioMixer,
    rng: Pcg32,
    seed: u64,
    keys: KeyState,
    autopilot: Autopilot,
    max_frames: u64,
    music_started: bool,
}

impl HeadlessPlatform {
    pub fn new(settings: &Settings) -> Self {
        let (rng, seed) = session_rng(settings.seed);
        log::info!("Session seed: {}", seed);
        Self {
            assets: AssetSet::load(),
            mixer: AudioMixer::from_settings(settings),
            rng,
            seed,
            keys: KeyState::new(),
            autopilot: Autopilot::new(settings.autopilot_frames),
            max_frames: settings.max_frames,
            music_started: false,
        }
    }

    pub fn assets(&self) -> &AssetSet {
        &self.assets
    }

    /// Run frames until the session asks to exit or the frame cap is hit
    pub fn run(&mut self, session: &mut Session) -> RunSummary {
        let mut summary = RunSummary {
            seed: self.seed,
            ..Default::default()
        };
        let start_score = session.score;
        let mut last_phase = session.phase;

        loop {
            if summary.frames >= self.max_frames {
                log::info!("Frame cap reached, closing window");
                summary.exit = ExitReason::WindowClosed;
                break;
            }

            self.autopilot.drive(session, &mut self.keys);
            let input = FrameInput::capture(&self.keys);
            let request = crate::advance(session, &input, HEADLESS_DT, &mut self.rng);
            summary.frames += 1;

            if session.phase != last_phase {
                if session.phase == Phase::GameOver {
                    summary.games_lost += 1;
                }
                last_phase = session.phase;
            }

            self.present(&request, &mut summary);

            if request.exit_requested {
                summary.exit = ExitReason::MenuCancel;
                break;
            }
        }

        summary.playing_frames = self.autopilot.frames_played();
        summary.final_score = session.score;
        summary.kills = (session.score - start_score) / session.tuning.kill_score.max(1);
        summary
    }

    fn present(&mut self, request: &RenderRequest, summary: &mut RunSummary) {
        summary.draw_commands += request.commands.len() as u64;

        if let Some(track) = request.music {
            if !self.music_started {
                log::info!(
                    "Streaming {} at gain {:.2}",
                    track.asset_path(),
                    self.mixer.music_gain()
                );
                self.music_started = true;
            }
        }

        for sound in &request.sounds {
            log::debug!(
                "Play {} at gain {:.2}",
                sound.asset_path(),
                self.mixer.sfx_gain()
            );
            summary.sounds_played += 1;
        }
    }
}
