use std::collections::HashMap;
use std::path::Path;

use kira::{
    manager::{AudioManager, AudioManagerSettings, backend::DefaultBackend},
    sound::{static_sound::{StaticSoundData, StaticSoundSettings}, PlaybackRate},
    Volume,
};
use log::warn;

use crate::particles::pseudo_rand;

/// Sound name played when the focused tile changes.
pub const HOVER_SOUND: &str = "menu_hover";
/// Sound name played when a level is confirmed.
pub const SELECT_SOUND: &str = "menu_select";

/// Short audio/visual feedback fired by menu screens. Fire-and-forget.
pub trait FeedbackCues {
    fn on_hover_changed(&mut self);
    fn on_confirmed(&mut self);
}

/// Cue sink for headless hosts.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentCues;

impl FeedbackCues for SilentCues {
    fn on_hover_changed(&mut self) {}
    fn on_confirmed(&mut self) {}
}

/// Configuration for playing a sound with variation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SoundConfig {
    pub volume: f32,
    pub pitch: f32,
    /// Random pitch variation range (e.g. 0.1 = +/- 10%)
    pub pitch_variation: f32,
    /// Random volume variation range
    pub volume_variation: f32,
}

impl Default for SoundConfig {
    fn default() -> Self {
        Self { volume: 1.0, pitch: 1.0, pitch_variation: 0.0, volume_variation: 0.0 }
    }
}

impl SoundConfig {
    /// Pitch and volume for one playback, jittered by the two random samples
    /// `pitch_roll` and `volume_roll` in `[0, 1)`. Volume is clamped to `0..=2`.
    pub fn resolve(&self, pitch_roll: f32, volume_roll: f32) -> (f32, f32) {
        let pitch = self.pitch + (pitch_roll - 0.5) * 2.0 * self.pitch_variation;
        let volume = self.volume + (volume_roll - 0.5) * 2.0 * self.volume_variation;
        (pitch, volume.clamp(0.0, 2.0))
    }
}

pub struct AudioContext {
    /// `None` when audio hardware is unavailable (headless / CI / no audio device).
    manager: Option<AudioManager>,
    sounds: HashMap<String, StaticSoundData>,
    time_seed: u64,
}

impl AudioContext {
    pub fn new() -> Self {
        let manager = match AudioManager::<DefaultBackend>::new(AudioManagerSettings::default()) {
            Ok(m) => Some(m),
            Err(e) => {
                warn!("failed to initialize audio manager: {e}; audio disabled");
                None
            }
        };
        Self { manager, sounds: HashMap::new(), time_seed: 0 }
    }

    /// Returns true if audio hardware is available.
    pub fn is_available(&self) -> bool { self.manager.is_some() }

    /// Load a sound file (OGG, WAV, etc.) into memory.
    /// Logs a warning and returns if the file cannot be read.
    pub fn load_sound<P: AsRef<Path>>(&mut self, name: &str, path: P) {
        match StaticSoundData::from_file(path.as_ref()) {
            Ok(sound) => { self.sounds.insert(name.to_string(), sound); }
            Err(e) => warn!("failed to load sound '{name}' from '{}': {e}", path.as_ref().display()),
        }
    }

    /// Play a sound once. Unknown names and missing hardware are silent no-ops.
    pub fn play(&mut self, name: &str, config: SoundConfig) {
        let Some(manager) = self.manager.as_mut() else { return; };
        let Some(data) = self.sounds.get(name) else { return; };

        // Advance seed independently for each random variable to avoid LCG correlation.
        self.time_seed = self.time_seed.wrapping_add(1);
        let pitch_roll = pseudo_rand(self.time_seed);
        self.time_seed = self.time_seed.wrapping_add(1);
        let volume_roll = pseudo_rand(self.time_seed);
        let (pitch, volume) = config.resolve(pitch_roll, volume_roll);

        let mut settings = StaticSoundSettings::new();
        settings.playback_rate = PlaybackRate::Factor(pitch as f64).into();
        settings.volume = Volume::Amplitude(volume as f64).into();

        if let Err(e) = manager.play(data.clone().with_settings(settings)) {
            warn!("failed to play sound '{name}': {e}");
        }
    }
}

impl Default for AudioContext {
    fn default() -> Self { Self::new() }
}

/// `FeedbackCues` that plays `HOVER_SOUND` / `SELECT_SOUND` through kira.
pub struct AudioCues {
    pub audio: AudioContext,
    pub hover: SoundConfig,
    pub select: SoundConfig,
}

impl AudioCues {
    pub fn new(audio: AudioContext) -> Self {
        Self {
            audio,
            hover: SoundConfig { volume: 0.6, pitch_variation: 0.05, ..SoundConfig::default() },
            select: SoundConfig::default(),
        }
    }
}

impl FeedbackCues for AudioCues {
    fn on_hover_changed(&mut self) {
        self.audio.play(HOVER_SOUND, self.hover);
    }

    fn on_confirmed(&mut self) {
        self.audio.play(SELECT_SOUND, self.select);
    }
}
