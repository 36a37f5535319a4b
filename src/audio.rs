//! Audio cue dispatch
//!
//! The simulation only raises [`GameEvent`]s. This module turns them into
//! sound effects and music start/stop calls on a backend, applying the
//! volume settings. No mixing happens here; the native build ships a
//! backend that only logs the cues.

use crate::settings::Settings;
use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Obstacle hit the ship
    Hit,
    /// Ship destroyed
    Explosion,
}

impl SoundEffect {
    pub fn as_str(&self) -> &'static str {
        match self {
            SoundEffect::Hit => "hit",
            SoundEffect::Explosion => "explosion",
        }
    }
}

/// Something that can actually make noise
pub trait AudioBackend {
    fn play(&mut self, effect: SoundEffect, volume: f32);
    fn start_music(&mut self, volume: f32);
    fn stop_music(&mut self);
}

/// Backend that reports cues through the log
#[derive(Debug, Default)]
pub struct LogBackend;

impl AudioBackend for LogBackend {
    fn play(&mut self, effect: SoundEffect, volume: f32) {
        log::info!("[audio] play {} at {:.2}", effect.as_str(), volume);
    }

    fn start_music(&mut self, volume: f32) {
        log::info!("[audio] music start at {:.2}", volume);
    }

    fn stop_music(&mut self) {
        log::info!("[audio] music stop");
    }
}

/// Audio manager for the game
pub struct AudioManager<B: AudioBackend> {
    backend: B,
    sfx_volume: f32,
    music_volume: f32,
    music_playing: bool,
}

impl Default for AudioManager<LogBackend> {
    fn default() -> Self {
        Self::new(LogBackend, &Settings::default())
    }
}

impl<B: AudioBackend> AudioManager<B> {
    pub fn new(backend: B, settings: &Settings) -> Self {
        Self {
            backend,
            sfx_volume: settings.effective_sfx_volume(),
            music_volume: settings.effective_music_volume(),
            music_playing: false,
        }
    }

    pub fn music_playing(&self) -> bool {
        self.music_playing
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Play a sound effect
    pub fn play(&mut self, effect: SoundEffect) {
        if self.sfx_volume <= 0.0 {
            return;
        }
        self.backend.play(effect, self.sfx_volume);
    }

    /// React to one simulation event
    pub fn handle(&mut self, event: GameEvent) {
        match event {
            GameEvent::MusicStart => {
                // A restart mid-song restarts the loop
                if self.music_playing {
                    self.backend.stop_music();
                }
                self.backend.start_music(self.music_volume);
                self.music_playing = true;
            }
            GameEvent::MusicStop => {
                if self.music_playing {
                    self.backend.stop_music();
                    self.music_playing = false;
                }
            }
            GameEvent::Hit => self.play(SoundEffect::Hit),
            GameEvent::Explosion => self.play(SoundEffect::Explosion),
            GameEvent::PlayerGone => {}
        }
    }

    pub fn handle_all(&mut self, events: impl IntoIterator<Item = GameEvent>) {
        for event in events {
            self.handle(event);
        }
    }
}
