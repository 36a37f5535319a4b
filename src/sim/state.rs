//! Game session state
//!
//! One `GameState` owns everything a run needs. Restarting replaces it
//! wholesale rather than resetting fields piecemeal.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::difficulty::Difficulty;
use super::obstacles::ObstacleField;
use super::particles::ParticleSystem;
use super::player::{LifeState, Player};
use crate::settings::Settings;
use crate::tuning::Tuning;

/// One-shot signals for the audio/UI collaborators, drained each frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Background loop should (re)start
    MusicStart,
    /// Background loop should stop
    MusicStop,
    /// An obstacle hit the ship and cost a life
    Hit,
    /// Last life lost; fires once per run
    Explosion,
    /// The falling ship left the screen
    PlayerGone,
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub tuning: Tuning,
    pub settings: Settings,
    pub rng: Pcg32,
    pub player: Player,
    pub lives: u32,
    pub difficulty: Difficulty,
    pub obstacles: ObstacleField,
    pub particles: ParticleSystem,
    /// Pending events since the last drain
    pub events: Vec<GameEvent>,
    /// Frames simulated this run
    pub frame: u64,
}

impl GameState {
    /// Start a new run
    pub fn new(seed: u64, tuning: Tuning, settings: Settings) -> Self {
        let max_particles = settings.max_particles();
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            player: Player::new(&tuning),
            lives: tuning.start_lives,
            difficulty: Difficulty::new(&tuning),
            obstacles: ObstacleField::new(),
            particles: ParticleSystem::new(max_particles),
            events: vec![GameEvent::MusicStart],
            frame: 0,
            tuning,
            settings,
        }
    }

    /// Throw away the current run and start over with the same seed and config
    pub fn restart(&mut self) {
        self.restart_with_seed(self.seed);
    }

    pub fn restart_with_seed(&mut self, seed: u64) {
        let tuning = self.tuning.clone();
        let settings = self.settings.clone();
        *self = Self::new(seed, tuning, settings);
        log::info!("Game restarted with seed: {}", seed);
    }

    /// No more spawning once the ship is no longer alive
    #[inline]
    pub fn game_over(&self) -> bool {
        !self.player.is_alive()
    }

    /// Seconds survived
    #[inline]
    pub fn score(&self) -> f32 {
        self.difficulty.score
    }

    #[inline]
    pub fn life_state(&self) -> LifeState {
        self.player.state
    }

    /// Spawn one obstacle unless the game is over
    pub fn spawn_obstacle(&mut self) {
        if self.game_over() {
            return;
        }
        self.obstacles.spawn(&mut self.rng, &self.tuning);
    }

    /// Take all events raised since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
