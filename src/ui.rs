//! HUD readout
//!
//! Score, speed and lives while playing; a single game-over message after.

use serde::{Deserialize, Serialize};

use crate::sim::{GameState, LifeState};

pub const GAME_OVER_MESSAGE: &str = "GAME OVER - press R to restart";

/// Everything the HUD shows for one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HudSnapshot {
    /// Seconds survived
    pub score: f32,
    /// Current obstacle speed
    pub speed: f32,
    pub lives: u32,
    pub state: LifeState,
    pub game_over: bool,
}

impl HudSnapshot {
    pub fn from_state(state: &GameState) -> Self {
        Self {
            score: state.score(),
            speed: state.difficulty.obstacle_speed,
            lives: state.lives,
            state: state.life_state(),
            game_over: state.game_over(),
        }
    }

    /// Top-left readout lines
    pub fn lines(&self) -> Vec<String> {
        vec![
            format!("Time: {:.1}s", self.score),
            format!("Speed: {:.1}", self.speed),
            format!("Lives: {}", self.lives),
        ]
    }

    /// Centered message, only once the ship has left the screen
    pub fn banner(&self) -> Option<&'static str> {
        if self.state == LifeState::Dead {
            Some(GAME_OVER_MESSAGE)
        } else {
            None
        }
    }
}
