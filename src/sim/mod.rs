//! Simulation module
//!
//! All gameplay logic lives here. No rendering, audio or platform code:
//! - One `GameState` session per run, replaced on restart
//! - Seeded RNG only, so a seed plus an input sequence replays exactly
//! - Everything scaled by the frame `dt`, no sub-stepping

pub mod difficulty;
pub mod obstacles;
pub mod particles;
pub mod player;
pub mod rect;
pub mod state;
pub mod tick;

pub use difficulty::{Difficulty, obstacle_speed_at, spawn_interval_at};
pub use obstacles::{Obstacle, ObstacleField};
pub use particles::{Particle, ParticleSystem};
pub use player::{LifeState, Player};
pub use rect::{Rect, clamp_to_bounds, intersects};
pub use state::{GameEvent, GameState};
pub use tick::{TickInput, tick};
