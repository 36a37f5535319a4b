//! Dodge - a single-screen arcade avoidance game
//!
//! Core modules:
//! - `sim`: Simulation (player, obstacles, difficulty, particles)
//! - `tuning`: Data-driven game balance and config loading
//! - `settings`: Player-facing preferences (quality, volumes)
//! - `audio`: Maps simulation events to sound cues
//! - `renderer`: CPU-side draw list generation
//! - `ui`: HUD readout

pub mod audio;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;
pub mod ui;

pub use settings::{QualityPreset, Settings};
pub use tuning::{Config, ConfigError, Tuning};

/// Game configuration constants
pub mod consts {
    /// Frame rate the per-frame tuning values were authored against
    pub const REFERENCE_FPS: f32 = 60.0;
    /// Fixed frame step used by the native driver
    pub const FRAME_DT: f32 = 1.0 / REFERENCE_FPS;

    /// Screen dimensions
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;

    /// Player defaults
    pub const PLAYER_SIZE: f32 = 50.0;
    /// Pixels per reference frame
    pub const PLAYER_SPEED: f32 = 5.0;
    pub const START_LIVES: u32 = 3;
    /// Max tilt in degrees and the time to reach it
    pub const BANK_ANGLE: f32 = 30.0;
    pub const BANK_TIME: f32 = 0.2;

    /// Obstacle defaults
    pub const OBSTACLE_WIDTH: f32 = 50.0;
    pub const OBSTACLE_HEIGHT: f32 = 30.0;
    /// Degrees per second, drawn from [-max, max]
    pub const OBSTACLE_MAX_ROTATION_SPEED: f32 = 120.0;

    /// Difficulty ramp (speed in pixels per reference frame)
    pub const BASE_OBSTACLE_SPEED: f32 = 4.0;
    pub const SPEED_RAMP: f32 = 0.3;
    pub const BASE_SPAWN_INTERVAL: f32 = 1.0;
    pub const SPAWN_RAMP: f32 = 0.04;
    pub const MIN_SPAWN_INTERVAL: f32 = 0.3;

    /// Dying sequence
    pub const DEATH_SPIN_SPEED: f32 = 720.0;
    pub const DEATH_FALL_SPEED: f32 = 400.0;
    pub const OFFSCREEN_MARGIN: f32 = 50.0;
}

/// Wrap an angle in degrees into [0, 360)
#[inline]
pub fn wrap_degrees(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Step `current` toward `target` by at most `max_delta`, never overshooting
#[inline]
pub fn approach(current: f32, target: f32, max_delta: f32) -> f32 {
    let delta = (target - current).clamp(-max_delta, max_delta);
    current + delta
}
