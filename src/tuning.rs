//! Data-driven game balance
//!
//! Every knob the simulation reads lives in [`Tuning`]. Values are loaded from
//! JSON (all fields optional, falling back to the defaults in [`crate::consts`])
//! and validated once at load time so the simulation itself never has to
//! guard against degenerate configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;
use crate::settings::Settings;

/// Errors raised while loading or validating configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config value for `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// A particle burst (count, peak speed in px/s, lifetime in seconds)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BurstTuning {
    pub count: u32,
    pub speed: f32,
    pub lifetime: f32,
}

/// Continuous exhaust trail behind the ship
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExhaustTuning {
    /// Particles per second
    pub rate: f32,
    /// Speed band in px/s
    pub speed_min: f32,
    pub speed_max: f32,
    /// Half-width of the angular spread in degrees
    pub spread: f32,
    pub lifetime: f32,
}

impl Default for ExhaustTuning {
    fn default() -> Self {
        Self {
            rate: 60.0,
            speed_min: 80.0,
            speed_max: 140.0,
            spread: 15.0,
            lifetime: 0.35,
        }
    }
}

/// All simulation tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub screen_width: f32,
    pub screen_height: f32,

    pub player_width: f32,
    pub player_height: f32,
    /// Pixels per reference frame
    pub player_speed: f32,
    pub start_lives: u32,
    /// Degrees
    pub bank_angle: f32,
    /// Seconds to swing from level to full bank
    pub bank_time: f32,

    pub obstacle_width: f32,
    pub obstacle_height: f32,
    /// Degrees per second
    pub obstacle_max_rotation_speed: f32,

    /// Pixels per reference frame
    pub base_obstacle_speed: f32,
    /// Speed gained per second survived
    pub speed_ramp: f32,
    pub base_spawn_interval: f32,
    /// Interval lost per second survived
    pub spawn_ramp: f32,
    pub min_spawn_interval: f32,

    /// Degrees per second while dying
    pub death_spin_speed: f32,
    /// Pixels per second while dying
    pub death_fall_speed: f32,
    /// How far below the screen the falling ship must get before it is Dead
    pub offscreen_margin: f32,

    pub hit_sparks: BurstTuning,
    pub death_sparks: BurstTuning,
    /// Max random offset applied to each spark's spawn position
    pub spark_jitter: f32,
    pub exhaust: ExhaustTuning,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,

            player_width: PLAYER_SIZE,
            player_height: PLAYER_SIZE,
            player_speed: PLAYER_SPEED,
            start_lives: START_LIVES,
            bank_angle: BANK_ANGLE,
            bank_time: BANK_TIME,

            obstacle_width: OBSTACLE_WIDTH,
            obstacle_height: OBSTACLE_HEIGHT,
            obstacle_max_rotation_speed: OBSTACLE_MAX_ROTATION_SPEED,

            base_obstacle_speed: BASE_OBSTACLE_SPEED,
            speed_ramp: SPEED_RAMP,
            base_spawn_interval: BASE_SPAWN_INTERVAL,
            spawn_ramp: SPAWN_RAMP,
            min_spawn_interval: MIN_SPAWN_INTERVAL,

            death_spin_speed: DEATH_SPIN_SPEED,
            death_fall_speed: DEATH_FALL_SPEED,
            offscreen_margin: OFFSCREEN_MARGIN,

            hit_sparks: BurstTuning {
                count: 12,
                speed: 180.0,
                lifetime: 0.4,
            },
            death_sparks: BurstTuning {
                count: 60,
                speed: 320.0,
                lifetime: 1.0,
            },
            spark_jitter: 4.0,
            exhaust: ExhaustTuning::default(),
        }
    }
}

fn invalid(field: &'static str, reason: impl Into<String>) -> ConfigError {
    ConfigError::Invalid {
        field,
        reason: reason.into(),
    }
}

fn require_positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(invalid(field, format!("must be a positive number, got {value}")))
    }
}

fn require_non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(invalid(field, format!("must be zero or positive, got {value}")))
    }
}

impl Tuning {
    /// Check the preconditions the simulation relies on
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_positive("screen_width", self.screen_width)?;
        require_positive("screen_height", self.screen_height)?;
        require_positive("player_width", self.player_width)?;
        require_positive("player_height", self.player_height)?;
        require_positive("obstacle_width", self.obstacle_width)?;
        require_positive("obstacle_height", self.obstacle_height)?;

        if self.player_width > self.screen_width || self.player_height > self.screen_height {
            return Err(invalid("player_width", "player does not fit on screen"));
        }
        if self.obstacle_width > self.screen_width {
            return Err(invalid("obstacle_width", "obstacle wider than the screen"));
        }

        require_non_negative("player_speed", self.player_speed)?;
        if self.start_lives == 0 {
            return Err(invalid("start_lives", "must be at least 1"));
        }
        require_non_negative("bank_angle", self.bank_angle)?;
        // Divisor of the bank rate
        require_positive("bank_time", self.bank_time)?;
        require_non_negative("obstacle_max_rotation_speed", self.obstacle_max_rotation_speed)?;

        require_non_negative("base_obstacle_speed", self.base_obstacle_speed)?;
        require_non_negative("speed_ramp", self.speed_ramp)?;
        require_non_negative("spawn_ramp", self.spawn_ramp)?;
        // A zero floor would make the spawn loop spin forever
        require_positive("min_spawn_interval", self.min_spawn_interval)?;
        require_positive("base_spawn_interval", self.base_spawn_interval)?;
        if self.base_spawn_interval < self.min_spawn_interval {
            return Err(invalid(
                "base_spawn_interval",
                "must not be below min_spawn_interval",
            ));
        }

        require_non_negative("death_spin_speed", self.death_spin_speed)?;
        require_positive("death_fall_speed", self.death_fall_speed)?;
        require_non_negative("offscreen_margin", self.offscreen_margin)?;

        for (field, burst) in [("hit_sparks", self.hit_sparks), ("death_sparks", self.death_sparks)] {
            require_non_negative(field, burst.speed)?;
            require_positive(field, burst.lifetime)?;
        }
        require_non_negative("spark_jitter", self.spark_jitter)?;

        require_non_negative("exhaust.rate", self.exhaust.rate)?;
        require_non_negative("exhaust.speed_min", self.exhaust.speed_min)?;
        if self.exhaust.speed_max < self.exhaust.speed_min {
            return Err(invalid("exhaust.speed_max", "must not be below exhaust.speed_min"));
        }
        require_non_negative("exhaust.spread", self.exhaust.spread)?;
        require_positive("exhaust.lifetime", self.exhaust.lifetime)?;

        Ok(())
    }

    /// Maximum bank angular rate in degrees per second
    pub fn bank_rate(&self) -> f32 {
        self.bank_angle / self.bank_time
    }
}

/// Top-level configuration file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Run seed; `None` picks one from the clock
    pub seed: Option<u64>,
    pub tuning: Tuning,
    pub settings: Settings,
}

impl Config {
    /// Parse and validate a JSON config document
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(json)?;
        if let Err(e) = config.tuning.validate() {
            log::warn!("Rejected config: {}", e);
            return Err(e);
        }
        Ok(config)
    }

    /// Load a config file from disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(Tuning::default().validate().is_ok());
    }

    #[test]
    fn test_default_bank_rate() {
        assert!((Tuning::default().bank_rate() - 150.0).abs() < 1e-3);
    }

    #[test]
    fn test_zero_bank_time_rejected() {
        let tuning = Tuning {
            bank_time: 0.0,
            ..Default::default()
        };
        match tuning.validate() {
            Err(ConfigError::Invalid { field, .. }) => assert_eq!(field, "bank_time"),
            other => panic!("expected bank_time rejection, got {:?}", other),
        }
    }

    #[test]
    fn test_zero_spawn_floor_rejected() {
        let tuning = Tuning {
            min_spawn_interval: 0.0,
            ..Default::default()
        };
        assert!(tuning.validate().is_err());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = Config::from_json(r#"{ "seed": 7, "tuning": { "start_lives": 5 } }"#)
            .expect("valid config");
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.tuning.start_lives, 5);
        assert_eq!(config.tuning.screen_width, SCREEN_WIDTH);
        assert_eq!(config.tuning.exhaust, ExhaustTuning::default());
    }

    #[test]
    fn test_invalid_json_is_parse_error() {
        assert!(matches!(
            Config::from_json("{ not json"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_invalid_values_rejected_on_load() {
        let result = Config::from_json(r#"{ "tuning": { "obstacle_width": 900.0 } }"#);
        assert!(matches!(result, Err(ConfigError::Invalid { .. })));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        assert!(matches!(
            Config::load("/nonexistent/dodge/config.json"),
            Err(ConfigError::Io(_))
        ));
    }
}
