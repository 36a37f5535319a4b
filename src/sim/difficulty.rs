//! Difficulty ramp
//!
//! Obstacle speed and spawn interval are pure functions of `score`, the number
//! of seconds survived. Only the spawn timer carries state between frames.

use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Difficulty {
    /// Seconds survived
    pub score: f32,
    /// Pixels per reference frame
    pub obstacle_speed: f32,
    /// Seconds between spawns
    pub spawn_interval: f32,
    /// Time accumulated toward the next spawn
    pub spawn_timer: f32,
}

/// Obstacle speed after `score` seconds
#[inline]
pub fn obstacle_speed_at(score: f32, tuning: &Tuning) -> f32 {
    tuning.base_obstacle_speed + score * tuning.speed_ramp
}

/// Spawn interval after `score` seconds, never below the floor
#[inline]
pub fn spawn_interval_at(score: f32, tuning: &Tuning) -> f32 {
    (tuning.base_spawn_interval - score * tuning.spawn_ramp).max(tuning.min_spawn_interval)
}

impl Difficulty {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            score: 0.0,
            obstacle_speed: obstacle_speed_at(0.0, tuning),
            spawn_interval: spawn_interval_at(0.0, tuning),
            spawn_timer: 0.0,
        }
    }

    /// Accumulate survival time and re-derive speed and interval
    pub fn update(&mut self, dt: f32, tuning: &Tuning) {
        self.score += dt;
        self.obstacle_speed = obstacle_speed_at(self.score, tuning);
        self.spawn_interval = spawn_interval_at(self.score, tuning);
    }

    /// Advance the spawn timer; returns how many obstacles are due this frame
    ///
    /// A long frame can owe several spawns. The remainder carries over, so the
    /// spawn count depends on elapsed time rather than frame count.
    pub fn update_spawn_timer(&mut self, dt: f32) -> u32 {
        self.spawn_timer += dt;
        let mut due = 0;
        while self.spawn_timer >= self.spawn_interval {
            self.spawn_timer -= self.spawn_interval;
            due += 1;
        }
        due
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn test_initial_values() {
        let d = Difficulty::new(&Tuning::default());
        assert_eq!(d.score, 0.0);
        assert!(approx(d.obstacle_speed, 4.0));
        assert!(approx(d.spawn_interval, 1.0));
    }

    #[test]
    fn test_ten_seconds_in() {
        let tuning = Tuning::default();
        assert!(approx(obstacle_speed_at(10.0, &tuning), 7.0));
        assert!(approx(spawn_interval_at(10.0, &tuning), 0.6));
    }

    #[test]
    fn test_interval_floor() {
        let tuning = Tuning::default();
        // 1.0 - 0.04 * 100 would be negative
        assert!(approx(spawn_interval_at(100.0, &tuning), 0.3));
    }

    #[test]
    fn test_update_accumulates_score() {
        let tuning = Tuning::default();
        let mut d = Difficulty::new(&tuning);
        for _ in 0..10 {
            d.update(1.0, &tuning);
        }
        assert!(approx(d.score, 10.0));
        assert!(approx(d.obstacle_speed, 7.0));
        assert!(approx(d.spawn_interval, 0.6));
    }

    #[test]
    fn test_spawn_timer_carries_remainder() {
        let tuning = Tuning {
            spawn_ramp: 0.0,
            ..Default::default()
        };
        let mut d = Difficulty::new(&tuning);
        let spawns: u32 = (0..4).map(|_| d.update_spawn_timer(0.3)).sum();
        assert_eq!(spawns, 1);
        assert!(approx(d.spawn_timer, 0.2));
    }

    #[test]
    fn test_spawn_timer_catches_up_after_long_frame() {
        let mut d = Difficulty::new(&Tuning::default());
        assert_eq!(d.update_spawn_timer(3.5), 3);
        assert!(approx(d.spawn_timer, 0.5));
    }

    proptest! {
        #[test]
        fn prop_ramp_is_monotonic(a in 0.0f32..1000.0, b in 0.0f32..1000.0) {
            let tuning = Tuning::default();
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(obstacle_speed_at(lo, &tuning) <= obstacle_speed_at(hi, &tuning));
            prop_assert!(spawn_interval_at(lo, &tuning) >= spawn_interval_at(hi, &tuning));
            prop_assert!(spawn_interval_at(hi, &tuning) >= tuning.min_spawn_interval);
        }
    }
}
