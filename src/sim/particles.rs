//! Visual particles: spark bursts and the exhaust trail
//!
//! Particles never affect gameplay. Both kinds share one contract: move by
//! velocity, age, and disappear once `age >= lifetime`.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::tuning::ExhaustTuning;

/// A single point effect
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Seconds since spawn
    pub age: f32,
    /// Seconds until removal
    pub lifetime: f32,
}

impl Particle {
    pub fn new(pos: Vec2, vel: Vec2, lifetime: f32) -> Self {
        Self {
            pos,
            vel,
            age: 0.0,
            lifetime,
        }
    }

    pub fn update(&mut self, dt: f32) {
        self.pos += self.vel * dt;
        self.age += dt;
    }

    #[inline]
    pub fn is_expired(&self) -> bool {
        self.age >= self.lifetime
    }

    /// Remaining lifetime as 1.0 (fresh) .. 0.0 (expired); drives fade and shrink
    #[inline]
    pub fn remaining(&self) -> f32 {
        (1.0 - self.age / self.lifetime).clamp(0.0, 1.0)
    }
}

/// Unit vector for a heading in degrees (0 = +x, screen space)
#[inline]
fn heading(degrees: f32) -> Vec2 {
    let rad = degrees.to_radians();
    Vec2::new(rad.cos(), rad.sin())
}

/// Owns every live particle for a session
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ParticleSystem {
    pub sparks: Vec<Particle>,
    pub exhaust: Vec<Particle>,
    /// Fractional exhaust particles owed from previous frames
    exhaust_accumulator: f32,
    /// Combined cap on sparks + exhaust
    max_particles: usize,
}

impl ParticleSystem {
    pub fn new(max_particles: usize) -> Self {
        Self {
            sparks: Vec::new(),
            exhaust: Vec::new(),
            exhaust_accumulator: 0.0,
            max_particles,
        }
    }

    pub fn len(&self) -> usize {
        self.sparks.len() + self.exhaust.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn has_room(&self) -> bool {
        self.len() < self.max_particles
    }

    /// Radial burst of `count` sparks around `position`
    ///
    /// Each spark gets a random heading, a speed in `[0.5 * speed, speed]`
    /// and a spawn point jittered by up to `jitter` pixels per axis.
    /// Sparks beyond the particle cap are dropped.
    pub fn spawn_sparks<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        position: Vec2,
        count: u32,
        speed: f32,
        lifetime: f32,
        jitter: f32,
    ) {
        for _ in 0..count {
            if !self.has_room() {
                log::trace!("Spark burst truncated at {} particles", self.len());
                break;
            }
            let angle = rng.random_range(0.0..360.0);
            let spark_speed = rng.random_range(0.5 * speed..=speed);
            let offset = Vec2::new(
                rng.random_range(-jitter..=jitter),
                rng.random_range(-jitter..=jitter),
            );
            self.sparks.push(Particle::new(
                position + offset,
                heading(angle) * spark_speed,
                lifetime,
            ));
        }
    }

    /// Feed the exhaust trail for one frame
    ///
    /// `origin` is the nozzle point behind the ship and `direction_deg` the
    /// heading the plume travels (opposite the ship's facing).
    pub fn emit_exhaust<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        origin: Vec2,
        direction_deg: f32,
        dt: f32,
        tuning: &ExhaustTuning,
    ) {
        self.exhaust_accumulator += tuning.rate * dt;
        while self.exhaust_accumulator >= 1.0 {
            self.exhaust_accumulator -= 1.0;
            if !self.has_room() {
                continue;
            }
            let angle = direction_deg + rng.random_range(-tuning.spread..=tuning.spread);
            let speed = rng.random_range(tuning.speed_min..=tuning.speed_max);
            self.exhaust
                .push(Particle::new(origin, heading(angle) * speed, tuning.lifetime));
        }
    }

    /// Advance every particle and drop the expired ones
    pub fn update(&mut self, dt: f32) {
        for p in self.sparks.iter_mut().chain(self.exhaust.iter_mut()) {
            p.update(dt);
        }
        self.sparks.retain(|p| !p.is_expired());
        self.exhaust.retain(|p| !p.is_expired());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn rng() -> Pcg32 {
        Pcg32::seed_from_u64(42)
    }

    #[test]
    fn test_particle_lifetime_law() {
        let mut system = ParticleSystem::new(100);
        system.sparks.push(Particle::new(Vec2::ZERO, Vec2::X, 0.5));

        // age 0.25 < 0.5 -> still present
        system.update(0.25);
        assert_eq!(system.sparks.len(), 1);
        // age 0.5 >= 0.5 -> gone
        system.update(0.25);
        assert!(system.sparks.is_empty());
    }

    #[test]
    fn test_particle_moves_by_velocity() {
        let mut p = Particle::new(Vec2::new(10.0, 10.0), Vec2::new(100.0, -50.0), 1.0);
        p.update(0.1);
        assert!((p.pos - Vec2::new(20.0, 5.0)).length() < 1e-4);
        assert!((p.remaining() - 0.9).abs() < 1e-4);
    }

    #[test]
    fn test_spark_burst_speed_and_jitter_bounds() {
        let mut system = ParticleSystem::new(1000);
        let center = Vec2::new(400.0, 300.0);
        system.spawn_sparks(&mut rng(), center, 50, 200.0, 0.6, 4.0);

        assert_eq!(system.sparks.len(), 50);
        for spark in &system.sparks {
            let speed = spark.vel.length();
            assert!(speed >= 100.0 - 1e-3 && speed <= 200.0 + 1e-3, "speed {}", speed);
            assert!((spark.pos.x - center.x).abs() <= 4.0);
            assert!((spark.pos.y - center.y).abs() <= 4.0);
            assert_eq!(spark.lifetime, 0.6);
            assert_eq!(spark.age, 0.0);
        }
    }

    #[test]
    fn test_burst_respects_cap() {
        let mut system = ParticleSystem::new(10);
        system.spawn_sparks(&mut rng(), Vec2::ZERO, 50, 200.0, 0.6, 4.0);
        assert_eq!(system.len(), 10);
    }

    #[test]
    fn test_exhaust_rate_accumulates_across_frames() {
        let mut system = ParticleSystem::new(1000);
        let tuning = ExhaustTuning {
            rate: 60.0,
            lifetime: 10.0,
            ..Default::default()
        };
        let mut r = rng();
        // 0.25 particles per frame -> one every 4 frames
        for _ in 0..8 {
            system.emit_exhaust(&mut r, Vec2::ZERO, 90.0, 1.0 / 240.0, &tuning);
        }
        assert_eq!(system.exhaust.len(), 2);
    }

    #[test]
    fn test_exhaust_travels_in_plume_direction() {
        let mut system = ParticleSystem::new(1000);
        let tuning = ExhaustTuning {
            spread: 10.0,
            ..Default::default()
        };
        // Heading 90 degrees is straight down the screen
        system.emit_exhaust(&mut rng(), Vec2::ZERO, 90.0, 0.5, &tuning);
        assert!(!system.exhaust.is_empty());
        for p in &system.exhaust {
            assert!(p.vel.y > 0.0);
            let speed = p.vel.length();
            assert!(speed >= tuning.speed_min - 1e-3 && speed <= tuning.speed_max + 1e-3);
        }
    }

    #[test]
    fn test_zero_cap_spawns_nothing() {
        let mut system = ParticleSystem::new(0);
        system.spawn_sparks(&mut rng(), Vec2::ZERO, 5, 100.0, 1.0, 0.0);
        system.emit_exhaust(&mut rng(), Vec2::ZERO, 90.0, 1.0, &ExhaustTuning::default());
        assert!(system.is_empty());
    }
}
