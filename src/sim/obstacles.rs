//! Falling obstacles
//!
//! Obstacles enter above the top edge, fall at the difficulty-driven speed
//! while spinning, and are removed once they leave the bottom of the screen
//! or hit the player.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::rect::{Rect, intersects};
use crate::consts::REFERENCE_FPS;
use crate::tuning::Tuning;
use crate::wrap_degrees;

/// A falling hazard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: u32,
    pub rect: Rect,
    /// Degrees, [0, 360)
    pub angle: f32,
    /// Degrees per second, signed
    pub rotation_speed: f32,
}

impl Obstacle {
    /// Rotate by `rotation_speed * dt`, wrapping into [0, 360)
    pub fn rotate(&mut self, dt: f32) {
        self.angle = wrap_degrees(self.angle + self.rotation_speed * dt);
    }
}

/// The live obstacle collection, kept in spawn order
#[derive(Debug, Clone, PartialEq)]
pub struct ObstacleField {
    pub obstacles: Vec<Obstacle>,
    next_id: u32,
}

impl Default for ObstacleField {
    fn default() -> Self {
        Self::new()
    }
}

impl ObstacleField {
    pub fn new() -> Self {
        Self {
            obstacles: Vec::new(),
            next_id: 1,
        }
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }

    /// Spawn one obstacle just above the top edge at a random column
    pub fn spawn<R: Rng + ?Sized>(&mut self, rng: &mut R, tuning: &Tuning) -> &Obstacle {
        let max_x = (tuning.screen_width - tuning.obstacle_width).max(0.0);
        let x = rng.random_range(0.0..=max_x);
        let max_rot = tuning.obstacle_max_rotation_speed;
        let rotation_speed = rng.random_range(-max_rot..=max_rot);

        let id = self.next_id;
        self.next_id += 1;
        self.obstacles.push(Obstacle {
            id,
            rect: Rect::new(
                x,
                -tuning.obstacle_height,
                tuning.obstacle_width,
                tuning.obstacle_height,
            ),
            angle: 0.0,
            rotation_speed,
        });
        log::debug!("Spawned obstacle {} at x={:.1}", id, x);
        &self.obstacles[self.obstacles.len() - 1]
    }

    /// Move every obstacle down; `speed` is in pixels per reference frame
    pub fn advance(&mut self, speed: f32, dt: f32) {
        let dy = speed * dt * REFERENCE_FPS;
        for obstacle in &mut self.obstacles {
            obstacle.rect.y += dy;
        }
    }

    pub fn rotate(&mut self, dt: f32) {
        for obstacle in &mut self.obstacles {
            obstacle.rotate(dt);
        }
    }

    /// Drop obstacles whose top edge has passed the bottom of the screen
    pub fn cull(&mut self, screen_height: f32) {
        self.obstacles.retain(|o| o.rect.y < screen_height);
    }

    /// Remove and return the first obstacle (in spawn order) overlapping `target`
    ///
    /// Scans first, removes after, so the rest of the collection is untouched.
    pub fn take_first_colliding(&mut self, target: &Rect) -> Option<Obstacle> {
        let index = self
            .obstacles
            .iter()
            .position(|o| intersects(&o.rect, target))?;
        Some(self.obstacles.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn obstacle_at(id: u32, x: f32, y: f32) -> Obstacle {
        Obstacle {
            id,
            rect: Rect::new(x, y, 50.0, 30.0),
            angle: 0.0,
            rotation_speed: 0.0,
        }
    }

    #[test]
    fn test_spawn_position_within_bounds() {
        let tuning = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(7);
        let mut field = ObstacleField::new();
        for _ in 0..500 {
            let o = field.spawn(&mut rng, &tuning);
            assert!(o.rect.x >= 0.0 && o.rect.x <= 750.0);
            assert_eq!(o.rect.y, -30.0);
            assert_eq!(o.angle, 0.0);
            assert!(o.rotation_speed.abs() <= 120.0);
        }
        assert_eq!(field.len(), 500);
    }

    #[test]
    fn test_spawn_assigns_increasing_ids() {
        let tuning = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(7);
        let mut field = ObstacleField::new();
        let a = field.spawn(&mut rng, &tuning).id;
        let b = field.spawn(&mut rng, &tuning).id;
        assert!(b > a);
    }

    #[test]
    fn test_advance_scales_with_dt() {
        let mut field = ObstacleField::new();
        field.obstacles.push(obstacle_at(1, 0.0, 0.0));
        // 4 px per reference frame for one reference frame
        field.advance(4.0, 1.0 / REFERENCE_FPS);
        assert!((field.obstacles[0].rect.y - 4.0).abs() < 1e-4);
        // Half a second at 60 Hz is 30 frames
        field.advance(4.0, 0.5);
        assert!((field.obstacles[0].rect.y - 124.0).abs() < 1e-3);
    }

    #[test]
    fn test_rotation_wraps() {
        let mut o = obstacle_at(1, 0.0, 0.0);
        o.angle = 350.0;
        o.rotation_speed = 100.0;
        o.rotate(0.2);
        assert!((o.angle - 10.0).abs() < 1e-3);

        o.rotation_speed = -120.0;
        o.rotate(0.5);
        assert!((o.angle - 310.0).abs() < 1e-3);
    }

    #[test]
    fn test_cull_removes_offscreen() {
        let mut field = ObstacleField::new();
        field.obstacles.push(obstacle_at(1, 0.0, 599.0));
        field.obstacles.push(obstacle_at(2, 0.0, 600.0));
        field.obstacles.push(obstacle_at(3, 0.0, 900.0));
        field.cull(600.0);
        assert_eq!(field.len(), 1);
        assert_eq!(field.obstacles[0].id, 1);
    }

    #[test]
    fn test_take_first_colliding_removes_only_first_match() {
        let mut field = ObstacleField::new();
        field.obstacles.push(obstacle_at(1, 500.0, 0.0));
        field.obstacles.push(obstacle_at(2, 10.0, 10.0));
        field.obstacles.push(obstacle_at(3, 20.0, 20.0));
        let player = Rect::new(0.0, 0.0, 50.0, 50.0);

        let hit = field.take_first_colliding(&player).expect("collision");
        assert_eq!(hit.id, 2);
        let remaining: Vec<u32> = field.obstacles.iter().map(|o| o.id).collect();
        assert_eq!(remaining, vec![1, 3]);
    }

    #[test]
    fn test_take_first_colliding_none() {
        let mut field = ObstacleField::new();
        field.obstacles.push(obstacle_at(1, 500.0, 0.0));
        assert!(field.take_first_colliding(&Rect::new(0.0, 0.0, 50.0, 50.0)).is_none());
        assert_eq!(field.len(), 1);
    }
}
