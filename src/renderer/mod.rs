//! Draw list generation
//!
//! Flattens a `GameState` into triangles (`Vertex`, `Pod` so it can be cast
//! straight into a GPU buffer). Draw order: background, exhaust, obstacles,
//! player, sparks.

pub mod shapes;
pub mod vertex;

pub use vertex::{Vertex, colors, with_alpha};

use crate::sim::{GameState, LifeState, Particle, Rect};

/// Spark disc radius at spawn; shrinks to zero over the lifetime
pub const SPARK_MAX_RADIUS: f32 = 4.0;
/// Exhaust disc radius range (expired .. fresh)
pub const EXHAUST_MIN_RADIUS: f32 = 1.5;
pub const EXHAUST_MAX_RADIUS: f32 = 3.5;

/// Spark fade: brightness and size fall off linearly with remaining life
#[inline]
pub fn spark_look(p: &Particle) -> (f32, f32) {
    let t = p.remaining();
    (t, SPARK_MAX_RADIUS * t)
}

/// Exhaust fade: quicker alpha falloff, gentler shrink
#[inline]
pub fn exhaust_look(p: &Particle) -> (f32, f32) {
    let t = p.remaining();
    (t * t, EXHAUST_MIN_RADIUS + (EXHAUST_MAX_RADIUS - EXHAUST_MIN_RADIUS) * t)
}

/// Build the full frame's triangles
pub fn build_frame(state: &GameState) -> Vec<Vertex> {
    let tuning = &state.tuning;
    let segments = state.settings.quality.circle_segments();
    let mut vertices = Vec::new();

    let screen = Rect::new(0.0, 0.0, tuning.screen_width, tuning.screen_height);
    vertices.extend(shapes::rotated_rect(&screen, 0.0, colors::BACKGROUND));

    for p in &state.particles.exhaust {
        let (alpha, radius) = exhaust_look(p);
        vertices.extend(shapes::circle(
            p.pos,
            radius,
            with_alpha(colors::EXHAUST, alpha),
            segments,
        ));
    }

    for obstacle in &state.obstacles.obstacles {
        vertices.extend(shapes::rotated_rect(
            &obstacle.rect,
            obstacle.angle,
            colors::OBSTACLE,
        ));
    }

    if state.player.state != LifeState::Dead {
        let angle = if state.settings.reduced_motion {
            0.0
        } else {
            state.player.angle
        };
        vertices.extend(shapes::rotated_rect(
            &state.player.rect,
            angle,
            colors::PLAYER,
        ));
    }

    for p in &state.particles.sparks {
        let (alpha, radius) = spark_look(p);
        if radius <= 0.0 {
            continue;
        }
        vertices.extend(shapes::circle(
            p.pos,
            radius,
            with_alpha(colors::SPARK, alpha),
            segments,
        ));
    }

    vertices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use crate::sim::Obstacle;
    use crate::tuning::Tuning;
    use glam::Vec2;

    fn new_state() -> GameState {
        GameState::new(3, Tuning::default(), Settings::default())
    }

    #[test]
    fn test_spark_fades_and_shrinks() {
        let mut p = Particle::new(Vec2::ZERO, Vec2::ZERO, 1.0);
        assert_eq!(spark_look(&p), (1.0, SPARK_MAX_RADIUS));
        p.age = 0.5;
        let (alpha, radius) = spark_look(&p);
        assert!((alpha - 0.5).abs() < 1e-5);
        assert!((radius - SPARK_MAX_RADIUS / 2.0).abs() < 1e-5);
    }

    #[test]
    fn test_exhaust_fades_faster_than_spark() {
        let mut p = Particle::new(Vec2::ZERO, Vec2::ZERO, 1.0);
        p.age = 0.5;
        assert!(exhaust_look(&p).0 < spark_look(&p).0);
    }

    #[test]
    fn test_frame_contains_background_and_player() {
        let state = new_state();
        // Background + player quads
        assert_eq!(build_frame(&state).len(), 12);
    }

    #[test]
    fn test_dead_player_not_drawn() {
        let mut state = new_state();
        state.player.state = LifeState::Dead;
        assert_eq!(build_frame(&state).len(), 6);
    }

    #[test]
    fn test_obstacles_and_sparks_drawn() {
        let mut state = new_state();
        state.obstacles.obstacles.push(Obstacle {
            id: 1,
            rect: Rect::new(0.0, 0.0, 50.0, 30.0),
            angle: 45.0,
            rotation_speed: 0.0,
        });
        state
            .particles
            .sparks
            .push(Particle::new(Vec2::new(10.0, 10.0), Vec2::ZERO, 1.0));
        let segments = state.settings.quality.circle_segments() as usize;
        assert_eq!(build_frame(&state).len(), 18 + segments * 3);
    }

    #[test]
    fn test_vertices_cast_to_bytes() {
        let verts = build_frame(&new_state());
        let bytes: &[u8] = bytemuck::cast_slice(&verts);
        assert_eq!(bytes.len(), verts.len() * std::mem::size_of::<Vertex>());
    }
}
