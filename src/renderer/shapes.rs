//! Shape generation for 2D primitives

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::Vertex;
use crate::sim::Rect;

/// Rotate an offset counter-clockwise on screen (y down) by `degrees`
#[inline]
pub fn rotate_screen(offset: Vec2, degrees: f32) -> Vec2 {
    let (sin, cos) = degrees.to_radians().sin_cos();
    Vec2::new(
        offset.x * cos + offset.y * sin,
        -offset.x * sin + offset.y * cos,
    )
}

/// Generate vertices for a rectangle rotated about its center
pub fn rotated_rect(rect: &Rect, degrees: f32, color: [f32; 4]) -> Vec<Vertex> {
    let center = rect.center();
    let half = Vec2::new(rect.width / 2.0, rect.height / 2.0);
    let corners = [
        Vec2::new(-half.x, -half.y),
        Vec2::new(half.x, -half.y),
        Vec2::new(half.x, half.y),
        Vec2::new(-half.x, half.y),
    ]
    .map(|c| center + rotate_screen(c, degrees));

    // Two triangles
    [0, 1, 2, 0, 2, 3]
        .iter()
        .map(|&i| Vertex::new(corners[i].x, corners[i].y, color))
        .collect()
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotate_screen_quarter_turn() {
        // Straight up, turned a quarter counter-clockwise, points left
        let v = rotate_screen(Vec2::new(0.0, -1.0), 90.0);
        assert!((v - Vec2::new(-1.0, 0.0)).length() < 1e-5);
    }

    #[test]
    fn test_unrotated_rect_matches_bounds() {
        let rect = Rect::new(10.0, 20.0, 50.0, 30.0);
        let verts = rotated_rect(&rect, 0.0, [1.0; 4]);
        assert_eq!(verts.len(), 6);
        for v in &verts {
            assert!(v.position[0] >= 10.0 - 1e-4 && v.position[0] <= 60.0 + 1e-4);
            assert!(v.position[1] >= 20.0 - 1e-4 && v.position[1] <= 50.0 + 1e-4);
        }
    }

    #[test]
    fn test_circle_vertex_count() {
        assert_eq!(circle(Vec2::ZERO, 3.0, [1.0; 4], 8).len(), 24);
    }
}
