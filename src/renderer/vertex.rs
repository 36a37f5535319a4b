//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }
}

/// Scale a color's alpha, leaving RGB alone
#[inline]
pub fn with_alpha(color: [f32; 4], alpha: f32) -> [f32; 4] {
    [color[0], color[1], color[2], color[3] * alpha.clamp(0.0, 1.0)]
}

/// Colors for game elements
pub mod colors {
    pub const BACKGROUND: [f32; 4] = [30.0 / 255.0, 30.0 / 255.0, 40.0 / 255.0, 1.0];
    pub const PLAYER: [f32; 4] = [200.0 / 255.0, 200.0 / 255.0, 1.0, 1.0];
    pub const OBSTACLE: [f32; 4] = [1.0, 0.4, 0.3, 1.0];
    /// Sparks start hot white-yellow
    pub const SPARK: [f32; 4] = [1.0, 0.9, 0.5, 1.0];
    pub const EXHAUST: [f32; 4] = [0.4, 0.7, 1.0, 0.8];
}
