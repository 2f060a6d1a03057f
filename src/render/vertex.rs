//! Vertex type for 2D rendering

use bytemuck::{Pod, Zeroable};

use crate::sim::Rgb;

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

/// Convert an 8-bit colour plus alpha (0-1) to linear floats
#[inline]
pub fn rgba(rgb: Rgb, alpha: f32) -> [f32; 4] {
    [
        rgb[0] as f32 / 255.0,
        rgb[1] as f32 / 255.0,
        rgb[2] as f32 / 255.0,
        alpha.clamp(0.0, 1.0),
    ]
}

/// Colors for game elements
pub mod colors {
    pub const BACKGROUND: [f32; 4] = [20.0 / 255.0, 20.0 / 255.0, 40.0 / 255.0, 1.0];
    pub const HIGHLIGHT: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const BOMB_BODY: [f32; 4] = [30.0 / 255.0, 30.0 / 255.0, 30.0 / 255.0, 1.0];
    pub const BOMB_FUSE: [f32; 4] = [100.0 / 255.0, 100.0 / 255.0, 100.0 / 255.0, 1.0];
    pub const BOMB_SPARK: [f32; 4] = [1.0, 200.0 / 255.0, 0.0, 1.0];
}
