//! Shape generation for 2D primitives
//!
//! Everything is emitted as triangle lists.

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::Vertex;

/// Generate vertices for a filled axis-aligned ellipse
pub fn ellipse(center: Vec2, radii: Vec2, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radii.x * theta1.cos(),
            center.y + radii.y * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radii.x * theta2.cos(),
            center.y + radii.y * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    ellipse(center, Vec2::splat(radius), color, segments)
}

/// Generate vertices for a thick line (one quad)
pub fn line(start: Vec2, end: Vec2, width: f32, color: [f32; 4]) -> Vec<Vertex> {
    let dir = (end - start).normalize_or_zero();
    if dir == Vec2::ZERO {
        return Vec::new();
    }
    let perp = Vec2::new(-dir.y, dir.x) * (width * 0.5);

    let a = start + perp;
    let b = start - perp;
    let c = end + perp;
    let d = end - perp;

    vec![
        Vertex::new(a.x, a.y, color),
        Vertex::new(b.x, b.y, color),
        Vertex::new(c.x, c.y, color),
        Vertex::new(c.x, c.y, color),
        Vertex::new(b.x, b.y, color),
        Vertex::new(d.x, d.y, color),
    ]
}

/// Generate vertices for an axis-aligned filled rectangle
pub fn rect(min: Vec2, max: Vec2, color: [f32; 4]) -> Vec<Vertex> {
    vec![
        Vertex::new(min.x, min.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(min.x, max.y, color),
        Vertex::new(min.x, max.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(max.x, max.y, color),
    ]
}

/// Generate vertices for a gesture trail, one quad per segment
///
/// `color_at` receives the segment's progress along the trail (0 at the
/// oldest point) and returns its colour.
pub fn trail<F>(points: &[Vec2], width: f32, color_at: F) -> Vec<Vertex>
where
    F: Fn(f32) -> [f32; 4],
{
    if points.len() < 2 {
        return Vec::new();
    }

    let last = (points.len() - 1) as f32;
    let mut vertices = Vec::with_capacity((points.len() - 1) * 6);
    for (i, pair) in points.windows(2).enumerate() {
        let progress = i as f32 / last;
        vertices.extend(line(pair[0], pair[1], width, color_at(progress)));
    }

    vertices
}
