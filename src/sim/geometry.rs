//! Slice hit-testing
//!
//! A gesture is a polyline; each new pair of trail points is a segment that
//! gets tested against circular bodies with a forgiving, enlarged hitbox.

use glam::Vec2;

use crate::consts::HITBOX_SCALE;

/// Closest point to `point` on the segment `p1..p2` (t clamped to [0, 1])
///
/// Returns `p1` for a degenerate segment.
#[inline]
pub fn closest_point_on_segment(p1: Vec2, p2: Vec2, point: Vec2) -> Vec2 {
    let seg = p2 - p1;
    let len_sq = seg.length_squared();
    if len_sq == 0.0 {
        return p1;
    }
    let t = ((point - p1).dot(seg) / len_sq).clamp(0.0, 1.0);
    p1 + seg * t
}

/// Check whether the segment `p1..p2` touches a circle
///
/// The squared radius is scaled by [`HITBOX_SCALE`] so slices near the rim
/// still count. A zero-length segment is a plain point-in-circle test.
pub fn segment_intersects_circle(p1: Vec2, p2: Vec2, center: Vec2, radius: f32) -> bool {
    let reach_sq = radius * radius * HITBOX_SCALE;
    let closest = closest_point_on_segment(p1, p2, center);
    (center - closest).length_squared() <= reach_sq
}
