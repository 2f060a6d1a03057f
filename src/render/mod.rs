//! Render projection
//!
//! Turns a [`Snapshot`] into triangle-list vertex data. The drawing surface
//! (GPU pipeline, software rasterizer, test harness) lives with the host; this
//! module only decides what goes where and in which colour.

pub mod shapes;
pub mod vertex;

pub use vertex::{Vertex, colors, rgba};

use glam::Vec2;
use rand::Rng;

use crate::consts::{FULL_ALPHA, SHAKE_INTENSITY, WINDOW_HEIGHT, WINDOW_WIDTH};
use crate::settings::Settings;
use crate::sim::{Body, BodyKind, Snapshot};

/// Width of trail strokes
const TRAIL_WIDTH: f32 = 4.0;
/// Width of a bomb's fuse
const FUSE_WIDTH: f32 = 3.0;
/// Spacing of the background circle grid
const BACKGROUND_GRID: usize = 100;

/// Random camera offset while the screen is shaking
pub fn shake_offset<R: Rng>(snapshot: &Snapshot, settings: &Settings, rng: &mut R) -> Vec2 {
    if snapshot.shake_timer <= 0.0 || !settings.effective_screen_shake() {
        return Vec2::ZERO;
    }
    Vec2::new(
        rng.random_range(-SHAKE_INTENSITY..=SHAKE_INTENSITY) as f32,
        rng.random_range(-SHAKE_INTENSITY..=SHAKE_INTENSITY) as f32,
    )
}

/// Radius and colour of the background circle at grid point (`x`, `y`)
pub fn background_circle(x: f32, y: f32, time: f32) -> (f32, [f32; 4]) {
    let red = 30.0 + 20.0 * (time + x / 200.0).sin();
    let green = 30.0 + 20.0 * (time + y / 150.0).sin();
    let blue = 60.0 + 20.0 * (time * 0.7).cos();
    let radius = 80.0 + 20.0 * (time * 1.5 + x / 100.0).sin();
    (radius, [red / 255.0, green / 255.0, blue / 255.0, 1.0])
}

/// Background fill plus, quality permitting, the grid of pulsing circles
pub fn background(time: f32, settings: &Settings) -> Vec<Vertex> {
    let mut vertices = shapes::rect(
        Vec2::ZERO,
        Vec2::new(WINDOW_WIDTH, WINDOW_HEIGHT),
        colors::BACKGROUND,
    );
    if !settings.quality.background_enabled() {
        return vertices;
    }

    let segments = settings.quality.circle_segments();
    for x in (0..WINDOW_WIDTH as usize).step_by(BACKGROUND_GRID) {
        for y in (0..WINDOW_HEIGHT as usize).step_by(BACKGROUND_GRID) {
            let center = Vec2::new(x as f32, y as f32);
            let (radius, color) = background_circle(center.x, center.y, time);
            vertices.extend(shapes::circle(center, radius, color, segments));
        }
    }
    vertices
}

/// Build the full frame, back to front
///
/// The background, splatters and trails stay put; bodies are drawn displaced
/// by `shake`.
pub fn build_frame(snapshot: &Snapshot, settings: &Settings, shake: Vec2) -> Vec<Vertex> {
    let segments = settings.quality.circle_segments();
    let mut vertices = background(snapshot.time, settings);

    if settings.splatters {
        for splatter in &snapshot.splatters {
            let color = rgba(splatter.color, splatter.alpha / FULL_ALPHA);
            vertices.extend(shapes::circle(
                splatter.pos,
                splatter.size as f32 / 2.0,
                color,
                segments,
            ));
        }
    }

    for fading in &snapshot.fading_trails {
        let alpha = fading.alpha / FULL_ALPHA;
        vertices.extend(shapes::trail(&fading.points, TRAIL_WIDTH, |p| {
            [1.0, 1.0 - p, 1.0 - p, alpha * (1.0 - p)]
        }));
    }

    vertices.extend(shapes::trail(&snapshot.active_trail, TRAIL_WIDTH, |p| {
        [1.0, 1.0, 1.0, 1.0 - p]
    }));

    for body in snapshot.targets.iter().chain(&snapshot.hazards) {
        vertices.extend(body_vertices(body, shake, segments));
    }

    for body in snapshot.debris.iter().take(settings.max_debris()) {
        vertices.extend(body_vertices(body, shake, 6));
    }

    vertices
}

/// Vertices for one body at its position plus `offset`
pub fn body_vertices(body: &Body, offset: Vec2, segments: u32) -> Vec<Vertex> {
    let pos = body.pos + offset;

    match body.kind {
        BodyKind::SoftTarget { color, squish, .. } => {
            let radii = Vec2::new(body.radius * (2.0 - squish), body.radius * squish);
            let mut verts = shapes::ellipse(pos, radii, rgba(color, 1.0), segments);
            let highlight = pos - radii * 0.3;
            verts.extend(shapes::circle(highlight, 5.0, colors::HIGHLIGHT, 8));
            verts
        }
        BodyKind::Hazard { fuse_phase } => {
            let mut verts = shapes::circle(pos, body.radius, colors::BOMB_BODY, segments);
            let fuse_start = pos - Vec2::new(0.0, body.radius);
            let swing = (fuse_phase as f32 * 0.2).sin() * 10.0;
            let fuse_end = pos + Vec2::new(swing, -body.radius - 15.0);
            verts.extend(shapes::line(fuse_start, fuse_end, FUSE_WIDTH, colors::BOMB_FUSE));
            if fuse_phase % 10 < 5 {
                verts.extend(shapes::circle(fuse_end, 5.0, colors::BOMB_SPARK, 8));
            }
            verts
        }
        BodyKind::Debris {
            color,
            lifetime,
            max_lifetime,
        } => {
            let alpha = lifetime as f32 / max_lifetime.max(1) as f32;
            shapes::circle(pos, body.radius, rgba(color, alpha), segments)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::SessionState;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn snapshot_with(bodies: Vec<Body>) -> Snapshot {
        let mut state = SessionState::new(1);
        state.bodies = bodies;
        state.snapshot(&[])
    }

    #[test]
    fn test_squished_jelly_is_wide_and_flat() {
        let mut jelly = Body::soft_target(1, Vec2::new(100.0, 100.0), Vec2::ZERO, [255, 100, 100]);
        if let BodyKind::SoftTarget { squish, .. } = &mut jelly.kind {
            *squish = 0.5;
        }
        let verts = body_vertices(&jelly, Vec2::ZERO, 4);
        // 4 ellipse triangles, then the 8-segment highlight
        let ellipse = &verts[..12];
        let max_x = ellipse.iter().map(|v| v.position[0]).fold(f32::MIN, f32::max);
        let max_y = ellipse.iter().map(|v| v.position[1]).fold(f32::MIN, f32::max);
        assert!((max_x - 145.0).abs() < 1e-3);
        assert!((max_y - 115.0).abs() < 1e-3);
    }

    #[test]
    fn test_bomb_spark_flickers() {
        let lit = Body::hazard(1, Vec2::new(100.0, 100.0), Vec2::ZERO);
        let mut dark = lit.clone();
        dark.kind = BodyKind::Hazard { fuse_phase: 5 };
        assert!(body_vertices(&lit, Vec2::ZERO, 12).len() > body_vertices(&dark, Vec2::ZERO, 12).len());
    }

    #[test]
    fn test_debris_fades_with_lifetime() {
        let mut debris = Body::debris(1, Vec2::ZERO, Vec2::ZERO, [255, 255, 255], 40);
        debris.kind = BodyKind::Debris {
            color: [255, 255, 255],
            lifetime: 10,
            max_lifetime: 40,
        };
        let verts = body_vertices(&debris, Vec2::ZERO, 6);
        assert_eq!(verts[0].color[3], 0.25);
    }

    #[test]
    fn test_debris_cap_from_settings() {
        let bodies = (0..50)
            .map(|i| Body::debris(i, Vec2::ZERO, Vec2::ZERO, [255, 255, 255], 10))
            .collect();
        let snapshot = snapshot_with(bodies);
        let settings = Settings {
            particles: false,
            ..Settings::default()
        };
        let frame = build_frame(&snapshot, &settings, Vec2::ZERO);
        assert_eq!(frame, background(snapshot.time, &settings));
    }

    #[test]
    fn test_shake_only_while_timer_runs() {
        let mut rng = Pcg32::seed_from_u64(3);
        let mut snapshot = snapshot_with(Vec::new());
        let settings = Settings::default();
        assert_eq!(shake_offset(&snapshot, &settings, &mut rng), Vec2::ZERO);

        snapshot.shake_timer = 0.2;
        for _ in 0..20 {
            let offset = shake_offset(&snapshot, &settings, &mut rng);
            assert!(offset.abs().max_element() <= SHAKE_INTENSITY as f32);
        }

        let calm = Settings {
            reduced_motion: true,
            ..Settings::default()
        };
        assert_eq!(shake_offset(&snapshot, &calm, &mut rng), Vec2::ZERO);
    }

    #[test]
    fn test_bodies_move_with_shake() {
        let snapshot = snapshot_with(vec![Body::hazard(1, Vec2::new(100.0, 100.0), Vec2::ZERO)]);
        let settings = Settings::default();
        let still = build_frame(&snapshot, &settings, Vec2::ZERO);
        let shaken = build_frame(&snapshot, &settings, Vec2::new(5.0, 0.0));
        assert_eq!(still.len(), shaken.len());
        // The background does not shake; the bomb after it does
        let behind = background(snapshot.time, &settings).len();
        assert_eq!(shaken[..behind], still[..behind]);
        assert_eq!(shaken[behind].position[0], still[behind].position[0] + 5.0);
    }

    #[test]
    fn test_background_circles_pulse_over_time() {
        let (early, early_color) = background_circle(100.0, 200.0, 0.0);
        let (late, late_color) = background_circle(100.0, 200.0, 1.0);
        // 80 + 20 * sin(1.0) at t = 0, 80 + 20 * sin(2.5) at t = 1
        assert!((early - (80.0 + 20.0 * 1.0_f32.sin())).abs() < 1e-4);
        assert!((late - (80.0 + 20.0 * 2.5_f32.sin())).abs() < 1e-4);
        assert_ne!(early, late);
        assert_ne!(early_color, late_color);
        assert!((early_color[2] - 80.0 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn test_background_comes_first() {
        let snapshot = snapshot_with(Vec::new());
        let settings = Settings::default();
        let frame = build_frame(&snapshot, &settings, Vec2::ZERO);
        assert_eq!(frame[0].color, colors::BACKGROUND);
        // Fill quad plus a 13 x 8 grid of circles
        let circle = shapes::circle(Vec2::ZERO, 1.0, [1.0; 4], settings.quality.circle_segments()).len();
        assert_eq!(frame.len(), 6 + 13 * 8 * circle);
    }

    #[test]
    fn test_low_quality_skips_background_circles() {
        let snapshot = snapshot_with(Vec::new());
        let settings = Settings::from_preset(crate::settings::QualityPreset::Low);
        assert_eq!(background(snapshot.time, &settings).len(), 6);
    }
}
