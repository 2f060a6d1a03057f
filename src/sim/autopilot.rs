//! Demo player
//!
//! Drives the pointer for attract mode and soak runs: picks the jelly that is
//! about to fall out of reach and sweeps through it, choosing a stroke angle
//! that keeps clear of every bomb.

use glam::Vec2;

use super::body::Body;
use super::geometry::segment_intersects_circle;
use super::state::Snapshot;
use crate::consts::*;

/// Frames a stroke takes from press to release
const STROKE_FRAMES: u32 = 4;
/// Half-length of a stroke through the target
const STROKE_REACH: f32 = 70.0;
/// Extra clearance kept around bombs
const HAZARD_MARGIN: f32 = 25.0;
/// Frames to wait between strokes
const COOLDOWN_FRAMES: u32 = 3;

/// One synthetic pointer event
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerAction {
    Down(Vec2),
    Move(Vec2),
    Up,
}

#[derive(Debug, Clone)]
struct Stroke {
    from: Vec2,
    to: Vec2,
    step: u32,
}

/// Scripted slicer
#[derive(Debug, Clone, Default)]
pub struct Autopilot {
    stroke: Option<Stroke>,
    cooldown: u32,
}

impl Autopilot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pointer events to feed in before the next frame
    pub fn next_actions(&mut self, snapshot: &Snapshot) -> Vec<PointerAction> {
        if snapshot.ended {
            return match self.stroke.take() {
                Some(_) => vec![PointerAction::Up],
                None => Vec::new(),
            };
        }

        if let Some(stroke) = &mut self.stroke {
            stroke.step += 1;
            let t = stroke.step as f32 / STROKE_FRAMES as f32;
            let point = stroke.from.lerp(stroke.to, t.min(1.0));
            if stroke.step >= STROKE_FRAMES {
                self.stroke = None;
                self.cooldown = COOLDOWN_FRAMES;
                return vec![PointerAction::Move(point), PointerAction::Up];
            }
            return vec![PointerAction::Move(point)];
        }

        if self.cooldown > 0 {
            self.cooldown -= 1;
            return Vec::new();
        }

        let Some(target) = pick_target(snapshot) else {
            return Vec::new();
        };
        let Some((from, to)) = plan_stroke(target, &snapshot.hazards) else {
            return Vec::new();
        };

        self.stroke = Some(Stroke { from, to, step: 0 });
        vec![PointerAction::Down(from)]
    }
}

/// Lowest visible jelly (closest to dropping off screen)
fn pick_target(snapshot: &Snapshot) -> Option<&Body> {
    snapshot
        .targets
        .iter()
        .filter(|b| b.pos.y > b.radius && b.pos.y < WINDOW_HEIGHT - b.radius)
        .max_by(|a, b| a.pos.y.total_cmp(&b.pos.y))
}

/// Where a body will be `frames` frames from now (ignoring wall bounces)
fn predict(body: &Body, frames: f32) -> Vec2 {
    body.pos + body.vel * frames + Vec2::new(0.0, GRAVITY * frames * (frames + 1.0) * 0.5)
}

/// First stroke through the target that stays clear of every bomb
fn plan_stroke(target: &Body, hazards: &[Body]) -> Option<(Vec2, Vec2)> {
    let aim = predict(target, STROKE_FRAMES as f32 * 0.5);
    let directions = [
        Vec2::X,
        Vec2::Y,
        Vec2::new(1.0, 1.0).normalize(),
        Vec2::new(1.0, -1.0).normalize(),
    ];

    directions.into_iter().find_map(|dir| {
        let from = aim - dir * STROKE_REACH;
        let to = aim + dir * STROKE_REACH;
        let safe = hazards.iter().all(|h| {
            (0..=STROKE_FRAMES).all(|f| {
                let center = predict(h, f as f32);
                !segment_intersects_circle(from, to, center, h.radius + HAZARD_MARGIN)
            })
        });
        safe.then_some((from, to))
    })
}
