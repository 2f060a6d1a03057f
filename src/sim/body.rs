//! Kinematic bodies: jellies, bombs and debris
//!
//! Every body shares position/velocity/radius and one integration routine.
//! Kind-specific state (squish spring, fuse phase, lifetime) rides in [`BodyKind`].

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// RGB colour, 0-255 per channel
pub type Rgb = [u8; 3];

/// Variant-specific body state
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum BodyKind {
    /// Slice-for-points jelly
    SoftTarget {
        color: Rgb,
        /// Vertical stretch factor (1.0 = round)
        squish: f32,
        squish_vel: f32,
    },
    /// Bomb; the fuse phase only drives the flicker
    Hazard { fuse_phase: u32 },
    /// Cosmetic particle, lifetime counted in frames
    Debris {
        color: Rgb,
        lifetime: i32,
        max_lifetime: i32,
    },
}

/// A moving circular body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Body {
    pub id: u32,
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub kind: BodyKind,
}

impl Body {
    pub fn soft_target(id: u32, pos: Vec2, vel: Vec2, color: Rgb) -> Self {
        Self {
            id,
            pos,
            vel,
            radius: TARGET_RADIUS,
            kind: BodyKind::SoftTarget {
                color,
                squish: 1.0,
                squish_vel: 0.0,
            },
        }
    }

    pub fn hazard(id: u32, pos: Vec2, vel: Vec2) -> Self {
        Self {
            id,
            pos,
            vel,
            radius: HAZARD_RADIUS,
            kind: BodyKind::Hazard { fuse_phase: 0 },
        }
    }

    pub fn debris(id: u32, pos: Vec2, vel: Vec2, color: Rgb, lifetime: i32) -> Self {
        Self {
            id,
            pos,
            vel,
            radius: 2.0,
            kind: BodyKind::Debris {
                color,
                lifetime,
                max_lifetime: lifetime,
            },
        }
    }

    #[inline]
    pub fn is_soft_target(&self) -> bool {
        matches!(self.kind, BodyKind::SoftTarget { .. })
    }

    #[inline]
    pub fn is_hazard(&self) -> bool {
        matches!(self.kind, BodyKind::Hazard { .. })
    }

    #[inline]
    pub fn is_debris(&self) -> bool {
        matches!(self.kind, BodyKind::Debris { .. })
    }

    /// Colour of jellies and debris (hazards have none)
    pub fn color(&self) -> Option<Rgb> {
        match self.kind {
            BodyKind::SoftTarget { color, .. } | BodyKind::Debris { color, .. } => Some(color),
            BodyKind::Hazard { .. } => None,
        }
    }

    /// Debris whose lifetime has run out
    pub fn is_expired(&self) -> bool {
        matches!(self.kind, BodyKind::Debris { lifetime, .. } if lifetime <= 0)
    }

    /// Outside the vertical band where bodies are kept alive
    pub fn is_out_of_bounds(&self) -> bool {
        self.pos.y > WINDOW_HEIGHT + CULL_MARGIN || self.pos.y < -CULL_MARGIN
    }

    /// Advance one fixed frame
    ///
    /// Gravity is a per-frame constant; the simulation never scales it by wall time.
    pub fn integrate(&mut self) {
        self.pos += self.vel;

        match &mut self.kind {
            BodyKind::Debris { lifetime, .. } => {
                self.vel.y += GRAVITY * 0.5;
                *lifetime -= 1;
                return;
            }
            BodyKind::SoftTarget {
                squish, squish_vel, ..
            } => {
                self.vel.y += GRAVITY;
                // Damped spring back toward round
                *squish += *squish_vel;
                *squish_vel += (1.0 - *squish) * 0.2;
                *squish_vel *= 0.8;
            }
            BodyKind::Hazard { fuse_phase } => {
                self.vel.y += GRAVITY;
                *fuse_phase = fuse_phase.wrapping_add(1);
            }
        }

        if self.pos.x < self.radius {
            self.pos.x = self.radius;
            self.vel.x *= WALL_BOUNCE;
        } else if self.pos.x > WINDOW_WIDTH - self.radius {
            self.pos.x = WINDOW_WIDTH - self.radius;
            self.vel.x *= WALL_BOUNCE;
        }
    }
}
