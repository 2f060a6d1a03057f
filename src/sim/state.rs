//! Session state and core simulation types
//!
//! Everything a running session owns lives here; the per-frame logic is in `tick`.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::body::{Body, Rgb};
use crate::consts::*;

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Bodies spawn, move and can be sliced
    Playing,
    /// A hazard went off; nothing advances until reset
    Ended,
}

/// Notifications for the hosting application (sound, HUD, state changes)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    TargetSliced { pos: Vec2, radius: f32, split: bool },
    ComboReached(u32),
    DifficultyRaised(f32),
    HazardExploded { pos: Vec2 },
    /// Emitted once per session; the host should switch to its game-over screen
    SessionEnded { score: u64, new_record: bool },
}

/// Background splat left where a jelly was sliced
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Splatter {
    pub pos: Vec2,
    pub color: Rgb,
    pub size: u32,
    /// 0-255
    pub alpha: f32,
}

/// A finished gesture fading out
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FadingTrail {
    pub points: Vec<Vec2>,
    /// 0-255
    pub alpha: f32,
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct SessionState {
    /// Seed the RNG was created from
    pub seed: u64,
    pub rng: Pcg32,
    pub phase: GamePhase,
    /// Jellies, bombs and debris, tagged by kind (spawn order)
    pub bodies: Vec<Body>,
    pub splatters: Vec<Splatter>,
    pub fading_trails: Vec<FadingTrail>,
    pub score: u64,
    pub combo: u32,
    pub combo_timer: f32,
    pub spawn_timer: f32,
    pub difficulty_timer: f32,
    pub difficulty_level: f32,
    pub shake_timer: f32,
    /// Elapsed simulated seconds
    pub time: f32,
    /// Simulation frame counter
    pub frame: u64,
    /// Pending notifications, drained by the host
    pub events: Vec<GameEvent>,
    next_id: u32,
}

impl SessionState {
    /// Create a fresh session with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Playing,
            bodies: Vec::new(),
            splatters: Vec::new(),
            fading_trails: Vec::new(),
            score: 0,
            combo: 0,
            combo_timer: 0.0,
            spawn_timer: 0.0,
            difficulty_timer: 0.0,
            difficulty_level: 1.0,
            shake_timer: 0.0,
            time: 0.0,
            frame: 0,
            events: Vec::new(),
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    ///
    /// Wraps at `u32::MAX`; only the handful of live bodies need distinct ids.
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        id
    }

    #[inline]
    pub fn is_ended(&self) -> bool {
        self.phase == GamePhase::Ended
    }

    pub fn soft_targets(&self) -> impl Iterator<Item = &Body> {
        self.bodies.iter().filter(|b| b.is_soft_target())
    }

    pub fn hazards(&self) -> impl Iterator<Item = &Body> {
        self.bodies.iter().filter(|b| b.is_hazard())
    }

    pub fn debris(&self) -> impl Iterator<Item = &Body> {
        self.bodies.iter().filter(|b| b.is_debris())
    }

    /// Keep a finished gesture around as a fading streak
    pub fn push_fading_trail(&mut self, points: Vec<Vec2>) {
        if points.len() >= 2 {
            self.fading_trails.push(FadingTrail {
                points,
                alpha: FULL_ALPHA,
            });
        }
    }

    /// Read-only copy for rendering
    pub fn snapshot(&self, active_trail: &[Vec2]) -> Snapshot {
        Snapshot {
            targets: self.soft_targets().cloned().collect(),
            hazards: self.hazards().cloned().collect(),
            debris: self.debris().cloned().collect(),
            splatters: self.splatters.clone(),
            fading_trails: self.fading_trails.clone(),
            active_trail: active_trail.to_vec(),
            score: self.score,
            combo: self.combo,
            difficulty_level: self.difficulty_level,
            shake_timer: self.shake_timer,
            time: self.time,
            ended: self.is_ended(),
        }
    }
}

/// Immutable frame view handed to a renderer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub targets: Vec<Body>,
    pub hazards: Vec<Body>,
    pub debris: Vec<Body>,
    pub splatters: Vec<Splatter>,
    pub fading_trails: Vec<FadingTrail>,
    /// Points of the gesture currently being dragged (empty when idle)
    pub active_trail: Vec<Vec2>,
    pub score: u64,
    pub combo: u32,
    pub difficulty_level: f32,
    pub shake_timer: f32,
    pub time: f32,
    pub ended: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_is_empty() {
        let state = SessionState::new(7);
        assert_eq!(state.score, 0);
        assert_eq!(state.combo, 0);
        assert_eq!(state.difficulty_level, 1.0);
        assert!(state.bodies.is_empty());
        assert_eq!(state.phase, GamePhase::Playing);
    }

    #[test]
    fn test_snapshot_partitions_bodies() {
        let mut state = SessionState::new(7);
        let id = state.next_entity_id();
        state.bodies.push(Body::soft_target(id, Vec2::new(100.0, 100.0), Vec2::ZERO, [1, 2, 3]));
        let id = state.next_entity_id();
        state.bodies.push(Body::hazard(id, Vec2::new(200.0, 100.0), Vec2::ZERO));
        let id = state.next_entity_id();
        state.bodies.push(Body::debris(id, Vec2::new(300.0, 100.0), Vec2::ZERO, [1, 2, 3], 20));

        let snap = state.snapshot(&[Vec2::ZERO]);
        assert_eq!(snap.targets.len(), 1);
        assert_eq!(snap.hazards.len(), 1);
        assert_eq!(snap.debris.len(), 1);
        assert_eq!(snap.active_trail.len(), 1);
        assert!(!snap.ended);
    }

    #[test]
    fn test_single_point_trail_is_not_kept() {
        let mut state = SessionState::new(7);
        state.push_fading_trail(vec![Vec2::ZERO]);
        assert!(state.fading_trails.is_empty());
        state.push_fading_trail(vec![Vec2::ZERO, Vec2::ONE]);
        assert_eq!(state.fading_trails[0].alpha, FULL_ALPHA);
    }

    #[test]
    fn test_entity_ids_are_unique() {
        let mut state = SessionState::new(7);
        let a = state.next_entity_id();
        let b = state.next_entity_id();
        assert_ne!(a, b);
    }

    #[test]
    fn test_entity_ids_wrap_without_overflow() {
        let mut state = SessionState::new(7);
        state.next_id = u32::MAX;
        assert_eq!(state.next_entity_id(), u32::MAX);
        assert_eq!(state.next_entity_id(), 0);
        assert_eq!(state.next_entity_id(), 1);
    }
}
