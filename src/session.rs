//! Entry points for a hosting application
//!
//! A host drives a [`Session`] once per frame: feed pointer events, call
//! [`Session::advance_frame`], then draw from [`Session::snapshot`] and react
//! to [`Session::drain_events`].

use glam::Vec2;

use crate::highscores::HighScore;
use crate::sim::{GameEvent, GestureTrail, SessionState, SliceOutcome, Snapshot, resolve_slice, tick};

/// A running game session plus its gesture input
#[derive(Debug, Clone)]
pub struct Session {
    state: SessionState,
    trail: GestureTrail,
}

impl Session {
    pub fn new(seed: u64) -> Self {
        log::info!("Starting session (seed {})", seed);
        Self {
            state: SessionState::new(seed),
            trail: GestureTrail::new(),
        }
    }

    /// Pointer pressed
    pub fn on_pointer_down(&mut self, point: Vec2) {
        self.trail.press(point);
    }

    /// Pointer moved; slices whatever the newest trail segment crosses
    pub fn on_pointer_move(&mut self, point: Vec2, high_score: &mut HighScore) -> SliceOutcome {
        match self.trail.drag(point) {
            Some((p1, p2)) => resolve_slice(&mut self.state, p1, p2, high_score),
            None => SliceOutcome::default(),
        }
    }

    /// Pointer released; the finished trail fades out
    pub fn on_pointer_up(&mut self) {
        if let Some(points) = self.trail.release() {
            self.state.push_fading_trail(points);
        }
    }

    /// Run exactly one fixed simulation step
    pub fn advance_frame(&mut self) {
        tick(&mut self.state);
    }

    /// Owned copy of everything a renderer needs
    pub fn snapshot(&self) -> Snapshot {
        let active: &[Vec2] = if self.trail.is_active() {
            self.trail.points()
        } else {
            &[]
        };
        self.state.snapshot(active)
    }

    /// Take the notifications raised since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.state.events)
    }

    /// Start over with an empty session, reseeded from the previous run
    pub fn reset(&mut self) {
        let seed = self.state.seed.wrapping_add(1);
        log::info!("Resetting session (seed {})", seed);
        self.state = SessionState::new(seed);
        self.trail.clear();
    }

    pub fn is_ended(&self) -> bool {
        self.state.is_ended()
    }

    pub fn score(&self) -> u64 {
        self.state.score
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    #[cfg(test)]
    pub(crate) fn state_mut(&mut self) -> &mut SessionState {
        &mut self.state
    }
}
