//! Pointer-drag gesture tracking
//!
//! Keeps a short trail of recent pointer points while the button is held.
//! Each move yields the newest segment for hit-testing; a release hands the
//! whole trail back so it can fade out on screen.

use glam::Vec2;

use crate::consts::TRAIL_CAPACITY;

/// Bounded trail of recent pointer points (oldest first)
#[derive(Debug, Clone, Default)]
pub struct GestureTrail {
    points: Vec<Vec2>,
    active: bool,
}

impl GestureTrail {
    pub fn new() -> Self {
        Self {
            points: Vec::with_capacity(TRAIL_CAPACITY + 1),
            active: false,
        }
    }

    /// Pointer pressed: start a new trail at `point`
    pub fn press(&mut self, point: Vec2) {
        self.points.clear();
        self.active = point.is_finite();
        if self.active {
            self.points.push(point);
        }
    }

    /// Pointer moved: record the point and return the newest segment
    ///
    /// Moves while idle and non-finite points are ignored.
    pub fn drag(&mut self, point: Vec2) -> Option<(Vec2, Vec2)> {
        if !self.active || !point.is_finite() {
            return None;
        }
        self.points.push(point);
        if self.points.len() > TRAIL_CAPACITY {
            self.points.remove(0);
        }
        self.newest_segment()
    }

    /// Pointer released: end the gesture, returning the trail if it had a segment
    pub fn release(&mut self) -> Option<Vec<Vec2>> {
        let was_active = std::mem::replace(&mut self.active, false);
        let points = std::mem::take(&mut self.points);
        (was_active && points.len() >= 2).then_some(points)
    }

    /// Last two points, oldest first
    pub fn newest_segment(&self) -> Option<(Vec2, Vec2)> {
        match self.points.as_slice() {
            [.., a, b] => Some((*a, *b)),
            _ => None,
        }
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    pub fn clear(&mut self) {
        self.points.clear();
        self.active = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_move_release() {
        let mut trail = GestureTrail::new();
        trail.press(Vec2::new(10.0, 10.0));
        assert!(trail.is_active());
        assert_eq!(trail.newest_segment(), None);

        let seg = trail.drag(Vec2::new(20.0, 10.0));
        assert_eq!(seg, Some((Vec2::new(10.0, 10.0), Vec2::new(20.0, 10.0))));

        let points = trail.release();
        assert_eq!(points.map(|p| p.len()), Some(2));
        assert!(!trail.is_active());
        assert!(trail.points().is_empty());
    }

    #[test]
    fn test_capacity_evicts_oldest() {
        let mut trail = GestureTrail::new();
        trail.press(Vec2::ZERO);
        for i in 1..=15 {
            trail.drag(Vec2::new(i as f32, 0.0));
        }
        assert_eq!(trail.points().len(), TRAIL_CAPACITY);
        assert_eq!(trail.points()[0], Vec2::new(6.0, 0.0));
        assert_eq!(trail.points()[TRAIL_CAPACITY - 1], Vec2::new(15.0, 0.0));
    }

    #[test]
    fn test_move_while_idle_is_ignored() {
        let mut trail = GestureTrail::new();
        assert_eq!(trail.drag(Vec2::new(5.0, 5.0)), None);
        assert!(trail.points().is_empty());
        assert_eq!(trail.release(), None);
    }

    #[test]
    fn test_click_without_drag_leaves_no_trail() {
        let mut trail = GestureTrail::new();
        trail.press(Vec2::new(5.0, 5.0));
        assert_eq!(trail.release(), None);
    }

    #[test]
    fn test_non_finite_points_dropped() {
        let mut trail = GestureTrail::new();
        trail.press(Vec2::new(5.0, 5.0));
        assert_eq!(trail.drag(Vec2::new(f32::NAN, 5.0)), None);
        assert_eq!(trail.points().len(), 1);

        trail.press(Vec2::new(f32::INFINITY, 0.0));
        assert!(!trail.is_active());
    }

    #[test]
    fn test_press_restarts_trail() {
        let mut trail = GestureTrail::new();
        trail.press(Vec2::ZERO);
        trail.drag(Vec2::ONE);
        trail.press(Vec2::new(50.0, 50.0));
        assert_eq!(trail.points(), &[Vec2::new(50.0, 50.0)]);
    }
}
