//! Fixed timestep simulation tick
//!
//! Advances a session by exactly one logical frame and resolves slices.

use std::f32::consts::TAU;

use glam::Vec2;
use rand::Rng;

use super::body::{Body, BodyKind, Rgb};
use super::geometry::segment_intersects_circle;
use super::state::{GameEvent, GamePhase, SessionState, Splatter};
use crate::consts::*;
use crate::highscores::HighScore;

/// What a single gesture segment did
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SliceOutcome {
    /// Jellies cut by the segment
    pub sliced: u32,
    /// A bomb went off and ended the session
    pub exploded: bool,
}

/// Advance the session by one fixed frame
pub fn tick(state: &mut SessionState) {
    if state.phase == GamePhase::Ended {
        return;
    }

    state.frame += 1;
    state.time += SIM_DT;
    state.spawn_timer += SIM_DT;
    state.difficulty_timer += SIM_DT;

    if state.combo > 0 {
        state.combo_timer -= SIM_DT;
        if state.combo_timer <= 0.0 {
            state.combo = 0;
        }
    }

    if state.shake_timer > 0.0 {
        state.shake_timer -= SIM_DT;
    }

    if state.spawn_timer >= SPAWN_INTERVAL / state.difficulty_level {
        state.spawn_timer = 0.0;
        spawn_objects(state);
    }

    if state.difficulty_timer >= DIFFICULTY_INCREASE_INTERVAL {
        state.difficulty_timer = 0.0;
        state.difficulty_level += DIFFICULTY_STEP;
        log::info!("Difficulty raised to {}", state.difficulty_level);
        state
            .events
            .push(GameEvent::DifficultyRaised(state.difficulty_level));
    }

    for body in &mut state.bodies {
        body.integrate();
    }
    state
        .bodies
        .retain(|b| !b.is_out_of_bounds() && !b.is_expired());

    state.splatters.retain_mut(|s| {
        s.alpha -= SPLATTER_FADE;
        s.alpha > 0.0
    });

    state.fading_trails.retain_mut(|t| {
        t.alpha -= TRAIL_FADE;
        t.alpha > 0.0
    });
}

/// Spawn roll for one spawn tick
///
/// Returns the id of the new body, if any. The hazard chance scales with
/// difficulty and is not capped, so past level 3.33 every spawn is a bomb.
pub fn spawn_objects(state: &mut SessionState) -> Option<u32> {
    if state.rng.random::<f32>() >= SPAWN_CHANCE {
        return None;
    }

    let x = state
        .rng
        .random_range(SPAWN_INSET..=WINDOW_WIDTH as i32 - SPAWN_INSET) as f32;
    let pos = Vec2::new(x, WINDOW_HEIGHT + SPAWN_DEPTH);
    let hazard = state.rng.random::<f32>() < HAZARD_CHANCE_PER_LEVEL * state.difficulty_level;
    let id = state.next_entity_id();

    let body = if hazard {
        let vel = Vec2::new(
            state.rng.random_range(-4.0..4.0),
            INITIAL_VELOCITY * state.rng.random_range(0.9_f32..1.1),
        );
        Body::hazard(id, pos, vel)
    } else {
        let vel = Vec2::new(
            state.rng.random_range(-6.0..6.0),
            INITIAL_VELOCITY * state.rng.random_range(0.8_f32..1.2),
        );
        let color = TARGET_COLORS[state.rng.random_range(0..TARGET_COLORS.len())];
        Body::soft_target(id, pos, vel, color)
    };

    log::debug!(
        "Spawned {} #{} at x={}",
        if hazard { "hazard" } else { "jelly" },
        id,
        x
    );
    state.bodies.push(body);
    Some(id)
}

/// Test one gesture segment against everything on screen
///
/// All jellies hit by the segment are sliced and counted toward the combo;
/// then only the first bomb hit (if any) explodes. Children spawned by a split
/// are not tested against the same segment.
pub fn resolve_slice(
    state: &mut SessionState,
    p1: Vec2,
    p2: Vec2,
    high_score: &mut HighScore,
) -> SliceOutcome {
    let mut outcome = SliceOutcome::default();
    if state.phase == GamePhase::Ended {
        return outcome;
    }

    let hit_targets: Vec<u32> = state
        .soft_targets()
        .filter(|b| segment_intersects_circle(p1, p2, b.pos, b.radius))
        .map(|b| b.id)
        .collect();
    for id in hit_targets {
        if slice_target(state, id) {
            outcome.sliced += 1;
        }
    }

    if outcome.sliced > 0 {
        state.combo += 1;
        state.combo_timer = COMBO_TIME;
        if state.combo >= COMBO_BONUS_MIN {
            state.score += u64::from(state.combo) * 2;
            state.events.push(GameEvent::ComboReached(state.combo));
        }
    }

    let hit_hazard = state
        .hazards()
        .find(|b| segment_intersects_circle(p1, p2, b.pos, b.radius))
        .map(|b| b.id);
    if let Some(id) = hit_hazard {
        trigger_hazard(state, id, high_score);
        outcome.exploded = true;
    }

    outcome
}

/// Slice the jelly with the given id; returns false if it no longer exists
pub fn slice_target(state: &mut SessionState, id: u32) -> bool {
    let Some(index) = state
        .bodies
        .iter()
        .position(|b| b.id == id && b.is_soft_target())
    else {
        return false;
    };
    let jelly = state.bodies.remove(index);
    let BodyKind::SoftTarget { color, .. } = jelly.kind else {
        return false;
    };

    let size = state.rng.random_range(40..=80);
    state.splatters.push(Splatter {
        pos: jelly.pos,
        color,
        size,
        alpha: FULL_ALPHA,
    });

    state.score += 1;
    spawn_debris(state, jelly.pos, color, DEBRIS_COUNT, 2.0..8.0, 20..=40);

    let split = jelly.radius > SPLIT_THRESHOLD;
    if split {
        for _ in 0..2 {
            let offset = Vec2::new(
                state.rng.random_range(-10.0..10.0),
                state.rng.random_range(-10.0..10.0),
            );
            let kick = Vec2::new(
                state.rng.random_range(-5.0..5.0),
                state.rng.random_range(-5.0..5.0),
            );
            let child_id = state.next_entity_id();
            let mut child = Body::soft_target(child_id, jelly.pos + offset, jelly.vel + kick, color);
            child.radius = jelly.radius * SPLIT_SCALE;
            if let BodyKind::SoftTarget { squish, .. } = &mut child.kind {
                *squish = SPLIT_SQUISH;
            }
            state.bodies.push(child);
        }
    }

    log::debug!("Sliced jelly #{} (r={}, split={})", id, jelly.radius, split);
    state.events.push(GameEvent::TargetSliced {
        pos: jelly.pos,
        radius: jelly.radius,
        split,
    });
    true
}

/// Blow up the bomb with the given id and end the session
pub fn trigger_hazard(state: &mut SessionState, id: u32, high_score: &mut HighScore) {
    if state.phase == GamePhase::Ended {
        return;
    }
    let Some(index) = state
        .bodies
        .iter()
        .position(|b| b.id == id && b.is_hazard())
    else {
        return;
    };
    let bomb = state.bodies.remove(index);

    spawn_debris(
        state,
        bomb.pos,
        HAZARD_EXPLOSION_COLOR,
        DEBRIS_COUNT * 2,
        5.0..15.0,
        30..=60,
    );
    state.shake_timer = SHAKE_DURATION;
    state.events.push(GameEvent::HazardExploded { pos: bomb.pos });

    let new_record = high_score.report_high_score(state.score);
    state.phase = GamePhase::Ended;
    log::info!(
        "Session ended by hazard #{}: score {} (record: {})",
        id,
        state.score,
        high_score.get_high_score()
    );
    state.events.push(GameEvent::SessionEnded {
        score: state.score,
        new_record,
    });
}

/// Burst of debris flying out in random directions
fn spawn_debris(
    state: &mut SessionState,
    origin: Vec2,
    color: Rgb,
    count: usize,
    speed: std::ops::Range<f32>,
    lifetime: std::ops::RangeInclusive<i32>,
) {
    for _ in 0..count {
        let angle = state.rng.random_range(0.0..TAU);
        let speed = state.rng.random_range(speed.clone());
        let vel = Vec2::new(angle.cos(), angle.sin()) * speed;
        let life = state.rng.random_range(lifetime.clone());
        let id = state.next_entity_id();
        state.bodies.push(Body::debris(id, origin, vel, color, life));
    }
}
