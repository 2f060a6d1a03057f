//! Jelly Slice - a falling-jelly slicing arcade game core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (bodies, slicing, session state)
//! - `session`: Input/frame entry points for a hosting application
//! - `render`: CPU-side vertex data for any drawing surface
//! - `highscores`: In-memory best score
//! - `settings`: Presentation preferences

pub mod highscores;
pub mod render;
pub mod session;
pub mod settings;
pub mod sim;

pub use highscores::HighScore;
pub use session::Session;
pub use settings::{QualityPreset, Settings, SettingsError};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (one logical frame at 60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Target frame rate for hosts pacing the loop
    pub const FPS: u32 = 60;

    /// Window dimensions
    pub const WINDOW_WIDTH: f32 = 1280.0;
    pub const WINDOW_HEIGHT: f32 = 720.0;
    /// Bodies further than this outside the window vertically are culled
    pub const CULL_MARGIN: f32 = 100.0;
    /// Spawn line below the bottom edge
    pub const SPAWN_DEPTH: f32 = 50.0;
    /// Horizontal inset of the spawn range
    pub const SPAWN_INSET: i32 = 50;

    /// Gravity per frame (not scaled by dt)
    pub const GRAVITY: f32 = 0.35;
    /// Launch velocity (upward)
    pub const INITIAL_VELOCITY: f32 = -18.0;
    /// Horizontal restitution when hitting a side wall
    pub const WALL_BOUNCE: f32 = -0.8;

    /// Seconds between spawn ticks at difficulty 1
    pub const SPAWN_INTERVAL: f32 = 1.2;
    /// Chance that a spawn tick produces a body
    pub const SPAWN_CHANCE: f32 = 0.7;
    /// Hazard chance per unit of difficulty
    pub const HAZARD_CHANCE_PER_LEVEL: f32 = 0.3;
    /// Combo window in seconds
    pub const COMBO_TIME: f32 = 0.4;
    /// Combo length that starts paying bonus points
    pub const COMBO_BONUS_MIN: u32 = 3;

    /// Difficulty ramp
    pub const DIFFICULTY_INCREASE_INTERVAL: f32 = 20.0;
    pub const DIFFICULTY_STEP: f32 = 0.5;

    /// Soft target (jelly) defaults
    pub const TARGET_RADIUS: f32 = 30.0;
    pub const SPLIT_THRESHOLD: f32 = 15.0;
    pub const SPLIT_SCALE: f32 = 0.7;
    /// Squish given to freshly split children
    pub const SPLIT_SQUISH: f32 = 0.5;

    /// Hazard (bomb) defaults
    pub const HAZARD_RADIUS: f32 = 20.0;
    pub const HAZARD_EXPLOSION_COLOR: [u8; 3] = [255, 100, 0];

    /// Gesture trail length in points
    pub const TRAIL_CAPACITY: usize = 10;
    /// Debris per slice (explosions spawn double)
    pub const DEBRIS_COUNT: usize = 20;

    /// Screen shake
    pub const SHAKE_INTENSITY: i32 = 10;
    pub const SHAKE_DURATION: f32 = 0.3;

    /// Hitbox enlargement applied to squared radius
    pub const HITBOX_SCALE: f32 = 1.5;

    /// Fades (opacity units per frame, from 255)
    pub const FULL_ALPHA: f32 = 255.0;
    pub const SPLATTER_FADE: f32 = 15.0;
    pub const TRAIL_FADE: f32 = 10.0;

    /// Soft target palette
    pub const TARGET_COLORS: [[u8; 3]; 5] = [
        [255, 100, 100], // Red
        [100, 255, 100], // Green
        [100, 100, 255], // Blue
        [255, 255, 100], // Yellow
        [255, 100, 255], // Pink
    ];
}
