//! Power Pong - two-paddle Pong with AI and power-ups
//!
//! Core modules:
//! - `sim`: Frame simulation (movement, collisions, scoring, power-ups)
//! - `game`: Session wrapper the host drives once per display refresh
//! - `settings`: Player-facing configuration (colors, mode, difficulty)
//! - `platform`: Browser bindings (wasm32 only)

pub mod game;
pub mod platform;
pub mod settings;
pub mod sim;

pub use game::Game;
pub use settings::{Difficulty, Settings};

/// Game configuration constants
pub mod consts {
    /// Drawing surface dimensions
    pub const CANVAS_WIDTH: f32 = 800.0;
    pub const CANVAS_HEIGHT: f32 = 600.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    /// Human paddle speed (units per frame)
    pub const PADDLE_SPEED: f32 = 8.0;
    pub const DEFAULT_PADDLE_COLOR: &str = "#fff";

    /// Ball defaults
    pub const BALL_SIZE: f32 = 10.0;
    pub const BALL_SPEED_X: f32 = 5.0;
    pub const BALL_SPEED_Y: f32 = 5.0;
    /// Vertical speed multiplier applied on paddle deflection
    pub const DEFLECTION_BOOST: f32 = 1.5;

    /// AI dead zone around the ball's y (prevents jitter)
    pub const AI_DEAD_ZONE: f32 = 10.0;

    /// Power-up defaults
    pub const POWER_UP_SIZE: f32 = 20.0;
    pub const POWER_UP_DURATION_MS: f64 = 5000.0;
    /// Per-frame spawn probability
    pub const POWER_UP_SPAWN_CHANCE: f64 = 0.005;
    /// Spawn inset from every canvas edge
    pub const POWER_UP_SPAWN_MARGIN: f32 = 50.0;
    pub const PADDLE_GROW_FACTOR: f32 = 1.5;
    pub const PADDLE_SHRINK_FACTOR: f32 = 0.5;
    pub const SPEED_UP_FACTOR: f32 = 1.5;
    pub const SLOW_DOWN_FACTOR: f32 = 0.5;
}

/// Sign of `v` with `sign(0) == 0`, unlike `f32::signum`
#[inline]
pub fn sign(v: f32) -> f32 {
    if v > 0.0 {
        1.0
    } else if v < 0.0 {
        -1.0
    } else {
        0.0
    }
}
