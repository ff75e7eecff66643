//! Game state and core simulation types
//!
//! Everything the frame loop mutates lives in `GameState`, which is passed
//! explicitly to each subsystem.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Which paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

/// A player's paddle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    /// Left edge (fixed per side)
    pub x: f32,
    /// Top edge
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Height restored when a paddle power-up expires. Never mutated.
    pub base_height: f32,
    pub color: String,
    pub score: u32,
}

impl Paddle {
    /// A paddle vertically centered on its side of the canvas
    pub fn new(side: Side) -> Self {
        let x = match side {
            Side::Left => 0.0,
            Side::Right => CANVAS_WIDTH - PADDLE_WIDTH,
        };
        Self {
            x,
            y: CANVAS_HEIGHT / 2.0 - PADDLE_HEIGHT / 2.0,
            width: PADDLE_WIDTH,
            height: PADDLE_HEIGHT,
            base_height: PADDLE_HEIGHT,
            color: DEFAULT_PADDLE_COLOR.to_string(),
            score: 0,
        }
    }

    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Step up if the top edge is still inside the canvas (checked before moving)
    pub fn step_up(&mut self, speed: f32) {
        if self.y > 0.0 {
            self.y -= speed;
        }
    }

    /// Step down if the bottom edge is still inside the canvas (checked before moving)
    pub fn step_down(&mut self, speed: f32) {
        if self.bottom() < CANVAS_HEIGHT {
            self.y += speed;
        }
    }
}

/// The ball. `pos` is its top-left corner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub size: f32,
    pub vel: Vec2,
    /// Speed magnitudes used for resets, deflections and power-up reverts. Never mutated.
    pub base_speed: Vec2,
}

impl Default for Ball {
    fn default() -> Self {
        Self {
            pos: Vec2::new(CANVAS_WIDTH / 2.0, CANVAS_HEIGHT / 2.0),
            size: BALL_SIZE,
            vel: Vec2::new(BALL_SPEED_X, BALL_SPEED_Y),
            base_speed: Vec2::new(BALL_SPEED_X, BALL_SPEED_Y),
        }
    }
}

impl Ball {
    /// Recenter and serve at base speed with random signs on each axis
    pub fn reset(&mut self, rng: &mut Pcg32) {
        self.pos = Vec2::new(CANVAS_WIDTH / 2.0, CANVAS_HEIGHT / 2.0);
        let sx = if rng.random_bool(0.5) { 1.0 } else { -1.0 };
        let sy = if rng.random_bool(0.5) { 1.0 } else { -1.0 };
        self.vel = Vec2::new(self.base_speed.x * sx, self.base_speed.y * sy);
    }
}

/// Power-up types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PowerUpKind {
    IncreasePaddle,
    DecreasePaddle,
    IncreaseSpeed,
    DecreaseSpeed,
}

impl PowerUpKind {
    pub const ALL: [PowerUpKind; 4] = [
        PowerUpKind::IncreasePaddle,
        PowerUpKind::DecreasePaddle,
        PowerUpKind::IncreaseSpeed,
        PowerUpKind::DecreaseSpeed,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            PowerUpKind::IncreasePaddle => "increasePaddle",
            PowerUpKind::DecreasePaddle => "decreasePaddle",
            PowerUpKind::IncreaseSpeed => "increaseSpeed",
            PowerUpKind::DecreaseSpeed => "decreaseSpeed",
        }
    }

    pub fn from_name(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.name() == s)
    }

    /// Display color of a pending pickup
    pub fn color(&self) -> &'static str {
        match self {
            PowerUpKind::IncreasePaddle => "#0f0",
            PowerUpKind::DecreasePaddle => "#f00",
            PowerUpKind::IncreaseSpeed => "#00f",
            PowerUpKind::DecreaseSpeed => "#ff0",
        }
    }

    /// What has to be restored when the effect ends
    pub fn revert_kind(&self) -> RevertKind {
        match self {
            PowerUpKind::IncreasePaddle | PowerUpKind::DecreasePaddle => RevertKind::Paddle,
            PowerUpKind::IncreaseSpeed | PowerUpKind::DecreaseSpeed => RevertKind::Speed,
        }
    }
}

/// A power-up waiting on the field. `pos` is its top-left corner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PowerUp {
    pub pos: Vec2,
    pub size: f32,
    pub kind: PowerUpKind,
}

impl PowerUp {
    pub fn new(kind: PowerUpKind, pos: Vec2) -> Self {
        Self {
            pos,
            size: POWER_UP_SIZE,
            kind,
        }
    }
}

/// Restoration applied when an active effect expires
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RevertKind {
    /// Both paddles back to their base height
    Paddle,
    /// Ball speed back to base magnitude, keeping direction
    Speed,
}

/// An applied effect awaiting reversal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivePowerUp {
    pub kind: PowerUpKind,
    /// Absolute time (ms) at or after which the effect reverts
    pub expires_at_ms: f64,
    pub revert: RevertKind,
}

impl ActivePowerUp {
    /// Whole seconds left, rounded up (HUD countdown)
    pub fn remaining_secs(&self, now_ms: f64) -> i64 {
        ((self.expires_at_ms - now_ms) / 1000.0).ceil() as i64
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed the RNG was created from
    pub seed: u64,
    pub rng: Pcg32,
    pub player1: Paddle,
    pub player2: Paddle,
    pub ball: Ball,
    /// Pending power-ups, unordered
    pub power_ups: Vec<PowerUp>,
    /// Active effects in pickup order
    pub active_power_ups: Vec<ActivePowerUp>,
    pub paused: bool,
    /// Frames simulated (paused frames excluded)
    pub frames: u64,
}

impl GameState {
    /// Create a new game state with the given seed
    pub fn new(seed: u64) -> Self {
        let state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            player1: Paddle::new(Side::Left),
            player2: Paddle::new(Side::Right),
            ball: Ball::default(),
            power_ups: Vec::new(),
            active_power_ups: Vec::new(),
            paused: false,
            frames: 0,
        };
        log::debug!("New game state, seed {}", state.seed);
        state
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        match side {
            Side::Left => &self.player1,
            Side::Right => &self.player2,
        }
    }

    pub fn paddle_mut(&mut self, side: Side) -> &mut Paddle {
        match side {
            Side::Left => &mut self.player1,
            Side::Right => &mut self.player2,
        }
    }

    /// Recenter the ball with fresh random direction
    pub fn reset_ball(&mut self) {
        self.ball.reset(&mut self.rng);
    }
}
