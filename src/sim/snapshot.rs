//! Read-only view of a frame for the renderer

use serde::Serialize;

use super::state::{GameState, Paddle};
use crate::consts::{CANVAS_HEIGHT, CANVAS_WIDTH};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaddleView {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub color: String,
    pub score: u32,
}

impl From<&Paddle> for PaddleView {
    fn from(p: &Paddle) -> Self {
        Self {
            x: p.x,
            y: p.y,
            width: p.width,
            height: p.height,
            color: p.color.clone(),
            score: p.score,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BallView {
    pub x: f32,
    pub y: f32,
    pub size: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PowerUpView {
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub kind: &'static str,
    pub color: &'static str,
}

/// HUD line: effect name and whole seconds left
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActivePowerUpView {
    pub kind: &'static str,
    pub remaining_secs: i64,
}

/// Everything the renderer draws for one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameSnapshot {
    pub width: f32,
    pub height: f32,
    pub player1: PaddleView,
    pub player2: PaddleView,
    pub ball: BallView,
    pub power_ups: Vec<PowerUpView>,
    pub active_power_ups: Vec<ActivePowerUpView>,
    pub paused: bool,
}

impl FrameSnapshot {
    pub fn capture(state: &GameState, now_ms: f64) -> Self {
        Self {
            width: CANVAS_WIDTH,
            height: CANVAS_HEIGHT,
            player1: PaddleView::from(&state.player1),
            player2: PaddleView::from(&state.player2),
            ball: BallView {
                x: state.ball.pos.x,
                y: state.ball.pos.y,
                size: state.ball.size,
            },
            power_ups: state
                .power_ups
                .iter()
                .map(|p| PowerUpView {
                    x: p.pos.x,
                    y: p.pos.y,
                    size: p.size,
                    kind: p.kind.name(),
                    color: p.kind.color(),
                })
                .collect(),
            active_power_ups: state
                .active_power_ups
                .iter()
                .map(|a| ActivePowerUpView {
                    kind: a.kind.name(),
                    remaining_secs: a.remaining_secs(now_ms),
                })
                .collect(),
            paused: state.paused,
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
