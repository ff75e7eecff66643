//! Computer opponent for single-player mode
//!
//! Tracks the ball's current y (no trajectory prediction) behind a
//! probabilistic reaction gate, so it misses now and then.

use super::state::{Ball, Paddle};
use crate::consts::AI_DEAD_ZONE;
use crate::settings::Difficulty;

/// Move the AI paddle one frame.
///
/// `sample` is a uniform draw in [0, 1); the paddle only reacts when it
/// exceeds the difficulty's reaction threshold and the ball is heading
/// toward the AI (positive x velocity).
///
/// Returns true if the paddle moved.
pub fn ai_move(paddle: &mut Paddle, ball: &Ball, difficulty: Difficulty, sample: f64) -> bool {
    if sample <= difficulty.reaction_threshold() || ball.vel.x <= 0.0 {
        return false;
    }

    let speed = difficulty.ai_speed();
    let center = paddle.center_y();
    let target = ball.pos.y;
    let before = paddle.y;

    if center < target - AI_DEAD_ZONE {
        paddle.step_down(speed);
    } else if center > target + AI_DEAD_ZONE {
        paddle.step_up(speed);
    }

    paddle.y != before
}
