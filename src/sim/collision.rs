//! Ball motion and collision response
//!
//! Everything is axis-aligned rectangles. Paddle hits are not pure bounces:
//! the vertical speed comes from where on the paddle the ball strikes.

use std::f32::consts::FRAC_PI_2;

use glam::Vec2;

use super::state::{Ball, GameState, Paddle, PowerUp, Side};
use crate::consts::*;

/// Axis-aligned rectangle (top-left origin)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    /// Strict overlap; rectangles that only share an edge do not overlap
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.pos.x < other.pos.x + other.size.x
            && self.pos.x + self.size.x > other.pos.x
            && self.pos.y < other.pos.y + other.size.y
            && self.pos.y + self.size.y > other.pos.y
    }
}

impl From<&Ball> for Rect {
    fn from(ball: &Ball) -> Self {
        Rect::new(ball.pos.x, ball.pos.y, ball.size, ball.size)
    }
}

impl From<&PowerUp> for Rect {
    fn from(p: &PowerUp) -> Self {
        Rect::new(p.pos.x, p.pos.y, p.size, p.size)
    }
}

/// What happened to the ball this frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BallOutcome {
    pub wall_bounce: bool,
    pub paddle_hit: Option<Side>,
    /// Player who scored (ball has already been reset)
    pub scored: Option<Side>,
}

/// Top or bottom wall touched
pub fn hits_wall(ball: &Ball) -> bool {
    ball.pos.y <= 0.0 || ball.pos.y + ball.size >= CANVAS_HEIGHT
}

/// Whether the ball strikes `paddle` on `side`. Only counts while the ball
/// is travelling toward that paddle.
pub fn hits_paddle(ball: &Ball, paddle: &Paddle, side: Side) -> bool {
    let vertical = ball.pos.y + ball.size >= paddle.y && ball.pos.y <= paddle.bottom();
    match side {
        Side::Left => ball.vel.x < 0.0 && ball.pos.x <= paddle.x + paddle.width && vertical,
        Side::Right => ball.vel.x > 0.0 && ball.pos.x + ball.size >= paddle.x && vertical,
    }
}

/// Deflection angle in [-π/4, π/4] from where the ball's top edge meets the paddle
pub fn deflection_angle(ball_y: f32, paddle: &Paddle) -> f32 {
    let hit_position = (ball_y - paddle.y) / paddle.height;
    (hit_position - 0.5) * FRAC_PI_2
}

/// Send the ball away from `side`, keeping horizontal magnitude.
/// Vertical speed is rebuilt from the base speed, not the current one.
pub fn deflect(ball: &mut Ball, paddle: &Paddle, side: Side) {
    let angle = deflection_angle(ball.pos.y, paddle);
    ball.vel.x = match side {
        Side::Left => ball.vel.x.abs(),
        Side::Right => -ball.vel.x.abs(),
    };
    ball.vel.y = ball.base_speed.y * angle.sin() * DEFLECTION_BOOST;
}

/// Which player scores if the ball has left the field
pub fn out_of_bounds(ball: &Ball) -> Option<Side> {
    if ball.pos.x + ball.size < 0.0 {
        Some(Side::Right)
    } else if ball.pos.x > CANVAS_WIDTH {
        Some(Side::Left)
    } else {
        None
    }
}

/// Advance the ball one frame: move, bounce, deflect, score
pub fn update_ball(state: &mut GameState) -> BallOutcome {
    let mut outcome = BallOutcome::default();
    let ball = &mut state.ball;

    ball.pos += ball.vel;

    // No positional correction; the ball may sit in the wall for a frame
    if hits_wall(ball) {
        ball.vel.y = -ball.vel.y;
        outcome.wall_bounce = true;
    }

    if hits_paddle(ball, &state.player1, Side::Left) {
        deflect(ball, &state.player1, Side::Left);
        outcome.paddle_hit = Some(Side::Left);
    }
    if hits_paddle(ball, &state.player2, Side::Right) {
        deflect(ball, &state.player2, Side::Right);
        outcome.paddle_hit = Some(Side::Right);
    }

    if let Some(scorer) = out_of_bounds(ball) {
        state.paddle_mut(scorer).score += 1;
        state.reset_ball();
        outcome.scored = Some(scorer);
    }

    outcome
}
