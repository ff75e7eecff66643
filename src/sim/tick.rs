//! Per-frame simulation step
//!
//! One call per display refresh. The caller captures `now_ms` once and the
//! whole frame uses it, so pickup and expiry agree on the time.

use rand::Rng;

use super::ai::ai_move;
use super::collision::{BallOutcome, update_ball};
use super::input::{InputSnapshot, Key};
use super::powerups::{check_pickups, expire, maybe_spawn};
use super::state::{GameState, PowerUpKind};
use crate::consts::PADDLE_SPEED;
use crate::settings::Settings;

/// What a frame did (for logging and tests)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameReport {
    /// False when the frame was skipped because the game is paused
    pub simulated: bool,
    pub ball: BallOutcome,
    pub spawned: Option<PowerUpKind>,
    pub picked_up: usize,
    pub expired: usize,
}

/// Move human-controlled paddles from held keys.
///
/// Bounds are checked before the move, so a paddle can end up to one step
/// past the top or bottom edge.
pub fn handle_input(state: &mut GameState, input: &InputSnapshot, single_player: bool) {
    if input.is_held(Key::W) {
        state.player1.step_up(PADDLE_SPEED);
    }
    if input.is_held(Key::S) {
        state.player1.step_down(PADDLE_SPEED);
    }

    if !single_player {
        if input.is_held(Key::ArrowUp) {
            state.player2.step_up(PADDLE_SPEED);
        }
        if input.is_held(Key::ArrowDown) {
            state.player2.step_down(PADDLE_SPEED);
        }
    }
}

/// Advance the game by one frame
pub fn tick(
    state: &mut GameState,
    settings: &Settings,
    input: &InputSnapshot,
    now_ms: f64,
) -> FrameReport {
    // Paused: nothing moves, timers included
    if state.paused {
        return FrameReport::default();
    }

    state.frames += 1;

    handle_input(state, input, settings.single_player);

    if settings.single_player {
        let sample: f64 = state.rng.random();
        ai_move(&mut state.player2, &state.ball, settings.difficulty, sample);
    }

    let ball = update_ball(state);
    let spawned = maybe_spawn(state);
    // Pickup before expiry: an effect collected this frame cannot expire this frame
    let picked_up = check_pickups(state, now_ms);
    let expired = expire(state, now_ms);

    FrameReport {
        simulated: true,
        ball,
        spawned,
        picked_up,
        expired,
    }
}
