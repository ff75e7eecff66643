//! Power-up lifecycle: pending → picked up → active → expired
//!
//! Effects are applied once on pickup and undone by a revert keyed on
//! `RevertKind`. Reverts restore the base values rather than unwinding a
//! stack, so when two effects of the same category overlap, whichever
//! expires last decides the final state.

use glam::Vec2;
use rand::Rng;

use super::collision::Rect;
use super::state::{ActivePowerUp, GameState, PowerUp, PowerUpKind, RevertKind};
use crate::consts::*;
use crate::sign;

/// Roll the per-frame spawn chance and maybe drop a new power-up.
///
/// Pending power-ups never despawn and there is no cap on how many wait on
/// the field.
pub fn maybe_spawn(state: &mut GameState) -> Option<PowerUpKind> {
    if !state.rng.random_bool(POWER_UP_SPAWN_CHANCE) {
        return None;
    }

    let kind = PowerUpKind::ALL[state.rng.random_range(0..PowerUpKind::ALL.len())];
    let x = state
        .rng
        .random_range(POWER_UP_SPAWN_MARGIN..CANVAS_WIDTH - POWER_UP_SPAWN_MARGIN);
    let y = state
        .rng
        .random_range(POWER_UP_SPAWN_MARGIN..CANVAS_HEIGHT - POWER_UP_SPAWN_MARGIN);
    state.power_ups.push(PowerUp::new(kind, Vec2::new(x, y)));
    Some(kind)
}

/// Apply an effect immediately
pub fn apply(state: &mut GameState, kind: PowerUpKind) {
    match kind {
        PowerUpKind::IncreasePaddle => set_paddle_scale(state, PADDLE_GROW_FACTOR),
        PowerUpKind::DecreasePaddle => set_paddle_scale(state, PADDLE_SHRINK_FACTOR),
        PowerUpKind::IncreaseSpeed => state.ball.vel *= SPEED_UP_FACTOR,
        PowerUpKind::DecreaseSpeed => state.ball.vel *= SLOW_DOWN_FACTOR,
    }
}

fn set_paddle_scale(state: &mut GameState, factor: f32) {
    for paddle in [&mut state.player1, &mut state.player2] {
        paddle.height = paddle.base_height * factor;
    }
}

/// Undo an effect by restoring base values
pub fn revert(state: &mut GameState, kind: RevertKind) {
    match kind {
        RevertKind::Paddle => {
            state.player1.height = state.player1.base_height;
            state.player2.height = state.player2.base_height;
        }
        RevertKind::Speed => {
            let ball = &mut state.ball;
            ball.vel = Vec2::new(
                ball.base_speed.x * sign(ball.vel.x),
                ball.base_speed.y * sign(ball.vel.y),
            );
        }
    }
}

/// Collect every pending power-up the ball overlaps.
///
/// Each collected power-up is applied, removed from the field and recorded
/// as active until `now_ms + POWER_UP_DURATION_MS`. Returns how many were
/// collected.
pub fn check_pickups(state: &mut GameState, now_ms: f64) -> usize {
    let ball_rect = Rect::from(&state.ball);
    let (hit, remaining): (Vec<PowerUp>, Vec<PowerUp>) = std::mem::take(&mut state.power_ups)
        .into_iter()
        .partition(|p| ball_rect.overlaps(&Rect::from(p)));
    state.power_ups = remaining;

    for power_up in &hit {
        apply(state, power_up.kind);
        state.active_power_ups.push(ActivePowerUp {
            kind: power_up.kind,
            expires_at_ms: now_ms + POWER_UP_DURATION_MS,
            revert: power_up.kind.revert_kind(),
        });
        log::debug!("Picked up {} at {:.0}ms", power_up.kind.name(), now_ms);
    }

    hit.len()
}

/// Revert and drop every active effect whose expiry time has been reached.
///
/// Reverts run newest first. Returns how many expired.
pub fn expire(state: &mut GameState, now_ms: f64) -> usize {
    let mut expired = 0;
    let mut i = state.active_power_ups.len();
    while i > 0 {
        i -= 1;
        if now_ms >= state.active_power_ups[i].expires_at_ms {
            let active = state.active_power_ups.remove(i);
            revert(state, active.revert);
            log::debug!("{} expired at {:.0}ms", active.kind.name(), now_ms);
            expired += 1;
        }
    }
    expired
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// A power-up placed exactly where the ball sits
    fn under_ball(state: &GameState, kind: PowerUpKind) -> PowerUp {
        PowerUp::new(kind, state.ball.pos - Vec2::splat(5.0))
    }

    #[test]
    fn test_spawn_stays_inside_margin() {
        let mut state = GameState::new(2024);
        for _ in 0..20_000 {
            maybe_spawn(&mut state);
        }
        // 0.5% per frame: expect ~100
        assert!(!state.power_ups.is_empty());
        for p in &state.power_ups {
            assert!(p.pos.x >= 50.0 && p.pos.x < 750.0);
            assert!(p.pos.y >= 50.0 && p.pos.y < 550.0);
            assert_eq!(p.size, 20.0);
        }
    }

    #[test]
    fn test_pending_power_ups_accumulate_without_cap() {
        // Nothing despawns pending power-ups; they pile up until collected
        let mut state = GameState::new(5);
        state.ball.pos = Vec2::new(-1000.0, -1000.0);
        let mut spawned = 0;
        for frame in 0..50_000 {
            if maybe_spawn(&mut state).is_some() {
                spawned += 1;
            }
            check_pickups(&mut state, frame as f64);
        }
        assert_eq!(state.power_ups.len(), spawned);
        assert!(spawned > 100);
    }

    #[test]
    fn test_increase_paddle_then_revert() {
        let mut state = GameState::new(1);
        let p = under_ball(&state, PowerUpKind::IncreasePaddle);
        state.power_ups.push(p);

        assert_eq!(check_pickups(&mut state, 1000.0), 1);
        assert_eq!(state.player1.height, 150.0);
        assert_eq!(state.player2.height, 150.0);
        assert!(state.power_ups.is_empty());
        assert_eq!(state.active_power_ups[0].expires_at_ms, 6000.0);

        assert_eq!(expire(&mut state, 5999.0), 0);
        assert_eq!(state.player1.height, 150.0);
        assert_eq!(expire(&mut state, 6000.0), 1);
        assert_eq!(state.player1.height, 100.0);
        assert_eq!(state.player2.height, 100.0);
        assert!(state.active_power_ups.is_empty());
    }

    #[test]
    fn test_decrease_paddle_halves_both() {
        let mut state = GameState::new(1);
        apply(&mut state, PowerUpKind::DecreasePaddle);
        assert_eq!(state.player1.height, 50.0);
        assert_eq!(state.player2.height, 50.0);
        // Not compounding: scale is always from the base height
        apply(&mut state, PowerUpKind::DecreasePaddle);
        assert_eq!(state.player1.height, 50.0);
    }

    #[test]
    fn test_decrease_speed_then_revert() {
        let mut state = GameState::new(1);
        state.ball.vel = Vec2::new(5.0, 5.0);
        let p = under_ball(&state, PowerUpKind::DecreaseSpeed);
        state.power_ups.push(p);

        check_pickups(&mut state, 0.0);
        assert_eq!(state.ball.vel, Vec2::new(2.5, 2.5));

        expire(&mut state, 5000.0);
        assert_eq!(state.ball.vel, Vec2::new(5.0, 5.0));
    }

    #[test]
    fn test_speed_revert_keeps_direction() {
        let mut state = GameState::new(1);
        state.ball.vel = Vec2::new(-5.0, 3.0);
        apply(&mut state, PowerUpKind::IncreaseSpeed);
        assert_eq!(state.ball.vel, Vec2::new(-7.5, 4.5));
        revert(&mut state, RevertKind::Speed);
        assert_eq!(state.ball.vel, Vec2::new(-5.0, 5.0));
    }

    #[test]
    fn test_speed_revert_of_zero_axis_stays_zero() {
        let mut state = GameState::new(1);
        state.ball.vel = Vec2::new(7.5, 0.0);
        revert(&mut state, RevertKind::Speed);
        assert_eq!(state.ball.vel, Vec2::new(5.0, 0.0));
    }

    #[test]
    fn test_overlapping_speed_effects_last_revert_wins() {
        // Two speed-ups picked at different times: the first expiry already
        // restores base speed, discarding the second boost early
        let mut state = GameState::new(1);
        state.ball.vel = Vec2::new(4.0, 4.0);
        let base = state.ball.base_speed;

        let p = under_ball(&state, PowerUpKind::IncreaseSpeed);
        state.power_ups.push(p);
        check_pickups(&mut state, 0.0);
        let p = under_ball(&state, PowerUpKind::IncreaseSpeed);
        state.power_ups.push(p);
        check_pickups(&mut state, 2000.0);
        assert_eq!(state.ball.vel, Vec2::new(9.0, 9.0));
        assert_eq!(state.active_power_ups.len(), 2);

        assert_eq!(expire(&mut state, 5000.0), 1);
        assert_eq!(state.ball.vel, base);
        assert_eq!(expire(&mut state, 7000.0), 1);
        assert_eq!(state.ball.vel, base);
    }

    #[test]
    fn test_overlapping_paddle_effects_last_revert_wins() {
        let mut state = GameState::new(1);
        apply(&mut state, PowerUpKind::IncreasePaddle);
        state.active_power_ups.push(ActivePowerUp {
            kind: PowerUpKind::IncreasePaddle,
            expires_at_ms: 5000.0,
            revert: RevertKind::Paddle,
        });
        apply(&mut state, PowerUpKind::DecreasePaddle);
        state.active_power_ups.push(ActivePowerUp {
            kind: PowerUpKind::DecreasePaddle,
            expires_at_ms: 8000.0,
            revert: RevertKind::Paddle,
        });
        assert_eq!(state.player1.height, 50.0);

        // The older grow effect expiring also cancels the newer shrink
        expire(&mut state, 5000.0);
        assert_eq!(state.player1.height, 100.0);
        assert_eq!(state.active_power_ups.len(), 1);
    }

    #[test]
    fn test_pickup_requires_overlap() {
        let mut state = GameState::new(1);
        // Touching edge only: ball spans x 400..410
        state
            .power_ups
            .push(PowerUp::new(PowerUpKind::IncreaseSpeed, Vec2::new(410.0, 300.0)));
        assert_eq!(check_pickups(&mut state, 0.0), 0);
        assert_eq!(state.power_ups.len(), 1);
    }

    #[test]
    fn test_pickup_collects_every_overlapping() {
        let mut state = GameState::new(1);
        let a = under_ball(&state, PowerUpKind::IncreasePaddle);
        let b = under_ball(&state, PowerUpKind::DecreaseSpeed);
        state.power_ups.push(a);
        state.power_ups.push(b);
        state
            .power_ups
            .push(PowerUp::new(PowerUpKind::IncreaseSpeed, Vec2::new(60.0, 60.0)));

        assert_eq!(check_pickups(&mut state, 0.0), 2);
        assert_eq!(state.power_ups.len(), 1);
        assert_eq!(state.active_power_ups.len(), 2);
        assert_eq!(state.active_power_ups[0].kind, PowerUpKind::IncreasePaddle);
    }

    proptest! {
        #[test]
        fn prop_pickup_happens_once(offset_x in -20.0f32..10.0, offset_y in -20.0f32..10.0) {
            let mut state = GameState::new(9);
            let pos = state.ball.pos + Vec2::new(offset_x, offset_y);
            state.power_ups.push(PowerUp::new(PowerUpKind::DecreaseSpeed, pos));

            let first = check_pickups(&mut state, 0.0);
            let second = check_pickups(&mut state, 1.0);
            prop_assert!(first <= 1);
            prop_assert_eq!(second, 0);
            prop_assert_eq!(state.active_power_ups.len(), first);
        }

        #[test]
        fn prop_expiry_never_early(picked_at in 0.0f64..1.0e6, elapsed in 0.0f64..10_000.0) {
            let mut state = GameState::new(9);
            let p = under_ball(&state, PowerUpKind::IncreasePaddle);
            state.power_ups.push(p);
            check_pickups(&mut state, picked_at);

            let now = picked_at + elapsed;
            let expired = expire(&mut state, now);
            if now < picked_at + POWER_UP_DURATION_MS {
                prop_assert_eq!(expired, 0);
                prop_assert_eq!(state.player1.height, 150.0);
                // Still pending: fires once when its time comes
                prop_assert_eq!(expire(&mut state, picked_at + POWER_UP_DURATION_MS), 1);
                prop_assert_eq!(state.player1.height, 100.0);
            } else {
                prop_assert_eq!(expired, 1);
                prop_assert_eq!(state.player1.height, 100.0);
            }
            // Never fires twice
            prop_assert_eq!(expire(&mut state, now + POWER_UP_DURATION_MS), 0);
            prop_assert!(state.active_power_ups.is_empty());
        }
    }
}
