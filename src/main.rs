//! Power Pong entry point
//!
//! The browser build is driven from JavaScript through `platform::WebGame`.
//! Natively this runs a headless match at a simulated 60 Hz and logs the
//! result (`RUST_LOG=info power-pong [frames]`).

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use std::time::{SystemTime, UNIX_EPOCH};

    use power_pong::sim::Side;
    use power_pong::{Game, Settings};

    env_logger::init();

    let frames: u64 = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(60 * 60);
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);

    log::info!("Power Pong (native) starting, seed {}", seed);
    let mut game = Game::new(seed, Settings::load());

    let frame_ms = 1000.0 / 60.0;
    let mut pickups = 0;
    for i in 0..frames {
        // Player 1 chases the ball with the keyboard
        let ball_y = game.state.ball.pos.y;
        let center = game.state.player1.center_y();
        let wanted = if center < ball_y - 10.0 {
            Some("s")
        } else if center > ball_y + 10.0 {
            Some("w")
        } else {
            None
        };
        for key in ["w", "s"] {
            if wanted == Some(key) {
                game.key_down(key);
            } else {
                game.key_up(key);
            }
        }

        let report = game.frame(i as f64 * frame_ms);
        pickups += report.picked_up;
        if let Some(kind) = report.spawned {
            log::debug!("Spawned {} ({} waiting)", kind.name(), game.state.power_ups.len());
        }
    }

    let snap = game.snapshot(frames as f64 * frame_ms);
    log::info!(
        "Final score {} - {} after {} frames ({} power-ups collected, {} left on the field)",
        game.state.paddle(Side::Left).score,
        game.state.paddle(Side::Right).score,
        frames,
        pickups,
        snap.power_ups.len()
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is platform::WebGame, this is just to satisfy the compiler
}
