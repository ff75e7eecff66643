//! Game session
//!
//! Owns the simulation state, the settings and the held-key snapshot. Hosts
//! forward key events and UI changes here between frames and call `frame`
//! once per display refresh.

use crate::settings::{Difficulty, Settings};
use crate::sim::{FrameReport, FrameSnapshot, GameState, InputSnapshot, Key, Side, tick};

/// Game instance holding all state
#[derive(Debug, Clone)]
pub struct Game {
    pub state: GameState,
    pub settings: Settings,
    pub input: InputSnapshot,
}

impl Game {
    pub fn new(seed: u64, settings: Settings) -> Self {
        let mut state = GameState::new(seed);
        state.player1.color = settings.player1_color.clone();
        state.player2.color = settings.player2_color.clone();
        Self {
            state,
            settings,
            input: InputSnapshot::default(),
        }
    }

    /// Run one frame at the host's current time
    pub fn frame(&mut self, now_ms: f64) -> FrameReport {
        let report = tick(&mut self.state, &self.settings, &self.input, now_ms);
        if let Some(scorer) = report.ball.scored {
            log::info!(
                "Player {} scores ({} - {})",
                match scorer {
                    Side::Left => 1,
                    Side::Right => 2,
                },
                self.state.player1.score,
                self.state.player2.score
            );
        }
        report
    }

    pub fn snapshot(&self, now_ms: f64) -> FrameSnapshot {
        FrameSnapshot::capture(&self.state, now_ms)
    }

    /// Key-down by DOM key name. Returns false for keys that are not controls.
    pub fn key_down(&mut self, name: &str) -> bool {
        match Key::from_name(name) {
            Some(key) => {
                self.input.press(key);
                true
            }
            None => false,
        }
    }

    pub fn key_up(&mut self, name: &str) -> bool {
        match Key::from_name(name) {
            Some(key) => {
                self.input.release(key);
                true
            }
            None => false,
        }
    }

    /// Returns the new paused flag
    pub fn toggle_pause(&mut self) -> bool {
        self.state.paused = !self.state.paused;
        log::info!("{}", if self.state.paused { "Paused" } else { "Resumed" });
        self.state.paused
    }

    /// Switch between AI and two-player. Always re-serves the ball.
    pub fn set_single_player(&mut self, single_player: bool) {
        self.settings.single_player = single_player;
        self.state.reset_ball();
        log::info!(
            "Mode: {}",
            if single_player { "single player" } else { "two player" }
        );
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.settings.difficulty = difficulty;
        log::info!("Difficulty: {}", difficulty.as_str());
    }

    /// Set difficulty from a UI value; unknown names mean medium
    pub fn set_difficulty_name(&mut self, name: &str) {
        self.set_difficulty(Difficulty::from_str_or_default(name));
    }

    pub fn set_paddle_color(&mut self, side: Side, color: &str) {
        let slot = match side {
            Side::Left => &mut self.settings.player1_color,
            Side::Right => &mut self.settings.player2_color,
        };
        *slot = color.to_string();
        self.state.paddle_mut(side).color = color.to_string();
    }
}
