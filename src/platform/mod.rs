//! Platform abstraction layer
//!
//! Browser bindings: the page owns the canvas, the key listeners and the
//! settings widgets, and forwards everything to an exported `WebGame`.
//! Drawing stays in the page; it reads the JSON frame snapshot.

#[cfg(target_arch = "wasm32")]
mod web {
    use wasm_bindgen::prelude::*;

    use crate::game::Game;
    use crate::settings::Settings;
    use crate::sim::Side;

    #[wasm_bindgen(start)]
    pub fn wasm_start() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");
        log::info!("Power Pong starting...");
    }

    #[wasm_bindgen]
    pub struct WebGame {
        game: Game,
    }

    #[wasm_bindgen]
    impl WebGame {
        #[wasm_bindgen(constructor)]
        pub fn new() -> WebGame {
            let seed = js_sys::Date::now() as u64;
            log::info!("Game initialized with seed: {}", seed);
            WebGame {
                game: Game::new(seed, Settings::load()),
            }
        }

        /// Run one frame; `now` is the requestAnimationFrame timestamp (ms)
        pub fn frame(&mut self, now: f64) {
            self.game.frame(now);
        }

        /// JSON `FrameSnapshot` for the renderer
        pub fn snapshot(&self, now: f64) -> String {
            match self.game.snapshot(now).to_json() {
                Ok(json) => json,
                Err(e) => {
                    log::error!("Snapshot failed: {}", e);
                    String::from("{}")
                }
            }
        }

        pub fn key_down(&mut self, key: &str) -> bool {
            self.game.key_down(key)
        }

        pub fn key_up(&mut self, key: &str) -> bool {
            self.game.key_up(key)
        }

        /// Window blur: forget held keys
        pub fn release_keys(&mut self) {
            self.game.input.release_all();
        }

        pub fn toggle_pause(&mut self) -> bool {
            self.game.toggle_pause()
        }

        pub fn set_single_player(&mut self, single_player: bool) {
            self.game.set_single_player(single_player);
            self.game.settings.save();
        }

        pub fn set_difficulty(&mut self, name: &str) {
            self.game.set_difficulty_name(name);
            self.game.settings.save();
        }

        pub fn set_player1_color(&mut self, color: &str) {
            self.game.set_paddle_color(Side::Left, color);
            self.game.settings.save();
        }

        pub fn set_player2_color(&mut self, color: &str) {
            self.game.set_paddle_color(Side::Right, color);
            self.game.settings.save();
        }
    }

    impl Default for WebGame {
        fn default() -> Self {
            Self::new()
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::WebGame;
