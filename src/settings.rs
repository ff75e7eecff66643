//! Game settings and preferences
//!
//! The configuration surface the host UI writes to (color pickers, mode radio,
//! difficulty select). Persisted in LocalStorage on the web.

use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_PADDLE_COLOR;

/// AI difficulty levels. Unknown names deserialize as `Medium`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "medium" | "med" => Some(Difficulty::Medium),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    /// Parse a host-provided name, falling back to `Medium` for anything unknown
    pub fn from_str_or_default(s: &str) -> Self {
        Self::from_str(s).unwrap_or_else(|| {
            log::warn!("Unknown difficulty {:?}, using medium", s);
            Difficulty::default()
        })
    }

    /// AI paddle speed (units per frame)
    pub fn ai_speed(&self) -> f32 {
        match self {
            Difficulty::Easy => 3.0,
            Difficulty::Medium => 5.0,
            Difficulty::Hard => 7.0,
        }
    }

    /// The AI only reacts when its per-frame sample exceeds this
    pub fn reaction_threshold(&self) -> f64 {
        match self {
            Difficulty::Easy => 0.3,
            Difficulty::Medium => 0.2,
            Difficulty::Hard => 0.1,
        }
    }
}

impl From<String> for Difficulty {
    fn from(s: String) -> Self {
        Self::from_str_or_default(&s)
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Left paddle color (any CSS color string)
    pub player1_color: String,
    /// Right paddle color
    pub player2_color: String,
    /// Right paddle driven by the AI
    pub single_player: bool,
    pub difficulty: Difficulty,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            player1_color: DEFAULT_PADDLE_COLOR.to_string(),
            player2_color: DEFAULT_PADDLE_COLOR.to_string(),
            single_player: true,
            difficulty: Difficulty::Medium,
        }
    }
}

impl Settings {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// LocalStorage key
    #[cfg(target_arch = "wasm32")]
    const STORAGE_KEY: &'static str = "power_pong_settings";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(settings) => {
                        log::info!("Loaded settings from LocalStorage");
                        return settings;
                    }
                    Err(e) => log::warn!("Ignoring stored settings: {}", e),
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = self.to_json() {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Settings saved");
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_tables() {
        assert_eq!(Difficulty::Easy.ai_speed(), 3.0);
        assert_eq!(Difficulty::Medium.ai_speed(), 5.0);
        assert_eq!(Difficulty::Hard.ai_speed(), 7.0);
        assert_eq!(Difficulty::Easy.reaction_threshold(), 0.3);
        assert_eq!(Difficulty::Medium.reaction_threshold(), 0.2);
        assert_eq!(Difficulty::Hard.reaction_threshold(), 0.1);
    }

    #[test]
    fn test_unknown_difficulty_falls_back_to_medium() {
        assert_eq!(Difficulty::from_str("nightmare"), None);
        assert_eq!(Difficulty::from_str_or_default("nightmare"), Difficulty::Medium);
        assert_eq!(Difficulty::from_str_or_default("HARD"), Difficulty::Hard);
    }

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert!(settings.single_player);
        assert_eq!(settings.difficulty, Difficulty::Medium);
        assert_eq!(settings.player1_color, "#fff");
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings = Settings::from_json(r#"{"difficulty":"hard"}"#).unwrap();
        assert_eq!(settings.difficulty, Difficulty::Hard);
        assert!(settings.single_player);
        assert_eq!(settings.player2_color, "#fff");

        let json = settings.to_json().unwrap();
        assert!(json.contains(r#""difficulty":"hard""#));
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(Settings::from_json("{not json").is_err());
        assert!(Settings::from_json(r#"{"single_player":"yes"}"#).is_err());
    }

    #[test]
    fn test_unknown_stored_difficulty_keeps_other_fields() {
        let settings = Settings::from_json(
            r##"{"player1_color":"#f00","single_player":false,"difficulty":"nightmare"}"##,
        )
        .unwrap();
        assert_eq!(settings.difficulty, Difficulty::Medium);
        assert_eq!(settings.player1_color, "#f00");
        assert!(!settings.single_player);

        let settings = Settings::from_json(r#"{"difficulty":"Easy"}"#).unwrap();
        assert_eq!(settings.difficulty, Difficulty::Easy);
    }
}
