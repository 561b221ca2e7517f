//! Game settings and preferences
//!
//! Presentation-side preferences. Read from LocalStorage on the web,
//! read from a JSON file on native. Gameplay constants live in `Tuning`.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::FRAME_RATE;
use crate::error::ConfigError;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Window title, also shown in the welcome banner
    pub title: String,
    /// Frame rate cap (0 = uncapped on native; web ticks at the default rate)
    pub frame_rate: u32,

    // === Key bindings (matched against key names, case-insensitive) ===
    /// Key that makes the actor jump while playing
    pub jump_key: String,
    /// Key that restarts after a game over
    pub restart_key: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            title: "Flappy Bird".to_string(),
            frame_rate: FRAME_RATE,
            jump_key: " ".to_string(),
            restart_key: "y".to_string(),
        }
    }
}

impl Settings {
    /// Label for the restart key as shown to the player
    pub fn restart_key_label(&self) -> String {
        key_label(&self.restart_key)
    }

    /// Parse settings from JSON (missing fields take defaults)
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read settings from a JSON file
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "gap_flyer_settings";

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

    /// Load settings from the file named by `GAP_FLYER_SETTINGS` (native)
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        let Ok(path) = std::env::var("GAP_FLYER_SETTINGS") else {
            return Self::default();
        };
        match Self::load_from(Path::new(&path)) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path);
                settings
            }
            Err(e) => {
                log::warn!("Using default settings: {}", e);
                Self::default()
            }
        }
    }
}

fn key_label(key: &str) -> String {
    match key {
        " " => "Space".to_string(),
        k if k.chars().count() == 1 => k.to_uppercase(),
        k => k.to_string(),
    }
}
