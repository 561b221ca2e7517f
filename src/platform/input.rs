//! Key name mapping
//!
//! Platforms report keys by name (`KeyboardEvent.key` on the web). The game
//! only distinguishes the jump key, the restart key and everything else.

use crate::settings::Settings;
use crate::sim::{InputEvent, Key};

#[derive(Debug, Clone)]
pub struct KeyMap {
    jump: String,
    restart: String,
}

impl KeyMap {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            jump: settings.jump_key.to_lowercase(),
            restart: settings.restart_key.to_lowercase(),
        }
    }

    /// Classify a key name (case-insensitive)
    pub fn key(&self, name: &str) -> Key {
        let name = name.to_lowercase();
        if name == self.jump {
            Key::Jump
        } else if name == self.restart {
            Key::Restart
        } else {
            Key::Other
        }
    }

    pub fn key_event(&self, name: &str) -> InputEvent {
        InputEvent::KeyPressed(self.key(name))
    }
}

impl Default for KeyMap {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bindings() {
        let keys = KeyMap::default();
        assert_eq!(keys.key(" "), Key::Jump);
        assert_eq!(keys.key("y"), Key::Restart);
        assert_eq!(keys.key("Y"), Key::Restart);
        assert_eq!(keys.key("Enter"), Key::Other);
    }

    #[test]
    fn test_custom_bindings() {
        let settings = Settings {
            jump_key: "ArrowUp".to_string(),
            restart_key: "r".to_string(),
            ..Default::default()
        };
        let keys = KeyMap::from_settings(&settings);
        assert_eq!(keys.key("ArrowUp"), Key::Jump);
        assert_eq!(keys.key(" "), Key::Other);
        assert_eq!(keys.key_event("R"), InputEvent::KeyPressed(Key::Restart));
    }
}
