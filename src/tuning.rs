//! Data-driven game balance
//!
//! Every gameplay constant lives here so a run can be replayed or rebalanced
//! from a JSON file without touching the simulation.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Gameplay constants for one process
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Logical screen width (obstacles spawn at this x)
    pub window_width: f32,
    /// Logical screen height (vertical bounds and pair geometry)
    pub window_height: f32,
    /// Velocity added every frame
    pub gravity: f32,
    /// Magnitude of the upward velocity a jump sets
    pub jump_impulse: f32,
    /// Leftward obstacle movement per frame
    pub pipe_speed: f32,
    pub pipe_width: f32,
    /// Minimum distance from the right edge to the newest pair before the next spawn
    pub pipe_spacing: f32,
    /// Vertical opening between the upper and lower rectangle
    pub gap_size: f32,
    pub actor_width: f32,
    pub actor_height: f32,
    /// Goal score at process start
    pub initial_goal: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            window_width: WINDOW_WIDTH,
            window_height: WINDOW_HEIGHT,
            gravity: GRAVITY,
            jump_impulse: JUMP_IMPULSE,
            pipe_speed: PIPE_SPEED,
            pipe_width: PIPE_WIDTH,
            pipe_spacing: PIPE_SPACING,
            gap_size: GAP_SIZE,
            actor_width: ACTOR_WIDTH,
            actor_height: ACTOR_HEIGHT,
            initial_goal: INITIAL_GOAL,
        }
    }
}

impl Tuning {
    /// Actor spawn point: a quarter across, half way down
    pub fn actor_start(&self) -> (f32, f32) {
        (self.window_width / 4.0, self.window_height / 2.0)
    }

    /// Number of distinct gap offsets a spawned pair can take
    pub fn gap_offset_range(&self) -> u32 {
        (self.window_height - self.gap_size) as u32
    }

    /// Reject combinations the simulation cannot honour
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window_width <= 0.0 || self.window_height <= 0.0 {
            return Err(ConfigError::Invalid("window size must be positive"));
        }
        if self.gap_size <= 0.0 || self.gap_size >= self.window_height {
            return Err(ConfigError::Invalid("gap size must fit inside the window"));
        }
        if self.gap_offset_range() == 0 {
            return Err(ConfigError::Invalid("gap leaves no room for a random offset"));
        }
        if self.pipe_speed <= 0.0 {
            return Err(ConfigError::Invalid("pipe speed must be positive"));
        }
        if self.pipe_width <= 0.0 {
            return Err(ConfigError::Invalid("pipe width must be positive"));
        }
        // Two pairs inside one pass-through window would compete for the same frame
        if self.pipe_spacing <= self.pipe_speed {
            return Err(ConfigError::Invalid("pipe spacing must exceed pipe speed"));
        }
        if self.actor_width <= 0.0 || self.actor_height <= 0.0 {
            return Err(ConfigError::Invalid("actor size must be positive"));
        }
        if self.actor_height >= self.window_height {
            return Err(ConfigError::Invalid("actor does not fit inside the window"));
        }
        Ok(())
    }

    /// Parse and validate tuning from JSON (missing fields take defaults)
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Read tuning from a JSON file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Read tuning from `path`, falling back to defaults on any error
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(tuning) => {
                log::info!("Loaded tuning from {}", path.display());
                tuning
            }
            Err(e) => {
                log::warn!("Using default tuning: {}", e);
                Self::default()
            }
        }
    }

    /// Parse stored tuning JSON, falling back to defaults when absent or invalid
    pub fn from_stored(json: Option<&str>) -> Self {
        let Some(json) = json else {
            return Self::default();
        };
        match Self::from_json(json) {
            Ok(tuning) => {
                log::info!("Loaded tuning from LocalStorage");
                tuning
            }
            Err(e) => {
                log::warn!("Ignoring stored tuning: {}", e);
                Self::default()
            }
        }
    }

    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "gap_flyer_tuning";

    /// Load tuning from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load_stored() -> Self {
        let json = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .and_then(|storage| storage.get_item(Self::STORAGE_KEY).ok())
            .flatten();
        Self::from_stored(json.as_deref())
    }
}
