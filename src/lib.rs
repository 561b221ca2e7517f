//! Gap Flyer - A single-screen gap-flying arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, obstacles, scoring, game state)
//! - `renderer`: WebGPU rendering pipeline
//! - `platform`: Frame pacing and key mapping
//! - `tuning`: Data-driven game balance
//! - `ui`: HUD text model

pub mod error;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;
pub mod ui;

pub use error::{ConfigError, RenderError};
pub use settings::Settings;
pub use tuning::Tuning;

/// Game configuration constants
///
/// Reference values; `Tuning::default()` is built from these.
pub mod consts {
    /// Target frame rate. One frame is one physics step.
    pub const FRAME_RATE: u32 = 60;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 4;

    /// Logical screen size
    pub const WINDOW_WIDTH: f32 = 800.0;
    pub const WINDOW_HEIGHT: f32 = 600.0;

    /// Downward acceleration applied every frame (pixels/frame²)
    pub const GRAVITY: f32 = 0.5;
    /// Upward velocity set by a jump (pixels/frame)
    pub const JUMP_IMPULSE: f32 = 10.0;

    /// Obstacle defaults
    pub const PIPE_SPEED: f32 = 3.0;
    pub const PIPE_WIDTH: f32 = 80.0;
    pub const PIPE_SPACING: f32 = 400.0;
    pub const GAP_SIZE: f32 = 200.0;

    /// Actor sprite size
    pub const ACTOR_WIDTH: f32 = 34.0;
    pub const ACTOR_HEIGHT: f32 = 24.0;

    /// Goal score shown at the start of a process
    pub const INITIAL_GOAL: u32 = 3;
}
