//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only (one tick per frame)
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod actor;
pub mod autopilot;
pub mod collision;
pub mod obstacle;
pub mod rect;
pub mod state;
pub mod tick;
pub mod track;

pub use actor::Actor;
pub use autopilot::Autopilot;
pub use collision::{FrameOutcome, evaluate, passed_through};
pub use obstacle::ObstaclePair;
pub use rect::Rect;
pub use state::{CrashCause, GameEvent, GamePhase, GameState, Scoreboard};
pub use tick::{InputEvent, Key, TickInput, handle_event, tick};
pub use track::ObstacleTrack;
