//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Frame pacing (sleeping limiter on native, accumulator on web)
//! - Mapping platform key names to game keys

pub mod input;
pub mod time;

pub use input::KeyMap;
pub use time::FixedStep;
#[cfg(not(target_arch = "wasm32"))]
pub use time::FrameLimiter;
