//! WebGPU rendering module
//!
//! Everything on screen is a filled rectangle. Text is drawn by the platform
//! from the HUD model.

pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
pub use scene::{scene_vertices, to_ndc};
pub use vertex::Vertex;
