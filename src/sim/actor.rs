//! The player-controlled actor
//!
//! Only the vertical axis moves. Bounds are checked by the tick, not here.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::tuning::Tuning;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Actor {
    /// Top-left corner of the sprite. `pos.x` never changes.
    pub pos: Vec2,
    /// Vertical velocity (pixels/frame, positive is down)
    pub vel: f32,
    /// Sprite size used for bounds and collision
    pub size: Vec2,
}

impl Actor {
    /// Actor at its spawn point, at rest
    pub fn new(tuning: &Tuning) -> Self {
        let (x, y) = tuning.actor_start();
        Self {
            pos: Vec2::new(x, y),
            vel: 0.0,
            size: Vec2::new(tuning.actor_width, tuning.actor_height),
        }
    }

    /// One fixed step of semi-implicit Euler: velocity first, then position
    pub fn integrate(&mut self, gravity: f32) {
        self.vel += gravity;
        self.pos.y += self.vel;
    }

    /// Overwrite (not add to) the vertical velocity with an upward impulse
    pub fn jump(&mut self, impulse: f32) {
        self.vel = -impulse;
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, self.size.x, self.size.y)
    }

    /// True if any part of the sprite is above the top or below the bottom edge
    pub fn out_of_bounds(&self, window_height: f32) -> bool {
        self.pos.y < 0.0 || self.pos.y + self.size.y > window_height
    }
}
