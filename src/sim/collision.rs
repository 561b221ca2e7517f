//! Per-frame collision and pass-through detection
//!
//! Runs after the track has moved. A pair is "passed" on the single frame in
//! which its right edge slides past the actor's x; the window is sized by the
//! displacement the track actually applied that frame, so changing the speed
//! cannot produce missed or duplicate awards.

use super::actor::Actor;
use super::obstacle::ObstaclePair;
use super::track::ObstacleTrack;

/// What the evaluator found this frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameOutcome {
    /// The actor touches at least one obstacle rectangle
    pub collided: bool,
    /// Index of the pair that awards a point this frame, if any
    pub passed: Option<usize>,
}

/// True if the actor's x lies strictly inside `(right, right + displacement)`
#[inline]
pub fn passed_through(pair: &ObstaclePair, actor_x: f32, displacement: f32) -> bool {
    let right = pair.right();
    actor_x > right && actor_x < right + displacement
}

/// Test the actor against every pair, in track order.
///
/// Only the first qualifying pair is reported as passed.
pub fn evaluate(actor: &Actor, track: &ObstacleTrack, displacement: f32) -> FrameOutcome {
    let bounds = actor.bounds();
    let mut outcome = FrameOutcome::default();

    for (i, pair) in track.pairs().iter().enumerate() {
        if outcome.passed.is_none() && passed_through(pair, actor.pos.x, displacement) {
            outcome.passed = Some(i);
        }
        if pair.intersects(&bounds) {
            outcome.collided = true;
        }
    }

    outcome
}
