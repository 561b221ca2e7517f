//! Scene assembly
//!
//! Turns the game state into a flat triangle list in logical screen
//! coordinates. Drawing order: background, obstacles, actor, overlay.

use super::shapes;
use super::vertex::{Vertex, colors};
use crate::sim::{GamePhase, GameState, Rect};

pub fn scene_vertices(state: &GameState) -> Vec<Vertex> {
    let tuning = &state.tuning;
    let screen = Rect::new(0.0, 0.0, tuning.window_width, tuning.window_height);

    let mut vertices = Vec::with_capacity(6 * (3 + 2 * state.track.len()));
    vertices.extend(shapes::rect(&screen, colors::SKY));

    if state.phase != GamePhase::NotStarted {
        for pair in state.track.pairs() {
            vertices.extend(shapes::rect(&pair.upper, colors::PIPE));
            vertices.extend(shapes::rect(&pair.lower, colors::PIPE));
        }
        vertices.extend(shapes::rect(&state.actor.bounds(), colors::ACTOR));
    }

    if state.phase != GamePhase::Playing {
        vertices.extend(shapes::rect(&screen, colors::OVERLAY));
    }

    vertices
}

/// Map logical screen coordinates (origin top-left, y down) to clip space
pub fn to_ndc(vertices: &[Vertex], width: f32, height: f32) -> Vec<Vertex> {
    vertices
        .iter()
        .map(|v| {
            let x = v.position[0] / width * 2.0 - 1.0;
            let y = 1.0 - v.position[1] / height * 2.0;
            Vertex::new(x, y, v.color)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::ObstaclePair;
    use crate::tuning::Tuning;

    #[test]
    fn test_start_screen_hides_world() {
        let state = GameState::new(1, Tuning::default());
        // Background and overlay only
        assert_eq!(scene_vertices(&state).len(), 12);
    }

    #[test]
    fn test_playing_scene() {
        let mut state = GameState::new(1, Tuning::default());
        state.phase = GamePhase::Playing;
        state.track.push(ObstaclePair::new(500.0, 100.0, &state.tuning));
        // An empty upper rectangle is skipped
        state.track.push(ObstaclePair::new(700.0, 0.0, &state.tuning));

        let vertices = scene_vertices(&state);
        // sky + 3 pipe rects + actor
        assert_eq!(vertices.len(), 6 * 5);
        assert_eq!(vertices.last().map(|v| v.color), Some(colors::ACTOR));
    }

    #[test]
    fn test_ndc_corners() {
        let vertices = [
            Vertex::new(0.0, 0.0, colors::SKY),
            Vertex::new(800.0, 600.0, colors::SKY),
            Vertex::new(400.0, 300.0, colors::SKY),
        ];
        let ndc = to_ndc(&vertices, 800.0, 600.0);
        assert_eq!(ndc[0].position, [-1.0, 1.0]);
        assert_eq!(ndc[1].position, [1.0, -1.0]);
        assert_eq!(ndc[2].position, [0.0, 0.0]);
    }
}
