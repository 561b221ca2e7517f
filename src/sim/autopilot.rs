//! Demo player
//!
//! Picks a key press for the coming frame by looking at the state only, so a
//! seeded run under the autopilot is fully reproducible.

use super::state::{GamePhase, GameState};
use super::tick::{Key, TickInput};

/// How far above the gap's bottom edge the actor's bottom may sink before a jump
const JUMP_MARGIN: f32 = 40.0;

#[derive(Debug, Clone, Default)]
pub struct Autopilot {
    /// Restart automatically after a game over
    pub restart: bool,
}

impl Autopilot {
    pub fn new(restart: bool) -> Self {
        Self { restart }
    }

    /// Lowest y the actor's bottom edge may reach before jumping
    pub fn jump_line(state: &GameState) -> f32 {
        let actor_x = state.actor.pos.x;
        // First pair the actor has not fully cleared yet
        let gap_bottom = state
            .track
            .pairs()
            .iter()
            .find(|p| p.right() >= actor_x)
            .map(|p| p.gap_bottom())
            .unwrap_or((state.tuning.window_height + state.tuning.gap_size) / 2.0);
        gap_bottom - JUMP_MARGIN
    }

    /// Input for the next tick
    pub fn input(&self, state: &GameState) -> TickInput {
        match state.phase {
            GamePhase::NotStarted => TickInput::key(Key::Other),
            GamePhase::GameOver if self.restart => TickInput::key(Key::Restart),
            GamePhase::GameOver => TickInput::default(),
            GamePhase::Playing => {
                let actor = &state.actor;
                let bottom = actor.pos.y + actor.size.y;
                if actor.vel >= 0.0 && bottom > Self::jump_line(state) {
                    TickInput::key(Key::Jump)
                } else {
                    TickInput::default()
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::tick::tick;
    use crate::tuning::Tuning;

    #[test]
    fn test_starts_and_restarts() {
        let pilot = Autopilot::new(true);
        let mut state = GameState::new(3, Tuning::default());
        assert_eq!(pilot.input(&state).events.len(), 1);

        state.phase = GamePhase::GameOver;
        let input = pilot.input(&state);
        tick(&mut state, &input);
        assert_eq!(state.phase, GamePhase::NotStarted);

        let idle = Autopilot::new(false);
        state.phase = GamePhase::GameOver;
        assert!(idle.input(&state).events.is_empty());
    }

    #[test]
    fn test_jump_line_without_obstacles() {
        let state = GameState::new(3, Tuning::default());
        assert_eq!(Autopilot::jump_line(&state), 360.0);
    }

    #[test]
    fn test_survives_and_scores() {
        let pilot = Autopilot::new(false);
        let mut state = GameState::new(2024, Tuning::default());
        for _ in 0..1500 {
            let input = pilot.input(&state);
            tick(&mut state, &input);
        }
        assert_eq!(state.phase, GamePhase::Playing);
        assert!(state.scoreboard.score >= 5);
    }
}
