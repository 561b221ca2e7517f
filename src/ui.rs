//! HUD text model
//!
//! Decides which text lines the presentation layer shows for the current
//! phase. Pure function of state and settings; drawing is up to the caller.

use crate::settings::Settings;
use crate::sim::{GamePhase, GameState};

/// Where a line is anchored on the logical screen
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Anchor {
    /// Horizontally centered, top of the text at `y`
    Centered { y: f32 },
    /// Top-left corner of the text at (`x`, `y`)
    TopLeft { x: f32, y: f32 },
}

/// Visual emphasis of a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Normal,
    /// Game over and goal reached messages
    Alert,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HudLine {
    pub text: String,
    /// Font size in logical pixels
    pub size: f32,
    pub tone: Tone,
    pub anchor: Anchor,
}

impl HudLine {
    fn new(text: impl Into<String>, size: f32, tone: Tone, anchor: Anchor) -> Self {
        Self {
            text: text.into(),
            size,
            tone,
            anchor,
        }
    }
}

/// Text lines for the current frame, top to bottom
pub fn hud_lines(state: &GameState, settings: &Settings) -> Vec<HudLine> {
    let board = &state.scoreboard;
    let mid = state.tuning.window_height / 2.0;
    let mut lines = Vec::new();

    match state.phase {
        GamePhase::NotStarted => {
            lines.push(HudLine::new(
                format!("Welcome to {}", settings.title),
                50.0,
                Tone::Normal,
                Anchor::Centered { y: mid - 50.0 },
            ));
            lines.push(HudLine::new(
                "Press any key to start",
                40.0,
                Tone::Normal,
                Anchor::Centered { y: mid + 30.0 },
            ));
            if board.score < board.best {
                lines.push(HudLine::new(
                    format!("Remaining Score to Beat Best: {}", board.remaining_to_best()),
                    30.0,
                    Tone::Normal,
                    Anchor::Centered { y: mid + 135.0 },
                ));
            }
        }
        GamePhase::Playing => {
            lines.push(HudLine::new(
                format!("Score: {}", board.score),
                30.0,
                Tone::Normal,
                Anchor::TopLeft { x: 10.0, y: 10.0 },
            ));
            lines.push(HudLine::new(
                format!("Best Score: {}", board.best),
                30.0,
                Tone::Normal,
                Anchor::TopLeft { x: 10.0, y: 50.0 },
            ));
            let goal_line = if board.goal_reached() {
                HudLine::new(
                    "Congratulations! You achieved the goal score!",
                    30.0,
                    Tone::Alert,
                    Anchor::TopLeft { x: 10.0, y: 90.0 },
                )
            } else {
                HudLine::new(
                    format!("Remaining Score: {}", board.remaining_to_goal()),
                    30.0,
                    Tone::Normal,
                    Anchor::TopLeft { x: 10.0, y: 90.0 },
                )
            };
            lines.push(goal_line);
        }
        GamePhase::GameOver => {
            lines.push(HudLine::new(
                "Game Over",
                50.0,
                Tone::Alert,
                Anchor::Centered { y: mid - 75.0 },
            ));
            lines.push(HudLine::new(
                format!("Final Score: {}", board.score),
                30.0,
                Tone::Normal,
                Anchor::Centered { y: mid + 35.0 },
            ));
            lines.push(HudLine::new(
                format!("Press '{}' to play again", settings.restart_key_label()),
                30.0,
                Tone::Normal,
                Anchor::Centered { y: mid + 85.0 },
            ));
        }
    }

    lines
}
