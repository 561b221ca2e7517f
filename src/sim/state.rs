//! Game state and core simulation types
//!
//! One aggregate owns everything a frame touches. The frame driver holds it
//! and passes it to `tick` by mutable reference.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::actor::Actor;
use super::track::ObstacleTrack;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for any key
    NotStarted,
    /// Active gameplay
    Playing,
    /// Run ended, waiting for the restart key
    GameOver,
}

/// Why a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CrashCause {
    /// Actor left the top of the screen
    Ceiling,
    /// Actor left the bottom of the screen
    Floor,
    /// Actor touched an obstacle rectangle
    Obstacle,
}

/// Something that happened during a tick, for logging and presentation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    Started,
    Jumped,
    Scored { score: u32 },
    NewBest { best: u32 },
    GoalRaised { goal: u32 },
    Crashed { cause: CrashCause },
    Restarted,
    QuitRequested,
}

/// Current, best and goal score
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    /// Points this run
    pub score: u32,
    /// Highest score this process has seen (not persisted)
    pub best: u32,
    /// Target shown to the player; raised to `best` once reached
    pub goal: u32,
}

impl Scoreboard {
    pub fn new(initial_goal: u32) -> Self {
        Self {
            score: 0,
            best: 0,
            goal: initial_goal,
        }
    }

    /// Award one point; returns true if this set a new best
    pub fn award(&mut self) -> bool {
        self.score += 1;
        if self.score > self.best {
            self.best = self.score;
            true
        } else {
            false
        }
    }

    pub fn goal_reached(&self) -> bool {
        self.score >= self.goal
    }

    /// Once the goal is reached it tracks the best score.
    /// Returns the new goal if it moved.
    pub fn ratchet_goal(&mut self) -> Option<u32> {
        if self.goal_reached() && self.goal != self.best {
            self.goal = self.best;
            Some(self.goal)
        } else {
            None
        }
    }

    /// Points still needed to reach the goal
    pub fn remaining_to_goal(&self) -> u32 {
        self.goal.saturating_sub(self.score)
    }

    /// Points still needed to beat the best score
    pub fn remaining_to_best(&self) -> u32 {
        self.best.saturating_sub(self.score)
    }

    /// Start a new run; best and goal carry over
    pub fn reset_run(&mut self) {
        self.score = 0;
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed the obstacle RNG was created from
    pub seed: u64,
    /// Current phase
    pub phase: GamePhase,
    /// Player sprite
    pub actor: Actor,
    /// Obstacles in spawn order
    pub track: ObstacleTrack,
    pub scoreboard: Scoreboard,
    /// Simulation ticks run while playing, across all runs
    pub time_ticks: u64,
    /// Gameplay constants
    pub tuning: Tuning,
    /// Obstacle RNG; keeps its stream across restarts
    pub(crate) rng: Pcg32,
}

impl GameState {
    /// Create a new game state with the given seed
    pub fn new(seed: u64, tuning: Tuning) -> Self {
        Self {
            seed,
            phase: GamePhase::NotStarted,
            actor: Actor::new(&tuning),
            track: ObstacleTrack::new(),
            scoreboard: Scoreboard::new(tuning.initial_goal),
            time_ticks: 0,
            rng: Pcg32::seed_from_u64(seed),
            tuning,
        }
    }

    /// Back to the start screen with a fresh actor and an empty track
    pub fn reset(&mut self) {
        self.phase = GamePhase::NotStarted;
        self.actor = Actor::new(&self.tuning);
        self.track.clear();
        self.scoreboard.reset_run();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state() {
        let state = GameState::new(1, Tuning::default());
        assert_eq!(state.seed, 1);
        assert_eq!(state.phase, GamePhase::NotStarted);
        assert!(state.track.is_empty());
        assert_eq!(state.scoreboard, Scoreboard::new(3));
    }

    #[test]
    fn test_award_tracks_best() {
        let mut board = Scoreboard::new(3);
        assert!(board.award());
        assert!(board.award());
        assert_eq!(board.best, 2);

        board.reset_run();
        assert!(!board.award());
        assert_eq!(board.score, 1);
        assert_eq!(board.best, 2);
        assert_eq!(board.remaining_to_best(), 1);
    }

    #[test]
    fn test_goal_ratchet() {
        let mut board = Scoreboard::new(2);
        board.award();
        assert_eq!(board.ratchet_goal(), None);
        assert_eq!(board.remaining_to_goal(), 1);

        board.award();
        assert!(board.goal_reached());
        // best == goal == 2 already
        assert_eq!(board.ratchet_goal(), None);

        board.award();
        assert_eq!(board.ratchet_goal(), Some(3));
        assert!(board.goal_reached());
    }

    #[test]
    fn test_reset_keeps_best_and_goal() {
        let mut state = GameState::new(7, Tuning::default());
        state.phase = GamePhase::GameOver;
        state.scoreboard = Scoreboard {
            score: 5,
            best: 5,
            goal: 5,
        };
        state.actor.pos.y = 42.0;
        state.actor.vel = 3.0;

        state.reset();
        assert_eq!(state.phase, GamePhase::NotStarted);
        assert_eq!(state.scoreboard.score, 0);
        assert_eq!(state.scoreboard.best, 5);
        assert_eq!(state.scoreboard.goal, 5);
        assert_eq!(state.actor, Actor::new(&state.tuning));
    }
}
