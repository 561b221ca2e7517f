//! Fixed timestep simulation tick
//!
//! One call is one frame: drain the frame's input events through the phase
//! transitions, then advance the world if the game is being played.

use super::collision::evaluate;
use super::state::{CrashCause, GameEvent, GamePhase, GameState};

/// Logical key, already mapped from a platform key name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Jump,
    Restart,
    /// Any other key; still starts the game
    Other,
}

/// A discrete event from the input source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    KeyPressed(Key),
    CloseRequested,
}

/// Input events for a single tick, in arrival order
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    pub events: Vec<InputEvent>,
}

impl TickInput {
    pub fn key(key: Key) -> Self {
        Self {
            events: vec![InputEvent::KeyPressed(key)],
        }
    }
}

/// Apply one input event to the phase machine
pub fn handle_event(state: &mut GameState, event: InputEvent, events: &mut Vec<GameEvent>) {
    let key = match event {
        InputEvent::CloseRequested => {
            events.push(GameEvent::QuitRequested);
            return;
        }
        InputEvent::KeyPressed(key) => key,
    };

    match state.phase {
        GamePhase::NotStarted => {
            state.phase = GamePhase::Playing;
            events.push(GameEvent::Started);
        }
        GamePhase::Playing => {
            if key == Key::Jump {
                state.actor.jump(state.tuning.jump_impulse);
                events.push(GameEvent::Jumped);
            }
        }
        GamePhase::GameOver => {
            if key == Key::Restart {
                state.reset();
                events.push(GameEvent::Restarted);
            }
        }
    }
}

/// Advance the game state by one frame
pub fn tick(state: &mut GameState, input: &TickInput) -> Vec<GameEvent> {
    let mut events = Vec::new();

    for event in &input.events {
        handle_event(state, *event, &mut events);
    }

    // Nothing moves on the start or game over screens
    if state.phase != GamePhase::Playing {
        return events;
    }

    state.time_ticks += 1;

    state.actor.integrate(state.tuning.gravity);
    if state.actor.out_of_bounds(state.tuning.window_height) {
        let cause = if state.actor.pos.y < 0.0 {
            CrashCause::Ceiling
        } else {
            CrashCause::Floor
        };
        crash(state, cause, &mut events);
        return events;
    }

    let displacement = state.track.advance(state.tuning.pipe_speed);
    state.track.reclaim();
    state.track.maybe_spawn(&state.tuning, &mut state.rng);

    let outcome = evaluate(&state.actor, &state.track, displacement);
    if outcome.passed.is_some() {
        let new_best = state.scoreboard.award();
        events.push(GameEvent::Scored {
            score: state.scoreboard.score,
        });
        if new_best {
            events.push(GameEvent::NewBest {
                best: state.scoreboard.best,
            });
        }
    }

    if outcome.collided {
        crash(state, CrashCause::Obstacle, &mut events);
        return events;
    }

    if let Some(goal) = state.scoreboard.ratchet_goal() {
        events.push(GameEvent::GoalRaised { goal });
    }

    events
}

fn crash(state: &mut GameState, cause: CrashCause, events: &mut Vec<GameEvent>) {
    state.phase = GamePhase::GameOver;
    events.push(GameEvent::Crashed { cause });
}
