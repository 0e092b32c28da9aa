//! Fixed step simulation tick
//!
//! Order per tick: time slow -> player physics -> landings -> platform
//! upkeep -> camera and score. One tick per rendered frame.

use serde::{Deserialize, Serialize};

use super::state::{GamePhase, GameState};
use super::{camera, collision, maintenance, physics};

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickInput {
    /// Held left
    pub left: bool,
    /// Held right
    pub right: bool,
    /// Jump (one-shot)
    pub jump: bool,
    /// Time slow (one-shot)
    pub ability: bool,
}

/// Result of a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepOutcome {
    /// The player fell out of view this tick or earlier
    pub ended: bool,
    /// Height score in meters
    pub score: u32,
}

/// Advance the game state by one tick
pub fn tick(state: &mut GameState) -> StepOutcome {
    if state.phase == GamePhase::GameOver {
        return outcome(state);
    }

    let multiplier = state.ability.advance(&state.tuning);

    physics::integrate(&mut state.player, &state.tuning, multiplier);
    let fell = physics::has_fallen(&state.player, state.camera_y, &state.tuning);

    if let Some(index) = collision::resolve_landings(&mut state.player, &state.platforms) {
        log::trace!("Landed on platform {} at frame {}", index, state.frame);
    }

    maintenance::maintain(
        &mut state.platforms,
        state.camera_y,
        &state.tuning,
        &mut state.rng,
    );

    let (camera_y, height) = camera::update(&state.player, state.camera_y, &state.tuning);
    state.camera_y = camera_y;
    state.player.height_reached = height;

    state.frame += 1;

    if fell {
        state.phase = GamePhase::GameOver;
        log::info!(
            "Game over at frame {}: height {}m",
            state.frame,
            state.player.height_reached
        );
    }

    outcome(state)
}

fn outcome(state: &GameState) -> StepOutcome {
    StepOutcome {
        ended: state.phase == GamePhase::GameOver,
        score: state.player.height_reached,
    }
}
