//! Step bounds invariant: the current step points into history.

use super::Invariant;
use crate::GameState;

/// Invariant: `current_step < history.len()`.
pub struct StepInBoundsInvariant;

impl Invariant<GameState> for StepInBoundsInvariant {
    fn holds(game: &GameState) -> bool {
        game.current_step < game.history.len()
    }

    fn description() -> &'static str {
        "Current step lies within history"
    }
}
