//! No move after verdict invariant: finished boards are never played on.

use super::Invariant;
use crate::GameState;
use crate::rules::evaluate;

/// Invariant: every entry except the last is still ongoing.
///
/// A won or drawn board can only be the final entry of history.
pub struct NoMoveAfterVerdictInvariant;

impl Invariant<GameState> for NoMoveAfterVerdictInvariant {
    fn holds(game: &GameState) -> bool {
        let history = game.history();
        history
            .iter()
            .take(history.len().saturating_sub(1))
            .all(|entry| evaluate(entry.board()).is_ongoing())
    }

    fn description() -> &'static str {
        "No move follows a won or drawn board"
    }
}
