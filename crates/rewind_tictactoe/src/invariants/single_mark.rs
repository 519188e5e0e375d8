//! Single mark invariant: each step adds exactly one mark.

use super::Invariant;
use crate::{GameState, Position};

/// Invariant: entry k holds exactly k marks and differs from entry k-1
/// only at its last move, which was empty before.
///
/// Marks are never removed or overwritten.
pub struct SingleMarkPerStepInvariant;

impl Invariant<GameState> for SingleMarkPerStepInvariant {
    fn holds(game: &GameState) -> bool {
        let history = game.history();

        let counts_match = history
            .iter()
            .enumerate()
            .all(|(k, entry)| entry.board().occupied_count() == k);

        counts_match
            && history.windows(2).all(|pair| {
                let (before, after) = (pair[0].board(), pair[1].board());
                let Some(moved) = pair[1].last_moved() else {
                    return false;
                };
                let changed: Vec<Position> = Position::ALL
                    .into_iter()
                    .filter(|&pos| before.get(pos) != after.get(pos))
                    .collect();
                changed == [moved] && before.is_empty(moved)
            })
    }

    fn description() -> &'static str {
        "Each step adds exactly one mark at its last move"
    }
}
