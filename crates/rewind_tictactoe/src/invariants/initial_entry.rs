//! Initial entry invariant: history starts from the empty board.

use super::Invariant;
use crate::{Board, GameState};

/// Invariant: History is non-empty and entry 0 is the empty board with no move.
pub struct InitialEntryInvariant;

impl Invariant<GameState> for InitialEntryInvariant {
    fn holds(game: &GameState) -> bool {
        game.history()
            .first()
            .is_some_and(|entry| *entry.board() == Board::new() && entry.last_moved().is_none())
    }

    fn description() -> &'static str {
        "History starts with the empty board and no move"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::HistoryEntry;
    use crate::{Player, Position};

    #[test]
    fn test_new_game_holds() {
        assert!(InitialEntryInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_empty_history_violates() {
        let mut game = GameState::new();
        game.history.clear();
        assert!(!InitialEntryInvariant::holds(&game));
    }

    #[test]
    fn test_marked_start_violates() {
        let mut game = GameState::new();
        game.history[0] = HistoryEntry::from_parts(
            Board::new().with_mark(Position::TopLeft, Player::X),
            None,
        );
        assert!(!InitialEntryInvariant::holds(&game));
    }
}
