//! Board snapshots recorded by the game.

use crate::{Board, Player, Position};
use serde::Serialize;

/// One snapshot in the game's history.
///
/// Entries are only created by [`GameState`](crate::GameState): the
/// initial entry holds the empty board, every later one records the move
/// that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct HistoryEntry {
    board: Board,
    last_moved: Option<Position>,
}

impl HistoryEntry {
    /// The entry every game starts from.
    pub(crate) fn initial() -> Self {
        Self {
            board: Board::new(),
            last_moved: None,
        }
    }

    /// The entry produced by `player` marking `pos` on this entry's board.
    pub(crate) fn successor(&self, pos: Position, player: Player) -> Self {
        Self {
            board: self.board.with_mark(pos, player),
            last_moved: Some(pos),
        }
    }

    /// Board after this entry's move.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The square marked to reach this entry, `None` for the initial entry.
    pub fn last_moved(&self) -> Option<Position> {
        self.last_moved
    }

    /// Board index of the last move.
    pub fn last_moved_index(&self) -> Option<usize> {
        self.last_moved.map(Position::to_index)
    }

    #[cfg(test)]
    pub(crate) fn from_parts(board: Board, last_moved: Option<Position>) -> Self {
        Self { board, last_moved }
    }
}
