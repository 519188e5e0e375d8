//! Board outcome classification.

use super::{draw::is_full, win::check_winner};
use crate::{Board, Player, Position};
use serde::Serialize;
use tracing::instrument;

/// Outcome classification of a single board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Verdict {
    /// No line is complete and at least one square is empty.
    Ongoing,
    /// Every square is occupied and no line is complete.
    Draw,
    /// A line holds three of the same mark.
    Win {
        /// The player owning the line.
        player: Player,
        /// The completed line.
        line: [Position; 3],
    },
}

impl Verdict {
    /// Returns true while moves may still be made.
    pub fn is_ongoing(&self) -> bool {
        matches!(self, Verdict::Ongoing)
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Verdict::Win { player, .. } => Some(*player),
            Verdict::Ongoing | Verdict::Draw => None,
        }
    }

    /// Returns the winning line if there is one.
    pub fn winning_line(&self) -> Option<[Position; 3]> {
        match self {
            Verdict::Win { line, .. } => Some(*line),
            Verdict::Ongoing | Verdict::Draw => None,
        }
    }

    /// Returns the winning line as board indices.
    pub fn winning_indices(&self) -> Option<[usize; 3]> {
        self.winning_line().map(|line| line.map(Position::to_index))
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::Ongoing => write!(f, "Ongoing"),
            Verdict::Draw => write!(f, "Draw"),
            Verdict::Win { player, .. } => write!(f, "Player {} wins", player),
        }
    }
}

/// Classifies a board as won, drawn, or still in play.
///
/// Total over every square assignment. A win is checked before fullness,
/// so a full board with a complete line is a win, not a draw.
#[instrument]
pub fn evaluate(board: &Board) -> Verdict {
    if let Some((player, line)) = check_winner(board) {
        Verdict::Win { player, line }
    } else if is_full(board) {
        Verdict::Draw
    } else {
        Verdict::Ongoing
    }
}
