//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::Invariant;
use crate::{GameState, Player, Square};

/// Invariant: Players alternate turns.
///
/// The mark placed to reach entry k belongs to X when k is odd and to O
/// when k is even, so X always moves first.
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(game: &GameState) -> bool {
        game.history().iter().enumerate().skip(1).all(|(k, entry)| {
            entry.last_moved().is_some_and(|pos| {
                entry.board().get(pos) == Square::Occupied(Player::for_step(k - 1))
            })
        })
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
