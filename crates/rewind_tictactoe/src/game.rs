//! Time-travel game state for tic-tac-toe.
//!
//! [`GameState`] owns every board snapshot played so far plus a pointer to
//! the one being shown. Moves made after jumping back discard the entries
//! beyond the pointer, the usual undo/redo branching.
//!
//! Invalid input never fails: clicking an occupied square, clicking after
//! the game ended, or jumping past the end leaves the state untouched and
//! reports why through [`Transition::Ignored`].

use crate::history::HistoryEntry;
use crate::intent::Intent;
use crate::invariants::{HistoryInvariants, InvariantSet};
use crate::rules::{Verdict, evaluate};
use crate::{Board, Player, Position};
use derive_more::Display;
use tracing::{debug, instrument, warn};

/// Why an input left the game untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum IgnoreReason {
    /// The shown board is already won or drawn.
    #[display("Game is already over ({})", _0)]
    GameOver(Verdict),
    /// The target square already holds a mark.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),
    /// The square index is not on the board.
    #[display("Position {} is out of bounds (must be 0-8)", _0)]
    OutOfBounds(usize),
    /// The step is past the end of history.
    #[display("Step {} is out of range (history has {} entries)", step, len)]
    StepOutOfRange {
        /// Requested step.
        step: usize,
        /// History length at the time of the request.
        len: usize,
    },
}

/// Result of feeding an input to [`GameState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Transition {
    /// The state changed.
    #[display("applied")]
    Applied,
    /// The input was a no-op.
    #[display("ignored: {}", _0)]
    Ignored(IgnoreReason),
}

impl Transition {
    /// Returns true if the state changed.
    pub fn is_applied(&self) -> bool {
        matches!(self, Transition::Applied)
    }
}

/// History of board snapshots with a movable "current step" pointer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub(crate) history: Vec<HistoryEntry>,
    pub(crate) current_step: usize,
    pub(crate) move_order_ascending: bool,
}

impl GameState {
    /// Creates a new game: empty board, X to move, ascending move list.
    #[instrument]
    pub fn new() -> Self {
        Self::with_move_order(true)
    }

    /// Creates a new game with the given move-list order.
    #[instrument]
    pub fn with_move_order(ascending: bool) -> Self {
        Self {
            history: vec![HistoryEntry::initial()],
            current_step: 0,
            move_order_ascending: ascending,
        }
    }

    /// Every snapshot, starting with the empty board.
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// Index of the snapshot being shown.
    pub fn current_step(&self) -> usize {
        self.current_step
    }

    /// Whether the move list is shown oldest first.
    pub fn move_order_ascending(&self) -> bool {
        self.move_order_ascending
    }

    /// The snapshot being shown.
    pub fn current_entry(&self) -> &HistoryEntry {
        &self.history[self.current_step]
    }

    /// The board being shown.
    pub fn current_board(&self) -> &Board {
        self.current_entry().board()
    }

    /// Player whose turn it is at the current step.
    pub fn to_move(&self) -> Player {
        Player::for_step(self.current_step)
    }

    /// Verdict for the board being shown.
    pub fn verdict(&self) -> Verdict {
        evaluate(self.current_board())
    }

    /// Empty squares that would accept a move, none once the game is over.
    #[instrument(skip(self))]
    pub fn valid_moves(&self) -> Vec<Position> {
        if self.verdict().is_ongoing() {
            Position::valid_moves(self.current_board())
        } else {
            Vec::new()
        }
    }

    /// Places the current player's mark at `index` (0-8).
    ///
    /// Entries after the current step are discarded first. Ignored when the
    /// game is over, the square is taken, or the index is off the board.
    #[instrument(skip(self), fields(step = self.current_step))]
    pub fn apply_move(&mut self, index: usize) -> Transition {
        let Some(pos) = Position::from_index(index) else {
            warn!(index, "Move outside the board ignored");
            return Transition::Ignored(IgnoreReason::OutOfBounds(index));
        };

        let verdict = self.verdict();
        if !verdict.is_ongoing() {
            debug!(%verdict, "Move after game end ignored");
            return Transition::Ignored(IgnoreReason::GameOver(verdict));
        }

        if !self.current_board().is_empty(pos) {
            debug!(%pos, "Move on occupied square ignored");
            return Transition::Ignored(IgnoreReason::SquareOccupied(pos));
        }

        let player = self.to_move();
        let next = self.current_entry().successor(pos, player);

        let discarded = self.history.len() - (self.current_step + 1);
        self.history.truncate(self.current_step + 1);
        self.history.push(next);
        self.current_step = self.history.len() - 1;

        debug!(%player, %pos, discarded, step = self.current_step, "Move applied");
        self.assert_invariants();
        Transition::Applied
    }

    /// Shows the snapshot at `step`. History is left as is.
    #[instrument(skip(self))]
    pub fn jump_to(&mut self, step: usize) -> Transition {
        let len = self.history.len();
        if step >= len {
            warn!(step, len, "Jump past end of history ignored");
            return Transition::Ignored(IgnoreReason::StepOutOfRange { step, len });
        }

        self.current_step = step;
        debug!(step, to_move = %self.to_move(), "Jumped");
        Transition::Applied
    }

    /// Flips the move-list order.
    #[instrument(skip(self))]
    pub fn toggle_move_order(&mut self) -> Transition {
        self.move_order_ascending = !self.move_order_ascending;
        debug!(ascending = self.move_order_ascending, "Move order toggled");
        Transition::Applied
    }

    /// Routes a presentation intent to the matching transition.
    #[instrument(skip(self))]
    pub fn dispatch(&mut self, intent: Intent) -> Transition {
        match intent {
            Intent::Place(pos) => self.apply_move(pos.to_index()),
            Intent::JumpTo(step) => self.jump_to(step),
            Intent::ToggleOrder => self.toggle_move_order(),
        }
    }

    fn assert_invariants(&self) {
        debug_assert!(
            HistoryInvariants::check_all(self).is_ok(),
            "history invariants violated: {:?}",
            HistoryInvariants::check_all(self)
        );
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
