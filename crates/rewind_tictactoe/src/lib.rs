//! Rewind Tic-Tac-Toe - rules and time-travel history
//!
//! Pure, single-threaded game logic for a 3x3 tic-tac-toe board whose every
//! position is kept so players can jump back to any earlier move and branch
//! from there.
//!
//! # Architecture
//!
//! - **Rules**: [`evaluate`] classifies any board as ongoing, drawn, or won
//! - **Game**: [`GameState`] owns the history and the current-step pointer
//! - **Intent**: [`Intent`] is what a front end dispatches into the game
//! - **View**: [`GameView`] is what a front end renders
//!
//! # Example
//!
//! ```
//! use rewind_tictactoe::{GameState, Player, Verdict};
//!
//! let mut game = GameState::new();
//! for index in [0, 4, 1, 5, 2] {
//!     game.apply_move(index);
//! }
//! assert_eq!(game.verdict().winner(), Some(Player::X));
//!
//! // Going back two steps reopens the game for O.
//! game.jump_to(3);
//! assert_eq!(game.verdict(), Verdict::Ongoing);
//! assert_eq!(game.to_move(), Player::O);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod game;
mod history;
mod intent;
pub mod invariants;
mod position;
pub mod rules;
mod types;
pub mod view;

pub use game::{GameState, IgnoreReason, Transition};
pub use history::HistoryEntry;
pub use intent::{Intent, IntentError};
pub use position::Position;
pub use rules::{Verdict, evaluate};
pub use types::{Board, BoardParseError, Player, Square};
pub use view::{CellView, GameView, MoveListItem};

/// Alias for a player's symbol on the board.
pub type Mark = Player;
