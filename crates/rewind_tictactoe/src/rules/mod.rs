//! Game rules for tic-tac-toe.
//!
//! Pure functions over a single [`Board`](crate::Board) snapshot. They know
//! nothing about history or whose turn it is, so they hold for any of the
//! 3^9 square assignments, reachable or not.

pub mod draw;
pub mod verdict;
pub mod win;

pub use draw::{is_draw, is_full};
pub use verdict::{Verdict, evaluate};
pub use win::{LINES, check_winner};
