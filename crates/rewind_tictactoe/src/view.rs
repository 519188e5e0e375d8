//! Read-only projections for a presentation layer.
//!
//! Everything here is a pure function of a [`GameState`] and the verdict of
//! its current board. A front end renders these and never keeps state of its
//! own beyond the `GameState` it dispatches intents to.

use crate::history::HistoryEntry;
use crate::rules::Verdict;
use crate::{GameState, Player, Position};
use serde::Serialize;
use tracing::instrument;

/// Status line for the board being shown.
///
/// `Next player: X` while ongoing, `Winner: X` on a win,
/// `The match is a draw.` on a draw.
pub fn status_text(state: &GameState) -> String {
    match state.verdict() {
        Verdict::Ongoing => format!("Next player: {}", state.to_move()),
        Verdict::Win { player, .. } => format!("Winner: {}", player),
        Verdict::Draw => "The match is a draw.".to_string(),
    }
}

/// Label for the history entry at `step`.
///
/// Column and row are 1-indexed, column first.
pub fn move_label(step: usize, entry: &HistoryEntry) -> String {
    match entry.last_moved() {
        Some(pos) if step > 0 => {
            format!("Go to move #{} — {},{}", step, pos.column(), pos.row())
        }
        _ => "Go to game start".to_string(),
    }
}

/// Label for the move-order toggle, naming the order it switches to.
pub fn toggle_label(state: &GameState) -> &'static str {
    if state.move_order_ascending() {
        "Toggle move order to descending"
    } else {
        "Toggle move order to ascending"
    }
}

/// Squares to highlight: the winning line, if the shown board is won.
pub fn highlighted_cells(state: &GameState) -> Option<[Position; 3]> {
    state.verdict().winning_line()
}

/// One entry of the move list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveListItem {
    /// History step this item jumps to.
    pub step: usize,
    /// Human-readable label.
    pub label: String,
    /// Whether this is the step being shown (rendered bold).
    pub is_current: bool,
}

/// The move list, one item per history entry.
///
/// Oldest first when ascending, newest first otherwise.
#[instrument(skip(state), fields(len = state.history().len()))]
pub fn move_list(state: &GameState) -> Vec<MoveListItem> {
    let mut items: Vec<MoveListItem> = state
        .history()
        .iter()
        .enumerate()
        .map(|(step, entry)| MoveListItem {
            step,
            label: move_label(step, entry),
            is_current: step == state.current_step(),
        })
        .collect();

    if !state.move_order_ascending() {
        items.reverse();
    }
    items
}

/// One rendered board square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CellView {
    /// Square position.
    pub position: Position,
    /// Mark in the square, if any.
    pub mark: Option<Player>,
    /// Whether the square is part of the winning line.
    pub highlighted: bool,
}

/// Everything a front end needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameView {
    /// Nine squares, row-major.
    pub cells: Vec<CellView>,
    /// Status line.
    pub status: String,
    /// Verdict of the shown board.
    pub verdict: Verdict,
    /// Player to move at the shown step.
    pub to_move: Player,
    /// Step being shown.
    pub current_step: usize,
    /// Move list in display order.
    pub moves: Vec<MoveListItem>,
    /// Whether `moves` is oldest first.
    pub move_order_ascending: bool,
    /// Move-order toggle label.
    pub toggle_label: String,
}

impl GameView {
    /// Projects the state into a frame.
    #[instrument(skip(state), fields(step = state.current_step()))]
    pub fn project(state: &GameState) -> Self {
        let verdict = state.verdict();
        let line = verdict.winning_line();
        let board = state.current_board();

        let cells = Position::ALL
            .into_iter()
            .map(|position| CellView {
                position,
                mark: board.get(position).player(),
                highlighted: line.is_some_and(|line| line.contains(&position)),
            })
            .collect();

        Self {
            cells,
            status: status_text(state),
            verdict,
            to_move: state.to_move(),
            current_step: state.current_step(),
            moves: move_list(state),
            move_order_ascending: state.move_order_ascending(),
            toggle_label: toggle_label(state).to_string(),
        }
    }
}
