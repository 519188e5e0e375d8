//! Stateless frame rendering.

use crate::config::RenderConfig;
use rewind_tictactoe::{CellView, GameView};
use serde::Serialize;

const BOLD: &str = "\x1b[1m";
const REVERSE: &str = "\x1b[7m";
const RESET: &str = "\x1b[0m";

/// Output format for frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    /// Human-readable board, status and move list.
    #[default]
    Text,
    /// One JSON object per frame; session notices are JSON objects too.
    Json,
}

/// Renders a frame in the given format.
pub fn render(view: &GameView, config: &RenderConfig, format: Format) -> Result<String, serde_json::Error> {
    match format {
        Format::Text => Ok(render_text(view, config)),
        Format::Json => render_json(view),
    }
}

/// Renders a frame as pretty JSON.
pub fn render_json(view: &GameView) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&Frame::from(view))
}

/// Renders the board, status line, toggle label and move list.
///
/// Winning squares are bracketed (`[X]`), or shown in reverse video when
/// color is on. The current move is prefixed with `>` and bolded when color
/// is on.
pub fn render_text(view: &GameView, config: &RenderConfig) -> String {
    let mut out = String::new();

    for (row, cells) in view.cells.chunks(3).enumerate() {
        let line: Vec<String> = cells.iter().map(|cell| render_cell(cell, config)).collect();
        out.push_str(&line.join("|"));
        out.push('\n');
        if row < 2 {
            out.push_str("---+---+---\n");
        }
    }

    out.push('\n');
    out.push_str(&view.status);
    out.push('\n');
    out.push_str(&format!("({})\n", view.toggle_label));

    for item in &view.moves {
        let label = if item.is_current && *config.color() {
            format!("{BOLD}{}{RESET}", item.label)
        } else {
            item.label.clone()
        };
        let marker = if item.is_current { '>' } else { ' ' };
        out.push_str(&format!("{} {:>2}. {}\n", marker, item.step, label));
    }

    out
}

fn render_cell(cell: &CellView, config: &RenderConfig) -> String {
    let symbol = cell.mark.map_or(*config.empty_glyph(), |player| player.symbol());
    match (cell.highlighted, *config.color()) {
        (true, true) => format!("{REVERSE} {symbol} {RESET}"),
        (true, false) => format!("[{symbol}]"),
        (false, _) => format!(" {symbol} "),
    }
}

/// JSON frame: the view plus the board in compact form.
#[derive(Serialize)]
struct Frame<'a> {
    board: String,
    #[serde(flatten)]
    view: &'a GameView,
}

impl<'a> From<&'a GameView> for Frame<'a> {
    fn from(view: &'a GameView) -> Self {
        let board = view
            .cells
            .iter()
            .map(|cell| cell.mark.map_or('.', |player| player.symbol()))
            .collect();
        Self { board, view }
    }
}
