//! Tests for presentation projections.

use rewind_tictactoe::view::{highlighted_cells, move_label, move_list, status_text, toggle_label};
use rewind_tictactoe::{GameState, GameView, Intent, Player, Position};

fn play(moves: &[usize]) -> GameState {
    let mut game = GameState::new();
    for &index in moves {
        game.apply_move(index);
    }
    game
}

#[test]
fn test_status_text_for_each_verdict() {
    assert_eq!(status_text(&GameState::new()), "Next player: X");
    assert_eq!(status_text(&play(&[4])), "Next player: O");
    assert_eq!(status_text(&play(&[0, 4, 1, 5, 2])), "Winner: X");
    assert_eq!(
        status_text(&play(&[0, 1, 2, 3, 5, 4, 6, 8, 7])),
        "The match is a draw."
    );
}

#[test]
fn test_status_follows_jumps() {
    let mut game = play(&[0, 4, 1, 5, 2]);
    game.jump_to(3);
    assert_eq!(status_text(&game), "Next player: O");
}

#[test]
fn test_move_labels_use_column_then_row() {
    let game = play(&[0, 5, 7]);
    let history = game.history();

    assert_eq!(move_label(0, &history[0]), "Go to game start");
    assert_eq!(move_label(1, &history[1]), "Go to move #1 — 1,1");
    // Index 5: column 3, row 2.
    assert_eq!(move_label(2, &history[2]), "Go to move #2 — 3,2");
    // Index 7: column 2, row 3.
    assert_eq!(move_label(3, &history[3]), "Go to move #3 — 2,3");
}

#[test]
fn test_move_list_marks_current_step() {
    let mut game = play(&[4, 0, 8]);
    game.jump_to(1);

    let items = move_list(&game);
    assert_eq!(items.len(), 4);
    assert_eq!(
        items.iter().map(|item| item.step).collect::<Vec<_>>(),
        vec![0, 1, 2, 3]
    );
    let current: Vec<usize> = items.iter().filter(|i| i.is_current).map(|i| i.step).collect();
    assert_eq!(current, vec![1]);
}

#[test]
fn test_move_list_reverses_when_descending() {
    let mut game = play(&[4, 0]);
    game.toggle_move_order();

    let items = move_list(&game);
    assert_eq!(
        items.iter().map(|item| item.step).collect::<Vec<_>>(),
        vec![2, 1, 0]
    );
    assert_eq!(items[2].label, "Go to game start");
    assert!(items[0].is_current);
}

#[test]
fn test_toggle_label_names_next_order() {
    let mut game = GameState::new();
    assert_eq!(toggle_label(&game), "Toggle move order to descending");
    game.toggle_move_order();
    assert_eq!(toggle_label(&game), "Toggle move order to ascending");
}

#[test]
fn test_highlight_only_on_win() {
    let game = play(&[2, 0, 4, 1, 6]);
    assert_eq!(
        highlighted_cells(&game),
        Some([Position::TopRight, Position::Center, Position::BottomLeft])
    );
    assert_eq!(highlighted_cells(&play(&[2, 0, 4])), None);
}

#[test]
fn test_game_view_projects_state() {
    let mut game = GameState::new();
    for intent in ["move 0", "move 4", "move 1", "move 5", "move 2"] {
        game.dispatch(intent.parse::<Intent>().unwrap());
    }

    let view = GameView::project(&game);
    assert_eq!(view.cells.len(), 9);
    assert_eq!(view.status, "Winner: X");
    assert_eq!(view.current_step, 5);
    assert_eq!(view.moves.len(), 6);

    let highlighted: Vec<usize> = view
        .cells
        .iter()
        .filter(|cell| cell.highlighted)
        .map(|cell| cell.position.to_index())
        .collect();
    assert_eq!(highlighted, vec![0, 1, 2]);
    assert_eq!(view.cells[4].mark, Some(Player::O));
    assert_eq!(view.cells[8].mark, None);
}

#[test]
fn test_game_view_serializes_tagged_verdict() {
    let game = play(&[0, 4, 1, 5, 2]);
    let json = serde_json::to_value(GameView::project(&game)).unwrap();

    assert_eq!(json["verdict"]["kind"], "win");
    assert_eq!(json["verdict"]["player"], "X");
    assert_eq!(json["status"], "Winner: X");
    assert_eq!(json["moves"][1]["label"], "Go to move #1 — 1,1");

    let json = serde_json::to_value(GameView::project(&GameState::new())).unwrap();
    assert_eq!(json["verdict"]["kind"], "ongoing");
}
