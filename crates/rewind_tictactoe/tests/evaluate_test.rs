//! Tests for board verdicts over every square assignment.

use rewind_tictactoe::rules::LINES;
use rewind_tictactoe::{Board, Player, Position, Square, Verdict, evaluate};

fn board_from_code(mut code: u32) -> Board {
    let mut squares = [Square::Empty; 9];
    for square in squares.iter_mut() {
        *square = match code % 3 {
            0 => Square::Empty,
            1 => Square::Occupied(Player::X),
            _ => Square::Occupied(Player::O),
        };
        code /= 3;
    }
    Board::from_squares(squares)
}

fn line_owner(board: &Board, line: &[Position; 3]) -> Option<Player> {
    let player = board.get(line[0]).player()?;
    line.iter()
        .all(|&pos| board.get(pos) == Square::Occupied(player))
        .then_some(player)
}

#[test]
fn test_every_board_classified_consistently() {
    for code in 0..3u32.pow(9) {
        let board = board_from_code(code);
        let first_line = LINES
            .iter()
            .find_map(|line| line_owner(&board, line).map(|player| (player, *line)));
        let full = board.squares().iter().all(|s| !s.is_empty());

        let expected = match first_line {
            Some((player, line)) => Verdict::Win { player, line },
            None if full => Verdict::Draw,
            None => Verdict::Ongoing,
        };
        assert_eq!(evaluate(&board), expected, "board {}", board);
    }
}

#[test]
fn test_winning_line_cells_are_distinct() {
    let board: Board = "OOO|XXX|...".parse().unwrap();
    let indices = evaluate(&board).winning_indices().unwrap();
    // Illegal board with two lines: the first row scans first.
    assert_eq!(indices, [0, 1, 2]);
    assert!(indices[0] != indices[1] && indices[1] != indices[2] && indices[0] != indices[2]);
}

#[test]
fn test_each_line_detected_for_both_players() {
    for line in LINES {
        for player in [Player::X, Player::O] {
            let mut board = Board::new();
            for pos in line {
                board.set(pos, Square::Occupied(player));
            }
            assert_eq!(evaluate(&board), Verdict::Win { player, line });
        }
    }
}

#[test]
fn test_partial_board_without_line_is_ongoing() {
    let board: Board = "XOX|.O.|OX.".parse().unwrap();
    assert_eq!(evaluate(&board), Verdict::Ongoing);
}
