//! Tests for replay and interactive sessions.

use rewind_cli::{Format, RenderConfig, Session, render_text};
use rewind_tictactoe::{GameView, Transition, Verdict};
use std::io::Cursor;

fn text_session() -> Session {
    Session::new(RenderConfig::default(), Format::Text)
}

#[test]
fn test_replay_prints_final_frame() {
    let mut session = text_session();
    let mut out = Vec::new();
    session
        .replay(["move 0", "move 4", "move 1", "move 5", "move 2"], false, &mut out)
        .unwrap();

    let text = String::from_utf8(out).unwrap();
    assert!(text.starts_with("[X]|[X]|[X]\n---+---+---\n . | O | O \n"));
    assert!(text.contains("Winner: X"));
    assert!(text.contains(">  5. Go to move #5 — 3,1"));
    assert_eq!(session.game().current_step(), 5);
}

#[test]
fn test_replay_each_prints_every_frame() {
    let mut session = text_session();
    let mut out = Vec::new();
    session.replay(["move 4", "toggle", "jump 0"], true, &mut out).unwrap();

    let text = String::from_utf8(out).unwrap();
    assert_eq!(text.matches("---+---+---").count(), 6);
    assert!(text.ends_with(">  0. Go to game start\n\n"));
}

#[test]
fn test_replay_stops_at_bad_intent() {
    let mut session = text_session();
    let mut out = Vec::new();
    let err = session.replay(["move 4", "fly 3", "move 0"], false, &mut out).unwrap_err();

    assert!(err.to_string().contains("Unknown command"));
    assert_eq!(session.game().history().len(), 2);
    assert!(out.is_empty());
}

#[test]
fn test_handle_line_reports_ignored_moves() {
    let mut session = text_session();
    assert_eq!(session.handle_line("m center").unwrap(), Transition::Applied);
    assert!(!session.handle_line("m 4").unwrap().is_applied());
    assert!(session.handle_line("m 10").is_err());
}

#[test]
fn test_run_reads_until_quit() {
    let mut session = text_session();
    let input = Cursor::new("move 0\n\nmove 0\nbogus\nmove 1\nquit\nmove 2\n");
    let mut out = Vec::new();
    session.run(input, &mut out).unwrap();

    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("Ignored: Square Top-left is already occupied"));
    assert!(text.contains("Unknown command: bogus"));
    assert_eq!(session.game().history().len(), 3);
    assert_eq!(session.game().verdict(), Verdict::Ongoing);
}

#[test]
fn test_descending_config_reverses_list() {
    let config: RenderConfig = toml::from_str("ascending = false").unwrap();
    let mut session = Session::new(config.clone(), Format::Text);
    session.handle_line("move 8").unwrap();

    let text = render_text(&GameView::project(session.game()), &config);
    let first = text.find("Go to move #1").unwrap();
    let start = text.find("Go to game start").unwrap();
    assert!(first < start);
    assert!(text.contains("(Toggle move order to ascending)"));
}

#[test]
fn test_json_frame() {
    let mut session = Session::new(RenderConfig::default(), Format::Json);
    session.handle_line("move 4").unwrap();

    let frame: serde_json::Value = serde_json::from_str(&session.frame().unwrap()).unwrap();
    assert_eq!(frame["board"], "....X....");
    assert_eq!(frame["status"], "Next player: O");
    assert_eq!(frame["verdict"]["kind"], "ongoing");
    assert_eq!(frame["moves"].as_array().unwrap().len(), 2);
}

#[test]
fn test_json_run_keeps_output_json() {
    let mut session = Session::new(RenderConfig::default(), Format::Json);
    let input = Cursor::new("move 4\nbogus\nmove 4\n");
    let mut out = Vec::new();
    session.run(input, &mut out).unwrap();

    let text = String::from_utf8(out).unwrap();
    let values: Vec<serde_json::Value> = serde_json::Deserializer::from_str(&text)
        .into_iter::<serde_json::Value>()
        .collect::<Result<_, _>>()
        .unwrap();

    // Initial frame, frame after the move, error notice, ignored notice, frame.
    assert_eq!(values.len(), 5);
    assert!(values.iter().all(|value| value.is_object()));
    assert_eq!(values[2]["notice"], "error");
    assert!(values[2]["message"].as_str().unwrap().contains("Unknown command: bogus"));
    assert_eq!(values[3]["notice"], "ignored");
    assert_eq!(values[3]["message"], "Square Center is already occupied");
    assert_eq!(values[4]["board"], "....X....");
}
