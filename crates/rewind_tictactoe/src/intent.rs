//! Presentation intents.
//!
//! The three things a front end can ask of the game, plus a parser for the
//! short text commands the command-line front end accepts:
//!
//! | command | intent |
//! |---------|--------|
//! | `move 4`, `m center`, `place top-left` | [`Intent::Place`] |
//! | `jump 2`, `j 0`, `goto 3` | [`Intent::JumpTo`] |
//! | `toggle`, `t` | [`Intent::ToggleOrder`] |

use crate::Position;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// An input dispatched from the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Intent {
    /// Click on a board square.
    #[display("move {}", _0)]
    Place(Position),
    /// Click on a history entry.
    #[display("jump {}", _0)]
    JumpTo(usize),
    /// Click on the move-order toggle.
    #[display("toggle")]
    ToggleOrder,
}

/// Error parsing an intent from text.
#[derive(Debug, Clone, Display, Error)]
#[display("Intent error: {} at {}:{}", message, file, line)]
pub struct IntentError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl IntentError {
    /// Creates a new intent error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl FromStr for Intent {
    type Err = IntentError;

    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (verb, arg) = match s.split_once(char::is_whitespace) {
            Some((verb, arg)) => (verb, arg.trim()),
            None => (s, ""),
        };

        match verb.to_lowercase().as_str() {
            "move" | "m" | "place" => {
                if arg.is_empty() {
                    return Err(IntentError::new("Missing position for move"));
                }
                Position::from_label_or_number(arg)
                    .map(Intent::Place)
                    .ok_or_else(|| IntentError::new(format!("Unknown position: {}", arg)))
            }
            "jump" | "j" | "goto" => arg
                .parse::<usize>()
                .map(Intent::JumpTo)
                .map_err(|e| IntentError::new(format!("Invalid step {:?}: {}", arg, e))),
            "toggle" | "t" if arg.is_empty() => Ok(Intent::ToggleOrder),
            "" => Err(IntentError::new("Empty command")),
            _ => Err(IntentError::new(format!("Unknown command: {}", s))),
        }
    }
}
