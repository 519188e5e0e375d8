//! Interactive session: one game, one config, text in, frames out.

use crate::config::RenderConfig;
use crate::render::{Format, render};
use anyhow::Result;
use rewind_tictactoe::{GameState, GameView, Intent, IntentError, Transition};
use serde::Serialize;
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument, warn};

/// Words that end [`Session::run`].
const QUIT_WORDS: [&str; 3] = ["quit", "exit", "q"];

/// Kind of a non-frame message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
enum Notice {
    /// A well-formed intent that left the game untouched.
    Ignored,
    /// A line that did not parse as an intent.
    Error,
}

#[derive(Serialize)]
struct NoticeFrame<'a> {
    notice: Notice,
    message: &'a str,
}

/// A single game driven by text intents.
#[derive(Debug, Clone)]
pub struct Session {
    game: GameState,
    config: RenderConfig,
    format: Format,
}

impl Session {
    /// Creates a session whose move list starts in the configured order.
    #[instrument(skip(config))]
    pub fn new(config: RenderConfig, format: Format) -> Self {
        Self {
            game: GameState::with_move_order(*config.ascending()),
            config,
            format,
        }
    }

    /// The game being played.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Parses and dispatches one line of input.
    #[instrument(skip(self))]
    pub fn handle_line(&mut self, line: &str) -> Result<Transition, IntentError> {
        let intent: Intent = line.parse()?;
        let transition = self.game.dispatch(intent);
        match transition {
            Transition::Applied => debug!(%intent, "Intent applied"),
            Transition::Ignored(reason) => info!(%intent, %reason, "Intent ignored"),
        }
        Ok(transition)
    }

    /// Renders the current frame.
    pub fn frame(&self) -> Result<String> {
        Ok(render(&GameView::project(&self.game), &self.config, self.format)?)
    }

    /// Applies every intent, writing a frame after each one when `each` is
    /// set and always after the last. Stops at the first unparseable intent.
    #[instrument(skip(self, intents, out))]
    pub fn replay<I, S>(&mut self, intents: I, each: bool, out: &mut impl Write) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for intent in intents {
            self.handle_line(intent.as_ref())?;
            if each {
                writeln!(out, "{}", self.frame()?)?;
            }
        }
        if !each {
            writeln!(out, "{}", self.frame()?)?;
        }
        Ok(())
    }

    /// Formats a message that is not a frame, in the session's format.
    ///
    /// JSON notices are single-line objects so the output stays one JSON
    /// value per line or frame.
    fn notice(&self, kind: Notice, message: &str) -> Result<String> {
        Ok(match self.format {
            Format::Text => match kind {
                Notice::Ignored => format!("Ignored: {}", message),
                Notice::Error => message.to_string(),
            },
            Format::Json => serde_json::to_string(&NoticeFrame { notice: kind, message })?,
        })
    }

    /// Reads intents line by line until EOF or a quit word.
    ///
    /// Blank lines are skipped; bad lines are reported on `out` and the
    /// session carries on.
    #[instrument(skip_all)]
    pub fn run(&mut self, input: impl BufRead, out: &mut impl Write) -> Result<()> {
        writeln!(out, "{}", self.frame()?)?;

        for line in input.lines() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            if QUIT_WORDS.contains(&line.to_lowercase().as_str()) {
                info!("Session ended by user");
                break;
            }

            match self.handle_line(line) {
                Ok(Transition::Ignored(reason)) => {
                    writeln!(out, "{}", self.notice(Notice::Ignored, &reason.to_string())?)?
                }
                Ok(Transition::Applied) => {}
                Err(e) => {
                    warn!(error = %e, "Bad input");
                    writeln!(out, "{}", self.notice(Notice::Error, &e.message)?)?;
                    continue;
                }
            }
            writeln!(out, "{}", self.frame()?)?;
        }
        Ok(())
    }
}
