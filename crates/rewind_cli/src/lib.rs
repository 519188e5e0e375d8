//! Rewind command-line front end
//!
//! Renders [`rewind_tictactoe`] games as text or JSON and feeds them text
//! intents, either from the command line or line by line from stdin.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod render;
mod session;

pub use config::{ConfigError, DEFAULT_CONFIG_FILE, RenderConfig};
pub use render::{Format, render, render_json, render_text};
pub use session::Session;
