//! Tictac - terminal tic-tac-toe with a minimax opponent
//!
//! The game rules and the computer player live in [`tictac_core`]; this
//! crate is the front-end that drives them.
//!
//! # Architecture
//!
//! - **Cli**: `play` and `analyze` commands
//! - **Settings**: TOML preferences with command-line overrides
//! - **Tui**: ratatui board, key handling and the paced computer reply
//! - **Analyze**: one-shot evaluation of a position

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod analyze;
mod cli;
mod settings;
pub mod tui;

pub use analyze::{Analysis, ImpossiblePosition};
pub use cli::{Cli, Command};
pub use settings::{DEFAULT_SETTINGS_FILE, Settings, SettingsError};
