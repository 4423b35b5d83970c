//! Command-line interface for tictac.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tictac - tic-tac-toe against a friend or an unbeatable computer
#[derive(Parser, Debug)]
#[command(name = "tictac")]
#[command(about = "Terminal tic-tac-toe with a minimax opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Settings file (TOML). Defaults to tictac.toml when present.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal
    Play {
        /// Let the computer play O
        #[arg(long, conflicts_with = "vs_human")]
        vs_computer: bool,

        /// Two people share the board, whatever the settings file says
        #[arg(long)]
        vs_human: bool,

        /// Pause before the computer answers, in milliseconds
        #[arg(long)]
        delay_ms: Option<u64>,
    },

    /// Print the computer's choice for a position where O is to move
    Analyze {
        /// Nine cells, e.g. "XX./OO./..." (X, O, and . _ - or space for empty)
        board: String,
    },
}

impl Command {
    /// The opponent chosen on the command line, if any: `Some(true)` for
    /// the computer, `Some(false)` for a human.
    pub fn vs_computer_override(&self) -> Option<bool> {
        match self {
            Command::Play {
                vs_computer: true, ..
            } => Some(true),
            Command::Play { vs_human: true, .. } => Some(false),
            Command::Play { .. } | Command::Analyze { .. } => None,
        }
    }
}
