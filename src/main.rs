//! Tictac - unified CLI

use anyhow::{Context, Result};
use clap::Parser;
use tictac::{Analysis, Cli, Command, Settings};
use tictac_core::Board;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let settings = Settings::load(cli.config.as_deref())?;

    let vs_computer = cli.command.vs_computer_override();

    match cli.command {
        Command::Play { delay_ms, .. } => {
            let mut settings = settings;
            if let Some(vs_computer) = vs_computer {
                settings = settings.with_vs_computer(vs_computer);
            }
            if let Some(delay_ms) = delay_ms {
                settings = settings.with_computer_delay_ms(delay_ms);
            }
            init_file_logging(&settings)?;
            tictac::tui::run(&settings)
        }
        Command::Analyze { board } => {
            init_stderr_logging(&settings);
            let board: Board = board.parse().context("Invalid board notation")?;
            info!(%board, "Analyzing position");
            println!("{}", Analysis::of(board)?);
            Ok(())
        }
    }
}

fn env_filter(settings: &Settings) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(settings.log_level()))
}

/// Logs to a file so output does not tear the TUI.
fn init_file_logging(settings: &Settings) -> Result<()> {
    let log_file = std::fs::File::create(settings.log_file())
        .with_context(|| format!("Failed to create log file {}", settings.log_file().display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(settings))
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

fn init_stderr_logging(settings: &Settings) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(settings))
        .with_writer(std::io::stderr)
        .try_init();
}
