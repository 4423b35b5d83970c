//! Terminal UI for tictac.

mod app;
mod input;
mod ui;

pub use app::App;
pub use input::{Action, action_for, move_cursor};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::DefaultTerminal;
use std::time::{Duration, Instant};
use tictac_core::Mode;
use tracing::{error, info, instrument};

use crate::settings::Settings;

/// Longest wait for input before redrawing.
const IDLE_POLL: Duration = Duration::from_millis(250);

/// Runs the interactive game until the user quits.
#[instrument(skip(settings))]
pub fn run(settings: &Settings) -> Result<()> {
    info!("Starting tictac TUI");

    let mode = Mode::from_vs_computer(*settings.vs_computer());
    let delay = Duration::from_millis(*settings.computer_delay_ms());
    let mut app = App::new(mode, delay);

    let mut terminal = ratatui::try_init()?;
    let res = run_loop(&mut terminal, &mut app);
    ratatui::restore();

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

fn run_loop(terminal: &mut DefaultTerminal, app: &mut App) -> Result<()> {
    while !app.should_quit() {
        terminal.draw(|frame| ui::draw(frame, app))?;

        let timeout = app.poll_timeout(Instant::now(), IDLE_POLL);
        if event::poll(timeout)?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && let Some(action) = action_for(key.code)
        {
            app.handle(action, Instant::now());
        }

        app.tick(Instant::now());
    }
    Ok(())
}
