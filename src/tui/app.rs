//! Application state and logic.

use std::time::{Duration, Instant};
use tictac_core::{COMPUTER, Game, GameStatus, Mode, Player};
use tracing::{debug, info, instrument, warn};

use super::input::{Action, move_cursor};

/// Main application state.
///
/// Owns the game and the computer's pending move. While a computer move is
/// scheduled, cell selection is ignored so only one side touches the board.
#[derive(Debug)]
pub struct App {
    game: Game,
    cursor: usize,
    computer_delay: Duration,
    computer_due: Option<Instant>,
    should_quit: bool,
}

impl App {
    /// Creates a new application.
    #[instrument]
    pub fn new(mode: Mode, computer_delay: Duration) -> Self {
        Self {
            game: Game::new(mode),
            cursor: 4,
            computer_delay,
            computer_due: None,
            should_quit: false,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Cell under the cursor.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// True once the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// True while the computer's move is scheduled.
    pub fn computer_pending(&self) -> bool {
        self.computer_due.is_some()
    }

    /// Applies a user action at time `now`.
    #[instrument(skip(self, now))]
    pub fn handle(&mut self, action: Action, now: Instant) {
        match action {
            Action::Cursor(key) => self.cursor = move_cursor(self.cursor, key),
            Action::PlaceAtCursor => self.select(self.cursor, now),
            Action::Place(index) => {
                self.cursor = index;
                self.select(index, now);
            }
            Action::Restart => self.restart(),
            Action::ToggleMode => {
                self.game.toggle_mode();
                self.computer_due = None;
            }
            Action::Quit => {
                info!("User quit");
                self.should_quit = true;
            }
        }
    }

    /// Plays the mover's mark at `index` and schedules the computer's reply.
    pub fn select(&mut self, index: usize, now: Instant) {
        if self.computer_pending() {
            debug!(index, "Ignoring input while the computer is thinking");
            return;
        }
        let Some(player) = self.game.mover() else {
            debug!(index, "Ignoring input after game over");
            return;
        };
        if !self.game.is_selectable(index) {
            debug!(index, "Cell not selectable");
            return;
        }

        if let Err(err) = self.game.apply_move(index, player) {
            warn!(%err, "Move rejected");
            return;
        }
        if self.game.computer_to_move() {
            debug!(delay_ms = self.computer_delay.as_millis() as u64, "Scheduling computer move");
            self.computer_due = Some(now + self.computer_delay);
        }
    }

    /// Plays the computer's move once its delay has passed.
    pub fn tick(&mut self, now: Instant) {
        let Some(due) = self.computer_due else {
            return;
        };
        if now < due {
            return;
        }
        self.computer_due = None;
        match self.game.request_computer_move() {
            Ok(Some(index)) => self.cursor = index,
            Ok(None) => debug!("Computer had no move"),
            Err(err) => warn!(%err, "Computer move rejected"),
        }
    }

    /// How long the event loop may block waiting for input.
    pub fn poll_timeout(&self, now: Instant, idle: Duration) -> Duration {
        match self.computer_due {
            Some(due) => due.saturating_duration_since(now).min(idle),
            None => idle,
        }
    }

    /// Restarts the game in the same mode.
    pub fn restart(&mut self) {
        debug!("Restarting game");
        self.game.reset();
        self.computer_due = None;
    }

    /// Status line in the original game's wording.
    pub fn status_text(&self) -> String {
        let vs_computer = self.game.mode() == Mode::HumanVsComputer;
        match self.game.status() {
            GameStatus::InProgress(player) if vs_computer && player == COMPUTER => {
                "Computer's turn".to_string()
            }
            GameStatus::InProgress(player) => format!("Player {}'s turn", player),
            GameStatus::Won(player) if vs_computer && player == COMPUTER => {
                "Computer wins!".to_string()
            }
            GameStatus::Won(player) => format!("Player {} wins!", player),
            GameStatus::Draw => "It's a draw!".to_string(),
        }
    }

    /// Key help shown under the board.
    pub fn help_text(&self) -> String {
        let opponent = match self.game.mode() {
            Mode::HumanVsHuman => "off",
            Mode::HumanVsComputer => "on",
        };
        format!(
            "Arrows/Enter or 1-9 to move | c: computer {} | r: restart | q: quit",
            opponent
        )
    }

    /// Label for the cell at `index`, if marked.
    pub fn mark_at(&self, index: usize) -> Option<Player> {
        self.game.board().get(index).and_then(|cell| cell.player())
    }
}
