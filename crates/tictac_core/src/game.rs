//! Game session: board, turn, liveness and opponent mode.

use crate::action::Move;
use crate::engine::get_best_move;
use crate::error::{InvalidMove, InvalidMoveReason};
use crate::rules::check_win;
use crate::types::{Board, CELL_COUNT, Cell, Player};
use crate::{COMPUTER, FIRST_PLAYER};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing with the given player to move.
    InProgress(Player),
    /// Game ended in a win.
    Won(Player),
    /// Game ended in a draw.
    Draw,
}

impl GameStatus {
    /// True once the game is won or drawn.
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress(_))
    }
}

/// Who plays O.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, derive_more::Display,
)]
pub enum Mode {
    /// Two people share the board.
    #[default]
    #[display("human vs human")]
    HumanVsHuman,
    /// The computer answers every X move.
    #[display("human vs computer")]
    HumanVsComputer,
}

impl Mode {
    /// Maps the "play against computer" switch to a mode.
    pub fn from_vs_computer(vs_computer: bool) -> Self {
        if vs_computer {
            Mode::HumanVsComputer
        } else {
            Mode::HumanVsHuman
        }
    }

    /// Returns the other mode.
    pub fn toggle(self) -> Self {
        match self {
            Mode::HumanVsHuman => Mode::HumanVsComputer,
            Mode::HumanVsComputer => Mode::HumanVsHuman,
        }
    }
}

/// One game of tic-tac-toe, owned by whoever drives it.
///
/// The board changes exactly once per accepted move. Rejected moves leave
/// every field as it was.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    status: GameStatus,
    mode: Mode,
    history: Vec<Move>,
}

impl Game {
    /// Creates a fresh game with X to move.
    #[instrument]
    pub fn new(mode: Mode) -> Self {
        info!(%mode, "Starting new game");
        Self {
            board: Board::new(),
            status: GameStatus::InProgress(FIRST_PLAYER),
            mode,
            history: Vec::new(),
        }
    }

    /// Clears the board and gives X the move. The mode is kept.
    #[instrument(skip(self), fields(mode = %self.mode))]
    pub fn reset(&mut self) {
        info!("Resetting game");
        self.board = Board::new();
        self.status = GameStatus::InProgress(FIRST_PLAYER);
        self.history.clear();
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the player to move, or `None` once the game is over.
    pub fn mover(&self) -> Option<Player> {
        match self.status {
            GameStatus::InProgress(player) => Some(player),
            GameStatus::Won(_) | GameStatus::Draw => None,
        }
    }

    /// True while moves are accepted.
    pub fn is_active(&self) -> bool {
        !self.status.is_terminal()
    }

    /// True iff no empty cells remain.
    pub fn is_full(&self) -> bool {
        self.board.is_full()
    }

    /// Whether a click on `index` should be accepted right now.
    pub fn is_selectable(&self, index: usize) -> bool {
        self.is_active() && self.board.is_empty(index)
    }

    /// Accepted moves, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the opponent mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Switches opponent mode and starts over.
    #[instrument(skip(self))]
    pub fn set_mode(&mut self, mode: Mode) {
        info!(from = %self.mode, to = %mode, "Changing mode");
        self.mode = mode;
        self.reset();
    }

    /// Flips between human and computer opponent and starts over.
    pub fn toggle_mode(&mut self) {
        self.set_mode(self.mode.toggle());
    }

    /// True when the computer should be asked for a move.
    pub fn computer_to_move(&self) -> bool {
        self.mode == Mode::HumanVsComputer && self.status == GameStatus::InProgress(COMPUTER)
    }

    /// Places `player`'s mark at `index` and advances the turn.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidMove`] if the game is over, `index` is outside 0-8,
    /// the cell is taken, or `player` is not the mover. The game is left
    /// unchanged.
    #[instrument(skip(self))]
    pub fn apply_move(&mut self, index: usize, player: Player) -> Result<&Board, InvalidMove> {
        if let Err(err) = self.validate(index, player) {
            warn!(%err, "Rejected move");
            return Err(err);
        }

        self.board.set(index, Cell::Occupied(player));
        self.history.push(Move::new(player, index));

        self.status = if check_win(&self.board, player) {
            GameStatus::Won(player)
        } else if self.board.is_full() {
            GameStatus::Draw
        } else {
            GameStatus::InProgress(player.opponent())
        };

        debug!(status = ?self.status, "Move applied");
        if self.status.is_terminal() {
            info!(status = ?self.status, moves = self.history.len(), "Game over");
        }
        Ok(&self.board)
    }

    /// Computes and plays the computer's move.
    ///
    /// Returns the index played, or `None` if the board had no empty cell.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidMove`] if the game is over or it is not O's turn.
    #[instrument(skip(self))]
    pub fn request_computer_move(&mut self) -> Result<Option<usize>, InvalidMove> {
        match self.status {
            GameStatus::InProgress(player) if player == COMPUTER => {}
            GameStatus::InProgress(_) => {
                return Err(InvalidMove::untimely(InvalidMoveReason::OutOfTurn));
            }
            GameStatus::Won(_) | GameStatus::Draw => {
                return Err(InvalidMove::untimely(InvalidMoveReason::GameOver));
            }
        }

        let Some(index) = get_best_move(&self.board) else {
            debug!("No empty cell for the computer");
            return Ok(None);
        };
        self.apply_move(index, COMPUTER)?;
        info!(index, "Computer moved");
        Ok(Some(index))
    }

    /// Plays the mover's mark at `index`, then answers immediately with the
    /// computer's move if it is due.
    ///
    /// For callers with no pacing delay between the two.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidMove`] under the same conditions as
    /// [`Game::apply_move`].
    #[instrument(skip(self))]
    pub fn play_turn(&mut self, index: usize) -> Result<GameStatus, InvalidMove> {
        let player = self
            .mover()
            .ok_or(InvalidMove::at(index, InvalidMoveReason::GameOver))?;
        self.apply_move(index, player)?;
        if self.computer_to_move() {
            self.request_computer_move()?;
        }
        Ok(self.status)
    }

    fn validate(&self, index: usize, player: Player) -> Result<(), InvalidMove> {
        let reason = match self.status {
            GameStatus::Won(_) | GameStatus::Draw => Some(InvalidMoveReason::GameOver),
            _ if index >= CELL_COUNT => Some(InvalidMoveReason::OutOfRange),
            _ if !self.board.is_empty(index) => Some(InvalidMoveReason::Occupied),
            GameStatus::InProgress(mover) if mover != player => Some(InvalidMoveReason::OutOfTurn),
            GameStatus::InProgress(_) => None,
        };
        match reason {
            Some(reason) => Err(InvalidMove::at(index, reason)),
            None => Ok(()),
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(Mode::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_starts_with_x() {
        let game = Game::default();
        assert_eq!(game.status(), GameStatus::InProgress(Player::X));
        assert_eq!(game.mover(), Some(Player::X));
        assert_eq!(game.mode(), Mode::HumanVsHuman);
        assert!(game.history().is_empty());
    }

    #[test]
    fn test_turns_alternate() {
        let mut game = Game::default();
        game.apply_move(4, Player::X).unwrap();
        assert_eq!(game.mover(), Some(Player::O));
        game.apply_move(0, Player::O).unwrap();
        assert_eq!(game.mover(), Some(Player::X));
        assert_eq!(
            game.history(),
            &[Move::new(Player::X, 4), Move::new(Player::O, 0)]
        );
    }

    #[test]
    fn test_selectable_cells() {
        let mut game = Game::default();
        assert!(game.is_selectable(0));
        game.apply_move(0, Player::X).unwrap();
        assert!(!game.is_selectable(0));
        assert!(!game.is_selectable(9));
    }

    #[test]
    fn test_request_computer_move_on_x_turn_is_rejected() {
        let mut game = Game::new(Mode::HumanVsComputer);
        let err = game.request_computer_move().unwrap_err();
        assert_eq!(err.reason, InvalidMoveReason::OutOfTurn);
        assert_eq!(game.board(), &Board::new());
    }

    #[test]
    fn test_mode_toggle_resets() {
        let mut game = Game::default();
        game.apply_move(4, Player::X).unwrap();
        game.toggle_mode();
        assert_eq!(game.mode(), Mode::HumanVsComputer);
        assert_eq!(game.board(), &Board::new());
        assert_eq!(game.mover(), Some(Player::X));
    }
}
