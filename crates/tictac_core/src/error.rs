//! Error types for the tic-tac-toe core.

use derive_more::{Display, Error};

/// Why a move was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum InvalidMoveReason {
    /// Index outside 0-8.
    #[display("index out of range (must be 0-8)")]
    OutOfRange,
    /// The cell already holds a mark.
    #[display("cell is already occupied")]
    Occupied,
    /// The game has already been won or drawn.
    #[display("game is already over")]
    GameOver,
    /// The player is not the current mover.
    #[display("not this player's turn")]
    OutOfTurn,
}

/// A move the caller should never have offered.
///
/// The front-end only makes empty cells of a live game selectable, so this
/// signals a broken contract rather than a player mistake.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub struct InvalidMove {
    /// The requested cell index, absent when the computer was asked to
    /// move out of turn.
    pub index: Option<usize>,
    /// What was wrong with it.
    pub reason: InvalidMoveReason,
}

impl InvalidMove {
    /// Creates an error for a move at `index`.
    pub fn at(index: usize, reason: InvalidMoveReason) -> Self {
        Self {
            index: Some(index),
            reason,
        }
    }

    /// Creates an error for a computer move requested at the wrong time.
    pub fn untimely(reason: InvalidMoveReason) -> Self {
        Self { index: None, reason }
    }
}

impl std::fmt::Display for InvalidMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.index {
            Some(index) => write!(f, "Invalid move at cell {}: {}", index, self.reason),
            None => write!(f, "Invalid computer move: {}", self.reason),
        }
    }
}

/// Board notation that could not be parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum ParseBoardError {
    /// A character that is not a mark or an empty-cell symbol.
    #[display("unexpected character {:?} in board", _0)]
    BadCharacter(#[error(not(source))] char),
    /// The notation did not describe exactly nine cells.
    #[display("expected 9 cells, found {}", _0)]
    WrongCellCount(#[error(not(source))] usize),
}
