//! Tic-tac-toe core: board state, turn management and a minimax opponent.
//!
//! # Architecture
//!
//! - **Types**: [`Player`], [`Cell`], [`Board`] and the static [`WIN_COMBOS`]
//! - **Rules**: pure terminal checks ([`check_win`], [`is_draw`])
//! - **Engine**: exhaustive minimax ([`minimax`], [`get_best_move`],
//!   [`score_moves`])
//! - **Game**: the session object that owns a board, whose turn it is and
//!   the play-against-computer mode
//!
//! # Example
//!
//! ```
//! use tictac_core::{Game, GameStatus, Mode, Player};
//!
//! let mut game = Game::new(Mode::HumanVsComputer);
//! game.apply_move(4, Player::X)?;
//! assert!(game.computer_to_move());
//!
//! let reply = game.request_computer_move()?;
//! assert!(reply.is_some());
//! assert_eq!(game.status(), GameStatus::InProgress(Player::X));
//! # Ok::<(), tictac_core::InvalidMove>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod engine;
mod error;
mod game;
mod rules;
mod types;

pub use action::Move;
pub use engine::{Score, best_scored, get_best_move, minimax, score_moves};
pub use error::{InvalidMove, InvalidMoveReason, ParseBoardError};
pub use game::{Game, GameStatus, Mode};
pub use rules::{check_win, is_draw, winner};
pub use types::{Board, CELL_COUNT, Cell, Player, WIN_COMBOS};

/// The player the computer controls in [`Mode::HumanVsComputer`].
pub const COMPUTER: Player = Player::O;

/// The player who always moves first.
pub const FIRST_PLAYER: Player = Player::X;
