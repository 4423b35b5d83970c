//! Win detection logic for tic-tac-toe.

use crate::types::{Board, Cell, Player, WIN_COMBOS};
use strum::IntoEnumIterator;

/// Checks if `player` owns all three cells of any winning line.
pub fn check_win(board: &Board, player: Player) -> bool {
    let mark = Cell::Occupied(player);
    WIN_COMBOS
        .iter()
        .any(|combo| combo.iter().all(|&index| board.get(index) == Some(mark)))
}

/// Returns the player with a completed line, X checked first.
pub fn winner(board: &Board) -> Option<Player> {
    Player::iter().find(|&player| check_win(board, player))
}
