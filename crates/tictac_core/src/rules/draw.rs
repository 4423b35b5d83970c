//! Draw detection logic for tic-tac-toe.

use super::win::check_win;
use crate::types::{Board, Player};

/// A full board on which neither player has a line.
///
/// Wins are checked first: a last move that fills the board and completes
/// a line is a win, not a draw.
pub fn is_draw(board: &Board) -> bool {
    !check_win(board, Player::X) && !check_win(board, Player::O) && board.is_full()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_not_draw() {
        assert!(!is_draw(&Board::new()));
    }

    #[test]
    fn test_partial_board_not_draw() {
        let board: Board = "XOX/OX./...".parse().unwrap();
        assert!(!board.is_full());
        assert!(!is_draw(&board));
    }

    #[test]
    fn test_draw_detection() {
        // X O X / O X X / O X O
        let board: Board = "XOX/OXX/OXO".parse().unwrap();
        assert!(board.is_full());
        assert!(is_draw(&board));
    }

    #[test]
    fn test_not_draw_if_full_board_has_winner() {
        // X completes the main diagonal with the ninth mark
        let board: Board = "XOX/OXO/OXX".parse().unwrap();
        assert!(board.is_full());
        assert!(check_win(&board, Player::X));
        assert!(!is_draw(&board));
    }
}
