//! Game rules for tic-tac-toe.
//!
//! Pure functions over board contents. They hold no state, so the game
//! session and the minimax search share them.

mod draw;
mod win;

pub use draw::is_draw;
pub use win::{check_win, winner};
