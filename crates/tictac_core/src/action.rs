//! First-class move records.

use crate::types::Player;
use serde::{Deserialize, Serialize};

/// A player placing their mark at a cell index.
///
/// Every accepted move is kept in the game history in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The cell index (0-8) where the mark goes.
    pub index: usize,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, index: usize) -> Self {
        Self { player, index }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> cell {}", self.player, self.index + 1)
    }
}
