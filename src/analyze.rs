//! One-shot position analysis for the `analyze` command.

use derive_more::{Display, Error};
use tictac_core::{Board, COMPUTER, Player, Score, best_scored, is_draw, score_moves, winner};
use tracing::{debug, instrument};

/// Mark counts no game can reach: X moves first, so X holds as many marks
/// as O or one more.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Impossible position: {x} X marks and {o} O marks (X moves first)")]
pub struct ImpossiblePosition {
    /// Cells marked X.
    pub x: usize,
    /// Cells marked O.
    pub o: usize,
}

/// What the engine makes of a position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Analysis {
    board: Board,
    winner: Option<Player>,
    draw: bool,
    to_move: Option<Player>,
    scores: Vec<(usize, Score)>,
    best: Option<usize>,
}

impl Analysis {
    /// Evaluates `board`. Only open positions with O to move are searched.
    ///
    /// # Errors
    ///
    /// Returns [`ImpossiblePosition`] when the mark counts cannot arise in
    /// play.
    #[instrument(skip(board))]
    pub fn of(board: Board) -> Result<Self, ImpossiblePosition> {
        let x = board.count(Player::X);
        let o = board.count(Player::O);
        let mover = match x.checked_sub(o) {
            Some(0) => Player::X,
            Some(1) => Player::O,
            _ => return Err(ImpossiblePosition { x, o }),
        };

        let winner = winner(&board);
        let draw = is_draw(&board);
        let to_move = (winner.is_none() && !draw).then_some(mover);

        let scores = if to_move == Some(COMPUTER) {
            score_moves(&board)
        } else {
            Vec::new()
        };
        let best = best_scored(&scores).map(|(index, _)| index);
        debug!(?to_move, ?best, "Position analyzed");

        Ok(Self {
            board,
            winner,
            draw,
            to_move,
            scores,
            best,
        })
    }

    /// O's chosen cell (0-8), if O is to move in an open game.
    pub fn best(&self) -> Option<usize> {
        self.best
    }

    /// Score of each empty cell as O's move.
    pub fn scores(&self) -> &[(usize, Score)] {
        &self.scores
    }

    /// The player to move, or `None` once the game is over.
    pub fn to_move(&self) -> Option<Player> {
        self.to_move
    }
}

impl std::fmt::Display for Analysis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.board)?;
        writeln!(f)?;
        if let Some(player) = self.winner {
            return write!(f, "Player {} has already won.", player);
        }
        if self.draw {
            return write!(f, "The game is a draw.");
        }
        if self.to_move != Some(COMPUTER) {
            return write!(f, "Player X to move; the computer only plays O.");
        }
        for (index, score) in &self.scores {
            writeln!(f, "cell {}: {}", index + 1, score)?;
        }
        match self.best {
            Some(index) => write!(f, "Computer plays cell {}.", index + 1),
            None => write!(f, "No move available."),
        }
    }
}
