//! Exhaustive minimax search for the computer player.
//!
//! The computer plays O and maximizes; X minimizes. Every reachable
//! position is visited: there is no depth limit and no pruning. Scores are
//! depth-independent, so a win in one move and a forced win in three rank
//! the same and ties fall to the lowest cell index.

use crate::COMPUTER;
use crate::rules::check_win;
use crate::types::{Board, Cell, Player};
use std::ops::{Deref, DerefMut};
use tracing::{debug, instrument};

/// Minimax value of a position from the computer's point of view.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    serde::Serialize,
    serde::Deserialize,
    derive_more::Display,
)]
pub enum Score {
    /// X wins under best play.
    #[display("loss")]
    Loss,
    /// Neither side can force a win.
    #[display("draw")]
    Draw,
    /// O wins under best play.
    #[display("win")]
    Win,
}

impl Score {
    /// Numeric value: -1, 0 or 1.
    pub fn value(self) -> i8 {
        match self {
            Score::Loss => -1,
            Score::Draw => 0,
            Score::Win => 1,
        }
    }
}

/// Scores `board` with `maximizing` deciding who moves next.
///
/// `maximizing == true` means the computer (O) is to move.
#[instrument(skip(board), fields(marked = board.marked_count()))]
pub fn minimax(board: &Board, maximizing: bool) -> Score {
    let mut scratch = *board;
    let mut nodes = 0u64;
    let score = search(&mut scratch, maximizing, &mut nodes);
    debug!(nodes, %score, "Minimax search complete");
    score
}

/// Picks the computer's move: the empty cell with the strictly greatest
/// score after placing O there, lowest index first.
///
/// Returns `None` only when the board has no empty cell.
#[instrument(skip(board), fields(marked = board.marked_count()))]
pub fn get_best_move(board: &Board) -> Option<usize> {
    let best = best_scored(&score_moves(board));
    debug!(?best, "Best move selected");
    best.map(|(index, _)| index)
}

/// The first entry with the strictly greatest score.
///
/// Applied to the output of [`score_moves`] this is the same choice
/// [`get_best_move`] makes, without searching again.
pub fn best_scored(scores: &[(usize, Score)]) -> Option<(usize, Score)> {
    let mut best: Option<(usize, Score)> = None;
    for &(index, score) in scores {
        if best.is_none_or(|(_, best_score)| score > best_score) {
            best = Some((index, score));
        }
    }
    best
}

/// Scores every empty cell as O's move, in ascending index order.
#[instrument(skip(board), fields(marked = board.marked_count()))]
pub fn score_moves(board: &Board) -> Vec<(usize, Score)> {
    let mut scratch = *board;
    let mut nodes = 0u64;

    let scores: Vec<(usize, Score)> = board
        .empty_indices()
        .map(|index| {
            let mut placed = Hypothetical::place(&mut scratch, index, COMPUTER);
            (index, search(&mut placed, false, &mut nodes))
        })
        .collect();

    debug!(nodes, candidates = scores.len(), "Scored candidate moves");
    scores
}

fn search(board: &mut Board, maximizing: bool, nodes: &mut u64) -> Score {
    *nodes += 1;

    if check_win(board, COMPUTER) {
        return Score::Win;
    }
    if check_win(board, COMPUTER.opponent()) {
        return Score::Loss;
    }
    if board.is_full() {
        return Score::Draw;
    }

    let mover = if maximizing {
        COMPUTER
    } else {
        COMPUTER.opponent()
    };
    let mut best = if maximizing { Score::Loss } else { Score::Win };

    for index in 0..board.cells().len() {
        if !board.is_empty(index) {
            continue;
        }
        let score = {
            let mut placed = Hypothetical::place(board, index, mover);
            search(&mut placed, !maximizing, nodes)
        };
        best = if maximizing {
            best.max(score)
        } else {
            best.min(score)
        };
    }

    best
}

/// A mark placed for the duration of one search branch.
///
/// Dropping the guard clears the cell again, whichever way the branch
/// returns.
struct Hypothetical<'a> {
    board: &'a mut Board,
    index: usize,
}

impl<'a> Hypothetical<'a> {
    fn place(board: &'a mut Board, index: usize, player: Player) -> Self {
        debug_assert!(board.is_empty(index));
        board.set(index, Cell::Occupied(player));
        Self { board, index }
    }
}

impl Deref for Hypothetical<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for Hypothetical<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for Hypothetical<'_> {
    fn drop(&mut self) {
        self.board.set(self.index, Cell::Empty);
    }
}
