//! Classifying a position as ongoing, a forced pass, or finished.

use crate::moves::MoveSet;
use crate::{Counts, Player};

/// The state of play for the player to move.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Status {
    /// The player to move has at least one legal move.
    Ongoing,
    /// The player to move has no legal move and must hand the turn over.
    Pass,
    /// The board is full.
    Complete,
}

/// The final result of a finished game.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum GameResult {
    Winner(Player),
    Draw,
}

impl GameResult {
    /// The player with more pieces wins; equal counts are a draw.
    pub fn from_counts(counts: Counts) -> Self {
        match counts.black.cmp(&counts.white) {
            std::cmp::Ordering::Greater => GameResult::Winner(Player::Black),
            std::cmp::Ordering::Less => GameResult::Winner(Player::White),
            std::cmp::Ordering::Equal => GameResult::Draw,
        }
    }

    pub fn winner(self) -> Option<Player> {
        match self {
            GameResult::Winner(player) => Some(player),
            GameResult::Draw => None,
        }
    }
}

/// Evaluate a position on a board of `num_cells` cells from the piece counts and
/// the legal moves of the player to move.
///
/// A [`Status::Pass`] is only half an answer: the caller must switch players,
/// regenerate moves and evaluate again. If the opponent has no moves either,
/// the game is over.
pub fn evaluate(counts: Counts, num_cells: usize, moves: &MoveSet) -> Status {
    if counts.total() == num_cells {
        Status::Complete
    } else if moves.is_empty() {
        Status::Pass
    } else {
        Status::Ongoing
    }
}
