//! Single-step undo.
//!
//! Only the most recent move is kept. Recording a move overwrites it, and
//! reversing consumes it, so two undos in a row always fail the second time.

use crate::moves::Move;
use crate::{Board, Cell, Counts, GameError, Player};

/// What is needed to take back one move.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UndoState {
    pub target: usize,
    pub flips: Vec<usize>,
    /// The player who made the move.
    pub player: Player,
}

#[derive(Clone, Debug, Default)]
pub struct UndoManager {
    last: Option<UndoState>,
}

impl UndoManager {
    /// Remember `mv` as the move to reverse, replacing anything stored before.
    pub fn record(&mut self, mv: &Move) {
        self.last = Some(UndoState {
            target: mv.target,
            flips: mv.flips.clone(),
            player: mv.player,
        });
    }

    pub fn clear(&mut self) {
        self.last = None;
    }

    #[inline]
    pub fn is_available(&self) -> bool {
        self.last.is_some()
    }

    pub fn last(&self) -> Option<&UndoState> {
        self.last.as_ref()
    }

    /// Take back the recorded move: empty its target, hand its flips back to
    /// the opponent and restore `counts`. Returns the reversed move; the
    /// player to move becomes its `player`.
    pub fn reverse(
        &mut self,
        board: &mut Board,
        counts: &mut Counts,
    ) -> Result<UndoState, GameError> {
        let state = self.last.take().ok_or(GameError::NoUndoAvailable)?;

        let opponent = !state.player;
        board.set(state.target, Cell::Empty);
        for &index in &state.flips {
            board.set(index, Cell::from(opponent));
        }
        counts.remove(state.player, 1 + state.flips.len());
        counts.add(opponent, state.flips.len());

        Ok(state)
    }
}
