//! Implements game-level Othello logic.
//!
//! [`Game`] is the turn loop a presentation layer drives: it owns the board,
//! keeps the legal moves current after every change, resolves forced passes,
//! and detects the end of the game. The lower-level modules can be used
//! directly, but then keeping the move set fresh is the caller's job.

use crate::edges::EdgeMap;
use crate::moves::{apply_move, find_moves, MoveSet};
use crate::status::{evaluate, GameResult, Status};
use crate::undo::UndoManager;
use crate::{Board, Counts, GameError, Player};
use tracing::{debug, trace};

/// What happened as a result of a move, from the point of view of the next turn.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Outcome {
    /// `next` is to move and has at least one legal move.
    Ongoing { next: Player },
    /// `passed` had no legal move, so the turn went to `next`.
    Pass { passed: Player, next: Player },
    /// Neither player can move, or the board is full.
    Complete(GameResult),
}

/// The complete state of an Othello game.
#[derive(Clone, Debug)]
pub struct Game {
    edges: EdgeMap,
    board: Board,
    counts: Counts,
    active_player: Player,
    moves: MoveSet,
    outcome: Outcome,
    undo: UndoManager,
    record: Vec<usize>,
}

impl Default for Game {
    /// A new game on the standard 8×8 board.
    fn default() -> Self {
        Self::from_board(Board::default(), Player::default())
    }
}

impl Game {
    /// Start a new game on an `edge_length`×`edge_length` board, Black to move.
    pub fn new(edge_length: usize) -> Result<Self, GameError> {
        Ok(Self::from_board(Board::new(edge_length)?, Player::default()))
    }

    /// Start a game from an arbitrary position with `active_player` to move.
    /// If that player cannot move the turn passes immediately, and the game
    /// may already be over; check [`Game::outcome`].
    pub fn from_board(board: Board, active_player: Player) -> Self {
        let mut game = Self {
            edges: EdgeMap::new(board.edge_length()),
            counts: board.counts(),
            board,
            active_player,
            moves: MoveSet::default(),
            outcome: Outcome::Ongoing {
                next: active_player,
            },
            undo: UndoManager::default(),
            record: Vec::new(),
        };
        game.outcome = game.settle();
        game
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn edge_length(&self) -> usize {
        self.board.edge_length()
    }

    #[inline]
    pub fn edges(&self) -> &EdgeMap {
        &self.edges
    }

    #[inline]
    pub fn counts(&self) -> Counts {
        self.counts
    }

    #[inline]
    pub fn active_player(&self) -> Player {
        self.active_player
    }

    /// The legal moves of the player to move. Empty once the game is over.
    #[inline]
    pub fn legal_moves(&self) -> &MoveSet {
        &self.moves
    }

    /// The hint: every legal target that flips the most pieces.
    pub fn best_moves(&self) -> Vec<usize> {
        self.moves.best_moves()
    }

    /// Targets played so far, oldest first. Passes are not recorded.
    #[inline]
    pub fn record(&self) -> &[usize] {
        &self.record
    }

    /// The outcome of the most recent state change.
    #[inline]
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.outcome, Outcome::Complete(_))
    }

    /// The final result, once the game is over.
    pub fn result(&self) -> Option<GameResult> {
        match self.outcome {
            Outcome::Complete(result) => Some(result),
            _ => None,
        }
    }

    #[inline]
    pub fn can_undo(&self) -> bool {
        self.undo.is_available()
    }

    /// Play `target` for the active player, then hand the turn over,
    /// passing again if the opponent has nothing to play.
    pub fn select_move(&mut self, target: usize) -> Result<Outcome, GameError> {
        let mv = apply_move(&mut self.board, &mut self.counts, target, &self.moves)?;
        debug!(
            cell = target,
            player = ?mv.player,
            flips = mv.num_flips(),
            "move applied"
        );

        self.undo.record(&mv);
        self.record.push(target);
        self.active_player = !mv.player;
        self.outcome = self.settle();

        debug_assert_eq!(self.counts, self.board.counts());
        Ok(self.outcome)
    }

    /// Take back the most recent move. Only one move can be taken back;
    /// a second call fails until another move is made.
    pub fn undo(&mut self) -> Result<Outcome, GameError> {
        let state = self.undo.reverse(&mut self.board, &mut self.counts)?;
        debug!(cell = state.target, player = ?state.player, "move undone");

        self.record.pop();
        self.active_player = state.player;
        self.refresh_moves();
        self.outcome = Outcome::Ongoing {
            next: self.active_player,
        };

        debug_assert_eq!(self.counts, self.board.counts());
        Ok(self.outcome)
    }

    /// Reset to the starting position for the same board size.
    pub fn restart(&mut self) {
        debug!(edge_length = self.edge_length(), "restarting game");
        *self = Self::from_board(Board::starting(self.edge_length()), Player::default());
    }

    /// Regenerate moves for the active player and resolve passes.
    fn settle(&mut self) -> Outcome {
        self.refresh_moves();

        match evaluate(self.counts, self.board.num_cells(), &self.moves) {
            Status::Ongoing => Outcome::Ongoing {
                next: self.active_player,
            },
            Status::Complete => self.complete(),
            Status::Pass => {
                let passed = self.active_player;
                self.active_player = !passed;
                self.refresh_moves();

                if self.moves.is_empty() {
                    self.complete()
                } else {
                    debug!(player = ?passed, "no legal move, passing");
                    Outcome::Pass {
                        passed,
                        next: self.active_player,
                    }
                }
            }
        }
    }

    fn complete(&mut self) -> Outcome {
        self.moves = MoveSet::default();
        let result = GameResult::from_counts(self.counts);
        debug!(
            black = self.counts.black,
            white = self.counts.white,
            ?result,
            "game complete"
        );
        Outcome::Complete(result)
    }

    fn refresh_moves(&mut self) {
        self.moves = find_moves(&self.board, &self.edges, self.active_player);
        trace!(player = ?self.active_player, moves = self.moves.len(), "legal moves");
    }
}
