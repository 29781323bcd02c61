//! Legal-move generation and move application.
//!
//! Moves are found by walking outward from every piece the active player
//! owns: a straight run of opponent pieces that ends on an empty cell makes
//! that empty cell a legal target, and the run is what the move flips.
//! Targets reached along several lines flip the union of all their runs.

use crate::edges::{Direction, EdgeMap};
use crate::{Board, Cell, Counts, GameError, Player};
use itertools::Itertools;
use std::collections::BTreeMap;

/// A legal placement and every opponent piece it captures.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Move {
    pub target: usize,
    pub player: Player,
    /// Captured cells in ascending order, without duplicates. Never empty.
    pub flips: Vec<usize>,
}

impl Move {
    #[inline]
    pub fn num_flips(&self) -> usize {
        self.flips.len()
    }

    /// Place the piece and flip the captured run onto `board`, unchecked.
    pub fn play(&self, board: &mut Board) {
        let piece = Cell::from(self.player);
        board.set(self.target, piece);
        for &index in &self.flips {
            board.set(index, piece);
        }
    }

    fn merge(&mut self, run: Vec<usize>) {
        self.flips.extend(run);
        self.flips.sort_unstable();
        self.flips.dedup();
    }
}

/// Every legal move for one player, keyed by target cell.
/// Iterates in ascending target order.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct MoveSet {
    moves: BTreeMap<usize, Move>,
}

impl MoveSet {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    #[inline]
    pub fn contains(&self, target: usize) -> bool {
        self.moves.contains_key(&target)
    }

    #[inline]
    pub fn get(&self, target: usize) -> Option<&Move> {
        self.moves.get(&target)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Move> + '_ {
        self.moves.values()
    }

    pub fn targets(&self) -> impl Iterator<Item = usize> + '_ {
        self.moves.keys().copied()
    }

    /// The targets that flip the most pieces. Ties are all returned, in ascending order.
    pub fn best_moves(&self) -> Vec<usize> {
        self.moves
            .values()
            .max_set_by_key(|mv| mv.num_flips())
            .into_iter()
            .map(|mv| mv.target)
            .collect()
    }

    fn insert_run(&mut self, target: usize, player: Player, run: Vec<usize>) {
        self.moves
            .entry(target)
            .or_insert_with(|| Move {
                target,
                player,
                flips: Vec::new(),
            })
            .merge(run);
    }
}

impl<'a> IntoIterator for &'a MoveSet {
    type Item = &'a Move;
    type IntoIter = std::collections::btree_map::Values<'a, usize, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.values()
    }
}

/// Find every legal move for `active` on `board`.
pub fn find_moves(board: &Board, edges: &EdgeMap, active: Player) -> MoveSet {
    debug_assert_eq!(board.edge_length(), edges.edge_length());

    let opponent = Cell::from(!active);
    let mut moves = MoveSet::default();

    for start in board.owned_by(active) {
        for direction in Direction::ALL {
            let mut run = Vec::new();
            let mut cursor = edges.step(start, direction);

            while let Some(index) = cursor {
                if board[index] != opponent {
                    break;
                }
                run.push(index);
                cursor = edges.step(index, direction);
            }

            // `cursor` is the cell that ended the run, or `None` at the edge.
            if let Some(target) = cursor {
                if !run.is_empty() && board[target].is_empty() {
                    moves.insert_run(target, active, run);
                }
            }
        }
    }

    moves
}

/// Play `target` for the player `moves` was generated for, updating `counts`.
/// Fails without touching the board if `target` is not in `moves`.
pub fn apply_move(
    board: &mut Board,
    counts: &mut Counts,
    target: usize,
    moves: &MoveSet,
) -> Result<Move, GameError> {
    let mv = moves
        .get(target)
        .filter(|_| board.get(target) == Some(Cell::Empty))
        .ok_or(GameError::InvalidMove { index: target })?;

    mv.play(board);
    counts.add(mv.player, 1 + mv.num_flips());
    counts.remove(!mv.player, mv.num_flips());

    Ok(mv.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn start() -> (Board, EdgeMap) {
        (Board::default(), EdgeMap::new(8))
    }

    #[test]
    fn opening_moves() {
        let (board, edges) = start();
        let moves = find_moves(&board, &edges, Player::Black);
        assert_eq!(moves.targets().collect::<Vec<_>>(), vec![19, 26, 37, 44]);
        assert_eq!(moves.get(19).unwrap().flips, vec![27]);
        assert_eq!(moves.get(26).unwrap().flips, vec![27]);
        assert_eq!(moves.get(37).unwrap().flips, vec![36]);
        assert_eq!(moves.get(44).unwrap().flips, vec![36]);
        assert!(moves.iter().all(|mv| mv.player == Player::Black));

        let white = find_moves(&board, &edges, Player::White);
        assert_eq!(white.targets().collect::<Vec<_>>(), vec![20, 29, 34, 43]);
    }

    #[test]
    fn find_moves_is_idempotent() {
        let (board, edges) = start();
        assert_eq!(
            find_moves(&board, &edges, Player::Black),
            find_moves(&board, &edges, Player::Black)
        );
    }

    #[test]
    fn runs_merge_across_directions() {
        let board: Board = "
            . O X . . . . .
            O O . . . . . .
            X . X . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
        "
        .parse()
        .unwrap();
        let moves = find_moves(&board, &EdgeMap::new(8), Player::Black);
        assert_eq!(moves.get(0).unwrap().flips, vec![1, 8, 9]);
        assert_eq!(moves.best_moves(), vec![0]);
    }

    #[test]
    fn blocked_and_edge_runs_are_not_moves() {
        // Row 0: the run from B1 to the left ends at the board edge.
        // Row 2: the run from A3 ends on Black's own piece.
        let board: Board = "
            O X . .
            . . . .
            X O X .
            . . . .
        "
        .parse()
        .unwrap();
        let moves = find_moves(&board, &EdgeMap::new(4), Player::Black);
        assert!(!moves.contains(2));
        assert!(!moves.contains(3));
        assert!(moves.iter().all(|mv| !mv.flips.contains(&9)));
        assert!(moves.is_empty());
    }

    #[test]
    fn adjacent_empty_is_not_a_move() {
        let board: Board = "
            . . . .
            . X . .
            . . . .
            . . . O
        "
        .parse()
        .unwrap();
        let edges = EdgeMap::new(4);
        assert!(find_moves(&board, &edges, Player::Black).is_empty());
        assert!(find_moves(&board, &edges, Player::White).is_empty());
    }

    #[test]
    fn best_moves_returns_all_ties() {
        let (board, edges) = start();
        let moves = find_moves(&board, &edges, Player::Black);
        assert_eq!(moves.best_moves(), vec![19, 26, 37, 44]);
        assert!(MoveSet::default().best_moves().is_empty());
    }

    #[test]
    fn apply_opening_move() {
        let (mut board, edges) = start();
        let mut counts = board.counts();
        let moves = find_moves(&board, &edges, Player::Black);

        let mv = apply_move(&mut board, &mut counts, 19, &moves).unwrap();
        assert_eq!(mv.flips, vec![27]);
        assert_eq!(board[19], Cell::Black);
        assert_eq!(board[27], Cell::Black);
        assert_eq!(counts, Counts { black: 4, white: 1 });
        assert_eq!(counts, board.counts());
    }

    #[test]
    fn apply_illegal_move_changes_nothing() {
        let (mut board, edges) = start();
        let mut counts = board.counts();
        let moves = find_moves(&board, &edges, Player::Black);
        let before = board.clone();

        for &target in &[0, 27, 28, 20, 64, 1000] {
            assert_eq!(
                apply_move(&mut board, &mut counts, target, &moves),
                Err(GameError::InvalidMove { index: target })
            );
        }
        assert_eq!(board, before);
        assert_eq!(counts, Counts { black: 2, white: 2 });
    }

    #[test]
    fn stale_move_set_is_rejected() {
        let (mut board, edges) = start();
        let mut counts = board.counts();
        let moves = find_moves(&board, &edges, Player::Black);

        apply_move(&mut board, &mut counts, 19, &moves).unwrap();
        assert_eq!(
            apply_move(&mut board, &mut counts, 19, &moves),
            Err(GameError::InvalidMove { index: 19 })
        );
    }
}
