//! "Perft" move-generation test: count the number of leaves at a given depth.
//! See: http://www.aartbik.com/MISC/reversi.html

use crate::edges::EdgeMap;
use crate::moves::find_moves;
use crate::{is_valid_edge_length, Board, Player};

/// Count the leaves `depth` plies below the standard starting position
/// on an `edge_length`×`edge_length` board.
/// Panics if `edge_length` is not a supported board size.
pub fn run_perft(edge_length: usize, depth: u64) -> u64 {
    assert!(is_valid_edge_length(edge_length));
    let board = Board::starting(edge_length);
    perft(&board, Player::default(), depth)
}

/// Count the leaves `depth` plies below `board` with `active` to move.
/// A forced pass counts as a ply; two passes in a row end the game.
pub fn perft(board: &Board, active: Player, depth: u64) -> u64 {
    let edges = EdgeMap::new(board.edge_length());
    leaves_below(board, &edges, active, depth, false)
}

fn leaves_below(board: &Board, edges: &EdgeMap, active: Player, depth: u64, passed: bool) -> u64 {
    // Leaf node for this depth
    if depth == 0 {
        return 1;
    }

    let moves = find_moves(board, edges, active);
    if moves.is_empty() {
        // Both players passed: game is over
        if passed {
            return 1;
        }

        return leaves_below(board, edges, !active, depth - 1, true);
    }

    moves
        .iter()
        .map(|mv| {
            let mut next = board.clone();
            mv.play(&mut next);
            leaves_below(&next, edges, !active, depth - 1, false)
        })
        .sum()
}
