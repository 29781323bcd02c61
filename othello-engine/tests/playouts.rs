//! Random playouts checking the engine's invariants in every reachable position.

use othello_engine::moves::find_moves;
use othello_engine::{Board, Game, GameError, GameResult, Outcome, Player};
use rand::rngs::StdRng;
use rand::seq::IteratorRandom;
use rand::{Rng, SeedableRng};

const GAMES_PER_SIZE: u64 = 20;

/// Every piece `player` would capture by playing `target`, found by walking
/// outward from the target with plain row/column arithmetic.
fn captures_from(board: &Board, target: usize, player: Player) -> Vec<usize> {
    let n = board.edge_length() as isize;
    let mut flips = Vec::new();

    for &(dr, dc) in &[
        (-1, -1),
        (-1, 0),
        (-1, 1),
        (0, -1),
        (0, 1),
        (1, -1),
        (1, 0),
        (1, 1),
    ] {
        let mut run = Vec::new();
        let mut row = target as isize / n + dr;
        let mut col = target as isize % n + dc;

        while (0..n).contains(&row) && (0..n).contains(&col) {
            let index = (row * n + col) as usize;
            match board[index].owner() {
                Some(owner) if owner == player => {
                    flips.append(&mut run);
                    break;
                }
                Some(_) => run.push(index),
                None => break,
            }
            row += dr;
            col += dc;
        }
    }

    flips.sort_unstable();
    flips
}

fn check_position(game: &Game) {
    let board = game.board();
    let counts = game.counts();
    let active = game.active_player();

    assert_eq!(counts.total() + board.count_empty(), board.num_cells());
    assert_eq!(counts, board.counts());

    if game.is_finished() {
        assert!(game.legal_moves().is_empty());
        let full = counts.total() == board.num_cells();
        let stuck = find_moves(board, game.edges(), Player::Black).is_empty()
            && find_moves(board, game.edges(), Player::White).is_empty();
        assert!(full || stuck);
        assert_eq!(game.result(), Some(GameResult::from_counts(counts)));
        return;
    }

    // The cached move set matches a fresh scan.
    assert_eq!(
        game.legal_moves(),
        &find_moves(board, game.edges(), active)
    );

    for index in 0..board.num_cells() {
        let expected = if board[index].is_empty() {
            captures_from(board, index, active)
        } else {
            Vec::new()
        };
        match game.legal_moves().get(index) {
            Some(mv) => {
                assert!(!mv.flips.is_empty());
                assert_eq!(mv.player, active);
                assert_eq!(mv.flips, expected, "flips for cell {}", index);
                for &flip in &mv.flips {
                    assert_eq!(board[flip].owner(), Some(!active));
                }
            }
            None => assert!(expected.is_empty(), "missed move at cell {}", index),
        }
    }
}

fn play_random_game(edge_length: usize, seed: u64) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut game = Game::new(edge_length).unwrap();
    let mut moves_played = 0;

    check_position(&game);

    loop {
        let choice = game.legal_moves().targets().choose(&mut rng);
        let target = match choice {
            Some(target) => target,
            None => break,
        };

        if rng.gen_bool(0.25) {
            let board = game.board().clone();
            let counts = game.counts();
            let active = game.active_player();

            game.select_move(target).unwrap();
            game.undo().unwrap();

            assert_eq!(game.board(), &board);
            assert_eq!(game.counts(), counts);
            assert_eq!(game.active_player(), active);
            assert_eq!(game.undo(), Err(GameError::NoUndoAvailable));
            check_position(&game);
        }

        let outcome = game.select_move(target).unwrap();
        moves_played += 1;
        assert_eq!(game.record().len(), moves_played);
        assert_eq!(game.record().last(), Some(&target));

        match outcome {
            Outcome::Ongoing { next } => assert_eq!(next, game.active_player()),
            Outcome::Pass { passed, next } => {
                assert_eq!(next, !passed);
                assert_eq!(next, game.active_player());
            }
            Outcome::Complete(_) => assert!(game.is_finished()),
        }
        check_position(&game);
    }

    assert!(game.is_finished());
    assert_eq!(
        game.select_move(0),
        Err(GameError::InvalidMove { index: 0 })
    );
}

#[test]
fn random_games_4x4() {
    for seed in 0..GAMES_PER_SIZE {
        play_random_game(4, seed);
    }
}

#[test]
fn random_games_6x6() {
    for seed in 0..GAMES_PER_SIZE {
        play_random_game(6, seed);
    }
}

#[test]
fn random_games_8x8() {
    for seed in 0..GAMES_PER_SIZE {
        play_random_game(8, seed);
    }
}

#[test]
fn random_games_10x10() {
    for seed in 0..GAMES_PER_SIZE / 4 {
        play_random_game(10, seed);
    }
}
