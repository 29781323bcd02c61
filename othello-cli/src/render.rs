//! Text rendering of a game for the terminal.

use crate::location::{Location, COLUMN_LABELS};
use itertools::Itertools;
use othello_engine::{Cell, Counts, Game, Player};
use std::fmt::{self, Display, Formatter};

/// Format `edge_length`² characters into a labelled grid.
/// `symbols` must yield exactly `edge_length * edge_length` items.
pub fn format_grid<T: Iterator<Item = char>>(
    mut symbols: T,
    edge_length: usize,
    f: &mut Formatter,
) -> fmt::Result {
    write!(f, "   ")?;
    for label in COLUMN_LABELS.chars().take(edge_length) {
        write!(f, " {}", label)?;
    }

    for row in 0..edge_length {
        write!(f, "\n{:>3}", row + 1)?;
        for _ in 0..edge_length {
            write!(f, " {}", symbols.next().ok_or(fmt::Error)?)?;
        }
    }

    match symbols.next() {
        None => Ok(()),
        _ => Err(fmt::Error),
    }
}

pub fn player_symbol(player: Player) -> char {
    match player {
        Player::Black => 'X',
        Player::White => 'O',
    }
}

/// The board with the active player's legal moves marked `*`,
/// and optionally the hinted best moves marked `+`.
pub struct BoardView<'a> {
    game: &'a Game,
    show_hints: bool,
}

impl<'a> BoardView<'a> {
    pub fn new(game: &'a Game, show_hints: bool) -> Self {
        Self { game, show_hints }
    }
}

impl Display for BoardView<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let moves = self.game.legal_moves();
        let hints = if self.show_hints {
            self.game.best_moves()
        } else {
            Vec::new()
        };

        let symbols = self
            .game
            .board()
            .cells()
            .iter()
            .enumerate()
            .map(|(index, &cell)| {
                if !cell.is_empty() {
                    cell_symbol(cell)
                } else if hints.contains(&index) {
                    '+'
                } else if moves.contains(index) {
                    '*'
                } else {
                    '.'
                }
            });

        format_grid(symbols, self.game.edge_length(), f)
    }
}

/// One-line piece counts, as in "X: 4  O: 1".
pub struct Score(pub Counts);

impl Display for Score {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {}  {}: {}",
            player_symbol(Player::Black),
            self.0.black,
            player_symbol(Player::White),
            self.0.white
        )
    }
}

/// Render a list of cell indices in notation: "[D3, C5]".
pub fn format_locations<I: IntoIterator<Item = usize>>(indices: I, edge_length: usize) -> String {
    let list = indices
        .into_iter()
        .map(|index| Location::from_index(index, edge_length))
        .join(", ");
    format!("[{}]", list)
}

/// Render the move record, numbered from 1: "1. D3  2. C5".
pub fn format_record(game: &Game) -> String {
    game.record()
        .iter()
        .enumerate()
        .map(|(number, &index)| {
            format!(
                "{}. {}",
                number + 1,
                Location::from_index(index, game.edge_length())
            )
        })
        .join("  ")
}

/// The symbol a single cell is drawn with, ignoring move marks.
pub fn cell_symbol(cell: Cell) -> char {
    cell.owner().map_or('.', player_symbol)
}
